//! Provider identity types.
//!
//! A provider is an external cloud/account integration whose billing data is
//! ingested. Records live in the persistence collaborator; this module holds
//! the type tokens and the resolved identity handed to dispatch.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::provider_groups;

/// The kind of external integration a provider record represents.
///
/// `as_str` returns the canonical token stored in persistence and carried on
/// task payloads; `parse` accepts exactly those tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderType {
    #[serde(rename = "AWS")]
    Aws,
    #[serde(rename = "AWS-local")]
    AwsLocal,
    #[serde(rename = "Azure")]
    Azure,
    #[serde(rename = "Azure-local")]
    AzureLocal,
    #[serde(rename = "GCP")]
    Gcp,
    #[serde(rename = "GCP-local")]
    GcpLocal,
    #[serde(rename = "OCP")]
    Ocp,
}

impl ProviderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::Aws => "AWS",
            ProviderType::AwsLocal => "AWS-local",
            ProviderType::Azure => "Azure",
            ProviderType::AzureLocal => "Azure-local",
            ProviderType::Gcp => "GCP",
            ProviderType::GcpLocal => "GCP-local",
            ProviderType::Ocp => "OCP",
        }
    }

    /// Parse a provider type token. Tokens are exact; there is no
    /// case-folding because the canonical tokens are mixed-case.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "AWS" => Some(ProviderType::Aws),
            "AWS-local" => Some(ProviderType::AwsLocal),
            "Azure" => Some(ProviderType::Azure),
            "Azure-local" => Some(ProviderType::AzureLocal),
            "GCP" => Some(ProviderType::Gcp),
            "GCP-local" => Some(ProviderType::GcpLocal),
            "OCP" => Some(ProviderType::Ocp),
            _ => None,
        }
    }

    /// Whether this provider bills per fixed monthly invoice cycle. Update
    /// tasks for these providers carry an invoice month tag.
    pub fn is_invoice_month_billed(&self) -> bool {
        provider_groups::MONTHLY_INVOICE_PROVIDERS.contains(self)
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted provider row as returned by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRecord {
    pub uuid: Uuid,
    pub provider_type: ProviderType,
    pub schema_name: String,
}

/// A resolved provider identity for one dispatch request.
///
/// `provider_type` is always the canonical persisted token. `uuid` is `None`
/// when the caller identified the provider by type alone; the submitted task
/// then carries no provider uuid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRef {
    pub uuid: Option<Uuid>,
    pub provider_type: ProviderType,
    pub schema_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_type_tokens_round_trip() {
        for provider_type in [
            ProviderType::Aws,
            ProviderType::AwsLocal,
            ProviderType::Azure,
            ProviderType::AzureLocal,
            ProviderType::Gcp,
            ProviderType::GcpLocal,
            ProviderType::Ocp,
        ] {
            assert_eq!(ProviderType::parse(provider_type.as_str()), Some(provider_type));
        }
    }

    #[test]
    fn test_unknown_tokens_rejected() {
        assert_eq!(ProviderType::parse("aws"), None);
        assert_eq!(ProviderType::parse("IBM"), None);
        assert_eq!(ProviderType::parse(""), None);
    }

    #[test]
    fn test_invoice_month_billing_is_gcp_family() {
        assert!(ProviderType::Gcp.is_invoice_month_billed());
        assert!(ProviderType::GcpLocal.is_invoice_month_billed());
        assert!(!ProviderType::Aws.is_invoice_month_billed());
        assert!(!ProviderType::Ocp.is_invoice_month_billed());
    }

    #[test]
    fn test_serde_uses_canonical_tokens() {
        let json = serde_json::to_string(&ProviderType::GcpLocal).unwrap();
        assert_eq!(json, r#""GCP-local""#);
        let parsed: ProviderType = serde_json::from_str(r#""AWS-local""#).unwrap();
        assert_eq!(parsed, ProviderType::AwsLocal);
    }
}
