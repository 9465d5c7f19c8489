//! Request parameter types for report data dispatch.
//!
//! Inbound requests arrive as dynamic parameter bags; these structs model
//! them as named optional fields with documented defaults. Validation
//! happens once, at the dispatcher's entry, before downstream components
//! are invoked.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parameters for the update (GET) path.
///
/// `provider_uuid` is the raw caller token so the `"*"` update-all sentinel
/// survives to the dispatcher; `queue` and `provider_type` are raw tokens
/// validated against their closed sets at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateParams {
    pub schema: Option<String>,
    pub provider_uuid: Option<String>,
    pub provider_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub queue: Option<String>,
    /// Whether OCP-on-cloud summarization runs alongside the update.
    pub ocp_on_cloud: bool,
    /// Invoice month override (YYYYMM); suppresses automatic lookup.
    pub invoice_month: Option<String>,
}

impl Default for UpdateParams {
    fn default() -> Self {
        Self {
            schema: None,
            provider_uuid: None,
            provider_type: None,
            start_date: None,
            end_date: None,
            queue: None,
            ocp_on_cloud: true,
            invoice_month: None,
        }
    }
}

impl UpdateParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema<S: Into<String>>(mut self, schema: S) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_provider_uuid<S: Into<String>>(mut self, provider_uuid: S) -> Self {
        self.provider_uuid = Some(provider_uuid.into());
        self
    }

    pub fn with_provider_type<S: Into<String>>(mut self, provider_type: S) -> Self {
        self.provider_type = Some(provider_type.into());
        self
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_queue<S: Into<String>>(mut self, queue: S) -> Self {
        self.queue = Some(queue.into());
        self
    }

    pub fn with_ocp_on_cloud(mut self, ocp_on_cloud: bool) -> Self {
        self.ocp_on_cloud = ocp_on_cloud;
        self
    }

    pub fn with_invoice_month<S: Into<String>>(mut self, invoice_month: S) -> Self {
        self.invoice_month = Some(invoice_month.into());
        self
    }
}

/// Parameters for the remove (DELETE) path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveParams {
    pub schema: Option<String>,
    /// Provider type token (the DELETE surface names this field `provider`).
    pub provider: Option<String>,
    pub provider_uuid: Option<String>,
    /// Dry-run flag; defaults to false when omitted.
    pub simulate: Option<bool>,
}

impl RemoveParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema<S: Into<String>>(mut self, schema: S) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_provider<S: Into<String>>(mut self, provider: S) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn with_provider_uuid<S: Into<String>>(mut self, provider_uuid: S) -> Self {
        self.provider_uuid = Some(provider_uuid.into());
        self
    }

    pub fn with_simulate(mut self, simulate: bool) -> Self {
        self.simulate = Some(simulate);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_params_defaults() {
        let params = UpdateParams::new();
        assert!(params.schema.is_none());
        assert!(params.ocp_on_cloud);
        assert!(params.invoice_month.is_none());
    }

    #[test]
    fn test_update_params_builder() {
        let params = UpdateParams::new()
            .with_schema("org1234567")
            .with_provider_uuid("*")
            .with_ocp_on_cloud(false);
        assert_eq!(params.schema.as_deref(), Some("org1234567"));
        assert_eq!(params.provider_uuid.as_deref(), Some("*"));
        assert!(!params.ocp_on_cloud);
    }

    #[test]
    fn test_remove_params_simulate_unset_by_default() {
        let params = RemoveParams::new().with_schema("org1234567");
        assert_eq!(params.simulate, None);
    }
}
