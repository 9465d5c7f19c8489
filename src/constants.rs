//! # System Constants
//!
//! Queue names, provider groupings, and dispatch sentinels that define the
//! operational boundaries of the report data dispatch system.
//!
//! Queue membership is a closed set: callers may only route work onto queues
//! named here, and the validation message renders the full list.

use serde::{Deserialize, Serialize};

use crate::models::provider::ProviderType;

/// Named work queues for report processing tasks
pub mod queues {
    pub const DEFAULT: &str = "default";
    pub const DOWNLOAD: &str = "download";
    pub const OCP: &str = "ocp";
    pub const PRIORITY: &str = "priority";
    pub const PRIORITY_XL: &str = "priority-xl";
    pub const SUMMARY: &str = "summary";
}

/// The closed set of valid queue names, in the order rendered by the
/// `'queue' must be one of ...` validation message.
pub const QUEUE_LIST: &[&str] = &[
    queues::DEFAULT,
    queues::DOWNLOAD,
    queues::OCP,
    queues::PRIORITY,
    queues::PRIORITY_XL,
    queues::SUMMARY,
];

/// Sentinel provider identifier requesting an update of every provider.
/// Only honored when development mode is enabled.
pub const UPDATE_ALL_PROVIDERS: &str = "*";

/// A destination work queue for a dispatched task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueueName {
    Default,
    Download,
    Ocp,
    Priority,
    PriorityXl,
    Summary,
}

impl QueueName {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueName::Default => queues::DEFAULT,
            QueueName::Download => queues::DOWNLOAD,
            QueueName::Ocp => queues::OCP,
            QueueName::Priority => queues::PRIORITY,
            QueueName::PriorityXl => queues::PRIORITY_XL,
            QueueName::Summary => queues::SUMMARY,
        }
    }

    /// Parse a caller-supplied queue token against the closed set.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            queues::DEFAULT => Some(QueueName::Default),
            queues::DOWNLOAD => Some(QueueName::Download),
            queues::OCP => Some(QueueName::Ocp),
            queues::PRIORITY => Some(QueueName::Priority),
            queues::PRIORITY_XL => Some(QueueName::PriorityXl),
            queues::SUMMARY => Some(QueueName::Summary),
            _ => None,
        }
    }
}

impl std::fmt::Display for QueueName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Provider groupings for dispatch logic
pub mod provider_groups {
    use super::ProviderType;

    /// Provider types billed per fixed monthly invoice cycle. Update tasks
    /// for these providers carry an invoice month tag.
    pub const MONTHLY_INVOICE_PROVIDERS: &[ProviderType] =
        &[ProviderType::Gcp, ProviderType::GcpLocal];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_name_round_trip() {
        for token in QUEUE_LIST {
            let queue = QueueName::parse(token).unwrap();
            assert_eq!(queue.as_str(), *token);
        }
    }

    #[test]
    fn test_unknown_queue_token_rejected() {
        assert!(QueueName::parse("not-a-real-queue").is_none());
        assert!(QueueName::parse("PRIORITY").is_none());
    }

    #[test]
    fn test_queue_list_rendering_is_stable() {
        assert_eq!(
            format!("{QUEUE_LIST:?}"),
            r#"["default", "download", "ocp", "priority", "priority-xl", "summary"]"#
        );
    }

    #[test]
    fn test_monthly_invoice_grouping() {
        assert!(provider_groups::MONTHLY_INVOICE_PROVIDERS.contains(&ProviderType::Gcp));
        assert!(!provider_groups::MONTHLY_INVOICE_PROVIDERS.contains(&ProviderType::Aws));
    }
}
