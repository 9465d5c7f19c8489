//! Work queue selection.
//!
//! Callers may route a task onto an explicit queue from the closed set; when
//! no queue is requested the default is `priority`, escalated to
//! `priority-xl` for tenants flagged as large customers. The escalation
//! applies regardless of provider type and never overrides an explicit
//! request.

use crate::constants::{QueueName, QUEUE_LIST};
use crate::error::{DispatchError, Result};

/// Validate a caller-supplied queue token against the closed set.
pub fn validate_queue_token(token: &str) -> Result<QueueName> {
    QueueName::parse(token).ok_or_else(|| {
        DispatchError::InvalidQueue(format!("'queue' must be one of {QUEUE_LIST:?}."))
    })
}

/// Select the destination queue for an update request.
///
/// Pure function of its inputs; the large-customer flag is looked up by the
/// caller through the persistence collaborator.
pub fn select_queue(requested: Option<&str>, is_large_customer: bool) -> Result<QueueName> {
    match requested {
        Some(token) => validate_queue_token(token),
        None if is_large_customer => Ok(QueueName::PriorityXl),
        None => Ok(QueueName::Priority),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_queue_is_priority() {
        assert_eq!(select_queue(None, false).unwrap(), QueueName::Priority);
    }

    #[test]
    fn test_large_customer_escalates_to_priority_xl() {
        assert_eq!(select_queue(None, true).unwrap(), QueueName::PriorityXl);
    }

    #[test]
    fn test_explicit_queue_wins_over_escalation() {
        assert_eq!(select_queue(Some("ocp"), true).unwrap(), QueueName::Ocp);
        assert_eq!(select_queue(Some("default"), false).unwrap(), QueueName::Default);
    }

    #[test]
    fn test_invalid_queue_message() {
        let err = select_queue(Some("not-a-real-queue"), false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'queue' must be one of [\"default\", \"download\", \"ocp\", \"priority\", \"priority-xl\", \"summary\"]."
        );
    }
}
