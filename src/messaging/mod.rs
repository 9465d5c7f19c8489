//! # Messaging Module
//!
//! Task payloads, signature construction, and the queue submission boundary.
//! A [`TaskSignature`] can be built up-front and handed around before
//! submission, or submitted immediately; either way [`TaskQueue::submit`]
//! returns the task identifier assigned by the queue system.

pub mod pgmq_queue;

pub use pgmq_queue::PgmqTaskQueue;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::QueueName;
use crate::models::provider::ProviderType;

/// Identifier assigned by the queue system to a submitted task.
pub type TaskId = String;

/// The unit of work submitted to the queue collaborator.
///
/// Equality is structural and deterministic for identical inputs, so tests
/// can assert on recorded submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "task", rename_all = "snake_case")]
pub enum TaskPayload {
    /// Refresh summarized report data for one provider and one month slice.
    UpdateSummaryTables {
        schema: String,
        provider_type: ProviderType,
        provider_uuid: Option<Uuid>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        ocp_on_cloud: bool,
        invoice_month: Option<String>,
    },
    /// Refresh summarized report data for every provider. Development mode
    /// only; bypasses per-provider resolution.
    UpdateAllSummaryTables {
        start_date: NaiveDate,
        end_date: NaiveDate,
        invoice_month: Option<String>,
    },
    /// Remove a provider's expired report data. When `simulate` is true the
    /// worker computes the removal set but deletes nothing.
    RemoveExpiredData {
        schema: String,
        provider_type: ProviderType,
        provider_uuid: Uuid,
        simulate: bool,
    },
}

impl TaskPayload {
    /// Worker-facing task name carried on the wire.
    pub fn task_name(&self) -> &'static str {
        match self {
            TaskPayload::UpdateSummaryTables { .. } => "update_summary_tables",
            TaskPayload::UpdateAllSummaryTables { .. } => "update_all_summary_tables",
            TaskPayload::RemoveExpiredData { .. } => "remove_expired_data",
        }
    }

    /// Destination queue when the signature carries no override.
    pub fn default_queue(&self) -> QueueName {
        match self {
            TaskPayload::UpdateSummaryTables { .. } => QueueName::Priority,
            TaskPayload::UpdateAllSummaryTables { .. } => QueueName::Priority,
            TaskPayload::RemoveExpiredData { .. } => QueueName::Default,
        }
    }
}

/// A task payload bound to an optional destination queue, ready to submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSignature {
    pub payload: TaskPayload,
    /// Queue name override (if different from the payload default)
    pub queue_name: Option<QueueName>,
}

impl TaskSignature {
    pub fn new(payload: TaskPayload) -> Self {
        Self {
            payload,
            queue_name: None,
        }
    }

    /// Set queue name override
    pub fn with_queue(mut self, queue_name: QueueName) -> Self {
        self.queue_name = Some(queue_name);
        self
    }

    /// The queue this signature will be submitted to.
    pub fn queue(&self) -> QueueName {
        self.queue_name.unwrap_or_else(|| self.payload.default_queue())
    }
}

/// Errors that can occur during queue submission
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Queue unavailable: {0}")]
    QueueUnavailable(String),

    #[error("Submission failed: {0}")]
    Submission(String),
}

/// Queue submission boundary consumed by the dispatch core.
///
/// Implementations must accept concurrent submissions from simultaneous
/// requests; the core submits each request's signatures sequentially in
/// ascending-date order but issues no cross-request coordination.
#[async_trait]
pub trait TaskQueue: Send + Sync {
    /// Submit a task signature to its destination queue, returning the
    /// task identifier assigned by the queue system.
    async fn submit(&self, signature: TaskSignature) -> Result<TaskId, QueueError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remove_payload() -> TaskPayload {
        TaskPayload::RemoveExpiredData {
            schema: "org1234567".to_string(),
            provider_type: ProviderType::Aws,
            provider_uuid: Uuid::nil(),
            simulate: false,
        }
    }

    #[test]
    fn test_signature_uses_payload_default_queue() {
        let signature = TaskSignature::new(remove_payload());
        assert_eq!(signature.queue(), QueueName::Default);
    }

    #[test]
    fn test_signature_queue_override() {
        let signature = TaskSignature::new(remove_payload()).with_queue(QueueName::Ocp);
        assert_eq!(signature.queue(), QueueName::Ocp);
    }

    #[test]
    fn test_payload_equality_is_deterministic() {
        assert_eq!(remove_payload(), remove_payload());
    }

    #[test]
    fn test_update_payload_wire_format() {
        let payload = TaskPayload::UpdateSummaryTables {
            schema: "org1234567".to_string(),
            provider_type: ProviderType::GcpLocal,
            provider_uuid: None,
            start_date: NaiveDate::from_ymd_opt(2022, 9, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2022, 9, 1).unwrap(),
            ocp_on_cloud: false,
            invoice_month: Some("202209".to_string()),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["task"], "update_summary_tables");
        assert_eq!(value["provider_type"], "GCP-local");
        assert_eq!(value["invoice_month"], "202209");
        assert_eq!(value["provider_uuid"], serde_json::Value::Null);
    }
}
