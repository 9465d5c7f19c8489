//! # PostgreSQL Message Queue Submission (pgmq-rs)
//!
//! Task queue implementation over the pgmq-rs crate.

use async_trait::async_trait;
use pgmq::PGMQueue;
use tracing::{debug, info};

use super::{QueueError, TaskId, TaskQueue, TaskSignature};
use crate::constants::QUEUE_LIST;

/// pgmq-rs based task queue
#[derive(Debug, Clone)]
pub struct PgmqTaskQueue {
    pgmq: PGMQueue,
}

impl PgmqTaskQueue {
    /// Create new pgmq task queue using connection string
    pub async fn new(database_url: &str) -> Result<Self, QueueError> {
        info!("🚀 Connecting to pgmq using pgmq-rs crate");

        let pgmq = PGMQueue::new(database_url.to_string())
            .await
            .map_err(|e| QueueError::QueueUnavailable(format!("Failed to connect to pgmq: {e}")))?;

        info!("✅ Connected to pgmq using pgmq-rs");
        Ok(Self { pgmq })
    }

    /// Create new pgmq task queue using existing connection pool (BYOP - Bring Your Own Pool)
    pub async fn new_with_pool(pool: sqlx::PgPool) -> Self {
        info!("🚀 Creating pgmq task queue with shared connection pool");

        let pgmq = PGMQueue::new_with_pool(pool).await;

        info!("✅ pgmq task queue created with shared pool");
        Self { pgmq }
    }

    /// Create every named work queue if it doesn't exist
    pub async fn ensure_queues_exist(&self) -> Result<(), QueueError> {
        for queue_name in QUEUE_LIST.iter().copied() {
            debug!("📋 Creating queue: {}", queue_name);

            self.pgmq.create(queue_name).await.map_err(|e| {
                QueueError::QueueUnavailable(format!("Failed to create queue {queue_name}: {e}"))
            })?;
        }

        info!("✅ Work queues ready");
        Ok(())
    }
}

#[async_trait]
impl TaskQueue for PgmqTaskQueue {
    async fn submit(&self, signature: TaskSignature) -> Result<TaskId, QueueError> {
        let queue_name = signature.queue();
        let task_name = signature.payload.task_name();

        debug!(
            "📤 Sending {} task to queue: {}",
            task_name, queue_name
        );

        let serialized = serde_json::to_value(&signature.payload)?;
        let message_id = self
            .pgmq
            .send(queue_name.as_str(), &serialized)
            .await
            .map_err(|e| {
                QueueError::Submission(format!("Failed to send {task_name} to {queue_name}: {e}"))
            })?;

        info!(
            "✅ {} task sent to queue: {} with id: {}",
            task_name, queue_name, message_id
        );
        Ok(message_id.to_string())
    }
}
