//! Shared test harness: in-memory collaborators and provider fixtures.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use report_core::messaging::{QueueError, TaskId, TaskQueue, TaskSignature};
use report_core::models::provider::{ProviderRecord, ProviderType};
use report_core::persistence::{ProviderStore, StoreError};
use report_core::{ReportCoreConfig, ReportDataApi, ReportDataDispatcher};

pub const SCHEMA: &str = "org1234567";

pub fn aws_provider() -> ProviderRecord {
    ProviderRecord {
        uuid: Uuid::parse_str("3c6e687e-1a09-4a05-970c-2ccf44b0952e").unwrap(),
        provider_type: ProviderType::AwsLocal,
        schema_name: SCHEMA.to_string(),
    }
}

pub fn gcp_provider() -> ProviderRecord {
    ProviderRecord {
        uuid: Uuid::parse_str("9ae70a2e-35c8-44a1-9d8e-2115d4ba5a51").unwrap(),
        provider_type: ProviderType::GcpLocal,
        schema_name: SCHEMA.to_string(),
    }
}

/// Provider store backed by fixture records.
#[derive(Default)]
pub struct InMemoryProviderStore {
    providers: Vec<ProviderRecord>,
    large_schemas: HashSet<String>,
}

impl InMemoryProviderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(mut self, record: ProviderRecord) -> Self {
        self.providers.push(record);
        self
    }

    pub fn with_large_schema<S: Into<String>>(mut self, schema: S) -> Self {
        self.large_schemas.insert(schema.into());
        self
    }
}

#[async_trait]
impl ProviderStore for InMemoryProviderStore {
    async fn find_provider(&self, uuid: Uuid) -> Result<Option<ProviderRecord>, StoreError> {
        Ok(self.providers.iter().find(|p| p.uuid == uuid).cloned())
    }

    async fn find_provider_by_type_and_schema(
        &self,
        provider_type: ProviderType,
        schema: &str,
    ) -> Result<Option<ProviderRecord>, StoreError> {
        Ok(self
            .providers
            .iter()
            .find(|p| p.provider_type == provider_type && p.schema_name == schema)
            .cloned())
    }

    async fn is_large_customer(&self, schema: &str) -> Result<bool, StoreError> {
        Ok(self.large_schemas.contains(schema))
    }
}

/// Task queue that records every submission and hands out sequential ids.
#[derive(Default)]
pub struct RecordingTaskQueue {
    submissions: Mutex<Vec<TaskSignature>>,
    next_id: AtomicUsize,
}

impl RecordingTaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> Vec<TaskSignature> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaskQueue for RecordingTaskQueue {
    async fn submit(&self, signature: TaskSignature) -> Result<TaskId, QueueError> {
        self.submissions.lock().unwrap().push(signature);
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("task-{id}"))
    }
}

/// Build an api over the given collaborators.
pub fn api(
    store: Arc<InMemoryProviderStore>,
    queue: Arc<RecordingTaskQueue>,
    development_mode: bool,
) -> ReportDataApi {
    let config = ReportCoreConfig {
        development_mode,
        ..ReportCoreConfig::default()
    };
    ReportDataApi::new(ReportDataDispatcher::new(store, queue, config))
}

/// Standard harness: one AWS-local and one GCP-local provider in SCHEMA.
pub fn standard_harness(
    development_mode: bool,
) -> (Arc<InMemoryProviderStore>, Arc<RecordingTaskQueue>, ReportDataApi) {
    let store = Arc::new(
        InMemoryProviderStore::new()
            .with_provider(aws_provider())
            .with_provider(gcp_provider()),
    );
    let queue = Arc::new(RecordingTaskQueue::new());
    let api = api(Arc::clone(&store), Arc::clone(&queue), development_mode);
    (store, queue, api)
}
