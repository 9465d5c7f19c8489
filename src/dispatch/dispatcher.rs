//! # Report Data Dispatcher
//!
//! Validates inbound update/remove requests, resolves provider identity,
//! selects a destination queue, fans a date range out into per-month tasks,
//! and submits them to the queue collaborator.
//!
//! Validation order on the update path follows the surface contract:
//! update-all sentinel, schema, queue token, provider identity, start date.
//! Submissions are issued in ascending-date order; overlapping ranges are
//! not deduplicated.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use super::partitioner::DateRangePartitioner;
use super::queues;
use super::resolver::ProviderResolver;
use super::types::{RemoveParams, UpdateParams};
use crate::config::ReportCoreConfig;
use crate::constants::UPDATE_ALL_PROVIDERS;
use crate::error::{DispatchError, Result};
use crate::messaging::{TaskId, TaskPayload, TaskQueue, TaskSignature};
use crate::models::date_range::{InvoiceCalendar, MonthlyInvoiceCalendar};
use crate::models::provider::ProviderType;
use crate::persistence::ProviderStore;

pub struct ReportDataDispatcher {
    store: Arc<dyn ProviderStore>,
    queue: Arc<dyn TaskQueue>,
    resolver: ProviderResolver,
    partitioner: DateRangePartitioner,
    config: ReportCoreConfig,
}

impl ReportDataDispatcher {
    pub fn new(
        store: Arc<dyn ProviderStore>,
        queue: Arc<dyn TaskQueue>,
        config: ReportCoreConfig,
    ) -> Self {
        let resolver = ProviderResolver::new(Arc::clone(&store));
        let partitioner = DateRangePartitioner::new(Arc::new(MonthlyInvoiceCalendar));
        Self {
            store,
            queue,
            resolver,
            partitioner,
            config,
        }
    }

    /// Replace the invoice calendar collaborator.
    pub fn with_calendar(mut self, calendar: Arc<dyn InvoiceCalendar>) -> Self {
        self.partitioner = DateRangePartitioner::new(calendar);
        self
    }

    /// Dispatch update tasks for a provider and date range.
    ///
    /// Returns the task identifiers assigned by the queue collaborator, one
    /// per month slice, in ascending-date order.
    #[instrument(skip(self, params))]
    pub async fn dispatch_update(&self, params: UpdateParams) -> Result<Vec<TaskId>> {
        if params.provider_uuid.as_deref() == Some(UPDATE_ALL_PROVIDERS) {
            return self.dispatch_update_all(&params).await;
        }

        let schema = required(&params.schema, "schema")?;

        if let Some(token) = params.queue.as_deref() {
            queues::validate_queue_token(token)?;
        }

        let provider = self
            .resolver
            .resolve(
                schema,
                params.provider_uuid.as_deref(),
                params.provider_type.as_deref(),
            )
            .await?;

        let is_large_customer = self
            .store
            .is_large_customer(schema)
            .await
            .map_err(|e| DispatchError::Database(e.to_string()))?;
        let queue_name = queues::select_queue(params.queue.as_deref(), is_large_customer)?;

        let slices = self.partitioner.partition(
            params.start_date,
            params.end_date,
            provider.provider_type,
            params.invoice_month.as_deref(),
        )?;

        let mut task_ids = Vec::with_capacity(slices.len());
        for slice in slices {
            let payload = TaskPayload::UpdateSummaryTables {
                schema: schema.to_string(),
                provider_type: provider.provider_type,
                provider_uuid: provider.uuid,
                start_date: slice.range.start,
                end_date: slice.range.end,
                ocp_on_cloud: params.ocp_on_cloud,
                invoice_month: slice.invoice_month,
            };
            let signature = TaskSignature::new(payload).with_queue(queue_name);
            let task_id = self.submit(signature).await?;
            task_ids.push(task_id);
        }

        info!(
            schema = %schema,
            provider_type = %provider.provider_type,
            queue = %queue_name,
            task_count = task_ids.len(),
            "Dispatched update tasks"
        );

        Ok(task_ids)
    }

    /// Update-all path (`provider_uuid = "*"`). Development mode only.
    async fn dispatch_update_all(&self, params: &UpdateParams) -> Result<Vec<TaskId>> {
        if !self.config.development_mode {
            return Err(DispatchError::Forbidden(
                "provider_uuid * is only valid in development mode.".to_string(),
            ));
        }

        let today = Utc::now().date_naive();
        let payload = TaskPayload::UpdateAllSummaryTables {
            start_date: params.start_date.unwrap_or(today),
            end_date: params.end_date.unwrap_or(today),
            invoice_month: params.invoice_month.clone(),
        };

        let task_id = self.submit(TaskSignature::new(payload)).await?;

        info!(task_id = %task_id, "Dispatched update-all task");
        Ok(vec![task_id])
    }

    /// Dispatch a deletion task for a provider's expired report data.
    ///
    /// `simulate` defaults to false and is passed through verbatim; the
    /// worker must not delete anything when it is true.
    #[instrument(skip(self, params))]
    pub async fn dispatch_remove(&self, params: RemoveParams) -> Result<TaskId> {
        let schema = required(&params.schema, "schema")?;
        let provider_token = required(&params.provider, "provider")?;
        let raw_uuid = required(&params.provider_uuid, "provider_uuid")?;

        let provider_type = ProviderType::parse(provider_token).ok_or_else(|| {
            DispatchError::NotFound(format!(
                "provider {provider_token} is not a valid provider type."
            ))
        })?;
        let provider_uuid = Uuid::parse_str(raw_uuid).map_err(|_| {
            DispatchError::NotFound(format!("provider_uuid {raw_uuid} does not exist"))
        })?;

        let payload = TaskPayload::RemoveExpiredData {
            schema: schema.to_string(),
            provider_type,
            provider_uuid,
            simulate: params.simulate.unwrap_or(false),
        };

        let task_id = self.submit(TaskSignature::new(payload)).await?;

        info!(
            schema = %schema,
            provider_type = %provider_type,
            provider_uuid = %provider_uuid,
            task_id = %task_id,
            "Dispatched removal task"
        );

        Ok(task_id)
    }

    async fn submit(&self, signature: TaskSignature) -> Result<TaskId> {
        self.queue
            .submit(signature)
            .await
            .map_err(|e| DispatchError::Queue(e.to_string()))
    }
}

fn required<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| DispatchError::required_parameter(name))
}
