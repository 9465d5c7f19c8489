#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, pgmq in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Report Core Rust
//!
//! High-performance Rust core for cost-management report data dispatch.
//!
//! ## Overview
//!
//! Report Core Rust complements the cost-management web tier: the web tier
//! handles HTTP, authentication, and the ORM schema, while this core owns
//! the dispatch decisions behind the report-data surface — request
//! validation, provider resolution, work-queue selection, and
//! calendar-aware fan-out of date ranges into per-month tasks.
//!
//! ## Architecture
//!
//! An inbound update or remove request is validated once at the dispatcher's
//! entry, the provider identity is resolved against the persistence
//! collaborator, a destination queue is selected from the closed queue set
//! (escalating to `priority-xl` for large customers), and the date range is
//! partitioned at calendar-month boundaries. One task is submitted per month
//! slice, in ascending-date order, through the task-queue collaborator.
//!
//! ## Module Organization
//!
//! - [`models`] - Provider identity and date range types
//! - [`dispatch`] - Resolution, queue selection, partitioning, dispatch
//! - [`persistence`] - Provider store boundary and PostgreSQL implementation
//! - [`messaging`] - Task payloads, signatures, and pgmq submission
//! - [`api`] - Transport-independent request/response surface
//! - [`config`] - Configuration management
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use report_core::api::ReportDataApi;
//! use report_core::config::ReportCoreConfig;
//! use report_core::dispatch::{ReportDataDispatcher, UpdateParams};
//! use report_core::messaging::PgmqTaskQueue;
//! use report_core::persistence::PgProviderStore;
//!
//! # async fn example(pool: sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
//! let config = ReportCoreConfig::from_env()?;
//! let store = Arc::new(PgProviderStore::new(pool.clone()));
//! let queue = Arc::new(PgmqTaskQueue::new_with_pool(pool).await);
//! let api = ReportDataApi::new(ReportDataDispatcher::new(store, queue, config));
//!
//! let params = UpdateParams::new()
//!     .with_schema("org1234567")
//!     .with_provider_type("AWS")
//!     .with_start_date(chrono::NaiveDate::from_ymd_opt(2022, 9, 1).unwrap());
//! let response = api.update_report_data(params).await;
//! println!("status {}: {}", response.status, response.body);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod messaging;
pub mod models;
pub mod persistence;

pub use api::{ApiResponse, ReportDataApi};
pub use config::ReportCoreConfig;
pub use constants::{queues, QueueName, QUEUE_LIST, UPDATE_ALL_PROVIDERS};
pub use dispatch::{RemoveParams, ReportDataDispatcher, UpdateParams};
pub use error::{DispatchError, Result};
pub use messaging::{PgmqTaskQueue, TaskId, TaskPayload, TaskQueue, TaskSignature};
pub use models::{DateRange, InvoiceCalendar, MonthSlice, MonthlyInvoiceCalendar};
pub use models::{ProviderRecord, ProviderRef, ProviderType};
pub use persistence::{PgProviderStore, ProviderStore};
