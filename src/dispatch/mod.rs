//! # Dispatch Engine
//!
//! Report-data task dispatch: request validation, provider resolution, queue
//! selection, calendar-aware task fan-out, and submission to the queue
//! collaborator.
//!
//! ## Core Components
//!
//! - **ReportDataDispatcher**: orchestrates the update and remove paths
//! - **ProviderResolver**: maps caller identity to a canonical provider
//! - **Queue selection** (`queues`): closed-set validation plus
//!   large-customer escalation
//! - **DateRangePartitioner**: month-aligned fan-out with invoice-month
//!   tagging for monthly-billed providers

pub mod dispatcher;
pub mod partitioner;
pub mod queues;
pub mod resolver;
pub mod types;

pub use dispatcher::ReportDataDispatcher;
pub use partitioner::{month_ranges, DateRangePartitioner};
pub use queues::{select_queue, validate_queue_token};
pub use resolver::ProviderResolver;
pub use types::{RemoveParams, UpdateParams};
