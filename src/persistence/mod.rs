//! # Persistence Collaborator
//!
//! Provider lookup and tenant flags. The dispatch core consumes this
//! boundary through the [`ProviderStore`] trait; [`PgProviderStore`] is the
//! PostgreSQL implementation.

pub mod pg;

pub use pg::PgProviderStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::provider::{ProviderRecord, ProviderType};

/// Errors surfaced by the persistence collaborator
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid provider record: {0}")]
    InvalidRecord(String),
}

/// Provider lookup boundary consumed by the dispatch core.
///
/// Implementations must be safe to share across concurrent requests; the
/// core holds them behind `Arc` and never mutates through this trait.
#[async_trait]
pub trait ProviderStore: Send + Sync {
    /// Look up a provider by its uuid, across all tenant schemas.
    async fn find_provider(&self, uuid: Uuid) -> Result<Option<ProviderRecord>, StoreError>;

    /// Look up a provider of the given type within a tenant schema.
    async fn find_provider_by_type_and_schema(
        &self,
        provider_type: ProviderType,
        schema: &str,
    ) -> Result<Option<ProviderRecord>, StoreError>;

    /// Whether the tenant is flagged for elevated-priority processing.
    async fn is_large_customer(&self, schema: &str) -> Result<bool, StoreError>;
}
