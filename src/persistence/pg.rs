//! PostgreSQL-backed provider store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{ProviderStore, StoreError};
use crate::models::provider::{ProviderRecord, ProviderType};

/// Provider store over a shared PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgProviderStore {
    pool: PgPool,
}

impl PgProviderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw provider row; the type column is text and parsed on the way out.
#[derive(Debug, sqlx::FromRow)]
struct ProviderRow {
    uuid: Uuid,
    provider_type: String,
    schema_name: String,
}

impl TryFrom<ProviderRow> for ProviderRecord {
    type Error = StoreError;

    fn try_from(row: ProviderRow) -> Result<Self, Self::Error> {
        let provider_type = ProviderType::parse(&row.provider_type).ok_or_else(|| {
            StoreError::InvalidRecord(format!(
                "provider {} has unknown type '{}'",
                row.uuid, row.provider_type
            ))
        })?;
        Ok(ProviderRecord {
            uuid: row.uuid,
            provider_type,
            schema_name: row.schema_name,
        })
    }
}

#[async_trait]
impl ProviderStore for PgProviderStore {
    async fn find_provider(&self, uuid: Uuid) -> Result<Option<ProviderRecord>, StoreError> {
        let row = sqlx::query_as::<_, ProviderRow>(
            "SELECT uuid, provider_type, schema_name FROM providers WHERE uuid = $1",
        )
        .bind(uuid)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ProviderRecord::try_from).transpose()
    }

    async fn find_provider_by_type_and_schema(
        &self,
        provider_type: ProviderType,
        schema: &str,
    ) -> Result<Option<ProviderRecord>, StoreError> {
        let row = sqlx::query_as::<_, ProviderRow>(
            "SELECT uuid, provider_type, schema_name FROM providers \
             WHERE provider_type = $1 AND schema_name = $2 \
             ORDER BY uuid LIMIT 1",
        )
        .bind(provider_type.as_str())
        .bind(schema)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ProviderRecord::try_from).transpose()
    }

    async fn is_large_customer(&self, schema: &str) -> Result<bool, StoreError> {
        let flag = sqlx::query_scalar::<_, bool>(
            "SELECT large_customer FROM customers WHERE schema_name = $1",
        )
        .bind(schema)
        .fetch_optional(&self.pool)
        .await?;

        Ok(flag.unwrap_or(false))
    }
}
