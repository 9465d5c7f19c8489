//! Provider resolution.
//!
//! Maps caller-supplied provider identity (uuid and/or type token) to a
//! canonical [`ProviderRef`] against the persistence collaborator. The
//! returned ref always carries the persisted provider type, never the raw
//! caller token.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::error::{DispatchError, Result};
use crate::models::provider::{ProviderRef, ProviderType};
use crate::persistence::ProviderStore;

pub struct ProviderResolver {
    store: Arc<dyn ProviderStore>,
}

impl ProviderResolver {
    pub fn new(store: Arc<dyn ProviderStore>) -> Self {
        Self { store }
    }

    /// Resolve a provider identity within a tenant schema.
    pub async fn resolve(
        &self,
        schema: &str,
        provider_uuid: Option<&str>,
        provider_type: Option<&str>,
    ) -> Result<ProviderRef> {
        match (provider_uuid, provider_type) {
            (Some(uuid), _) => self.resolve_by_uuid(schema, uuid, provider_type).await,
            (None, Some(type_token)) => self.resolve_by_type(schema, type_token).await,
            (None, None) => Err(DispatchError::MissingParameter(
                "provider_uuid or provider_type must be supplied as a parameter.".to_string(),
            )),
        }
    }

    async fn resolve_by_uuid(
        &self,
        schema: &str,
        raw_uuid: &str,
        provider_type: Option<&str>,
    ) -> Result<ProviderRef> {
        // Unparseable uuids cannot name a provider; same outcome as unknown.
        let uuid = Uuid::parse_str(raw_uuid).map_err(|_| not_found(raw_uuid))?;

        let record = self
            .store
            .find_provider(uuid)
            .await
            .map_err(|e| DispatchError::Database(e.to_string()))?
            .ok_or_else(|| not_found(raw_uuid))?;

        if record.schema_name != schema {
            return Err(DispatchError::SchemaMismatch(format!(
                "provider_uuid {raw_uuid} is not associated with schema {schema}."
            )));
        }

        if let Some(type_token) = provider_type {
            if ProviderType::parse(type_token) != Some(record.provider_type) {
                return Err(DispatchError::TypeMismatch(
                    "provider_uuid and provider_type have mismatched provider types.".to_string(),
                ));
            }
        }

        debug!(
            provider_uuid = %record.uuid,
            provider_type = %record.provider_type,
            schema = %schema,
            "Resolved provider by uuid"
        );

        Ok(ProviderRef {
            uuid: Some(record.uuid),
            provider_type: record.provider_type,
            schema_name: schema.to_string(),
        })
    }

    /// Type-only resolution keeps `uuid = None`; the submitted task carries
    /// no provider uuid on this path.
    async fn resolve_by_type(&self, schema: &str, type_token: &str) -> Result<ProviderRef> {
        let parsed = ProviderType::parse(type_token).ok_or_else(|| {
            DispatchError::NotFound(format!(
                "provider_type {type_token} is not a valid provider type."
            ))
        })?;

        let record = self
            .store
            .find_provider_by_type_and_schema(parsed, schema)
            .await
            .map_err(|e| DispatchError::Database(e.to_string()))?;

        let provider_type = record.map(|r| r.provider_type).unwrap_or(parsed);

        debug!(
            provider_type = %provider_type,
            schema = %schema,
            "Resolved provider by type"
        );

        Ok(ProviderRef {
            uuid: None,
            provider_type,
            schema_name: schema.to_string(),
        })
    }
}

fn not_found(raw_uuid: &str) -> DispatchError {
    DispatchError::NotFound(format!("provider_uuid {raw_uuid} does not exist"))
}
