use crate::error::{DispatchError, Result};
use std::collections::HashMap;

/// Process-wide configuration for the dispatch core.
///
/// `development_mode` gates the `provider_uuid="*"` update-all path; it is
/// injected at construction and read-only at request time.
#[derive(Debug, Clone)]
pub struct ReportCoreConfig {
    pub database_url: String,
    pub development_mode: bool,
    pub telemetry_enabled: bool,
    pub custom_settings: HashMap<String, String>,
}

impl Default for ReportCoreConfig {
    fn default() -> Self {
        Self {
            database_url: "postgresql://localhost/report_core_development".to_string(),
            development_mode: false,
            telemetry_enabled: true,
            custom_settings: HashMap::new(),
        }
    }
}

impl ReportCoreConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(db_url) = std::env::var("DATABASE_URL") {
            config.database_url = db_url;
        }

        if let Ok(dev_mode) = std::env::var("REPORT_CORE_DEVELOPMENT") {
            config.development_mode = dev_mode.parse().map_err(|e| {
                DispatchError::Configuration(format!("Invalid development flag: {e}"))
            })?;
        }

        if let Ok(telemetry) = std::env::var("REPORT_CORE_TELEMETRY_ENABLED") {
            config.telemetry_enabled = telemetry.parse().map_err(|e| {
                DispatchError::Configuration(format!("Invalid telemetry flag: {e}"))
            })?;
        }

        Ok(config)
    }
}
