//! Layered application configuration.
//!
//! Sources, lowest priority first: built-in defaults, an optional
//! `appsettings.{toml,json,yaml}` next to the binary's working directory, `.env`,
//! then `BYWAY__`-prefixed environment variables such as
//! `BYWAY__FRONTEND_ORIGINS__ADMIN_HOSTED`.

use crate::constants::config_key;
use crate::exposed_headers::ExposedHeaders;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::{AllowList, OriginGate};
use crate::policy::CorsPolicy;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

const ENV_PREFIX: &str = "BYWAY";
const ENV_SEPARATOR: &str = "__";
const SETTINGS_FILE: &str = "appsettings";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid CORS configuration: {0}")]
    Cors(#[from] ValidationError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default, alias = "frontendorigins", alias = "FrontendOrigins")]
    pub frontend_origins: FrontendOrigins,
    #[serde(default)]
    pub cors: CorsConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Origins of the admin frontends that may call the API with credentials.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FrontendOrigins {
    /// The deployed admin dashboard.
    #[serde(alias = "adminhosted", alias = "AdminHosted")]
    pub admin_hosted: Option<String>,
    /// The admin dashboard served by a developer's local dev server.
    #[serde(alias = "adminlocal", alias = "AdminLocal")]
    pub admin_local: Option<String>,
}

impl FrontendOrigins {
    pub fn allow_list(&self) -> AllowList {
        AllowList::from_configured([self.admin_hosted.as_deref(), self.admin_local.as_deref()])
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    pub max_age: Option<u64>,
    #[serde(default)]
    pub exposed_headers: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub filter: String,
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Self::defaults()?
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("cors.exposed_headers")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Defaults overlaid with a TOML document, without touching the process
    /// environment.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Self::from_document(source, FileFormat::Toml)
    }

    pub(crate) fn from_document(source: &str, format: FileFormat) -> Result<Self, ConfigError> {
        let config = Self::defaults()?
            .add_source(File::from_str(source, format))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("log.filter", "info")?
            .set_default("log.json", false)?)
    }

    /// Builds the shared CORS policy from the frontend origins and CORS section.
    pub fn cors_policy(&self) -> Result<CorsPolicy, ConfigError> {
        let allow_list = self.frontend_origins.allow_list();
        if self.frontend_origins.admin_hosted.as_deref().unwrap_or_default().is_empty() {
            tracing::warn!(key = config_key::ADMIN_HOSTED, "admin frontend origin is not configured");
        }
        if self.frontend_origins.admin_local.as_deref().unwrap_or_default().is_empty() {
            tracing::debug!(key = config_key::ADMIN_LOCAL, "local admin frontend origin is not configured");
        }
        tracing::info!(origins = %allow_list, "CORS allow-list loaded");

        let options = CorsOptions {
            exposed_headers: ExposedHeaders::list(self.cors.exposed_headers.iter().cloned()),
            max_age: self.cors.max_age,
            ..CorsOptions::default()
        };

        Ok(CorsPolicy::new(OriginGate::new(allow_list), options)?)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
