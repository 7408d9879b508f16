use std::collections::HashMap;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

pub const ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";
const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";

/// Variables the service has always read directly, mapped onto settings keys.
const LEGACY_VARIABLES: &[(&str, &[&str])] = &[
    ("OPENAI_API_KEY", &["llm.api_key"]),
    ("S3_BUCKET", &["storage.bucket"]),
    ("AWS_REGION", &["ocr.region", "storage.region"]),
];

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub ocr: OcrSettings,
    pub llm: LlmSettings,
    pub storage: StorageSettings,
    pub report: ReportSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrSettings {
    pub region: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProvider {
    Local,
    S3,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub provider: StorageProvider,
    pub local_path: String,
    pub bucket: Option<String>,
    pub region: String,
    pub persist_uploads: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
}

impl Settings {
    /// Reads the process environment (after `.env`) and the matching `appsettings` file.
    pub fn load() -> Result<(Environment, Self), ConfigError> {
        dotenvy::dotenv().ok();

        let vars: HashMap<String, String> = std::env::vars().collect();
        let environment: Environment = vars
            .get(ENVIRONMENT_VAR)
            .cloned()
            .unwrap_or_else(|| "local".into())
            .try_into()
            .map_err(ConfigError::Message)?;

        let settings = Self::from_sources(environment, vars)?;
        Ok((environment, settings))
    }

    /// Layers defaults, legacy variables, `appsettings.{env}` and `APP__SECTION__KEY` variables.
    pub fn from_sources(
        environment: Environment,
        vars: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.max_upload_mb", 10)?
            .set_default("ocr.region", "us-east-1")?
            .set_default("llm.api_key", "")?
            .set_default("llm.model", "gpt-4")?
            .set_default("llm.max_tokens", 800)?
            .set_default("llm.timeout_secs", 120)?
            .set_default("storage.provider", "local")?
            .set_default("storage.local_path", "/tmp/safework")?
            .set_default("storage.region", "us-east-1")?
            .set_default("storage.persist_uploads", false)?
            .set_default("report.enabled", false)?
            .set_default("logging.json", false)?;

        for (variable, keys) in LEGACY_VARIABLES {
            if let Some(value) = vars.get(*variable).filter(|v| !v.is_empty()) {
                for key in *keys {
                    builder = builder.set_default(*key, value.as_str())?;
                }
            }
        }

        builder
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true)
                    .source(Some(vars)),
            )
            .build()?
            .try_deserialize()
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.server.max_upload_mb * 1024 * 1024
    }
}
