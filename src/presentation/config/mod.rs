mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ENVIRONMENT_VAR, LlmSettings, LoggingSettings, OcrSettings, ReportSettings, ServerSettings,
    Settings, StorageProvider, StorageSettings,
};
