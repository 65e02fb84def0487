//! Configuration file loading for clinic-assist
//!
//! Sources are merged in this order, later ones overriding earlier ones:
//!
//! 1. Default values
//! 2. Global: `~/.config/clinic-assist/config.toml` (platform config dir)
//! 3. Project root: `./clinic.toml` or `./.clinic.toml`
//! 4. `--config <path>` specified file
//! 5. Environment: `CLINIC_<SECTION>__<KEY>`

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileAssistantConfig, FileConfig, FileExecutionConfig, FileLoggingConfig,
    FileProviderConfig, ProviderConfigError, Severity,
};
pub use loader::ConfigLoader;
