//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_FILES: [&str; 2] = ["clinic.toml", ".clinic.toml"];

/// Prefix for environment overrides, e.g. `CLINIC_EXECUTION__MAX_ROUNDS=3`.
pub const ENV_PREFIX: &str = "CLINIC_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// An explicit `config_path` must exist; discovered files are optional.
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path();
        let project = Self::project_config_path();
        Self::load_from(global.as_deref(), project.as_deref(), config_path)
    }

    fn load_from(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global
            && path.exists()
        {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = project {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("clinic-assist").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.execution.max_rounds, 10);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_global_config_path_names_app() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.ends_with("clinic-assist/config.toml"));
        }
    }

    #[test]
    fn test_project_file_discovered_and_env_overrides() {
        Jail::expect_with(|jail| {
            jail.create_file(
                ".clinic.toml",
                r#"
[provider]
model = "claude-opus-4-5"

[execution]
max_rounds = 4
"#,
            )?;
            jail.set_env("CLINIC_EXECUTION__MAX_ROUNDS", "7");

            let project = ConfigLoader::project_config_path();
            assert_eq!(project, Some(PathBuf::from(".clinic.toml")));

            let config = ConfigLoader::load_from(None, project.as_deref(), None)
                .map_err(|e| *e)?;
            assert_eq!(config.provider.model, "claude-opus-4-5");
            assert_eq!(config.execution.max_rounds, 7);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project() {
        Jail::expect_with(|jail| {
            jail.create_file("clinic.toml", "[execution]\nmax_retries = 5\nmax_rounds = 3\n")?;
            jail.create_file("custom.toml", "[execution]\nmax_rounds = 2\n")?;

            let config = ConfigLoader::load_from(
                None,
                Some(Path::new("clinic.toml")),
                Some(Path::new("custom.toml")),
            )
            .map_err(|e| *e)?;
            assert_eq!(config.execution.max_rounds, 2);
            assert_eq!(config.execution.max_retries, 5);
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        Jail::expect_with(|_jail| {
            let err = ConfigLoader::load_from(None, None, Some(Path::new("nope.toml")))
                .unwrap_err();
            assert!(err.to_string().contains("nope.toml"));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_error() {
        Jail::expect_with(|jail| {
            jail.create_file("clinic.toml", "[execution]\nmax_rounds = \"many\"\n")?;
            let result = ConfigLoader::load_from(None, Some(Path::new("clinic.toml")), None);
            assert!(result.is_err());
            Ok(())
        });
    }
}
