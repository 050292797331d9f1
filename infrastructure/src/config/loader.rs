//! Configuration file loader with multi-source merging

use super::error::ConfigError;
use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Directory name under the XDG config home
const APP_DIR: &str = "assistant-chat";

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["assistant-chat.toml", ".assistant-chat.toml"];

/// Environment variable prefix; `__` separates section and key
const ENV_PREFIX: &str = "ASSISTANT_CHAT_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment (`ASSISTANT_CHAT_POLLING__INTERVAL_MS=500`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./assistant-chat.toml` or `./.assistant-chat.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/assistant-chat/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        let mut files = Vec::new();
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            files.push(global_path);
        }
        if let Some(project_path) = Self::project_config_path() {
            files.push(project_path);
        }
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::Invalid(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            files.push(path.clone());
        }

        Self::extract(Self::figment(&files))
    }

    /// Load defaults plus environment overrides (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, ConfigError> {
        Self::extract(Self::figment(&[]))
    }

    /// Defaults, then `files` in order, then the environment on top
    fn figment(files: &[PathBuf]) -> Figment {
        files
            .iter()
            .fold(
                Figment::new().merge(Serialized::defaults(FileConfig::default())),
                |figment, path| {
                    debug!("Merging config file {}", path.display());
                    figment.merge(Toml::file(path))
                },
            )
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn extract(figment: Figment) -> Result<FileConfig, ConfigError> {
        figment
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Read a `.env` file from the working directory or one of its
    /// parents into the process environment.
    ///
    /// Variables that are already set keep their value. Returns the file
    /// that was read, if any.
    pub fn load_dotenv() -> Option<PathBuf> {
        match dotenvy::dotenv() {
            Ok(path) => {
                debug!("Loaded environment from {}", path.display());
                Some(path)
            }
            Err(e) if e.not_found() => {
                debug!("No .env file found");
                None
            }
            Err(e) => {
                warn!("Ignoring unreadable .env file: {}", e);
                None
            }
        }
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/assistant-chat/config.toml if set,
    /// otherwise falls back to ~/.config/assistant-chat/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        let overrides: Vec<String> = std::env::vars()
            .map(|(key, _)| key)
            .filter(|key| key.starts_with(ENV_PREFIX))
            .collect();
        if overrides.is_empty() {
            println!("  [     ] Env:     {}*", ENV_PREFIX);
        } else {
            println!("  [FOUND] Env:     {}", overrides.join(", "));
        }

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./{} or ./{}", PROJECT_FILES[0], PROJECT_FILES[1]);
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::fs;
    use tempfile::TempDir;

    /// Point the global config at the jail so the real one is never read
    fn isolate(jail: &mut Jail) {
        let dir = jail.directory().to_path_buf();
        jail.set_env("XDG_CONFIG_HOME", dir.display());
    }

    fn load(config_path: Option<&PathBuf>) -> figment::Result<FileConfig> {
        ConfigLoader::load(config_path).map_err(|e| e.to_string().into())
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("assistant-chat"));
    }

    #[test]
    fn test_no_files_is_default() {
        Jail::expect_with(|jail| {
            isolate(jail);
            assert_eq!(load(None)?, FileConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_project_file() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(
                "assistant-chat.toml",
                "[polling]\ninterval_ms = 2000\nmax_attempts = 30\n",
            )?;
            jail.set_env("ASSISTANT_CHAT_POLLING__INTERVAL_MS", "250");

            let config = load(None)?;
            assert_eq!(config.polling.interval_ms, 250);
            // Keys the environment does not name keep the file value
            assert_eq!(config.polling.max_attempts, 30);
            Ok(())
        });
    }

    #[test]
    fn test_env_applies_without_files() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("assistant-chat.toml", "[polling]\ninterval_ms = 2000\n")?;
            jail.set_env("ASSISTANT_CHAT_ASSISTANT__ASSISTANT_ID", "asst_env");

            let config = ConfigLoader::load_defaults().map_err(|e| e.to_string())?;
            assert_eq!(config.assistant.assistant_id.as_deref(), Some("asst_env"));
            assert_eq!(config.polling.interval_ms, 1000);
            Ok(())
        });
    }

    #[test]
    fn test_later_file_wins() {
        Jail::expect_with(|jail| {
            isolate(jail);
            fs::create_dir(jail.directory().join(APP_DIR)).map_err(|e| e.to_string())?;
            jail.create_file(
                format!("{}/config.toml", APP_DIR),
                "[assistant]\nassistant_id = \"asst_global\"\n\n[polling]\ninterval_ms = 2000\n",
            )?;
            jail.create_file(
                ".assistant-chat.toml",
                "[assistant]\nassistant_id = \"asst_project\"\n\n[output]\ncolor = false\n",
            )?;
            jail.create_file("explicit.toml", "[assistant]\nassistant_id = \"asst_explicit\"\n")?;

            let config = load(Some(&jail.directory().join("explicit.toml")))?;
            assert_eq!(config.assistant.assistant_id.as_deref(), Some("asst_explicit"));
            // Untouched keys from the lower layers survive
            assert_eq!(config.polling.interval_ms, 2000);
            assert!(!config.output.color);
            assert_eq!(config.polling.max_attempts, 600);
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file() {
        Jail::expect_with(|jail| {
            isolate(jail);
            let missing = jail.directory().join("nope.toml");
            let err = ConfigLoader::load(Some(&missing)).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(m) if m.contains("nope.toml")));
            Ok(())
        });
    }

    #[test]
    fn test_type_mismatch_is_load_error() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("assistant-chat.toml", "[polling]\nmax_attempts = \"many\"\n")?;
            let err = ConfigLoader::load(None).unwrap_err();
            assert!(matches!(err, ConfigError::Load(_)));
            Ok(())
        });
    }

    #[test]
    fn test_dotenv_fills_unset_variables_only() {
        Jail::expect_with(|jail| {
            jail.set_env("CHAT_DOTENV_TEST_PRESET", "from-shell");
            jail.create_file(
                ".env",
                "CHAT_DOTENV_TEST_KEY=sk-dotenv\nCHAT_DOTENV_TEST_PRESET=from-file\n",
            )?;

            let path = ConfigLoader::load_dotenv();
            assert!(path.is_some_and(|p| p.ends_with(".env")));
            assert_eq!(
                std::env::var("CHAT_DOTENV_TEST_KEY").as_deref(),
                Ok("sk-dotenv")
            );
            assert_eq!(
                std::env::var("CHAT_DOTENV_TEST_PRESET").as_deref(),
                Ok("from-shell")
            );
            Ok(())
        });
    }

    #[test]
    fn test_project_file_discovery_order() {
        let dir = TempDir::new().unwrap();
        assert!(ConfigLoader::project_config_in(dir.path()).is_none());

        fs::write(dir.path().join(".assistant-chat.toml"), "").unwrap();
        assert_eq!(
            ConfigLoader::project_config_in(dir.path()),
            Some(dir.path().join(".assistant-chat.toml"))
        );

        fs::write(dir.path().join("assistant-chat.toml"), "").unwrap();
        assert_eq!(
            ConfigLoader::project_config_in(dir.path()),
            Some(dir.path().join("assistant-chat.toml"))
        );
    }
}
