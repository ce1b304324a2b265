use config::{Case, Config, Environment, File};
use mhs_domain::constants::ENV_PREFIX;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const DEFAULT_CONFIG_FILE: &str = "server";

#[mhs_derive::mhs_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file overlaid with environment variables.
///
/// 1. **File**: `path` (any format the `config` crate detects from the extension; an
///    extensionless path such as `"server"` probes `server.toml`, `server.json`, ...).
///    Defaults to `server` in the working directory.
/// 2. **Environment**: variables prefixed with `MHS__`, nested with `__`
///    (`MHS__SERVER__PORT=9000` sets `server.port`).
///
/// # Errors
/// Returns an error if the file is missing or the merged values do not fit `T`.
///
/// # Example
/// ```rust
/// use mhs_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load(&effective_path(path), true)
}

/// Same as [`load_config`], but a missing file yields the defaults of `T`
/// (environment overrides still apply).
///
/// # Errors
/// Returns an error if the file exists but is malformed, or an override does not fit `T`.
pub fn load_config_or_default<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load(&effective_path(path), false)
}

fn effective_path(path: Option<impl AsRef<Path>>) -> PathBuf {
    path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf())
}

fn load<T>(path: &Path, required: bool) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    if required {
        info!("Loading config from {}", path.display());
    } else {
        warn!("Loading optional config from {}, defaults apply if absent", path.display());
    }

    Config::builder()
        .add_source(File::from(path).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(Case::Snake)
                .try_parsing(true),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mhs_domain::config::ApiConfig;
    use serial_test::serial;
    use std::fs;

    #[test]
    #[serial]
    fn reads_toml_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("server.toml");
        fs::write(
            &path,
            "[server]\nport = 9100\n\n[storage]\nstatic_dir = \"assets\"\n\n[activities]\nenforce_capacity = true\n",
        )
        .expect("write config");

        let cfg: ApiConfig = load_config(Some(&path)).expect("config loads");
        assert_eq!(cfg.server.port, 9100);
        assert_eq!(cfg.storage.static_dir, PathBuf::from("assets"));
        assert!(cfg.activities.enforce_capacity);
    }

    #[test]
    #[serial]
    fn missing_required_file_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result: Result<ApiConfig, _> = load_config(Some(dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::Config { .. })));
    }

    #[test]
    #[serial]
    fn missing_optional_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg: ApiConfig =
            load_config_or_default(Some(dir.path().join("absent.toml"))).expect("defaults");
        assert_eq!(cfg.server.port, 8000);
        assert!(!cfg.activities.enforce_capacity);
    }
}
