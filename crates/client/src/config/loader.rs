//! Configuration loader
//!
//! Loads application configuration from config files and environment
//! variables.
//!
//! ## Loading Strategy
//! 1. Probes the working directory for a config file (TOML or JSON)
//! 2. Overlays environment variables on whatever was found
//! 3. Falls back to built-in defaults for everything still unset
//!
//! ## Environment Variables
//! - `REELFORGE_API_BASE_URL`: Backend base URL (default
//!   `http://localhost:8000/api`)
//! - `REELFORGE_API_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `REELFORGE_STATE_PATH`: Path of the persisted client-state document
//!
//! ## File Locations
//! The loader probes, in order: `config.toml`, `reelforge.toml`,
//! `config.json`, `reelforge.json` in the current working directory.

use std::path::{Path, PathBuf};

use reelforge_domain::{Config, ReelforgeError, Result};

const PROBE_PATHS: [&str; 4] = ["config.toml", "reelforge.toml", "config.json", "reelforge.json"];

/// Load configuration with the file-then-environment strategy.
///
/// Never fails on absent sources: with no file and no environment the
/// defaults come back. A present-but-malformed source is an error.
///
/// # Errors
/// Returns `ReelforgeError::Config` if a probed file exists but cannot be
/// parsed, or an environment variable holds an invalid value.
pub fn load() -> Result<Config> {
    dotenvy::dotenv().ok();

    let base = match find_config_file() {
        Some(path) => {
            tracing::info!(path = %path.display(), "configuration loaded from file");
            load_from_file(&path)?
        }
        None => Config::default(),
    };

    apply_env(base)
}

/// Load configuration from a specific TOML or JSON file.
///
/// # Errors
/// Returns `ReelforgeError::Config` if the file cannot be read or parsed.
pub fn load_from_file(path: &Path) -> Result<Config> {
    let raw = std::fs::read_to_string(path).map_err(|err| {
        ReelforgeError::Config(format!("cannot read {}: {err}", path.display()))
    })?;

    let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&raw).map_err(|err| {
            ReelforgeError::Config(format!("invalid JSON in {}: {err}", path.display()))
        })
    } else {
        toml::from_str(&raw).map_err(|err| {
            ReelforgeError::Config(format!("invalid TOML in {}: {err}", path.display()))
        })
    }
}

fn find_config_file() -> Option<PathBuf> {
    PROBE_PATHS.iter().map(PathBuf::from).find(|candidate| candidate.is_file())
}

fn apply_env(mut config: Config) -> Result<Config> {
    if let Ok(base_url) = std::env::var("REELFORGE_API_BASE_URL") {
        config.api.base_url = base_url;
    }

    if let Ok(timeout) = std::env::var("REELFORGE_API_TIMEOUT_SECS") {
        config.api.timeout_seconds = timeout.parse::<u64>().map_err(|err| {
            ReelforgeError::Config(format!("invalid REELFORGE_API_TIMEOUT_SECS: {err}"))
        })?;
    }

    if let Ok(path) = std::env::var("REELFORGE_STATE_PATH") {
        config.storage.path = path;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_localhost() {
        let config = Config::default();

        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert_eq!(config.api.timeout_seconds, 30);
    }

    #[test]
    fn loads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[api]
base_url = "https://api.reelforge.example/api"
timeout_seconds = 10

[storage]
path = "/tmp/reelforge.json"
"#,
        )
        .unwrap();

        let config = load_from_file(&path).unwrap();

        assert_eq!(config.api.base_url, "https://api.reelforge.example/api");
        assert_eq!(config.api.timeout_seconds, 10);
        assert_eq!(config.storage.path, "/tmp/reelforge.json");
    }

    #[test]
    fn loads_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{
                "api": {"base_url": "https://api.example/api", "timeout_seconds": 12},
                "storage": {"path": "state.json"}
            }"#,
        )
        .unwrap();

        let config = load_from_file(&path).unwrap();

        assert_eq!(config.api.base_url, "https://api.example/api");
        assert_eq!(config.api.timeout_seconds, 12);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not toml = [").unwrap();

        let result = load_from_file(&path);

        assert!(matches!(result, Err(ReelforgeError::Config(_))));
    }

    #[test]
    fn env_overlays_base_config() {
        // Only this test touches REELFORGE_* variables in this binary.
        std::env::set_var("REELFORGE_API_BASE_URL", "https://staging.example/api");
        let config = apply_env(Config::default()).unwrap();
        std::env::remove_var("REELFORGE_API_BASE_URL");

        assert_eq!(config.api.base_url, "https://staging.example/api");
    }
}
