//! Configuration loading and root folder resolution

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// File name of the record database inside the root folder
pub const DATABASE_FILE: &str = "hospq.db";

/// Resolve the root folder in priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file (`root_folder` key)
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(cli_arg: Option<&str>, env_var_name: &str) -> Result<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Ok(PathBuf::from(path));
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        return Ok(PathBuf::from(path));
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(root_folder) = config.get("root_folder").and_then(|v| v.as_str()) {
                    return Ok(PathBuf::from(root_folder));
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    Ok(default_root_folder())
}

/// Make sure the root folder exists, then return the database path inside it
pub fn prepare_root_folder(root_folder: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(root_folder)?;
    Ok(root_folder.join(DATABASE_FILE))
}

/// Locate the configuration file for the platform
fn locate_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/hospq/config.toml first, then /etc/hospq/config.toml
        if let Some(path) = dirs::config_dir().map(|d| d.join("hospq").join("config.toml")) {
            if path.exists() {
                return Ok(path);
            }
        }
        let system_config = PathBuf::from("/etc/hospq/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
        Err(Error::Config("No config file found".to_string()))
    } else {
        let path = dirs::config_dir()
            .map(|d| d.join("hospq").join("config.toml"))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;
        if path.exists() {
            Ok(path)
        } else {
            Err(Error::Config(format!("Config file not found: {:?}", path)))
        }
    }
}

/// OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("hospq"))
        .unwrap_or_else(|| PathBuf::from("./hospq_data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_arg_takes_priority() {
        let root = resolve_root_folder(Some("/tmp/hospq-cli"), "HOSPQ_TEST_UNSET_VAR").unwrap();
        assert_eq!(root, PathBuf::from("/tmp/hospq-cli"));
    }

    #[test]
    fn env_var_used_when_no_cli_arg() {
        std::env::set_var("HOSPQ_TEST_ROOT_VAR", "/tmp/hospq-env");
        let root = resolve_root_folder(None, "HOSPQ_TEST_ROOT_VAR").unwrap();
        assert_eq!(root, PathBuf::from("/tmp/hospq-env"));
        std::env::remove_var("HOSPQ_TEST_ROOT_VAR");
    }

    #[test]
    fn fallback_resolves_to_some_path() {
        let root = resolve_root_folder(None, "HOSPQ_TEST_UNSET_VAR").unwrap();
        assert!(!root.as_os_str().is_empty());
    }

    #[test]
    fn prepare_creates_directory_and_returns_db_path() {
        let dir = std::env::temp_dir().join(format!("hospq-prepare-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let db_path = prepare_root_folder(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(db_path, dir.join(DATABASE_FILE));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
