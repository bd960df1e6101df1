use crate::birthdays::DEFAULT_WINDOW_DAYS;
use crate::error::{Result, RolodexError};
use crate::store::fs::DEFAULT_DATA_FILE;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const HOME_ENV_VAR: &str = "ROLODEX_HOME";

/// Configuration for rolodex, stored in `<home>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// Data file name, relative to the home directory unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Default window for the `birthdays` command, in days
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: u32,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_upcoming_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            upcoming_days: default_upcoming_days(),
        }
    }
}

impl RolodexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RolodexError::Io)?;
        let config: RolodexConfig =
            serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        Ok(config)
    }

    /// Full path of the data file for a given home directory.
    pub fn data_path(&self, home: &Path) -> PathBuf {
        home.join(&self.data_file)
    }
}

/// Picks the home directory: explicit flag, then `ROLODEX_HOME`, then the
/// platform data directory.
pub fn resolve_home(flag: Option<PathBuf>, env_value: Option<String>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = env_value.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "rolodex", "rolodex")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RolodexError::Store("Could not determine a data directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RolodexConfig::default();
        assert_eq!(config.data_file, "addressbook.json");
        assert_eq!(config.upcoming_days, 7);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = RolodexConfig::load(dir.path()).unwrap();
        assert_eq!(config, RolodexConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"data_file": "friends.json", "upcoming_days": 14}"#,
        )
        .unwrap();

        let loaded = RolodexConfig::load(dir.path()).unwrap();
        assert_eq!(
            loaded,
            RolodexConfig {
                data_file: "friends.json".to_string(),
                upcoming_days: 14,
            }
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"upcoming_days": 3}"#).unwrap();

        let config = RolodexConfig::load(dir.path()).unwrap();
        assert_eq!(config.upcoming_days, 3);
        assert_eq!(config.data_file, "addressbook.json");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "not json").unwrap();

        assert!(matches!(
            RolodexConfig::load(dir.path()),
            Err(RolodexError::Serialization(_))
        ));
    }

    #[test]
    fn test_data_path_joins_home() {
        let config = RolodexConfig::default();
        assert_eq!(
            config.data_path(Path::new("/tmp/rolo")),
            PathBuf::from("/tmp/rolo/addressbook.json")
        );
    }

    #[test]
    fn test_resolve_home_precedence() {
        let flag = Some(PathBuf::from("/from/flag"));
        let env = Some("/from/env".to_string());

        assert_eq!(
            resolve_home(flag, env.clone()).unwrap(),
            PathBuf::from("/from/flag")
        );
        assert_eq!(resolve_home(None, env).unwrap(), PathBuf::from("/from/env"));
    }
}
