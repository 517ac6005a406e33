//! Configuration loading
//!
//! Settings come from, in increasing priority:
//! - built-in defaults
//! - ~/.config/pomup/config.toml
//! - POMUP_DEFAULT_GROUP_ID / POMUP_REPOSITORY / POMUP_LOCAL_REPOSITORY
//!   environment variables

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

/// Default group id for new projects
pub const DEFAULT_GROUP_ID: &str = "unnamed";

/// Default remote repository base URI
pub const DEFAULT_REPOSITORY: &str = "https://repo.maven.apache.org/maven2";

/// Effective configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Group id given to new standalone projects
    pub default_group_id: String,
    /// Remote repository base URI
    pub repository: String,
    /// Local descriptor cache directory
    pub local_repository: PathBuf,
}

/// On-disk configuration file contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Group id given to new standalone projects
    pub default_group_id: Option<String>,
    /// Remote repository base URI
    pub repository: Option<String>,
    /// Local descriptor cache directory
    pub local_repository: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the config file and environment
    pub fn load() -> Result<Self, ConfigError> {
        let file = match config_file_path() {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path).map_err(|e| {
                    ConfigError::ReadError {
                        path: path.clone(),
                        source: e,
                    }
                })?;
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path,
                    message: e.to_string(),
                })?
            }
            _ => ConfigFile::default(),
        };

        Ok(Self::build(
            file,
            std::env::var("POMUP_DEFAULT_GROUP_ID").ok(),
            std::env::var("POMUP_REPOSITORY").ok(),
            std::env::var("POMUP_LOCAL_REPOSITORY").ok().map(PathBuf::from),
            dirs::home_dir(),
        ))
    }

    /// Merge file contents, environment overrides and defaults
    fn build(
        file: ConfigFile,
        env_group_id: Option<String>,
        env_repository: Option<String>,
        env_local_repository: Option<PathBuf>,
        home: Option<PathBuf>,
    ) -> Self {
        let default_local = home
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".m2")
            .join("repository");

        Self {
            default_group_id: env_group_id
                .or(file.default_group_id)
                .unwrap_or_else(|| DEFAULT_GROUP_ID.to_string()),
            repository: env_repository
                .or(file.repository)
                .unwrap_or_else(|| DEFAULT_REPOSITORY.to_string()),
            local_repository: env_local_repository
                .or(file.local_repository)
                .unwrap_or(default_local),
        }
    }
}

fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pomup").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::build(
            ConfigFile::default(),
            None,
            None,
            None,
            Some(PathBuf::from("/home/dev")),
        );
        assert_eq!(config.default_group_id, "unnamed");
        assert_eq!(config.repository, DEFAULT_REPOSITORY);
        assert_eq!(config.local_repository, PathBuf::from("/home/dev/.m2/repository"));
    }

    #[test]
    fn test_file_values() {
        let file: ConfigFile = toml::from_str(
            r#"
            default_group_id = "com.acme"
            repository = "https://repo.example.com/maven2"
            local_repository = "/var/cache/m2"
            "#,
        )
        .unwrap();
        let config = Config::build(file, None, None, None, None);
        assert_eq!(config.default_group_id, "com.acme");
        assert_eq!(config.repository, "https://repo.example.com/maven2");
        assert_eq!(config.local_repository, PathBuf::from("/var/cache/m2"));
    }

    #[test]
    fn test_env_overrides_file() {
        let file: ConfigFile = toml::from_str(r#"default_group_id = "com.acme""#).unwrap();
        let config = Config::build(
            file,
            Some("org.override".to_string()),
            Some("https://mirror.example.com".to_string()),
            Some(PathBuf::from("/tmp/m2")),
            None,
        );
        assert_eq!(config.default_group_id, "org.override");
        assert_eq!(config.repository, "https://mirror.example.com");
        assert_eq!(config.local_repository, PathBuf::from("/tmp/m2"));
    }

    #[test]
    fn test_partial_file() {
        let file: ConfigFile = toml::from_str(r#"repository = "https://repo.example.com""#).unwrap();
        let config = Config::build(file, None, None, None, Some(PathBuf::from("/home/dev")));
        assert_eq!(config.default_group_id, "unnamed");
        assert_eq!(config.repository, "https://repo.example.com");
    }
}
