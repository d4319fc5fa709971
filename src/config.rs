use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".blogql.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub data: DataSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve the GraphiQL IDE on `GET /graphql`.
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: default_graphiql(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSettings {
    /// Data directory, relative to the project root. Empty means the
    /// bundled dataset.
    #[serde(default)]
    pub path: String,
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl BlogConfig {
    /// Loads the config found by searching upward from `start_path`.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        Self::load_file(&config_path)
    }

    /// Loads a specific config file. The project root is its parent directory.
    pub fn load_file(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path)?;
        let config: BlogConfig = toml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| BlogError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok((config, project_root))
    }

    /// Like [`BlogConfig::load`], but falls back to the defaults rooted at
    /// `start_path` when no config file exists.
    pub fn load_or_default(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_config_file(start_path) {
            Ok(path) => Self::load_file(&path),
            Err(BlogError::Config(_)) => {
                tracing::debug!("No config file found, using defaults");
                Ok((Self::default(), start_path.to_path_buf()))
            }
            Err(e) => Err(e),
        }
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(BlogError::Config(format!(
                    "No {} found in {} or any parent directory",
                    CONFIG_FILE_NAME,
                    start_path.display()
                )));
            }
        }
    }

    /// The configured data directory, or `None` for the bundled dataset.
    pub fn data_path(&self, project_root: &Path) -> Option<PathBuf> {
        if self.data.path.trim().is_empty() {
            None
        } else {
            Some(project_root.join(&self.data.path))
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = BlogConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.bind_address(), "127.0.0.1:5000");
        assert!(config.server.graphiql);
        assert!(config.data_path(Path::new("/tmp")).is_none());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: BlogConfig = toml::from_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.data.path.is_empty());
    }

    #[test]
    fn test_save_and_load_from_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = BlogConfig::default();
        config.data.path = "data".to_string();
        config.server.graphiql = false;
        config.save(&temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();

        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (loaded, root) = BlogConfig::load(&nested).unwrap();
        assert_eq!(root, temp_dir.path());
        assert!(!loaded.server.graphiql);
        assert_eq!(loaded.data_path(&root), Some(temp_dir.path().join("data")));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let (config, root) = BlogConfig::load_or_default(temp_dir.path()).unwrap();
        assert_eq!(root, temp_dir.path());
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[server\nport = ").unwrap();
        assert!(matches!(
            BlogConfig::load_file(&path),
            Err(BlogError::TomlDe(_))
        ));
    }
}
