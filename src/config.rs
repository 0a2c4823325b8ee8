use std::fs;

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub port: u16,
    pub database: String,
    /// Prefix of the locator links in every representation.
    pub public_url: String,
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 3000,
            database: "sqlite://soundshelf.db".to_string(),
            public_url: "http://localhost:3000".to_string(),
            max_connections: 5,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Error opening configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let config_string = fs::read_to_string(path)?;
        Ok(serde_json::from_str(config_string.as_str())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"port": 8080}"#).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.database, Config::default().database);
        assert_eq!(config.public_url, "http://localhost:3000");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = std::env::temp_dir().join("soundshelf-malformed-config.json");
        fs::write(&path, "{ not json").unwrap();
        let ret = Config::from_file(path.to_str().unwrap());
        assert!(matches!(ret, Err(ConfigError::Malformed(_))));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let ret = Config::from_file("/definitely/not/here.json");
        assert!(matches!(ret, Err(ConfigError::Io(_))));
    }
}
