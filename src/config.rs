use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::extract::DEFAULT_MAX_CHARS;

/// Port the original deployment served on.
pub const DEFAULT_PORT: u16 = 8566;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub port: Option<u16>,
    pub max_chars: Option<usize>,
}

impl ServiceConfig {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars.unwrap_or(DEFAULT_MAX_CHARS)
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("astchunk.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<ServiceConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: ServiceConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.port(), 8566);
        assert_eq!(config.max_chars(), 2000);
    }

    #[test]
    fn test_missing_file_is_none() {
        let result = load_config(Some(Path::new("/nonexistent/astchunk.toml"))).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 9000\nmax_chars = 512").unwrap();
        let config = load_config(Some(file.path())).unwrap().unwrap();
        assert_eq!(config.port(), 9000);
        assert_eq!(config.max_chars(), 512);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 9000").unwrap();
        let config = load_config(Some(file.path())).unwrap().unwrap();
        assert_eq!(config.port(), 9000);
        assert_eq!(config.max_chars(), 2000);
    }
}
