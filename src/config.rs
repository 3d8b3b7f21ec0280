use crate::error::{PlanetLogsError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub limits: LimitsConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Maximum input file size in bytes. 0 disables the limit.
    pub max_input_size: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Pretty-print array and object field values instead of compact JSON.
    pub pretty: bool,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_input_size: 0, // Unlimited; the whole document is loaded at once
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { pretty: false }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PlanetLogsError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| PlanetLogsError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| PlanetLogsError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                // Try to load from default locations
                let default_paths = ["planetlogs.toml", ".planetlogs.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                // If no config file found, use defaults
                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(max_input_size) = cli_args.max_input_size {
            self.limits.max_input_size = max_input_size;
        }

        if let Some(pretty) = cli_args.pretty {
            self.render.pretty = pretty;
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| PlanetLogsError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| PlanetLogsError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        // A limit smaller than the smallest valid document is a configuration mistake
        if self.limits.max_input_size != 0 && self.limits.max_input_size < 2 {
            return Err(PlanetLogsError::Config {
                message: "max_input_size must be 0 (unlimited) or at least 2 bytes".to_string(),
            });
        }

        Ok(())
    }

    /// The effective size ceiling, None when unlimited.
    pub fn max_input_size(&self) -> Option<u64> {
        if self.limits.max_input_size == 0 {
            None
        } else {
            Some(self.limits.max_input_size)
        }
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub max_input_size: Option<u64>,
    pub pretty: Option<bool>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_input_size(mut self, max_input_size: Option<u64>) -> Self {
        self.max_input_size = max_input_size;
        self
    }

    pub fn with_pretty(mut self, pretty: Option<bool>) -> Self {
        self.pretty = pretty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.limits.max_input_size, 0);
        assert!(config.max_input_size().is_none());
        assert!(!config.render.pretty);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.limits.max_input_size = 1;
        assert!(config.validate().is_err());

        config.limits.max_input_size = 4096;
        assert!(config.validate().is_ok());
        assert_eq!(config.max_input_size(), Some(4096));
    }

    #[test]
    fn test_config_file_operations() {
        let config = Config::default();
        let temp_file = NamedTempFile::new().unwrap();

        // Test saving
        config.save_to_file(temp_file.path()).unwrap();

        // Test loading
        let loaded_config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.limits.max_input_size,
            loaded_config.limits.max_input_size
        );
    }

    #[test]
    fn test_load_missing_config_file() {
        let result = Config::load_from_file("does-not-exist.toml");
        assert!(matches!(result, Err(PlanetLogsError::Config { .. })));
    }

    #[test]
    fn test_load_malformed_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "not valid toml [[").unwrap();

        let result = Config::load_from_file(temp_file.path());
        assert!(matches!(result, Err(PlanetLogsError::Config { .. })));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = Config::default();

        let overrides = CliOverrides::new()
            .with_max_input_size(Some(1024))
            .with_pretty(Some(true));

        config.merge_with_cli_args(&overrides);

        assert_eq!(config.limits.max_input_size, 1024);
        assert!(config.render.pretty);
    }

    #[test]
    fn test_sample_config_generation() {
        let sample = Config::create_sample_config();
        assert!(!sample.is_empty());
        assert!(sample.contains("[limits]"));
        assert!(sample.contains("[render]"));
    }
}
