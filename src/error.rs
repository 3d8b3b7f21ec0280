use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanetLogsError {
    #[error("Cannot read input file {path}: {source}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file too large: {size} bytes (max: {max_size} bytes)")]
    InputTooLarge { size: u64, max_size: u64 },

    #[error("Input is not valid JSON: {path}")]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Top-level JSON value is not an object: {path}")]
    NotAnObject { path: PathBuf },

    #[error("Missing log field: {field}")]
    MissingField { field: String },

    #[error("Cannot write output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for PlanetLogsError {
    fn user_message(&self) -> String {
        match self {
            PlanetLogsError::InputUnreadable { path, source } => {
                format!("Cannot read input file {}: {}", path.display(), source)
            }
            PlanetLogsError::InputTooLarge { size, max_size } => {
                format!(
                    "Input file too large: {} bytes (maximum allowed: {} bytes)",
                    size, max_size
                )
            }
            PlanetLogsError::MalformedInput { path, source } => {
                format!("Input is not valid JSON ({}): {}", path.display(), source)
            }
            PlanetLogsError::NotAnObject { path } => {
                format!(
                    "Expected a JSON object at the top level of {}",
                    path.display()
                )
            }
            PlanetLogsError::MissingField { field } => {
                format!("The input log has no \"{}\" field", field)
            }
            PlanetLogsError::OutputWrite { path, source } => {
                format!("Cannot write output file {}: {}", path.display(), source)
            }
            PlanetLogsError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            PlanetLogsError::InputUnreadable { .. } => Some(
                "Check that the path exists and that you have read permission for it.".to_string(),
            ),
            PlanetLogsError::InputTooLarge { .. } => Some(
                "Raise or disable the limit with max_input_size in the configuration file (0 means unlimited).".to_string(),
            ),
            PlanetLogsError::MalformedInput { .. } => Some(
                "Verify the file contains a single well-formed JSON document.".to_string(),
            ),
            PlanetLogsError::NotAnObject { .. } => Some(
                "The log file must decode to a JSON object with per-planet fields (e.g. {\"earth\": ..., \"mars\": ...}).".to_string(),
            ),
            PlanetLogsError::MissingField { field } => Some(format!(
                "Add a \"{}\" key to the input document or pass a log file that contains one.",
                field
            )),
            PlanetLogsError::OutputWrite { .. } => Some(
                "Ensure the current directory is writable and has free space.".to_string(),
            ),
            PlanetLogsError::Config { .. } => Some(
                "Check your configuration file syntax and ensure all values are valid.".to_string(),
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for PlanetLogsError {
    fn from(error: toml::de::Error) -> Self {
        PlanetLogsError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlanetLogsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_messages() {
        let error = PlanetLogsError::MissingField {
            field: "mars".to_string(),
        };
        assert!(error.user_message().contains("mars"));
        assert!(error.suggestion().unwrap().contains("mars"));
    }

    #[test]
    fn test_not_an_object_message() {
        let error = PlanetLogsError::NotAnObject {
            path: PathBuf::from("match.json"),
        };
        assert!(error.user_message().contains("match.json"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = PlanetLogsError::from(io_error);
        assert!(matches!(error, PlanetLogsError::Io(_)));
        assert!(error.suggestion().is_none());
    }
}
