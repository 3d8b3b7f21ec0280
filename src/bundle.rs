use crate::error::{PlanetLogsError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// A decoded match log: the top-level JSON object plus the path it came from.
#[derive(Debug, Clone)]
pub struct LogBundle {
    source_path: PathBuf,
    fields: Map<String, Value>,
}

impl LogBundle {
    /// Read and decode a log file. The whole document is loaded into memory;
    /// `max_input_size` is an optional ceiling in bytes.
    pub fn load<P: AsRef<Path>>(path: P, max_input_size: Option<u64>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(max_size) = max_input_size {
            let size = fs::metadata(path)
                .map_err(|e| PlanetLogsError::InputUnreadable {
                    path: path.to_path_buf(),
                    source: e,
                })?
                .len();

            if size > max_size {
                return Err(PlanetLogsError::InputTooLarge { size, max_size });
            }
        }

        let content = fs::read_to_string(path).map_err(|e| PlanetLogsError::InputUnreadable {
            path: path.to_path_buf(),
            source: e,
        })?;

        let value: Value =
            serde_json::from_str(&content).map_err(|e| PlanetLogsError::MalformedInput {
                path: path.to_path_buf(),
                source: e,
            })?;

        let fields = match value {
            Value::Object(map) => map,
            _ => {
                return Err(PlanetLogsError::NotAnObject {
                    path: path.to_path_buf(),
                })
            }
        };

        Ok(Self {
            source_path: path.to_path_buf(),
            fields,
        })
    }

    /// Look up a top-level field. Absence surfaces here, at the point of
    /// access; the bundle is never validated ahead of use.
    pub fn field(&self, name: &str) -> Result<&Value> {
        self.fields
            .get(name)
            .ok_or_else(|| PlanetLogsError::MissingField {
                field: name.to_string(),
            })
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}
