use crate::bundle::LogBundle;
use crate::error::{PlanetLogsError, Result};
use crate::extractor::renderer::render_value;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// One extraction target: a planet field and its fixed output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanetLog {
    pub planet: &'static str,
    pub file_name: &'static str,
}

/// The fixed target list, written in order.
pub const PLANET_LOGS: [PlanetLog; 2] = [
    PlanetLog {
        planet: "earth",
        file_name: "earth.txt",
    },
    PlanetLog {
        planet: "mars",
        file_name: "mars.txt",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub input: PathBuf,
    pub files: Vec<WrittenFile>,
    pub duration: Duration,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WrittenFile {
    pub planet: String,
    pub path: PathBuf,
    pub bytes: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedWrite {
    pub planet: String,
    pub path: PathBuf,
    pub bytes: u64,
}

pub struct LogWriter {
    pretty: bool,
}

impl LogWriter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Write each target field to its output file, in order. Each file is
    /// fully written before the next write begins; a failure aborts the run
    /// and leaves earlier files on disk.
    pub fn write_logs(&self, bundle: &LogBundle) -> Result<SplitReport> {
        let start = Instant::now();
        let mut files = Vec::with_capacity(PLANET_LOGS.len());

        for target in PLANET_LOGS {
            let value = bundle.field(target.planet)?;
            let rendered = render_value(value, self.pretty);
            let path = PathBuf::from(target.file_name);
            let bytes = self.write_file(&path, &rendered)?;

            files.push(WrittenFile {
                planet: target.planet.to_string(),
                path,
                bytes,
            });
        }

        Ok(SplitReport {
            input: bundle.source_path().to_path_buf(),
            files,
            duration: start.elapsed(),
            completed_at: Utc::now(),
        })
    }

    /// Resolve and render every target without touching the filesystem.
    pub fn plan(&self, bundle: &LogBundle) -> Result<Vec<PlannedWrite>> {
        PLANET_LOGS
            .iter()
            .map(|target| {
                let value = bundle.field(target.planet)?;
                let rendered = render_value(value, self.pretty);

                Ok(PlannedWrite {
                    planet: target.planet.to_string(),
                    path: PathBuf::from(target.file_name),
                    bytes: (rendered.len() + 1) as u64,
                })
            })
            .collect()
    }

    fn write_file(&self, path: &Path, rendered: &str) -> Result<u64> {
        let map_err = |e: std::io::Error| PlanetLogsError::OutputWrite {
            path: path.to_path_buf(),
            source: e,
        };

        // File::create truncates, so reruns overwrite instead of appending
        let mut file = fs::File::create(path).map_err(map_err)?;
        file.write_all(rendered.as_bytes()).map_err(map_err)?;
        file.write_all(b"\n").map_err(map_err)?;
        file.flush().map_err(map_err)?;

        Ok((rendered.len() + 1) as u64)
    }
}

impl Default for LogWriter {
    fn default() -> Self {
        Self::new()
    }
}
