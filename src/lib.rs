pub mod bundle;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod ui;

// Public API re-exports
pub use bundle::LogBundle;
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, LimitsConfig, RenderConfig};
pub use error::{PlanetLogsError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{
    render_value, LogWriter, PlanetLog, PlannedWrite, SplitReport, WrittenFile, PLANET_LOGS,
};
pub use ui::{completion_line, OutputFormatter, OutputMode};

use std::path::Path;

/// Main library interface for PlanetLogs functionality
pub struct PlanetLogs {
    config: Config,
    output_formatter: OutputFormatter,
}

impl PlanetLogs {
    /// Create a new PlanetLogs instance with the provided configuration
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);

        Self {
            config,
            output_formatter,
        }
    }

    /// Create PlanetLogs instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            crate::cli::OutputFormat::Human => OutputMode::Human,
            crate::cli::OutputFormat::Json => OutputMode::Json,
            crate::cli::OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            output_mode,
            cli_args.verbose,
            cli_args.quiet,
        ))
    }

    /// Split a match log: decode the input and write one file per planet
    /// field, earth.txt before mars.txt.
    pub fn split_logs(&self, input_path: &Path) -> Result<SplitReport> {
        self.output_formatter.start_operation("Splitting match log");

        let bundle = self.load_bundle(input_path)?;

        let writer = LogWriter::new().with_pretty(self.config.render.pretty);
        let report = writer.write_logs(&bundle)?;

        self.output_formatter.print_split_summary(&report);

        Ok(report)
    }

    /// Resolve every planet field and report what a run would write,
    /// without touching the output files.
    pub fn plan_split(&self, input_path: &Path) -> Result<Vec<PlannedWrite>> {
        let bundle = self.load_bundle(input_path)?;

        let writer = LogWriter::new().with_pretty(self.config.render.pretty);
        writer.plan(&bundle)
    }

    fn load_bundle(&self, input_path: &Path) -> Result<LogBundle> {
        let bundle = LogBundle::load(input_path, self.config.max_input_size())?;

        self.output_formatter.debug(&format!(
            "Decoded {} with {} top-level fields",
            bundle.source_path().display(),
            bundle.field_count()
        ));

        Ok(bundle)
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(PlanetLogsError::Io)?;
        Ok(())
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &PlanetLogsError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Convenience function to split a match log with default settings
pub fn split_logs_simple(input_path: &Path) -> Result<SplitReport> {
    let planetlogs = PlanetLogs::new(Config::default(), OutputMode::Plain, 0, true);
    planetlogs.split_logs(input_path)
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_planetlogs_creation() {
        let config = Config::default();
        let planetlogs = PlanetLogs::new(config, OutputMode::Human, 1, false);
        assert!(planetlogs.config().max_input_size().is_none());
        assert!(!planetlogs.config().render.pretty);
    }

    #[test]
    fn test_plan_split() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("match.json");
        std::fs::write(&input, r#"{"earth": "log-e", "mars": "log-m"}"#).unwrap();

        let planetlogs = PlanetLogs::new(Config::default(), OutputMode::Plain, 0, true);
        let planned = planetlogs.plan_split(&input).unwrap();

        assert_eq!(planned.len(), 2);
        assert_eq!(planned[0].planet, "earth");
        assert_eq!(planned[1].planet, "mars");
    }

    #[test]
    fn test_plan_split_missing_field() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("match.json");
        std::fs::write(&input, r#"{"earth": "only"}"#).unwrap();

        let planetlogs = PlanetLogs::new(Config::default(), OutputMode::Plain, 0, true);
        let error = planetlogs.plan_split(&input).unwrap_err();
        assert!(matches!(error, PlanetLogsError::MissingField { .. }));
    }

    #[test]
    fn test_sample_config_generation() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("sample.toml");

        let result = PlanetLogs::generate_sample_config(&config_path);
        assert!(result.is_ok());
        assert!(config_path.exists());

        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[limits]"));
        assert!(content.contains("[render]"));
    }

    #[test]
    fn test_version_info() {
        let version = version_info();
        assert!(!version.is_empty());
    }
}
