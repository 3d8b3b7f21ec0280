use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "planetlogs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Split per-planet log fields out of a combined JSON match log")]
#[command(
    long_about = "PlanetLogs reads a combined JSON match log, extracts the \"earth\" and \
                       \"mars\" fields, and writes each one to its own text file (earth.txt, \
                       mars.txt) in the current directory."
)]
#[command(before_help = "🪐 PlanetLogs - Match Log Splitter")]
#[command(after_help = "EXAMPLES:\n  \
    planetlogs match.json\n  \
    planetlogs match.json --pretty\n  \
    planetlogs match.json --dry-run --verbose\n  \
    planetlogs match.json --config my-config.toml\n\n\
    For more information, visit: https://github.com/user/planetlogs")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to the combined JSON match log
    #[arg(value_name = "INPUT", required_unless_present = "generate_config")]
    pub input: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for diagnostics and reports
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Pretty-print array and object field values
    #[arg(long, help = "Render array/object field values as pretty JSON")]
    pub pretty: bool,

    /// Maximum input file size in bytes
    #[arg(long, help = "Maximum input file size in bytes (0 disables the limit)")]
    pub max_input_size: Option<u64>,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress all output, including the completion line)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (validate the input and show what would be written)
    #[arg(long, help = "Show what would be written without writing any files")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        // --pretty is a bare flag; only an explicit use overrides the config file
        let pretty = if self.pretty { Some(true) } else { None };

        CliOverrides::new()
            .with_max_input_size(self.max_input_size)
            .with_pretty(pretty)
    }

    pub fn should_use_colors(&self) -> bool {
        !self.quiet && console::Term::stdout().features().colors_supported()
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose > 0 && !self.quiet
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["planetlogs"]).is_err());
        assert!(Cli::try_parse_from(["planetlogs", "match.json"]).is_ok());
    }

    #[test]
    fn test_generate_config_needs_no_input() {
        let cli = Cli::try_parse_from(["planetlogs", "--generate-config"]).unwrap();
        assert!(cli.generate_config);
        assert!(cli.input.is_none());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["planetlogs", "match.json", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli::try_parse_from(["planetlogs", "match.json", "-vv"]).unwrap();
        assert_eq!(cli.verbosity_level(), 2);
        assert!(cli.is_verbose());

        let cli = Cli::try_parse_from(["planetlogs", "match.json", "--quiet"]).unwrap();
        assert_eq!(cli.verbosity_level(), 0);
        assert!(!cli.is_verbose());
    }

    #[test]
    fn test_cli_overrides() {
        let cli =
            Cli::try_parse_from(["planetlogs", "match.json", "--pretty", "--max-input-size", "512"])
                .unwrap();
        let overrides = cli.create_cli_overrides();
        assert_eq!(overrides.pretty, Some(true));
        assert_eq!(overrides.max_input_size, Some(512));

        let cli = Cli::try_parse_from(["planetlogs", "match.json"]).unwrap();
        let overrides = cli.create_cli_overrides();
        assert_eq!(overrides.pretty, None);
        assert_eq!(overrides.max_input_size, None);
    }

    #[test]
    fn test_load_config_applies_overrides() {
        let cli = Cli::try_parse_from(["planetlogs", "match.json", "--pretty"]).unwrap();
        let config = cli.load_config().unwrap();
        assert!(config.render.pretty);
    }
}
