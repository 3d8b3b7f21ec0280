use clap::Parser;
use planetlogs::{
    Cli, OutputFormatter, OutputMode, PlanetLogs, PlanetLogsError, UserFriendlyError,
};
use std::path::Path;
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    // Create PlanetLogs instance
    let planetlogs = match PlanetLogs::from_cli(&cli) {
        Ok(planetlogs) => planetlogs,
        Err(e) => {
            print_startup_error(&e);
            return exit_code_for(&e);
        }
    };

    let input = match cli.input {
        Some(ref path) => path.clone(),
        // Unreachable: clap requires INPUT unless --generate-config is set
        None => return 2,
    };

    // Handle dry run mode
    if cli.dry_run {
        return handle_dry_run(&planetlogs, &input);
    }

    // Execute main split workflow
    match planetlogs.split_logs(&input) {
        Ok(report) => {
            planetlogs.output_formatter().print_completion(&report);
            0
        }
        Err(e) => {
            planetlogs.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

// Map error types to appropriate exit codes
fn exit_code_for(error: &PlanetLogsError) -> i32 {
    match error {
        PlanetLogsError::Config { .. } => 2,
        PlanetLogsError::InputUnreadable { .. } | PlanetLogsError::InputTooLarge { .. } => 3,
        PlanetLogsError::MalformedInput { .. } => 4,
        PlanetLogsError::NotAnObject { .. } => 5,
        PlanetLogsError::MissingField { .. } => 6,
        PlanetLogsError::OutputWrite { .. } => 7,
        _ => 1, // General error
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "planetlogs.toml".to_string());

    match PlanetLogs::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  planetlogs <match-log.json> --config {}", config_path);
            println!("\nEdit the file to customize settings for your needs.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn handle_dry_run(planetlogs: &PlanetLogs, input: &Path) -> i32 {
    let formatter = planetlogs.output_formatter();

    formatter.info("DRY RUN MODE - No files will be written");
    formatter.print_separator();

    match planetlogs.plan_split(input) {
        Ok(planned) => {
            println!("Would write:");
            for write in &planned {
                println!(
                    "  {} -> {} ({} bytes)",
                    write.planet,
                    write.path.display(),
                    write.bytes
                );
            }

            formatter.print_separator();
            formatter.success("Dry run completed successfully");
            formatter.info("Run without --dry-run to write the files");
            0
        }
        Err(e) => {
            planetlogs.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn print_startup_error(error: &PlanetLogsError) {
    // Create a basic formatter for startup errors
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}
