//! Formsweep CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use sweep_cli::cli::{Cli, Command, ConfigAction, LogFormatArg, LogLevelArg};
use sweep_cli::commands::{
    load_config, run_config_set, run_delete, run_import, run_preview,
};
use sweep_cli::logging::{LogConfig, LogFormat, init_logging};
use sweep_cli::summary::{
    print_config, print_deletion_report, print_import_report, print_preview,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Config(args) => match &args.action {
            ConfigAction::Show => match load_config(&cli.config_path) {
                Ok(config) => {
                    print_config(&config);
                    0
                }
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            },
            ConfigAction::Set(set_args) => match run_config_set(&cli.config_path, set_args) {
                Ok(config) => {
                    println!("Settings saved.");
                    print_config(&config);
                    0
                }
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            },
        },
        Command::Preview(args) => match run_preview(&cli.store_dir, &cli.config_path, args) {
            Ok(result) => {
                print_preview(&result.config, &result.matches);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Delete(args) => match run_delete(&cli.store_dir, &cli.config_path, args) {
            Ok(report) => {
                print_deletion_report(&report);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Import(args) => match run_import(&cli.store_dir, &cli.config_path, args) {
            Ok(report) => {
                print_import_report(&report);
                if report.errors.is_empty() { 0 } else { 1 }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
