use anyhow::{Context, Result};
use clap::Parser;
use lifeclock::cli::CliArgs;
use lifeclock::config::Config;
use lifeclock::report::{print_report, StderrNotifier};
use lifeclock::runtime;
use lifeclock_core::ports::{Clock, SystemClock};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::{error, info};

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    init_tracing(cli_args.log_file.as_deref())?;

    info!("Starting Life Clock");

    let config = Config::from_cli_and_file(&cli_args, cli_args.config.clone())?;
    let clock = SystemClock;
    let now = clock.now();
    let startup = config.startup_input(&cli_args, now.date_naive());
    let lang = config.language.resolve();
    info!("Language {}, {} fps", lang, config.display.fps);

    if cli_args.print {
        let accepted = print_report(
            &mut io::stdout(),
            &mut StderrNotifier,
            &startup,
            lang,
            now,
            config.display.quote_rotate_secs,
        )?;
        if !accepted {
            std::process::exit(2);
        }
        return Ok(());
    }

    if let Err(err) = runtime::run(&config, &startup, &clock) {
        error!("Application error: {:#}", err);
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }

    info!("Life Clock shut down cleanly");
    Ok(())
}
