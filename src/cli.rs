use clap::Parser;
use std::path::PathBuf;

use crate::config::LanguagePreference;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "lifeclock")]
#[command(about = "Life Clock - your expected lifetime squeezed into a 24-hour day")]
pub struct CliArgs {
    /// Birth date as YYYY-MM-DD (overrides config)
    #[arg(long)]
    pub birth_date: Option<String>,

    /// Expected lifespan in years, 1-500 (overrides config)
    #[arg(long)]
    pub expectancy: Option<String>,

    /// Display language (overrides config)
    #[arg(long, value_enum)]
    pub lang: Option<LanguagePreference>,

    /// Frames per second for the clock display (overrides config)
    #[arg(long)]
    pub fps: Option<u32>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a single reading and exit instead of opening the TUI
    #[arg(long)]
    pub print: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl CliArgs {
    /// Both inputs were given, so the form can be submitted right away
    pub fn has_full_input(&self) -> bool {
        self.birth_date.is_some() && self.expectancy.is_some()
    }
}
