use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use directories::ProjectDirs;
use lifeclock_core::domain::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::CliArgs;

const MIN_FPS: u32 = 1;
const MAX_FPS: u32 = 240;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Config {
    pub version: u32,
    pub default_expectancy: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub language: LanguagePreference,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub fps: u32,
    pub quote_rotate_secs: u64,
    pub show_explainer: bool,
}

/// Language setting; `auto` follows the process locale
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LanguagePreference {
    #[default]
    Auto,
    En,
    Ko,
}

impl LanguagePreference {
    pub fn resolve(&self) -> Language {
        match self {
            LanguagePreference::Auto => Language::from_env(),
            LanguagePreference::En => Language::En,
            LanguagePreference::Ko => Language::Ko,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            default_expectancy: 80,
            birth_date: None,
            language: LanguagePreference::Auto,
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            quote_rotate_secs: 30,
            show_explainer: true,
        }
    }
}

impl DisplayConfig {
    /// Time between display refreshes
    pub fn frame_interval(&self) -> Duration {
        let fps = self.fps.clamp(MIN_FPS, MAX_FPS);
        Duration::from_micros(1_000_000 / u64::from(fps))
    }
}

pub fn get_default_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "lifeclock")
        .context("Failed to determine project directories")?;

    let config_dir = proj_dirs.config_dir();
    Ok(config_dir.join("lifeclock.toml"))
}

/// Text the input form starts with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupInput {
    pub birth_date: String,
    pub expectancy: String,
    /// Jump straight to the result view
    pub submit: bool,
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p,
            None => get_default_config_path()?,
        };

        if !path.exists() {
            let default_config = Config::default();
            // Create directory if it doesn't exist
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .context("Failed to create config directory")?;
            }
            default_config.save(&path)?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    pub fn from_cli_and_file(cli_args: &CliArgs, config_path: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::load(config_path)?;

        // CLI args override config file
        if let Some(lang) = cli_args.lang {
            config.language = lang;
        }
        if let Some(fps) = cli_args.fps {
            config.display.fps = fps;
        }

        Ok(config)
    }

    /// Seed the input form from CLI values, then config, then today
    pub fn startup_input(&self, cli_args: &CliArgs, today: NaiveDate) -> StartupInput {
        let birth_date = cli_args
            .birth_date
            .clone()
            .unwrap_or_else(|| self.birth_date.unwrap_or(today).format("%Y-%m-%d").to_string());
        let expectancy = cli_args
            .expectancy
            .clone()
            .unwrap_or_else(|| self.default_expectancy.to_string());

        StartupInput {
            birth_date,
            expectancy,
            submit: cli_args.has_full_input(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.default_expectancy, 80);
        assert_eq!(config.birth_date, None);
        assert_eq!(config.language, LanguagePreference::Auto);
        assert_eq!(config.display.fps, 60);
        assert!(config.display.show_explainer);
    }

    #[test]
    fn test_config_serialization_roundtrip() -> Result<()> {
        let mut config = Config::default();
        config.birth_date = Some(date(1990, 5, 17));
        config.language = LanguagePreference::Ko;
        config.display.quote_rotate_secs = 5;

        let toml_str = toml::to_string(&config)?;
        assert!(toml_str.contains("birth_date = \"1990-05-17\""));
        assert!(toml_str.contains("language = \"ko\""));

        let parsed_config: Config = toml::from_str(&toml_str)?;
        assert_eq!(config, parsed_config);
        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let config: Config = toml::from_str("version = 1\ndefault_expectancy = 90\n")?;
        assert_eq!(config.default_expectancy, 90);
        assert_eq!(config.display, DisplayConfig::default());
        assert_eq!(config.language, LanguagePreference::Auto);
        Ok(())
    }

    #[test]
    fn test_config_load_nonexistent_creates_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("lifeclock.toml");

        let config = Config::load(Some(config_path.clone()))?;

        assert_eq!(config, Config::default());
        assert!(config_path.exists());
        Ok(())
    }

    #[test]
    fn test_config_load_rejects_garbage() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("broken.toml");
        fs::write(&config_path, "version = \"one\"")?;

        let err = Config::load(Some(config_path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        Ok(())
    }

    #[test]
    fn test_cli_override() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("test.toml");
        Config {
            language: LanguagePreference::En,
            ..Config::default()
        }
        .save(&config_path)?;

        let cli_args = CliArgs::parse_from(["lifeclock", "--lang", "ko", "--fps", "24"]);
        let config = Config::from_cli_and_file(&cli_args, Some(config_path))?;
        assert_eq!(config.language, LanguagePreference::Ko);
        assert_eq!(config.display.fps, 24);
        Ok(())
    }

    #[test]
    fn test_startup_input_precedence() {
        let today = date(2025, 6, 15);
        let mut config = Config::default();

        let none = CliArgs::parse_from(["lifeclock"]);
        let input = config.startup_input(&none, today);
        assert_eq!(input.birth_date, "2025-06-15");
        assert_eq!(input.expectancy, "80");
        assert!(!input.submit);

        config.birth_date = Some(date(1990, 5, 17));
        assert_eq!(config.startup_input(&none, today).birth_date, "1990-05-17");

        let both = CliArgs::parse_from([
            "lifeclock", "--birth-date", "2001-02-03", "--expectancy", "95",
        ]);
        let input = config.startup_input(&both, today);
        assert_eq!(input.birth_date, "2001-02-03");
        assert_eq!(input.expectancy, "95");
        assert!(input.submit);
    }

    #[test]
    fn test_frame_interval_clamps_fps() {
        let mut display = DisplayConfig::default();
        assert_eq!(display.frame_interval(), Duration::from_micros(16_666));
        display.fps = 0;
        assert_eq!(display.frame_interval(), Duration::from_secs(1));
        display.fps = 10_000;
        assert_eq!(display.frame_interval(), Duration::from_micros(4_166));
    }

    #[test]
    fn test_get_default_config_path() -> Result<()> {
        let path = get_default_config_path()?;
        assert!(path.ends_with("lifeclock.toml"));
        Ok(())
    }
}
