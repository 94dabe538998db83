pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_REPEAT: usize = 1;
pub const MAX_REPEAT: usize = 1000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, clap::Parser)]
#[command(name = "hello-cicd")]
#[command(about = "Prints the CI/CD smoke-test greeting")]
pub struct CliConfig {
    /// Output format [default: text]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of times to print the greeting [default: 1]
    #[arg(long)]
    pub repeat: Option<usize>,

    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges the optional TOML file under the command-line flags.
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                validation::validate_path("config", path)?;
                let file = toml_config::TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let output = file.as_ref().and_then(|f| f.output.as_ref());
        let logging = file.as_ref().and_then(|f| f.logging.as_ref());

        let settings = Settings {
            format: self
                .format
                .or_else(|| output.and_then(|o| o.format))
                .unwrap_or_default(),
            repeat: self
                .repeat
                .or_else(|| output.and_then(|o| o.repeat))
                .unwrap_or(DEFAULT_REPEAT),
            log_level: logging.and_then(|l| l.level.clone()),
            json_logs: logging.and_then(|l| l.json).unwrap_or(false),
            verbose: self.verbose,
        };
        settings.validate()?;
        Ok(settings)
    }
}

/// Effective settings after merging flags and file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub format: OutputFormat,
    pub repeat: usize,
    pub log_level: Option<String>,
    pub json_logs: bool,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            repeat: DEFAULT_REPEAT,
            log_level: None,
            json_logs: false,
            verbose: false,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_range("repeat", self.repeat, 1, MAX_REPEAT)?;
        if let Some(level) = &self.log_level {
            validation::validate_one_of("logging.level", level, &toml_config::LOG_LEVELS)?;
        }
        Ok(())
    }
}
