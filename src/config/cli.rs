use crate::config::toml_config::{RangeFileConfig, RangeSection};
use crate::domain::ports::Clock;
use crate::domain::range::DateRange;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "daterange")]
#[command(about = "Compare date ranges and step through them")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Write logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every instant of the range stepped by its interval
    Period {
        #[command(flatten)]
        range: RangeArgs,

        /// Drop the start and finish from the listing
        #[arg(long)]
        exclusive: bool,

        #[arg(long)]
        json: bool,
    },

    /// Check a single date against the range
    CheckDate {
        #[command(flatten)]
        range: RangeArgs,

        date: String,

        #[arg(long)]
        exclusive: bool,

        #[arg(long)]
        json: bool,
    },

    /// Check another range against the range
    Compare {
        #[command(flatten)]
        range: RangeArgs,

        #[command(flatten)]
        other: OtherRangeArgs,

        #[arg(long)]
        exclusive: bool,

        #[arg(long)]
        json: bool,
    },

    /// Check text against a named date standard
    Validate { standard: String, text: String },
}

/// The reference range, given inline or through a TOML file.
#[derive(Debug, Clone, Args)]
pub struct RangeArgs {
    #[arg(long)]
    pub start: Option<String>,

    #[arg(long)]
    pub finish: Option<String>,

    /// ISO-8601 duration, e.g. P1D
    #[arg(long)]
    pub interval: Option<String>,

    /// Read the range from a TOML file instead
    #[arg(short, long, conflicts_with_all = ["start", "finish", "interval"])]
    pub config: Option<PathBuf>,
}

impl RangeArgs {
    pub fn load(&self) -> Result<RangeFileConfig> {
        let config = match &self.config {
            Some(path) => RangeFileConfig::from_file(path)?,
            None => RangeFileConfig {
                range: RangeSection {
                    start: self.start.clone(),
                    finish: self.finish.clone(),
                    interval: self.interval.clone(),
                },
                period: None,
            },
        };

        config.validate()?;
        Ok(config)
    }
}

/// The range compared against the reference range.
#[derive(Debug, Clone, Args)]
pub struct OtherRangeArgs {
    #[arg(long)]
    pub other_start: Option<String>,

    #[arg(long)]
    pub other_finish: Option<String>,
}

impl OtherRangeArgs {
    /// 建立 compare 指令中的另一個範圍
    pub fn to_date_range(&self, clock: &dyn Clock) -> Result<DateRange> {
        let section = RangeSection {
            start: self.other_start.clone(),
            finish: self.other_finish.clone(),
            interval: None,
        };
        section.validate()?;
        section.to_date_range(clock)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Validate { standard, .. } => {
                validation::validate_non_empty_string("standard", standard)
            }
            Command::CheckDate { date, .. } => validation::validate_instant("date", date),
            _ => Ok(()),
        }
    }
}
