pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::RangeFileConfig;
pub use domain::interval::Interval;
pub use domain::period::Period;
pub use domain::ports::{Clock, FixedClock, SystemClock};
pub use domain::range::DateRange;
pub use utils::error::{DateError, Result};
pub use utils::standard::{check_standard, parse_instant, DateStandard};
