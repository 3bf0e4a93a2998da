#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::Clock;
use crate::utils::error::Result;
use crate::utils::standard::parse_instant;
use crate::utils::validation::NOW;
use chrono::{DateTime, Utc};

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::RangeFileConfig;

/// 將使用者輸入轉成時間點，`now` 透過 clock 取得
pub fn resolve_instant(value: &str, clock: &dyn Clock) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if value.eq_ignore_ascii_case(NOW) {
        let now = clock.now();
        tracing::debug!("Resolved '{}' to {}", value, now);
        return Ok(now);
    }

    parse_instant(value)
}
