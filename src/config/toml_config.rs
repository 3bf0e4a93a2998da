use crate::config::resolve_instant;
use crate::domain::interval::Interval;
use crate::domain::ports::Clock;
use crate::domain::range::DateRange;
use crate::utils::error::{DateError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RangeFileConfig {
    pub range: RangeSection,
    pub period: Option<PeriodSection>,
}

/// 範圍的原始字串設定，尚未解析
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSection {
    pub start: Option<String>,
    pub finish: Option<String>,
    pub interval: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodSection {
    pub inclusive: Option<bool>,
}

impl RangeFileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Loading range configuration from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path).map_err(DateError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DateError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RANGE_START})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 是否包含起訖點，預設為 true
    pub fn inclusive(&self) -> bool {
        self.period
            .as_ref()
            .and_then(|period| period.inclusive)
            .unwrap_or(true)
    }

    pub fn to_date_range(&self, clock: &dyn Clock) -> Result<DateRange> {
        self.range.to_date_range(clock)
    }
}

impl Validate for RangeFileConfig {
    fn validate(&self) -> Result<()> {
        self.range.validate()
    }
}

impl RangeSection {
    pub fn to_date_range(&self, clock: &dyn Clock) -> Result<DateRange> {
        let start = self
            .start
            .as_deref()
            .map(|value| resolve_instant(value, clock))
            .transpose()?;
        let finish = self
            .finish
            .as_deref()
            .map(|value| resolve_instant(value, clock))
            .transpose()?;
        let interval = self
            .interval
            .as_deref()
            .map(str::parse::<Interval>)
            .transpose()?;

        DateRange::new(start, finish, interval)
    }
}

impl Validate for RangeSection {
    fn validate(&self) -> Result<()> {
        validation::validate_at_least_one(
            ("range.start", "range.finish"),
            (&self.start, &self.finish),
        )?;

        if let Some(start) = &self.start {
            validation::validate_instant("range.start", start)?;
        }

        if let Some(finish) = &self.finish {
            validation::validate_instant("range.finish", finish)?;
        }

        if let Some(interval) = &self.interval {
            validation::validate_interval("range.interval", interval)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FixedClock;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[range]
start = "2018-01-10"
finish = "2018-01-15"
interval = "P1D"

[period]
inclusive = false
"#;

        let config = RangeFileConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.range.start.as_deref(), Some("2018-01-10"));
        assert_eq!(config.range.interval.as_deref(), Some("P1D"));
        assert!(!config.inclusive());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inclusive_defaults_to_true() {
        let config = RangeFileConfig::from_toml_str("[range]\nstart = \"2018-01-10\"\n").unwrap();
        assert!(config.inclusive());
        assert!(config.range.finish.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DATERANGE_TEST_FINISH", "2018-01-15");

        let toml_content = r#"
[range]
start = "2018-01-10"
finish = "${DATERANGE_TEST_FINISH}"
"#;

        let config = RangeFileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.range.finish.as_deref(), Some("2018-01-15"));

        std::env::remove_var("DATERANGE_TEST_FINISH");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let config =
            RangeFileConfig::from_toml_str("[range]\nstart = \"${DATERANGE_TEST_UNSET_VAR}\"\n")
                .unwrap();
        assert_eq!(
            config.range.start.as_deref(),
            Some("${DATERANGE_TEST_UNSET_VAR}")
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = RangeFileConfig::default();
        assert!(config.validate().is_err());

        config.range.finish = Some("2018-01-15".to_string());
        assert!(config.validate().is_ok());

        config.range.interval = Some("daily".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_to_date_range_resolves_now() {
        let now = Utc.with_ymd_and_hms(2018, 1, 12, 8, 0, 0).unwrap();
        let section = RangeSection {
            start: Some("2018-01-10".to_string()),
            finish: Some("now".to_string()),
            interval: Some("PT1H".to_string()),
        };

        let range = section.to_date_range(&FixedClock(now)).unwrap();
        assert_eq!(range.finish(), Some(now));
        assert_eq!(range.interval(), Some(Interval::hours(1)));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            RangeFileConfig::from_toml_str("[range"),
            Err(DateError::ConfigValidationError { .. })
        ));
    }
}
