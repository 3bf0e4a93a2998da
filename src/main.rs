use anyhow::Context;
use clap::Parser;
use daterange::config::cli::Command;
use daterange::core::report::{CompareReport, DateReport, PeriodReport};
use daterange::utils::error::{DateError, ErrorCategory};
use daterange::utils::{logger, validation::Validate};
use daterange::{check_standard, config::resolve_instant, CliConfig, Clock, SystemClock};
use serde::Serialize;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let clock = SystemClock;
    match run(&config, &clock) {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => {}
        Err(Failure::Date(e)) => fail(&e),
        Err(Failure::Output(e)) => return Err(e),
    }

    Ok(())
}

enum Failure {
    Date(DateError),
    Output(anyhow::Error),
}

impl From<DateError> for Failure {
    fn from(e: DateError) -> Self {
        Failure::Date(e)
    }
}

fn render<T: Serialize>(report: &T, json: bool, text: impl FnOnce(&T) -> String) -> Result<String, Failure> {
    if json {
        serde_json::to_string_pretty(report)
            .context("Failed to serialize report")
            .map_err(Failure::Output)
    } else {
        Ok(text(report))
    }
}

fn run(config: &CliConfig, clock: &dyn Clock) -> Result<Option<String>, Failure> {
    match &config.command {
        Command::Period {
            range,
            exclusive,
            json,
        } => {
            let file = range.load()?;
            let inclusive = !exclusive && file.inclusive();
            let range = file.to_date_range(clock)?;
            let report = PeriodReport::build(&range, inclusive)?;
            render(&report, *json, PeriodReport::render_text).map(Some)
        }
        Command::CheckDate {
            range,
            date,
            exclusive,
            json,
        } => {
            let range = range.load()?.to_date_range(clock)?;
            let date = resolve_instant(date, clock)?;
            let report = DateReport::build(&range, &date, !exclusive);
            render(&report, *json, DateReport::render_text).map(Some)
        }
        Command::Compare {
            range,
            other,
            exclusive,
            json,
        } => {
            let reference = range.load()?.to_date_range(clock)?;
            let other = other.to_date_range(clock)?;
            let report = CompareReport::build(&reference, &other, !exclusive);
            render(&report, *json, CompareReport::render_text).map(Some)
        }
        Command::Validate { standard, text } => {
            let matched = check_standard(standard, text)?;
            tracing::info!(
                "{} '{}' against {}",
                if matched { "✅ Matched" } else { "❌ No match for" },
                text,
                standard
            );
            Ok(Some(matched.to_string()))
        }
    }
}

fn fail(e: &DateError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤類別決定退出碼
    let exit_code = match e.category() {
        ErrorCategory::Input | ErrorCategory::Configuration => 1,
        ErrorCategory::Range => 2,
        ErrorCategory::System => 3,
    };
    std::process::exit(exit_code);
}
