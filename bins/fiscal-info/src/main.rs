//! Fiscal calendar report
//!
//! Prints the fiscal quarter, fiscal year bounds and Ethiopian year summary
//! as JSON. Logs go to stderr.
//!
//! Usage: cargo run --bin fiscal-info [YYYY-MM-DD | YYYY-MM-DDTHH:MM:SS]

mod report;

use anyhow::{Context, bail};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use fleet_core::{FiscalCalendarService, LabelStyle};
use fleet_shared::{AppConfig, LoggingConfig};

use report::{FiscalReport, build_clock, parse_as_of};

fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            config
                .json
                .then(|| fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with((!config.json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging);

    let as_of = match std::env::args().nth(1) {
        Some(arg) => match parse_as_of(&arg) {
            Some(at) => Some(at),
            None => bail!("unrecognised date {arg:?}, expected YYYY-MM-DD"),
        },
        None => None,
    };

    let style: LabelStyle = config.calendar.label_style.parse()?;
    let clock = build_clock(&config.calendar, as_of)?;
    let service = FiscalCalendarService::new(clock);

    let report = FiscalReport::build(&service, style)?;
    info!(quarter = %report.current_quarter, as_of = %report.as_of, "fiscal report ready");

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
