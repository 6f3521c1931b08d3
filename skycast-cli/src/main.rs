//! Binary crate for the `skycast` command-line tool.
//!
//! This crate focuses on:
//! - The interactive menu loop
//! - Human-friendly output formatting
//! - Wiring startup configuration into the forecast provider

use skycast_core::{Config, WeatherApiProvider};
use std::io;

mod menu;
mod render;

/// The menu always asks the API for a 3-day forecast.
const FORECAST_DAYS: u8 = 3;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = WeatherApiProvider::new(config.api_key);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    menu::run(&provider, FORECAST_DAYS, &mut input, &mut out).await
}
