//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration handling (API key lookup)
//! - The fetch error taxonomy
//! - The shared weather domain model
//! - The weatherapi.com forecast provider
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::FetchError;
pub use model::{Current, ForecastDay, Location, Weather};
pub use provider::{ForecastProvider, weatherapi::WeatherApiProvider};
