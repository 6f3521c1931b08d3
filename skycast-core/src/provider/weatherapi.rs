use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    error::FetchError,
    model::{Current, ForecastDay, Location, Weather},
};

use super::ForecastProvider;

const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com";

/// Client for the weatherapi.com forecast endpoint.
///
/// Sole owner of network and JSON-decoding logic: one GET per [`fetch`]
/// call, no internal retries, no timeout (matching the upstream client
/// defaults).
///
/// [`fetch`]: ForecastProvider::fetch
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Same client against a different host. Tests point this at a local
    /// mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }
}

#[async_trait]
impl ForecastProvider for WeatherApiProvider {
    async fn fetch(&self, city: &str, days: u8) -> Result<Weather, FetchError> {
        let url = format!("{}/v1/forecast.json", self.base_url);
        let days = days.to_string();

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", city), ("days", days.as_str())])
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = res.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = res.text().await.map_err(FetchError::BodyRead)?;
        let parsed: WaForecastResponse = serde_json::from_str(&body)?;

        Ok(parsed.into())
    }
}

// Wire structs mirroring the subset of the weatherapi.com schema we consume.
// Unknown fields are ignored; a missing field takes its type's zero value,
// so the decode only fails on structurally invalid JSON.

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WaLocation {
    name: String,
    region: String,
    country: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WaCurrent {
    temp_c: f64,
    condition: WaCondition,
    humidity: u8,
    wind_kph: f64,
    wind_dir: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WaDay {
    maxtemp_c: f64,
    mintemp_c: f64,
    condition: WaCondition,
    maxwind_kph: f64,
    totalprecip_mm: f64,
    avghumidity: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WaForecastDay {
    date: String,
    day: WaDay,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WaForecast {
    forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WaForecastResponse {
    location: WaLocation,
    current: WaCurrent,
    forecast: WaForecast,
}

impl From<WaForecastResponse> for Weather {
    fn from(raw: WaForecastResponse) -> Self {
        Weather {
            location: Location {
                name: raw.location.name,
                region: raw.location.region,
                country: raw.location.country,
            },
            current: Current {
                temperature_c: raw.current.temp_c,
                condition: raw.current.condition.text,
                humidity_pct: raw.current.humidity,
                wind_kph: raw.current.wind_kph,
                wind_dir: raw.current.wind_dir,
            },
            forecast: raw
                .forecast
                .forecastday
                .into_iter()
                .map(|entry| ForecastDay {
                    date: entry.date,
                    max_temp_c: entry.day.maxtemp_c,
                    min_temp_c: entry.day.mintemp_c,
                    condition: entry.day.condition.text,
                    max_wind_kph: entry.day.maxwind_kph,
                    total_precip_mm: entry.day.totalprecip_mm,
                    avg_humidity_pct: entry.day.avghumidity,
                })
                .collect(),
        }
    }
}
