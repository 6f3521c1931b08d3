//! The weather aggregate held between menu interactions.
//!
//! A [`Weather`] is populated wholesale from one API response and never
//! mutated afterwards; "refresh" means the provider hands back a brand new
//! instance that replaces the old one.

/// The place the API resolved the query to. A fuzzy query ("londo") may
/// come back with a canonical `name`/`country` different from what the
/// user typed.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
}

/// The conditions snapshot for "now" at the resolved location.
#[derive(Debug, Clone, PartialEq)]
pub struct Current {
    pub temperature_c: f64,
    pub condition: String,
    /// 0–100 expected, not enforced.
    pub humidity_pct: u8,
    pub wind_kph: f64,
    /// Free-text compass string, e.g. "NW".
    pub wind_dir: String,
}

/// One element of the multi-day prediction sequence, covering a single
/// calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date: String,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    pub condition: String,
    pub max_wind_kph: f64,
    pub total_precip_mm: f64,
    pub avg_humidity_pct: f64,
}

/// Current conditions plus the forecast sequence, in the order the API
/// returned it (chronological, one entry per requested day).
#[derive(Debug, Clone, PartialEq)]
pub struct Weather {
    pub location: Location,
    pub current: Current,
    pub forecast: Vec<ForecastDay>,
}
