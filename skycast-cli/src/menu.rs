//! The interactive menu loop.
//!
//! Two states: acquire an initial city (retrying fetches until one
//! succeeds), then dispatch menu choices against the held model until the
//! user exits. A failed city change keeps the previous model; only initial
//! acquisition retries.

use anyhow::Result;
use skycast_core::{ForecastProvider, Weather};
use std::io::{self, BufRead, Write};

use crate::render;

/// One menu interaction, parsed from the raw input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    ShowCurrent,
    ShowForecast,
    ChangeCity,
    Exit,
    Invalid(String),
}

impl From<&str> for MenuChoice {
    fn from(line: &str) -> Self {
        match line {
            "1" => MenuChoice::ShowCurrent,
            "2" => MenuChoice::ShowForecast,
            "3" => MenuChoice::ChangeCity,
            "4" => MenuChoice::Exit,
            other => MenuChoice::Invalid(other.to_string()),
        }
    }
}

/// Read one line, trimmed of surrounding whitespace. End of input is an
/// error: the loop cannot make progress without a user on the other end.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_string())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<String> {
    write!(out, "{text}")?;
    out.flush()?;
    read_line(input)
}

fn show_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== Weather Information System ===")?;
    writeln!(out, "1. Check current weather")?;
    writeln!(out, "2. View weather forecast")?;
    writeln!(out, "3. Change city")?;
    writeln!(out, "4. Exit")?;
    write!(out, "Please enter your choice (1-4): ")?;
    out.flush()
}

/// Drive one interactive session over `input`/`out`, fetching through
/// `provider`. Returns once the user picks "Exit".
pub async fn run<P, R, W>(provider: &P, days: u8, input: &mut R, out: &mut W) -> Result<()>
where
    P: ForecastProvider + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut city = prompt(input, out, "Enter city name: ")?;

    // Initial acquisition: retry until a fetch succeeds, without cap.
    let mut weather: Weather = loop {
        match provider.fetch(&city, days).await {
            Ok(weather) => break weather,
            Err(err) => {
                eprintln!("Error getting forecast: {err}");
                city = prompt(input, out, "Please enter a valid city name: ")?;
            }
        }
    };

    loop {
        show_menu(out)?;
        let line = read_line(input)?;

        match MenuChoice::from(line.as_str()) {
            MenuChoice::ShowCurrent => write!(out, "{}", render::current_report(&weather))?,
            MenuChoice::ShowForecast => write!(out, "{}", render::forecast_report(&weather))?,
            MenuChoice::ChangeCity => {
                let city = prompt(input, out, "Enter new city name: ")?;
                match provider.fetch(&city, days).await {
                    Ok(new_weather) => {
                        weather = new_weather;
                        writeln!(out, "Changed to {city} successfully!")?;
                    }
                    // Fail soft: the previously held model stays.
                    Err(err) => eprintln!("Error getting forecast: {err}"),
                }
            }
            MenuChoice::Exit => {
                writeln!(out, "Thank you for using Weather Information System. Goodbye!")?;
                return Ok(());
            }
            MenuChoice::Invalid(_) => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use skycast_core::{Current, FetchError, ForecastDay, Location};
    use std::collections::VecDeque;
    use std::io::Cursor;
    use std::sync::Mutex;

    /// Returns pre-scripted fetch outcomes in order; panics if the loop
    /// fetches more often than the test scripted.
    #[derive(Debug)]
    struct ScriptedProvider {
        outcomes: Mutex<VecDeque<Result<Weather, FetchError>>>,
    }

    impl ScriptedProvider {
        fn new(outcomes: Vec<Result<Weather, FetchError>>) -> Self {
            Self { outcomes: Mutex::new(outcomes.into()) }
        }
    }

    #[async_trait]
    impl ForecastProvider for ScriptedProvider {
        async fn fetch(&self, _city: &str, _days: u8) -> Result<Weather, FetchError> {
            self.outcomes
                .lock()
                .expect("outcome queue poisoned")
                .pop_front()
                .expect("fetch called more often than scripted")
        }
    }

    fn city_weather(name: &str, country: &str, temperature_c: f64) -> Weather {
        Weather {
            location: Location {
                name: name.to_string(),
                region: String::new(),
                country: country.to_string(),
            },
            current: Current {
                temperature_c,
                condition: "Cloudy".to_string(),
                humidity_pct: 80,
                wind_kph: 12.3,
                wind_dir: "SW".to_string(),
            },
            forecast: vec![ForecastDay {
                date: "2026-08-06".to_string(),
                max_temp_c: 21.0,
                min_temp_c: 12.4,
                condition: "Sunny".to_string(),
                max_wind_kph: 25.6,
                total_precip_mm: 0.0,
                avg_humidity_pct: 71.0,
            }],
        }
    }

    async fn drive(provider: &ScriptedProvider, script: &str) -> String {
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        run(provider, 3, &mut input, &mut out).await.expect("session must end via Exit");
        String::from_utf8(out).expect("session output must be utf-8")
    }

    #[test]
    fn raw_lines_parse_into_the_closed_choice_set() {
        assert_eq!(MenuChoice::from("1"), MenuChoice::ShowCurrent);
        assert_eq!(MenuChoice::from("2"), MenuChoice::ShowForecast);
        assert_eq!(MenuChoice::from("3"), MenuChoice::ChangeCity);
        assert_eq!(MenuChoice::from("4"), MenuChoice::Exit);
        assert_eq!(MenuChoice::from("5"), MenuChoice::Invalid("5".to_string()));
        assert_eq!(MenuChoice::from(""), MenuChoice::Invalid(String::new()));
    }

    #[test]
    fn read_line_trims_and_errors_on_eof() {
        let mut input = Cursor::new("  London  \n");
        assert_eq!(read_line(&mut input).expect("line must read"), "London");

        let err = read_line(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[tokio::test]
    async fn initial_acquisition_retries_until_a_fetch_succeeds() {
        let provider = ScriptedProvider::new(vec![
            Err(FetchError::Status(400)),
            Err(FetchError::Status(400)),
            Ok(city_weather("London", "UK", 15.5)),
        ]);

        let out = drive(&provider, "atlantis\nnarnia\nLondon\n4\n").await;

        assert_eq!(out.matches("Please enter a valid city name: ").count(), 2);
        assert!(out.contains("=== Weather Information System ==="));
        assert!(out.contains("Thank you for using Weather Information System. Goodbye!"));
    }

    #[tokio::test]
    async fn choice_one_prints_the_current_weather_block() {
        let provider = ScriptedProvider::new(vec![Ok(city_weather("London", "UK", 15.5))]);

        let out = drive(&provider, "London\n1\n4\n").await;

        assert!(out.contains("=== Current Weather in London, UK ==="));
        assert!(out.contains("Temperature: 15.5°C"));
        assert!(out.contains("Condition: Cloudy"));
        assert!(out.contains("Humidity: 80%"));
        assert!(out.contains("Wind: 12.3 km/h from SW"));
    }

    #[tokio::test]
    async fn choice_two_prints_the_forecast_block() {
        let provider = ScriptedProvider::new(vec![Ok(city_weather("London", "UK", 15.5))]);

        let out = drive(&provider, "London\n2\n4\n").await;

        assert!(out.contains("=== Weather Forecast for London ==="));
        assert!(out.contains("Date: 2026-08-06"));
        assert!(out.contains("  Average Humidity: 71.0%"));
    }

    #[tokio::test]
    async fn failed_change_city_keeps_the_previous_model() {
        let provider = ScriptedProvider::new(vec![
            Ok(city_weather("London", "UK", 15.5)),
            Err(FetchError::Status(400)),
        ]);

        let out = drive(&provider, "London\n1\n3\nNowheresville\n1\n4\n").await;

        // The current-weather block must be byte-identical before and after
        // the failed change.
        assert_eq!(out.matches("=== Current Weather in London, UK ===").count(), 2);
        assert_eq!(out.matches("Temperature: 15.5°C").count(), 2);
        assert!(!out.contains("successfully"));
    }

    #[tokio::test]
    async fn successful_change_city_replaces_the_model() {
        let provider = ScriptedProvider::new(vec![
            Ok(city_weather("London", "UK", 15.5)),
            Ok(city_weather("Paris", "France", 19.0)),
        ]);

        let out = drive(&provider, "London\n3\nParis\n1\n4\n").await;

        assert!(out.contains("Changed to Paris successfully!"));
        assert!(out.contains("=== Current Weather in Paris, France ==="));
        assert!(out.contains("Temperature: 19.0°C"));
    }

    #[tokio::test]
    async fn invalid_choice_redisplays_the_menu_and_keeps_the_model() {
        let provider = ScriptedProvider::new(vec![Ok(city_weather("London", "UK", 15.5))]);

        let out = drive(&provider, "London\n5\n1\n4\n").await;

        assert!(out.contains("Invalid choice. Please try again."));
        // Menu shown for "5", again for "1", again for "4".
        assert_eq!(out.matches("=== Weather Information System ===").count(), 3);
        assert!(out.contains("=== Current Weather in London, UK ==="));
    }
}
