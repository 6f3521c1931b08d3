use crate::{FetchError, Weather};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// The seam between the interactive loop and the network.
///
/// One call is one outbound request; any retry policy belongs to the
/// caller. Implementors either return a fully populated [`Weather`] or an
/// error, never anything in between.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch(&self, city: &str, days: u8) -> Result<Weather, FetchError>;
}
