use crate::{UnitMode, WeatherError, WeatherRecord};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// Source of current conditions for a city.
///
/// One call is one attempt: implementations never retry.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch_current(&self, city: &str, unit: UnitMode) -> Result<WeatherRecord, WeatherError>;
}

