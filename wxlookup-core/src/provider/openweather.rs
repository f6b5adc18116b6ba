use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{UnitMode, WeatherError, WeatherRecord};

use super::WeatherSource;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Current-conditions client for the OpenWeather 2.5 API.
#[derive(Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl std::fmt::Debug for OpenWeatherClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/weather?q=..&units=..&appid=..` with the trimmed city percent-encoded.
    pub fn current_url(&self, city: &str, unit: UnitMode) -> String {
        format!(
            "{}/weather?q={}&units={}&appid={}",
            self.base_url,
            urlencoding::encode(city.trim()),
            unit.as_str(),
            urlencoding::encode(&self.api_key),
        )
    }
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

impl OwCurrentResponse {
    /// The first `weather` entry is authoritative.
    fn into_record(self) -> Result<WeatherRecord, WeatherError> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::malformed("OpenWeather response contained no weather entry"))?;

        Ok(WeatherRecord {
            city: self.name,
            country: self.sys.country,
            description: condition.description,
            icon: condition.icon,
            temperature: self.main.temp,
            humidity_pct: self.main.humidity,
            wind_speed: self.wind.speed,
        })
    }
}

/// Map a provider status and body onto a record or the error taxonomy.
fn parse_current(city: &str, status: StatusCode, body: &str) -> Result<WeatherRecord, WeatherError> {
    if status == StatusCode::NOT_FOUND {
        return Err(WeatherError::CityNotFound { city: city.to_string() });
    }

    if !status.is_success() {
        return Err(WeatherError::bad_status(status.as_u16(), body));
    }

    let parsed: OwCurrentResponse = serde_json::from_str(body)
        .map_err(|e| WeatherError::malformed(format!("Failed to parse OpenWeather current JSON: {e}")))?;

    parsed.into_record()
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn fetch_current(&self, city: &str, unit: UnitMode) -> Result<WeatherRecord, WeatherError> {
        let city = city.trim();
        tracing::debug!(city, unit = unit.as_str(), "requesting current conditions");

        let res = self
            .http
            .get(self.current_url(city, unit))
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.without_url()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| WeatherError::Network(e.without_url()))?;

        tracing::debug!(city, status = status.as_u16(), "OpenWeather responded");

        parse_current(city, status, &body)
    }
}
