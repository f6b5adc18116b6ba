/// Shown for transport failures and any provider-side problem.
pub const UNAVAILABLE_MESSAGE: &str = "Unable to fetch weather right now.";

/// Shown when the provider answers 404 for the queried city.
pub const CITY_NOT_FOUND_MESSAGE: &str = "City not found. Try another search.";

/// Failure of a single current-conditions lookup.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Failed to reach weather provider: {0}")]
    Network(#[source] reqwest::Error),

    #[error("City '{city}' not found")]
    CityNotFound { city: String },

    #[error("Weather provider error{}: {detail}", status_suffix(.status))]
    Provider { status: Option<u16>, detail: String },
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (status {s})")).unwrap_or_default()
}

impl WeatherError {
    /// Non-success HTTP status other than 404.
    pub fn bad_status(status: u16, body: &str) -> Self {
        WeatherError::Provider {
            status: Some(status),
            detail: truncate_body(body),
        }
    }

    /// Successful status with a body that does not describe current conditions.
    pub fn malformed(detail: impl Into<String>) -> Self {
        WeatherError::Provider {
            status: None,
            detail: detail.into(),
        }
    }

    /// Text surfaced to the user; internal details stay in the `Display` form.
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::CityNotFound { .. } => CITY_NOT_FOUND_MESSAGE,
            WeatherError::Network(_) | WeatherError::Provider { .. } => UNAVAILABLE_MESSAGE,
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
