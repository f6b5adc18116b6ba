use serde::{Deserialize, Serialize};

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Unit system used both for the provider query and for display suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitMode {
    #[default]
    Metric,
    Imperial,
}

impl UnitMode {
    /// Value of the provider's `units` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitMode::Metric => "metric",
            UnitMode::Imperial => "imperial",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            UnitMode::Metric => UnitMode::Imperial,
            UnitMode::Imperial => UnitMode::Metric,
        }
    }

    pub const fn all() -> &'static [UnitMode] {
        &[UnitMode::Metric, UnitMode::Imperial]
    }
}

impl std::fmt::Display for UnitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UnitMode {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "metric" => Ok(UnitMode::Metric),
            "imperial" => Ok(UnitMode::Imperial),
            _ => Err(anyhow::anyhow!(
                "Unknown unit '{value}'. Supported units: metric, imperial."
            )),
        }
    }
}

/// Current conditions for one city, in the unit it was requested with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Canonical city name as returned by the provider.
    pub city: String,
    pub country: String,
    pub description: String,
    pub icon: String,
    pub temperature: f64,
    pub humidity_pct: u8,
    pub wind_speed: f64,
}

impl WeatherRecord {
    pub fn location_label(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    pub fn icon_url(&self) -> String {
        format!("{ICON_BASE_URL}/{}@2x.png", self.icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abuja() -> WeatherRecord {
        WeatherRecord {
            city: "Abuja".into(),
            country: "NG".into(),
            description: "clear sky".into(),
            icon: "01d".into(),
            temperature: 31.4,
            humidity_pct: 40,
            wind_speed: 5.1,
        }
    }

    #[test]
    fn unit_mode_as_str_roundtrip() {
        for unit in UnitMode::all() {
            let parsed = UnitMode::try_from(unit.as_str()).expect("roundtrip should succeed");
            assert_eq!(*unit, parsed);
        }
    }

    #[test]
    fn unit_mode_parse_is_case_insensitive() {
        assert_eq!(UnitMode::try_from("IMPERIAL").unwrap(), UnitMode::Imperial);
    }

    #[test]
    fn unknown_unit_error() {
        let err = UnitMode::try_from("kelvin").unwrap_err();
        assert!(err.to_string().contains("Unknown unit"));
    }

    #[test]
    fn toggled_flips_between_both_modes() {
        assert_eq!(UnitMode::Metric.toggled(), UnitMode::Imperial);
        assert_eq!(UnitMode::Imperial.toggled(), UnitMode::Metric);
        assert_eq!(UnitMode::default(), UnitMode::Metric);
    }

    #[test]
    fn icon_url_and_location_label() {
        let record = abuja();
        assert_eq!(record.icon_url(), "https://openweathermap.org/img/wn/01d@2x.png");
        assert_eq!(record.location_label(), "Abuja, NG");
    }
}
