//! Display formatting for weather values.
//!
//! All functions are total over [`UnitMode`]; any numeric input produces a string.

use chrono::{DateTime, TimeZone};

use crate::model::{UnitMode, WeatherRecord};

/// Nearest integer as a decimal string, halves rounding up. Never yields `-0`.
fn round_half_up(value: f64) -> String {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    // `-0.0 == 0.0`, so this also normalises negative zero.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.0}")
}

fn temperature_suffix(unit: UnitMode) -> &'static str {
    match unit {
        UnitMode::Metric => "°C",
        UnitMode::Imperial => "°F",
    }
}

fn wind_suffix(unit: UnitMode) -> &'static str {
    match unit {
        UnitMode::Metric => "km/h",
        UnitMode::Imperial => "mph",
    }
}

pub fn format_temperature(value: f64, unit: UnitMode) -> String {
    format!("{}{}", round_half_up(value), temperature_suffix(unit))
}

pub fn format_wind(value: f64, unit: UnitMode) -> String {
    format!("{} {}", round_half_up(value), wind_suffix(unit))
}

pub fn format_humidity(pct: u8) -> String {
    format!("{pct}%")
}

/// Label and pressed state of the unit toggle.
///
/// The label offers the *other* unit; the toggle counts as pressed while imperial is active.
pub fn unit_toggle_label(unit: UnitMode) -> (&'static str, bool) {
    match unit {
        UnitMode::Metric => ("Show °F", false),
        UnitMode::Imperial => ("Show °C", true),
    }
}

/// Short weekday plus 24h time, e.g. `Mon 14:05`.
pub fn format_clock<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    now.format("%a %H:%M").to_string()
}

/// Every string shown for one weather record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherDisplay {
    pub location: String,
    pub condition: String,
    pub temperature: String,
    pub humidity: String,
    pub wind: String,
    pub icon_url: String,
    pub icon_alt: String,
}

impl WeatherDisplay {
    pub fn new(record: &WeatherRecord, unit: UnitMode) -> Self {
        Self {
            location: record.location_label(),
            condition: record.description.clone(),
            temperature: format_temperature(record.temperature, unit),
            humidity: format_humidity(record.humidity_pct),
            wind: format_wind(record.wind_speed, unit),
            icon_url: record.icon_url(),
            icon_alt: record.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn temperature_rounds_and_appends_suffix() {
        assert_eq!(format_temperature(31.4, UnitMode::Metric), "31°C");
        assert_eq!(format_temperature(88.6, UnitMode::Imperial), "89°F");
        assert_eq!(format_temperature(0.0, UnitMode::Metric), "0°C");
    }

    #[test]
    fn temperature_prefix_matches_rounded_value() {
        for unit in UnitMode::all() {
            for tenths in 0..400 {
                let v = f64::from(tenths) / 10.0;
                let s = format_temperature(v, *unit);
                let suffix = if *unit == UnitMode::Metric { "°C" } else { "°F" };
                assert!(s.ends_with(suffix), "{s}");
                let prefix: f64 = s.trim_end_matches(suffix).parse().unwrap();
                assert_eq!(prefix, v.round(), "value {v}");
            }
        }

        let edges = [
            (0.49999999999999994, "0"),
            (2f64.powi(52) + 1.0, "4503599627370497"),
            (1e20, "100000000000000000000"),
        ];
        for (v, expected) in edges {
            assert_eq!(format_temperature(v, UnitMode::Metric), format!("{expected}°C"), "value {v:e}");
            assert_eq!(format_wind(v, UnitMode::Imperial), format!("{expected} mph"), "value {v:e}");
        }
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(format_temperature(2.5, UnitMode::Metric), "3°C");
        assert_eq!(format_temperature(-2.5, UnitMode::Metric), "-2°C");
    }

    #[test]
    fn small_negatives_do_not_print_negative_zero() {
        assert_eq!(format_temperature(-0.4, UnitMode::Metric), "0°C");
        assert_eq!(format_wind(-0.2, UnitMode::Imperial), "0 mph");
        assert_eq!(format_temperature(-0.0, UnitMode::Metric), "0°C");
        assert_eq!(format_temperature(-0.5, UnitMode::Metric), "0°C");
    }

    #[test]
    fn wind_has_space_before_suffix() {
        assert_eq!(format_wind(5.1, UnitMode::Metric), "5 km/h");
        assert_eq!(format_wind(11.5, UnitMode::Imperial), "12 mph");
    }

    #[test]
    fn non_finite_inputs_still_format() {
        assert!(format_temperature(f64::NAN, UnitMode::Metric).ends_with("°C"));
        assert!(format_wind(f64::INFINITY, UnitMode::Imperial).ends_with("mph"));
    }

    #[test]
    fn toggle_label_offers_the_other_unit() {
        assert_eq!(unit_toggle_label(UnitMode::Metric), ("Show °F", false));
        assert_eq!(unit_toggle_label(UnitMode::Imperial), ("Show °C", true));
    }

    #[test]
    fn clock_uses_weekday_and_time() {
        // 2024-01-01 was a Monday.
        let utc = Utc.with_ymd_and_hms(2024, 1, 1, 14, 5, 59).unwrap();
        assert_eq!(format_clock(&utc), "Mon 14:05");

        let lagos = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(format_clock(&utc.with_timezone(&lagos)), "Mon 15:05");
    }

    #[test]
    fn display_bundles_all_fields() {
        let record = WeatherRecord {
            city: "Abuja".into(),
            country: "NG".into(),
            description: "clear sky".into(),
            icon: "01d".into(),
            temperature: 31.4,
            humidity_pct: 40,
            wind_speed: 5.1,
        };

        let display = WeatherDisplay::new(&record, UnitMode::Metric);
        assert_eq!(display.location, "Abuja, NG");
        assert_eq!(display.temperature, "31°C");
        assert_eq!(display.humidity, "40%");
        assert_eq!(display.wind, "5 km/h");
        assert_eq!(display.icon_url, "https://openweathermap.org/img/wn/01d@2x.png");
        assert_eq!(display.icon_alt, "clear sky");
    }
}
