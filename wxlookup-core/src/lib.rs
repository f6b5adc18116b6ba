//! Core library for the `wxlookup` weather widget.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather current-conditions client and its error taxonomy
//! - Unit formatting and the recent-search list
//! - The search controller and the surfaces it renders to
//!
//! It is used by `wxlookup-cli`, but any front end that implements
//! [`surface::View`] and [`surface::InputSource`] can drive it.

pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod model;
pub mod provider;
pub mod recent;
pub mod surface;

pub use config::Config;
pub use controller::{SearchController, SearchOutcome, SearchState};
pub use error::WeatherError;
pub use format::WeatherDisplay;
pub use model::{UnitMode, WeatherRecord};
pub use provider::{OpenWeatherClient, WeatherSource};
pub use recent::RecentList;
pub use surface::{InputSource, UiEvent, View};
