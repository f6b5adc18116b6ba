//! Orchestration of one search: input resolution, fetch, render, recent-list upkeep.

use chrono::{DateTime, Local};

use crate::{
    RecentList, UnitMode, WeatherError, WeatherRecord,
    format::{WeatherDisplay, format_clock, unit_toggle_label},
    provider::WeatherSource,
    surface::{InputSource, LoadingGuard, UiEvent, View},
};

/// Unit and last displayed city; lives as long as the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub unit: UnitMode,
    /// Canonical name of the last successfully displayed city, empty before the first success.
    pub last_city: String,
}

/// Result of one [`SearchController::search`] call.
#[derive(Debug)]
pub enum SearchOutcome {
    /// Resolved city was blank; nothing was signalled.
    Skipped,
    Found(WeatherRecord),
    Failed(WeatherError),
}

/// Drives searches against a [`WeatherSource`] and writes results to a [`View`].
///
/// Overlapping searches are not deduplicated or cancelled; callers that can
/// issue a second search before the first resolves see both complete in order.
#[derive(Debug)]
pub struct SearchController<S, V, I> {
    source: S,
    view: V,
    input: I,
    state: SearchState,
    recent: RecentList,
}

impl<S, V, I> SearchController<S, V, I>
where
    S: WeatherSource,
    V: View,
    I: InputSource,
{
    pub fn new(source: S, view: V, input: I, unit: UnitMode) -> Self {
        Self {
            source,
            view,
            input,
            state: SearchState { unit, last_city: String::new() },
            recent: RecentList::new(),
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn recent(&self) -> &RecentList {
        &self.recent
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Initial render followed by one search for `default_city`.
    pub async fn start(&mut self, default_city: &str) -> SearchOutcome {
        self.view.render_recent(&self.recent.snapshot());
        self.render_unit_toggle();
        self.tick_at(&Local::now());
        self.search(Some(default_city)).await
    }

    pub async fn handle(&mut self, event: UiEvent) -> Option<SearchOutcome> {
        match event {
            UiEvent::Submit => Some(self.search(None).await),
            UiEvent::SelectRecent(city) => Some(self.search(Some(&city)).await),
            UiEvent::RemoveRecent(city) => {
                self.remove_recent(&city);
                None
            }
            UiEvent::ToggleUnit => self.toggle_unit().await,
            UiEvent::Tick => {
                self.tick_at(&Local::now());
                None
            }
        }
    }

    fn resolve_city(&self, explicit: Option<&str>) -> String {
        match explicit.map(str::trim) {
            Some(city) if !city.is_empty() => city.to_string(),
            _ => self.input.current_text().trim().to_string(),
        }
    }

    /// Search `city`, or the input field's text when `city` is absent or blank.
    pub async fn search(&mut self, city: Option<&str>) -> SearchOutcome {
        let city = self.resolve_city(city);
        if city.is_empty() {
            return SearchOutcome::Skipped;
        }

        self.view.clear_error();
        let _loading = LoadingGuard::show(&self.view);

        match self.source.fetch_current(&city, self.state.unit).await {
            Ok(record) => {
                self.view
                    .render_weather(&WeatherDisplay::new(&record, self.state.unit));
                self.recent.add(&record.city);
                self.view.render_recent(&self.recent.snapshot());
                self.state.last_city = record.city.clone();
                tracing::debug!(query = %city, city = %record.city, "search succeeded");
                SearchOutcome::Found(record)
            }
            Err(err) => {
                tracing::debug!(query = %city, error = %err, "search failed");
                self.view.show_error(err.user_message());
                SearchOutcome::Failed(err)
            }
        }
    }

    /// Flip the unit and re-fetch the last displayed city, if any.
    pub async fn toggle_unit(&mut self) -> Option<SearchOutcome> {
        self.state.unit = self.state.unit.toggled();
        self.render_unit_toggle();

        if self.state.last_city.is_empty() {
            return None;
        }

        let city = self.state.last_city.clone();
        Some(self.search(Some(&city)).await)
    }

    pub fn remove_recent(&mut self, city: &str) {
        self.recent.remove(city);
        self.view.render_recent(&self.recent.snapshot());
    }

    pub fn tick_at(&self, now: &DateTime<Local>) {
        self.view.show_clock(&format_clock(now));
    }

    fn render_unit_toggle(&self) {
        let (label, pressed) = unit_toggle_label(self.state.unit);
        self.view.set_unit_toggle(label, pressed);
    }
}
