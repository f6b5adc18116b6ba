//! Collaborators the controller writes to and reads from.
//!
//! Front ends implement [`View`] and [`InputSource`] and translate their own
//! widgets or key presses into [`UiEvent`]s.

use crate::format::WeatherDisplay;

/// Rendering surface.
///
/// Methods take `&self` so a loading indicator can stay borrowed across the
/// network call; implementations use interior mutability if they need state.
pub trait View {
    fn set_loading(&self, visible: bool);
    fn show_error(&self, message: &str);
    fn clear_error(&self);
    fn render_weather(&self, display: &WeatherDisplay);
    /// Most-recent-first; each entry is selectable and removable.
    fn render_recent(&self, cities: &[String]);
    fn set_unit_toggle(&self, label: &str, pressed: bool);
    fn show_clock(&self, text: &str);
}

/// Text currently typed into the city search field.
pub trait InputSource {
    fn current_text(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Search whatever the input field holds.
    Submit,
    SelectRecent(String),
    RemoveRecent(String),
    ToggleUnit,
    /// Periodic clock refresh.
    Tick,
}

/// Hides the loading indicator when dropped.
pub(crate) struct LoadingGuard<'a, V: View + ?Sized> {
    view: &'a V,
}

impl<'a, V: View + ?Sized> LoadingGuard<'a, V> {
    pub(crate) fn show(view: &'a V) -> Self {
        view.set_loading(true);
        Self { view }
    }
}

impl<V: View + ?Sized> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_loading(false);
    }
}
