//! Terminal implementations of the rendering and input surfaces.

use std::cell::{Cell, RefCell};
use std::io::Write;

use wxlookup_core::{InputSource, View, WeatherDisplay};

// Save cursor, return to column 0 / restore cursor.
const SAVE_CURSOR: &str = "\x1b7\r";
const RESTORE_CURSOR: &str = "\x1b8";

fn prompt_text(clock: &str) -> String {
    format!("wxlookup [{clock}]> ")
}

/// Line-oriented renderer. Write failures are ignored, like `println!` minus the panic.
pub struct TerminalView<W: Write> {
    out: RefCell<W>,
    clock: RefCell<String>,
    /// Cursor sits after the prompt, waiting for input.
    at_prompt: Cell<bool>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            clock: RefCell::new(String::new()),
            at_prompt: Cell::new(false),
        }
    }

    /// Print the input prompt; later clock changes redraw it in place.
    pub fn prompt(&self) {
        let mut out = self.out.borrow_mut();
        let _ = write!(out, "{}", prompt_text(&self.clock.borrow()));
        let _ = out.flush();
        self.at_prompt.set(true);
    }

    /// The user submitted a line; the cursor is no longer on the prompt row.
    pub fn leave_prompt(&self) {
        self.at_prompt.set(false);
    }

    fn line(&self, text: &str) {
        self.at_prompt.set(false);
        let mut out = self.out.borrow_mut();
        let _ = writeln!(out, "{text}");
        let _ = out.flush();
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl TerminalView<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> View for TerminalView<W> {
    fn set_loading(&self, visible: bool) {
        if visible {
            self.line("Loading...");
        }
    }

    fn show_error(&self, message: &str) {
        self.line(&format!("Error: {message}"));
    }

    // Errors scroll away; nothing to erase.
    fn clear_error(&self) {}

    fn render_weather(&self, display: &WeatherDisplay) {
        let clock = self.clock.borrow().clone();
        let header = if clock.is_empty() {
            display.location.clone()
        } else {
            format!("{}  ({clock})", display.location)
        };

        self.line(&header);
        self.line(&format!("  {}", display.condition));
        self.line(&format!("  {}", display.temperature));
        self.line(&format!("  Humidity: {}", display.humidity));
        self.line(&format!("  Wind: {}", display.wind));
        self.line(&format!("  Icon: {}", display.icon_url));
    }

    fn render_recent(&self, cities: &[String]) {
        if cities.is_empty() {
            self.line("Recent: (none)");
            return;
        }

        let entries = cities
            .iter()
            .enumerate()
            .map(|(i, city)| format!("[{}] {city}", i + 1))
            .collect::<Vec<_>>()
            .join("  ");
        self.line(&format!("Recent: {entries}"));
    }

    fn set_unit_toggle(&self, label: &str, pressed: bool) {
        let active = if pressed { "imperial" } else { "metric" };
        self.line(&format!("Units: {active}  (:u to {label})"));
    }

    fn show_clock(&self, text: &str) {
        if *self.clock.borrow() == text {
            return;
        }
        *self.clock.borrow_mut() = text.to_string();

        // Prompt width is fixed, so overwriting it leaves typed input intact.
        if self.at_prompt.get() {
            let mut out = self.out.borrow_mut();
            let _ = write!(out, "{SAVE_CURSOR}{}{RESTORE_CURSOR}", prompt_text(text));
            let _ = out.flush();
        }
    }
}

/// Last line typed at the prompt.
#[derive(Debug, Default)]
pub struct LineInput {
    text: String,
}

impl LineInput {
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

impl InputSource for LineInput {
    fn current_text(&self) -> String {
        self.text.clone()
    }
}
