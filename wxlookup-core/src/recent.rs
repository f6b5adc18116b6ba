/// Maximum number of cities kept in the recent list.
pub const RECENT_CAPACITY: usize = 4;

/// Bounded most-recently-used list of city names.
///
/// Entries compare case-insensitively; re-adding a city moves it to the front
/// with the new casing instead of duplicating it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentList {
    entries: Vec<String>,
}

fn same_city(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl RecentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, city: &str) {
        let trimmed = city.trim();
        if trimmed.is_empty() {
            return;
        }

        self.entries.retain(|c| !same_city(c, trimmed));
        self.entries.insert(0, trimmed.to_string());
        self.entries.truncate(RECENT_CAPACITY);
    }

    pub fn remove(&mut self, city: &str) {
        self.entries.retain(|c| !same_city(c, city));
    }

    /// Owned copy, most-recent-first.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.clone()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
