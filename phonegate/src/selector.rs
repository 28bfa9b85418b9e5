//! Interaction state of the searchable country picker.
//!
//! The picker does not own the selection: choosing an entry hands a
//! [`CountrySelection`] back to the caller, which forwards it to the form.

use iced_core::{Point, Rectangle};
use log::debug;

use crate::country::{CountryDirectory, CountryRecord, CountrySelection};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorPolicy {
    /// Forget the search term whenever the dropdown closes.
    pub clear_search_on_close: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CountrySelector {
    policy: SelectorPolicy,
    is_open: bool,
    search_term: String,
    cursor: Option<Point>,
}

impl CountrySelector {
    pub fn new(policy: SelectorPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Pointer events are only of interest while the dropdown is open.
    ///
    /// Hosts subscribe to the global pointer stream while this is true, so the
    /// subscription is dropped by every path that closes the dropdown.
    pub fn listens_for_pointer(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.cursor = None;
        if self.policy.clear_search_on_close {
            self.search_term.clear();
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Entries whose name contains the search term, ignoring case, in
    /// directory order.
    pub fn filtered<'a>(&self, directory: &'a CountryDirectory) -> Vec<(&'a str, &'a CountryRecord)> {
        let term = self.search_term.to_lowercase();
        directory
            .iter()
            .filter(|(_, record)| record.name.to_lowercase().contains(&term))
            .collect()
    }

    /// Picks the entry keyed by `region_code` and closes the dropdown.
    pub fn choose(
        &mut self,
        directory: &CountryDirectory,
        region_code: &str,
    ) -> Option<CountrySelection> {
        let selection = directory.selection(region_code);
        if selection.is_none() {
            debug!("Country {} is not in the directory", region_code);
        }
        self.close();
        selection
    }

    pub fn cursor_moved(&mut self, position: Point) {
        self.cursor = Some(position);
    }

    /// A pointer went down at `position` while the picker occupied `bounds`.
    ///
    /// Closes the dropdown if the pointer is outside the picker. Unknown bounds
    /// mean the picker is not rendered, which counts as outside. Returns whether
    /// the dropdown was closed.
    pub fn pointer_down(&mut self, position: Point, bounds: Option<Rectangle>) -> bool {
        if !self.is_open {
            return false;
        }
        match bounds {
            Some(bounds) if bounds.contains(position) => false,
            _ => {
                debug!("Pointer down outside of the country picker at {:?}", position);
                self.close();
                true
            }
        }
    }
}
