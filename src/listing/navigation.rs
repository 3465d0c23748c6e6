//! Moving the selection.
//!
//! All movements are no-ops while nothing matches the filter. When there
//! are entries but no selection, the first movement in either direction
//! lands on the first entry.

use super::model::Listing;
use super::provider::Provider;

impl<P: Provider> Listing<P> {
    /// Moves the selection up one entry. Past the top it wraps to the last
    /// entry when `cycle` is set and stays put otherwise.
    pub fn up(&mut self, cycle: bool) {
        let n = self.provider.len();
        if n == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(0) if cycle => n - 1,
            Some(0) => 0,
            Some(i) => i - 1,
        });
    }

    /// Moves the selection down one entry. Past the bottom it wraps to the
    /// first entry when `cycle` is set and stays put otherwise.
    pub fn down(&mut self, cycle: bool) {
        let n = self.provider.len();
        if n == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) if i + 1 < n => i + 1,
            Some(_) if cycle => 0,
            Some(_) => n - 1,
        });
    }

    /// Moves the selection up by the number of entries last shown, stopping
    /// at the first entry.
    pub fn page_up(&mut self) {
        let n = self.provider.len();
        if n == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => i.saturating_sub(self.page_size),
        });
    }

    /// Moves the selection down by the number of entries last shown,
    /// stopping at the last entry.
    pub fn page_down(&mut self) {
        let n = self.provider.len();
        if n == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + self.page_size).min(n - 1),
        });
    }
}
