//! Filter editing.
//!
//! The filter only ever grows or shrinks by one character at a time, and
//! every change goes through the provider, which decides both what matches
//! and which entry becomes selected.

use super::model::Listing;
use super::provider::Provider;
use tracing::debug;

impl<P: Provider> Listing<P> {
    pub(super) fn change_filter(&mut self, filter: String) {
        self.filter = filter;
        self.selected = self.provider.filter(&self.filter);
        debug!(
            filter = %self.filter,
            selected = ?self.selected,
            count = self.provider.len(),
            "filter changed"
        );
    }

    /// Appends `ch` to the filter and adopts the selection the provider
    /// picks for the new filter.
    pub fn append_filter_char(&mut self, ch: char) {
        let mut filter = std::mem::take(&mut self.filter);
        filter.push(ch);
        self.change_filter(filter);
    }

    /// Removes the last character of the filter.
    ///
    /// Returns `false`, leaving everything untouched, when the filter is
    /// already empty. Multi-byte characters are removed whole.
    pub fn backspace(&mut self) -> bool {
        let mut filter = std::mem::take(&mut self.filter);
        if filter.pop().is_some() {
            self.change_filter(filter);
            true
        } else {
            self.filter = filter;
            false
        }
    }

    /// Replaces the filter with `text`, as if the old filter had been erased
    /// and `text` typed in.
    pub fn set_filter(&mut self, text: &str) {
        self.change_filter(text.to_string());
    }

    /// Re-applies the current filter, e.g. after the provider's entries
    /// changed underneath it.
    pub fn refilter(&mut self) {
        let filter = std::mem::take(&mut self.filter);
        self.change_filter(filter);
    }
}
