//! The contract between a listing and the source of its entries.

use crate::text::Styled;

/// A source of entries for a listing mode.
///
/// The provider owns the entry set, the meaning of the filter, how entries
/// look and what accepting one does. The listing only tracks which index is
/// selected and what the user has typed.
///
/// Indices are always into the *filtered* set, i.e. `0..self.len()` as of
/// the most recent [`filter`](Provider::filter) call.
///
/// # Examples
///
/// ```
/// use bubbletea_listing::listing::Provider;
/// use bubbletea_listing::text::Styled;
///
/// struct Commands {
///     all: Vec<&'static str>,
///     shown: Vec<&'static str>,
/// }
///
/// impl Provider for Commands {
///     type Context = Vec<String>;
///
///     fn len(&self) -> usize {
///         self.shown.len()
///     }
///
///     fn show(&self, index: usize, _width: usize) -> Styled {
///         Styled::plain(self.shown[index])
///     }
///
///     fn filter(&mut self, text: &str) -> Option<usize> {
///         self.shown = self.all.iter().copied().filter(|c| c.starts_with(text)).collect();
///         if self.shown.is_empty() { None } else { Some(0) }
///     }
///
///     fn accept(&mut self, index: usize, ctx: &mut Vec<String>) {
///         ctx.push(self.shown[index].to_string());
///     }
///
///     fn mode_title(&self, _selected: Option<usize>) -> String {
///         "COMMAND".to_string()
///     }
/// }
/// ```
pub trait Provider {
    /// Editor state handed to [`accept`](Provider::accept).
    type Context;

    /// Number of entries passing the active filter.
    fn len(&self) -> usize;

    /// Whether no entry passes the active filter.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders entry `index` for a viewport `width` columns wide.
    ///
    /// Must be deterministic for a given index and width. The result may
    /// span several lines.
    fn show(&self, index: usize, width: usize) -> Styled;

    /// Re-evaluates the entry set against `text` and returns the index that
    /// should become selected, or `None` if nothing should be.
    fn filter(&mut self, text: &str) -> Option<usize>;

    /// Performs whatever choosing entry `index` means.
    fn accept(&mut self, index: usize, ctx: &mut Self::Context);

    /// A one-line label for the mode, given the current selection.
    fn mode_title(&self, selected: Option<usize>) -> String;

    /// Text to show when there are no entries. `None` falls back to the
    /// listing's configured placeholder.
    fn placeholder(&self) -> Option<String> {
        None
    }
}
