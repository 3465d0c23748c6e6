//! A ready-made provider over an in-memory list of items.
//!
//! [`ItemProvider`] covers the common case where the entries are a plain
//! `Vec` known up front: history lines, command names, completion
//! candidates. Filtering is fuzzy (skim's algorithm, via `fuzzy-matcher`)
//! and keeps the original order; accepting an entry calls a closure with the
//! item and the editor context.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_listing::listing::{DefaultItem, ItemProvider, Listing};
//!
//! let items = vec![
//!     DefaultItem::new("cd", "change directory"),
//!     DefaultItem::new("cp", "copy files"),
//!     DefaultItem::new("mv", "move files"),
//! ];
//! let provider = ItemProvider::new("COMMAND", items, |item: &DefaultItem, out: &mut Vec<String>| {
//!     out.push(item.title().to_string());
//! });
//! let mut listing = Listing::new("command", provider);
//!
//! let body = listing.list(40, 10);
//! assert_eq!(body.plain_lines()[0], "cd");
//! assert_eq!(body.plain_lines()[1], "  change directory");
//! ```

use super::provider::Provider;
use crate::text::{trim_to_width, Styled};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use lipgloss_extras::prelude::*;
use std::fmt::{self, Display};

/// Something that can be listed by an [`ItemProvider`].
///
/// The `Display` output is what gets shown, and may span several lines.
/// [`filter_value`](Item::filter_value) is what the filter is matched
/// against.
pub trait Item: Display + Clone {
    /// Text the fuzzy filter searches.
    fn filter_value(&self) -> String;
}

impl Item for String {
    fn filter_value(&self) -> String {
        self.clone()
    }
}

/// An item with a title and an optional description shown on a second,
/// indented line. Only the title is matched by the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultItem {
    title: String,
    desc: String,
}

impl DefaultItem {
    /// Creates an item. An empty description keeps the item to one line.
    pub fn new(title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            desc: desc.into(),
        }
    }

    /// The title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The description.
    pub fn description(&self) -> &str {
        &self.desc
    }
}

impl Display for DefaultItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.desc.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{}\n  {}", self.title, self.desc)
        }
    }
}

impl Item for DefaultItem {
    fn filter_value(&self) -> String {
        self.title.clone()
    }
}

type AcceptFn<I, C> = Box<dyn FnMut(&I, &mut C) + Send>;

/// A [`Provider`] over a vector of [`Item`]s.
pub struct ItemProvider<I: Item, C> {
    title: String,
    items: Vec<I>,
    /// Indices into `items` of the entries passing the filter.
    shown: Vec<usize>,
    style: Style,
    placeholder: Option<String>,
    on_accept: AcceptFn<I, C>,
}

impl<I: Item, C> ItemProvider<I, C> {
    /// Creates a provider titled `title` over `items`. `on_accept` runs when
    /// the user accepts an entry.
    pub fn new<F>(title: impl Into<String>, items: Vec<I>, on_accept: F) -> Self
    where
        F: FnMut(&I, &mut C) + Send + 'static,
    {
        let shown = (0..items.len()).collect();
        Self {
            title: title.into(),
            items,
            shown,
            style: Style::new(),
            placeholder: None,
            on_accept: Box::new(on_accept),
        }
    }

    /// Sets the style every entry is drawn with.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets the text shown when nothing matches.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// All items, matching or not.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Replaces the items. The filter is not re-applied; every item shows
    /// until the next [`Provider::filter`] call.
    pub fn set_items(&mut self, items: Vec<I>) {
        self.shown = (0..items.len()).collect();
        self.items = items;
    }

    /// The item at `index` in the filtered set.
    pub fn get(&self, index: usize) -> Option<&I> {
        self.shown.get(index).map(|&i| &self.items[i])
    }
}

impl<I: Item, C> Provider for ItemProvider<I, C> {
    type Context = C;

    fn len(&self) -> usize {
        self.shown.len()
    }

    fn show(&self, index: usize, width: usize) -> Styled {
        let text = self
            .get(index)
            .map(ToString::to_string)
            .unwrap_or_default();
        let text = text
            .split('\n')
            .map(|line| trim_to_width(line, width))
            .collect::<Vec<_>>()
            .join("\n");
        Styled::new(text, self.style.clone())
    }

    fn filter(&mut self, text: &str) -> Option<usize> {
        if text.is_empty() {
            self.shown = (0..self.items.len()).collect();
        } else {
            let matcher = SkimMatcherV2::default();
            self.shown = self
                .items
                .iter()
                .enumerate()
                .filter(|(_, item)| matcher.fuzzy_match(&item.filter_value(), text).is_some())
                .map(|(i, _)| i)
                .collect();
        }
        if self.shown.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    fn accept(&mut self, index: usize, ctx: &mut C) {
        if let Some(&i) = self.shown.get(index) {
            (self.on_accept)(&self.items[i], ctx);
        }
    }

    fn mode_title(&self, selected: Option<usize>) -> String {
        match selected {
            Some(i) => format!("{} ({}/{})", self.title, i + 1, self.shown.len()),
            None => format!("{} (0/{})", self.title, self.shown.len()),
        }
    }

    fn placeholder(&self) -> Option<String> {
        self.placeholder.clone()
    }
}

impl<I: Item + fmt::Debug, C> fmt::Debug for ItemProvider<I, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemProvider")
            .field("title", &self.title)
            .field("items", &self.items)
            .field("shown", &self.shown)
            .finish_non_exhaustive()
    }
}
