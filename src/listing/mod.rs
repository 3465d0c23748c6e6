//! Listing mode: a windowed, filterable selection list.
//!
//! A listing presents the entries of a [`Provider`] (completion candidates,
//! history matches, command names) in a bounded part of the terminal. The
//! user narrows the set by typing, moves a selection through it and accepts
//! the selected entry.
//!
//! ## Architecture
//!
//! - [`Provider`] owns the entries, the filter semantics, rendering of each
//!   entry and what accepting one does.
//! - [`Listing`] owns the selection, the filter text and the page size, and
//!   exposes navigation, filtering and acceptance.
//! - [`window`] picks the entries that fit the viewport, growing outwards
//!   from the selection so it stays near the middle, and cuts tall entries
//!   line-wise at the edges.
//! - [`scrollbar`] draws a proportional thumb when only part of the entries
//!   are shown.
//! - [`keys`] maps keys to [`ListingAction`]s per mode.
//!
//! Everything runs synchronously on the caller's thread. Rendering only
//! reads the state, apart from recording the page size for the next
//! page-up or page-down.
//!
//! ## Example
//!
//! ```
//! use bubbletea_listing::key::KeyPress;
//! use bubbletea_listing::listing::{ItemProvider, KeyOutcome, Listing};
//! use crossterm::event::KeyCode;
//!
//! let words: Vec<String> = ["alpha", "beta", "gamma", "delta"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let provider = ItemProvider::new("WORDS", words, |w: &String, buf: &mut String| {
//!     buf.push_str(w)
//! });
//! let mut listing = Listing::new("words", provider);
//! let mut buf = String::new();
//!
//! let _ = listing.handle_key(KeyPress::from(KeyCode::Down), &mut buf);
//! assert_eq!(listing.selected(), Some(1));
//!
//! let _ = listing.handle_key(KeyPress::from(KeyCode::Enter), &mut buf);
//! assert_eq!(buf, "beta");
//!
//! // Keys the listing has no use for are handed back.
//! let out = listing.handle_key(KeyPress::from(KeyCode::Left), &mut buf);
//! assert_eq!(out, KeyOutcome::Reprocess(KeyPress::from(KeyCode::Left)));
//! ```

mod api;
pub mod defaultitem;
mod filtering;
pub mod keys;
mod model;
mod navigation;
pub mod provider;
mod rendering;
pub mod scrollbar;
pub mod style;
pub mod window;


pub use api::KeyOutcome;
pub use defaultitem::{DefaultItem, Item, ItemProvider};
pub use keys::{
    bindings, install_bindings, BindingTable, ListingAction, ListingKeyMap, ModeId,
};
pub use model::{FallthroughHook, Listing};
pub use provider::Provider;
pub use style::ListingStyles;
pub use window::{compute_window, Window};
