#![warn(missing_docs)]

//! # bubbletea-listing
//!
//! A windowed, filterable selection list for interactive line editors built
//! on [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! A *listing* shows a set of candidate entries (completions, history
//! matches, command names) in a small, fixed-height part of the terminal.
//! The user types to narrow the set, moves a selection through it and
//! accepts the selected entry.
//!
//! ## Features
//!
//! - **Centred window**: the visible range grows outwards from the
//!   selection, so it stays near the middle of the viewport
//! - **Multi-line entries**: entries cut line-wise at the viewport edges,
//!   never overflowing the height budget
//! - **Proportional scrollbar** whose thumb is never empty
//! - **Pluggable providers**: matching, rendering and acceptance belong to
//!   the entry source, through the [`Provider`](listing::Provider) trait
//! - **Per-mode key bindings** with configurable overrides loaded from TOML
//! - **Key fallthrough**: keys with no listing meaning are handed back for
//!   re-dispatch in another mode
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_listing::prelude::*;
//! use crossterm::event::KeyCode;
//!
//! let history: Vec<String> = vec!["cargo build".into(), "cargo test".into(), "git push".into()];
//! let provider = ItemProvider::new("HISTORY", history, |cmd: &String, line: &mut String| {
//!     *line = cmd.clone();
//! });
//! let mut listing = Listing::new("history", provider);
//! let mut line = String::new();
//!
//! // Typing filters, arrows move, enter accepts.
//! for c in "cargo".chars() {
//!     let _ = listing.handle_key(KeyPress::from(KeyCode::Char(c)), &mut line);
//! }
//! let _ = listing.handle_key(KeyPress::from(KeyCode::Down), &mut line);
//! let _ = listing.handle_key(KeyPress::from(KeyCode::Enter), &mut line);
//! assert_eq!(line, "cargo test");
//!
//! // Render for the terminal: a title line and up to 10 body lines.
//! let title = listing.mode_line(80);
//! let body = listing.list(80, 10);
//! assert_eq!(title.plain_lines(), vec!["HISTORY (2/2) cargo"]);
//! assert_eq!(body.plain_lines(), vec!["cargo build", "cargo test"]);
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (filter changes, acceptance, fallthrough
//! at `debug`, window and scrollbar geometry at `trace`). Install whatever
//! subscriber the host application uses to see them.

pub mod config;
pub mod error;
pub mod key;
pub mod listing;
pub mod text;

/// Commonly used types, for glob import.
pub mod prelude {
    pub use crate::config::ListingConfig;
    pub use crate::error::{BindingsError, ConfigError, KeyParseError};
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::listing::{
        BindingTable, DefaultItem, Item, ItemProvider, KeyOutcome, Listing, ListingAction,
        ListingKeyMap, ListingStyles, ModeId, Provider,
    };
    pub use crate::text::{Styled, TextBlock};
}
