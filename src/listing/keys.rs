//! Actions, default key bindings and the binding table.
//!
//! Every listing mode understands the same set of [`ListingAction`]s. Which
//! keys trigger them is decided per mode by a [`BindingTable`]. The table
//! used by [`Listing::handle_key`](super::Listing::handle_key) is
//! process-wide: install it once at startup with [`install_bindings`], or
//! leave it alone and every mode gets the defaults from [`ListingKeyMap`].
//!
//! ## Default keys
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` | `up` |
//! | `pgup` | `page-up` |
//! | `↓` | `down` |
//! | `pgdown` | `page-down` |
//! | `tab` | `down-cycle` |
//! | `backspace` | `backspace` |
//! | `enter` | `accept` |
//! | `esc`, `ctrl+[` | `exit` |
//! | anything else | `default` |
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_listing::listing::{BindingTable, ListingAction};
//! use bubbletea_listing::key::KeyPress;
//! use crossterm::event::KeyCode;
//!
//! let mut table = BindingTable::new();
//! table.bind("completion", "ctrl+n".parse().unwrap(), ListingAction::DownCycle);
//! table.add_listing_defaults("completion");
//!
//! let mode = "completion".into();
//! assert_eq!(table.lookup(&mode, &KeyPress::from(KeyCode::Tab)), Some(ListingAction::DownCycle));
//! assert_eq!(table.lookup(&mode, &KeyPress::from(KeyCode::Char('x'))), None);
//! ```

use crate::config::ListingConfig;
use crate::error::{BindingsError, ConfigError};
use crate::key::{self, Binding, KeyPress};
use crossterm::event::{KeyCode, KeyModifiers};
use once_cell::sync::{Lazy, OnceCell};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Identity of a listing mode, e.g. `"completion"` or `"history"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModeId(String);

impl ModeId {
    /// The mode name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ModeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Something a key can make a listing do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingAction {
    /// Select the previous entry, stopping at the first.
    Up,
    /// Select the previous entry, wrapping to the last.
    UpCycle,
    /// Move the selection up by one page.
    PageUp,
    /// Select the next entry, stopping at the last.
    Down,
    /// Select the next entry, wrapping to the first.
    DownCycle,
    /// Move the selection down by one page.
    PageDown,
    /// Delete the last filter character.
    Backspace,
    /// Accept the selected entry.
    Accept,
    /// Filter on printable characters, hand anything else back.
    Default,
    /// Leave the listing.
    Exit,
}

impl ListingAction {
    /// Every action, in the order they are documented.
    pub const ALL: [ListingAction; 10] = [
        ListingAction::Up,
        ListingAction::UpCycle,
        ListingAction::PageUp,
        ListingAction::Down,
        ListingAction::DownCycle,
        ListingAction::PageDown,
        ListingAction::Backspace,
        ListingAction::Accept,
        ListingAction::Default,
        ListingAction::Exit,
    ];

    /// The name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            ListingAction::Up => "up",
            ListingAction::UpCycle => "up-cycle",
            ListingAction::PageUp => "page-up",
            ListingAction::Down => "down",
            ListingAction::DownCycle => "down-cycle",
            ListingAction::PageDown => "page-down",
            ListingAction::Backspace => "backspace",
            ListingAction::Accept => "accept",
            ListingAction::Default => "default",
            ListingAction::Exit => "exit",
        }
    }
}

impl FromStr for ListingAction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| ConfigError::UnknownAction(s.to_string()))
    }
}

impl fmt::Display for ListingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The default key bindings for listing actions, with help text.
#[derive(Debug, Clone)]
pub struct ListingKeyMap {
    /// Previous entry.
    pub up: Binding,
    /// Previous entry, wrapping. Unbound by default.
    pub up_cycle: Binding,
    /// Previous page.
    pub page_up: Binding,
    /// Next entry.
    pub down: Binding,
    /// Next entry, wrapping.
    pub down_cycle: Binding,
    /// Next page.
    pub page_down: Binding,
    /// Delete a filter character.
    pub backspace: Binding,
    /// Accept the selection.
    pub accept: Binding,
    /// Leave the listing.
    pub exit: Binding,
}

impl Default for ListingKeyMap {
    fn default() -> Self {
        Self {
            up: Binding::new(vec![KeyCode::Up]).with_help("↑", "up"),
            up_cycle: Binding::new(Vec::<KeyPress>::new()).with_help("", "up (wrap)"),
            page_up: Binding::new(vec![KeyCode::PageUp]).with_help("pgup", "prev page"),
            down: Binding::new(vec![KeyCode::Down]).with_help("↓", "down"),
            down_cycle: Binding::new(vec![KeyCode::Tab]).with_help("tab", "down (wrap)"),
            page_down: Binding::new(vec![KeyCode::PageDown]).with_help("pgdown", "next page"),
            backspace: Binding::new(vec![KeyCode::Backspace]).with_help("⌫", "delete filter char"),
            accept: Binding::new(vec![KeyCode::Enter]).with_help("enter", "accept"),
            // Terminals deliver ctrl+[ as a bare escape byte.
            exit: Binding::new(vec![
                KeyPress::new(KeyCode::Char('['), KeyModifiers::CONTROL),
                KeyPress::from(KeyCode::Esc),
            ])
            .with_help("esc", "leave"),
        }
    }
}

impl ListingKeyMap {
    /// Each binding paired with the action it triggers.
    pub fn actions(&self) -> Vec<(&Binding, ListingAction)> {
        vec![
            (&self.up, ListingAction::Up),
            (&self.up_cycle, ListingAction::UpCycle),
            (&self.page_up, ListingAction::PageUp),
            (&self.down, ListingAction::Down),
            (&self.down_cycle, ListingAction::DownCycle),
            (&self.page_down, ListingAction::PageDown),
            (&self.backspace, ListingAction::Backspace),
            (&self.accept, ListingAction::Accept),
            (&self.exit, ListingAction::Exit),
        ]
    }
}

impl key::KeyMap for ListingKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.up, &self.down, &self.accept]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            // Navigation
            vec![
                &self.up,
                &self.down,
                &self.down_cycle,
                &self.page_up,
                &self.page_down,
            ],
            // Filter and selection
            vec![&self.backspace, &self.accept, &self.exit],
        ]
    }
}

static DEFAULT_KEYS: Lazy<HashMap<KeyPress, ListingAction>> = Lazy::new(|| {
    let keymap = ListingKeyMap::default();
    let mut keys = HashMap::new();
    for (binding, action) in keymap.actions() {
        for key in binding.keys() {
            keys.entry(*key).or_insert(action);
        }
    }
    keys
});

/// Key-to-action bindings, per listing mode.
///
/// A mode that was never registered uses the [`ListingKeyMap`] defaults.
/// Keys that are not bound in a mode resolve to nothing, and the listing
/// treats them as [`ListingAction::Default`].
#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    modes: HashMap<ModeId, HashMap<KeyPress, ListingAction>>,
}

impl BindingTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `key` to `action` in `mode`, replacing any existing binding.
    pub fn bind(&mut self, mode: impl Into<ModeId>, key: KeyPress, action: ListingAction) {
        self.modes.entry(mode.into()).or_default().insert(key, action);
    }

    /// Adds the default listing keys to `mode`, skipping keys the mode has
    /// already bound to something else.
    pub fn add_listing_defaults(&mut self, mode: impl Into<ModeId>) {
        let keys = self.modes.entry(mode.into()).or_default();
        for (key, action) in DEFAULT_KEYS.iter() {
            keys.entry(*key).or_insert(*action);
        }
    }

    /// Binds everything listed in `config` for `mode`. The mode starts from
    /// the defaults if it had no bindings yet.
    ///
    /// # Errors
    ///
    /// Fails if a key spec or action name in the config does not parse. The
    /// table is left unchanged in that case.
    pub fn apply_config(
        &mut self,
        mode: impl Into<ModeId>,
        config: &ListingConfig,
    ) -> Result<(), ConfigError> {
        let parsed = config.parsed_bindings()?;
        let mode = mode.into();
        if !self.modes.contains_key(&mode) {
            self.add_listing_defaults(mode.clone());
        }
        for (key, action) in parsed {
            self.bind(mode.clone(), key, action);
        }
        Ok(())
    }

    /// The action bound to `key` in `mode`, if any.
    pub fn lookup(&self, mode: &ModeId, key: &KeyPress) -> Option<ListingAction> {
        match self.modes.get(mode) {
            Some(keys) => keys.get(key).copied(),
            None => DEFAULT_KEYS.get(key).copied(),
        }
    }
}

static BINDINGS: OnceCell<BindingTable> = OnceCell::new();

static FALLBACK_BINDINGS: Lazy<BindingTable> = Lazy::new(BindingTable::new);

/// Installs the process-wide binding table.
///
/// # Errors
///
/// The table can only be installed once; later calls return
/// [`BindingsError::AlreadyInstalled`].
pub fn install_bindings(table: BindingTable) -> Result<(), BindingsError> {
    let modes = table.modes.len();
    BINDINGS
        .set(table)
        .map_err(|_| BindingsError::AlreadyInstalled)?;
    debug!(modes, "listing bindings installed");
    Ok(())
}

/// The process-wide binding table. Until one is installed, every mode uses
/// the defaults.
pub fn bindings() -> &'static BindingTable {
    BINDINGS.get().unwrap_or(&FALLBACK_BINDINGS)
}
