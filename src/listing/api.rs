//! Key dispatch and acceptance.
//!
//! The editor's key loop hands every key to
//! [`handle_key`](Listing::handle_key) while the listing mode is active. The
//! returned [`KeyOutcome`] tells it whether the key was consumed or needs to
//! be dispatched again in another mode.

use super::keys::{bindings, BindingTable, ListingAction};
use super::model::Listing;
use super::provider::Provider;
use crate::key::KeyPress;
use bubbletea_rs::{KeyMsg, Msg};
use tracing::debug;

/// What happened to a key handed to a listing.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The listing consumed the key.
    Handled,
    /// The listing has no use for the key. The fallthrough hook has run and
    /// the caller should dispatch the key again in whatever mode is now
    /// active.
    Reprocess(KeyPress),
    /// The listing asked to be closed. The fallthrough hook has run.
    Exited,
}

impl<P: Provider> Listing<P> {
    /// Accepts the selected entry. Does nothing without a selection.
    pub fn accept(&mut self, ctx: &mut P::Context) {
        if let Some(index) = self.selected {
            debug!(mode = %self.mode, index, "accepting entry");
            self.provider.accept(index, ctx);
        }
    }

    /// Handles a key with no listing-specific binding: printable characters
    /// extend the filter, anything else falls through.
    pub fn default_key(&mut self, key: KeyPress, ctx: &mut P::Context) -> KeyOutcome {
        match key.printable() {
            Some(ch) => {
                self.append_filter_char(ch);
                KeyOutcome::Handled
            }
            None => self.fall_through(key, ctx),
        }
    }

    fn run_fallthrough_hook(&mut self, ctx: &mut P::Context) {
        if let Some(hook) = self.fallthrough.as_mut() {
            hook(ctx);
        }
    }

    fn fall_through(&mut self, key: KeyPress, ctx: &mut P::Context) -> KeyOutcome {
        debug!(mode = %self.mode, %key, "key falls through");
        self.run_fallthrough_hook(ctx);
        KeyOutcome::Reprocess(key)
    }

    /// Performs `action` in response to `key`.
    pub fn run_action(
        &mut self,
        action: ListingAction,
        key: KeyPress,
        ctx: &mut P::Context,
    ) -> KeyOutcome {
        match action {
            ListingAction::Up => self.up(false),
            ListingAction::UpCycle => self.up(true),
            ListingAction::PageUp => self.page_up(),
            ListingAction::Down => self.down(false),
            ListingAction::DownCycle => self.down(true),
            ListingAction::PageDown => self.page_down(),
            ListingAction::Backspace => {
                if !self.backspace() {
                    return self.fall_through(key, ctx);
                }
            }
            ListingAction::Accept => self.accept(ctx),
            ListingAction::Default => return self.default_key(key, ctx),
            ListingAction::Exit => {
                debug!(mode = %self.mode, "leaving listing");
                self.run_fallthrough_hook(ctx);
                return KeyOutcome::Exited;
            }
        }
        KeyOutcome::Handled
    }

    /// Dispatches `key` through the process-wide binding table.
    pub fn handle_key(&mut self, key: KeyPress, ctx: &mut P::Context) -> KeyOutcome {
        self.handle_key_with(bindings(), key, ctx)
    }

    /// Dispatches `key` through `table`. Unbound keys get
    /// [`ListingAction::Default`].
    pub fn handle_key_with(
        &mut self,
        table: &BindingTable,
        key: KeyPress,
        ctx: &mut P::Context,
    ) -> KeyOutcome {
        let action = table
            .lookup(&self.mode, &key)
            .unwrap_or(ListingAction::Default);
        self.run_action(action, key, ctx)
    }

    /// Feeds a bubbletea-rs message to the listing. Only key messages are
    /// understood; anything else returns `None`.
    pub fn update(&mut self, msg: &Msg, ctx: &mut P::Context) -> Option<KeyOutcome> {
        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        Some(self.handle_key(KeyPress::from(key_msg), ctx))
    }
}
