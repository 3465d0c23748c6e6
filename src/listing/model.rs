//! The listing state and its construction.

use super::keys::ModeId;
use super::provider::Provider;
use super::style::ListingStyles;
use crate::config::ListingConfig;
use crate::error::ConfigError;
use tracing::debug;

/// Hook run when a key is handed back for re-dispatch in another mode.
pub type FallthroughHook<C> = Box<dyn FnMut(&mut C) + Send>;

/// A filterable selection list over the entries of a [`Provider`].
///
/// The listing owns three pieces of state: the selected index, the filter
/// the user has typed, and the number of entries that fit in the last
/// rendered window. Everything else, including what the entries are and how
/// the filter matches them, belongs to the provider.
///
/// A listing lives as long as the mode it backs. Switching to a different
/// provider means building a new listing.
///
/// # Examples
///
/// ```
/// use bubbletea_listing::listing::{ItemProvider, Listing};
///
/// let provider = ItemProvider::new(
///     "HISTORY",
///     vec!["git status".to_string(), "git log".to_string(), "ls".to_string()],
///     |item: &String, line: &mut String| line.push_str(item),
/// );
/// let mut listing = Listing::new("history", provider);
/// assert_eq!(listing.selected(), Some(0));
///
/// listing.append_filter_char('l');
/// listing.append_filter_char('s');
/// assert_eq!(listing.len(), 1);
///
/// let mut line = String::new();
/// listing.accept(&mut line);
/// assert_eq!(line, "ls");
/// ```
pub struct Listing<P: Provider> {
    pub(super) mode: ModeId,
    pub(super) provider: P,
    pub(super) selected: Option<usize>,
    pub(super) filter: String,
    /// Entries shown by the most recent [`list`](Listing::list) call, used
    /// as the page-up/page-down step.
    pub(super) page_size: usize,
    pub(super) styles: ListingStyles,
    pub(super) config: ListingConfig,
    pub(super) fallthrough: Option<FallthroughHook<P::Context>>,
}

impl<P: Provider> Listing<P> {
    /// Creates a listing for `mode` with an empty filter. The initial
    /// selection is whatever the provider picks for the empty filter.
    pub fn new(mode: impl Into<ModeId>, provider: P) -> Self {
        let mut listing = Self {
            mode: mode.into(),
            provider,
            selected: None,
            filter: String::new(),
            page_size: 0,
            styles: ListingStyles::default(),
            config: ListingConfig::default(),
            fallthrough: None,
        };
        listing.change_filter(String::new());
        debug!(mode = %listing.mode, count = listing.len(), "listing created");
        listing
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: ListingStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces the configuration after validating it.
    ///
    /// # Errors
    ///
    /// Returns the [`ListingConfig::validate`] error for a config built in
    /// code with a bad glyph or binding.
    pub fn with_config(mut self, config: ListingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Sets the hook that runs before a key the listing cannot handle is
    /// handed back to the caller. Typically this switches the editor to the
    /// mode that should see the key next.
    pub fn with_fallthrough<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut P::Context) + Send + 'static,
    {
        self.fallthrough = Some(Box::new(hook));
        self
    }

    /// The mode this listing backs.
    pub fn mode(&self) -> &ModeId {
        &self.mode
    }

    /// The selected index into the filtered entries, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The current filter text.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Number of entries shown by the last render.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of entries passing the filter.
    pub fn len(&self) -> usize {
        self.provider.len()
    }

    /// Whether no entry passes the filter.
    pub fn is_empty(&self) -> bool {
        self.provider.is_empty()
    }

    /// The entry provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable access to the provider.
    ///
    /// If the provider's entry set changes, call
    /// [`refilter`](Listing::refilter) so the selection follows.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// The styles in use.
    pub fn styles(&self) -> &ListingStyles {
        &self.styles
    }

    /// The configuration in use.
    pub fn config(&self) -> &ListingConfig {
        &self.config
    }
}

impl<P: Provider> std::fmt::Debug for Listing<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listing")
            .field("mode", &self.mode)
            .field("selected", &self.selected)
            .field("filter", &self.filter)
            .field("page_size", &self.page_size)
            .field("count", &self.provider.len())
            .finish_non_exhaustive()
    }
}
