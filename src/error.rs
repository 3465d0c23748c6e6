//! Error types for the fallible edges of the crate.
//!
//! Navigation, filtering and rendering never fail. Errors only come from
//! parsing key specs, loading configuration and installing the process-wide
//! binding table.

use thiserror::Error;

/// A key spec such as `"ctrl+c"` or `"pgup"` could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    /// The spec was empty or only contained modifiers.
    #[error("empty key spec")]
    Empty,
    /// A `+`-separated prefix was not a known modifier.
    #[error("unknown modifier `{0}` in key spec")]
    UnknownModifier(String),
    /// The final component was neither a single character nor a named key.
    #[error("unknown key `{0}`")]
    UnknownKey(String),
}

/// Loading a [`ListingConfig`](crate::config::ListingConfig) failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document was malformed or had the wrong shape.
    #[error("invalid listing config: {0}")]
    Toml(#[from] toml::de::Error),
    /// A binding named an action that does not exist.
    #[error("unknown listing action `{0}`")]
    UnknownAction(String),
    /// A binding used a key spec that could not be parsed.
    #[error("invalid key `{spec}`: {source}")]
    InvalidKey {
        /// The offending spec.
        spec: String,
        /// Why it was rejected.
        #[source]
        source: KeyParseError,
    },
    /// A scrollbar glyph was not exactly one column wide.
    #[error("scrollbar glyph `{0}` must be a single column wide")]
    InvalidGlyph(String),
}

/// Installing the process-wide binding table failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingsError {
    /// The table is written once at startup and is read-only afterwards.
    #[error("listing bindings have already been installed")]
    AlreadyInstalled,
}
