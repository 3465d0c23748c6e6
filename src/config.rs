//! Configuration for listing modes.
//!
//! Everything has a default, so an empty document is a valid config. A full
//! TOML config looks like this:
//!
//! ```toml
//! placeholder = "(nothing matches)"
//!
//! [scrollbar]
//! thumb = "█"
//! track = "│"
//!
//! [bindings]
//! "ctrl+n" = "down-cycle"
//! "ctrl+p" = "up-cycle"
//! ```
//!
//! Bindings are applied on top of the defaults; see
//! [`BindingTable::apply_config`](crate::listing::BindingTable::apply_config).

use crate::error::ConfigError;
use crate::key::KeyPress;
use crate::listing::style::{SCROLLBAR_THUMB, SCROLLBAR_TRACK};
use crate::listing::ListingAction;
use serde::Deserialize;
use std::collections::BTreeMap;
use unicode_width::UnicodeWidthStr;

/// Text shown in place of the entries when the provider has none and does
/// not supply its own placeholder.
pub const DEFAULT_PLACEHOLDER: &str = "(no result)";

/// Glyphs used to draw the scrollbar column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScrollbarGlyphs {
    /// Drawn for rows inside the thumb.
    pub thumb: String,
    /// Drawn for the remaining rows.
    pub track: String,
}

impl Default for ScrollbarGlyphs {
    fn default() -> Self {
        Self {
            thumb: SCROLLBAR_THUMB.to_string(),
            track: SCROLLBAR_TRACK.to_string(),
        }
    }
}

/// User-tunable settings for a listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Fallback placeholder text.
    pub placeholder: String,
    /// Scrollbar glyphs.
    pub scrollbar: ScrollbarGlyphs,
    /// Extra bindings, key spec to action name.
    pub bindings: BTreeMap<String, String>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            scrollbar: ScrollbarGlyphs::default(),
            bindings: BTreeMap::new(),
        }
    }
}

impl ListingConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Fails if the document is malformed, a glyph is not one column wide,
    /// or a binding names an unknown key or action.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the glyphs and bindings.
    ///
    /// # Errors
    ///
    /// See [`ListingConfig::from_toml_str`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        for glyph in [&self.scrollbar.thumb, &self.scrollbar.track] {
            if glyph.width() != 1 {
                return Err(ConfigError::InvalidGlyph(glyph.clone()));
            }
        }
        self.parsed_bindings()?;
        Ok(())
    }

    /// The configured bindings with keys and actions parsed.
    ///
    /// # Errors
    ///
    /// Fails on the first key spec or action name that does not parse.
    pub fn parsed_bindings(&self) -> Result<Vec<(KeyPress, ListingAction)>, ConfigError> {
        self.bindings
            .iter()
            .map(|(spec, action)| {
                let key = spec
                    .parse::<KeyPress>()
                    .map_err(|source| ConfigError::InvalidKey {
                        spec: spec.clone(),
                        source,
                    })?;
                let action = action.parse::<ListingAction>()?;
                Ok((key, action))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_empty_document_is_default() {
        let config = ListingConfig::from_toml_str("").unwrap();
        assert_eq!(config, ListingConfig::default());
        assert_eq!(config.placeholder, DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn test_full_document() {
        let config = ListingConfig::from_toml_str(
            r##"
            placeholder = "nothing"

            [scrollbar]
            thumb = "#"

            [bindings]
            "ctrl+n" = "down-cycle"
            "##,
        )
        .unwrap();
        assert_eq!(config.placeholder, "nothing");
        assert_eq!(config.scrollbar.thumb, "#");
        assert_eq!(config.scrollbar.track, SCROLLBAR_TRACK);
        assert_eq!(
            config.parsed_bindings().unwrap(),
            vec![(
                KeyPress::new(KeyCode::Char('n'), KeyModifiers::CONTROL),
                ListingAction::DownCycle
            )]
        );
    }

    #[test]
    fn test_unknown_action_rejected() {
        let err = ListingConfig::from_toml_str("[bindings]\n\"ctrl+n\" = \"jump\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownAction(a) if a == "jump"));
    }

    #[test]
    fn test_bad_key_rejected() {
        let err = ListingConfig::from_toml_str("[bindings]\n\"hyper+n\" = \"up\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidKey { spec, .. } if spec == "hyper+n"));
    }

    #[test]
    fn test_wide_glyph_rejected() {
        let err = ListingConfig::from_toml_str("[scrollbar]\nthumb = \"##\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidGlyph(g) if g == "##"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = ListingConfig::from_toml_str("placeholder = ").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
