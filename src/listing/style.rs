//! Styling for listing modes.
//!
//! The listing itself only decides *which* text gets which role: the mode
//! title, the filter, the selected entry, the scrollbar and the placeholder.
//! What those roles look like is configured here, with adaptive colors that
//! follow the terminal's light or dark background.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_listing::listing::style::ListingStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = ListingStyles::default();
//! styles.selected = Style::new().reverse(true);
//! ```

use lipgloss_extras::prelude::*;

/// Glyph for scrollbar rows inside the thumb.
pub const SCROLLBAR_THUMB: &str = "▉";

/// Glyph for scrollbar rows outside the thumb.
pub const SCROLLBAR_TRACK: &str = "│";

/// Styles for each visual role in a listing.
#[derive(Debug, Clone)]
pub struct ListingStyles {
    /// The mode title at the start of the mode line.
    pub mode_title: Style,
    /// The filter text following the title.
    pub filter: Style,
    /// Overlay applied on top of the selected entry's own style.
    pub selected: Style,
    /// The scrollbar column, thumb and track alike.
    pub scrollbar: Style,
    /// The placeholder shown when nothing matches.
    pub placeholder: Style,
}

impl Default for ListingStyles {
    fn default() -> Self {
        Self {
            mode_title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .bold(true),
            filter: Style::new().underline(true),
            selected: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .reverse(true),
            scrollbar: Style::new().foreground(AdaptiveColor {
                Light: "#9B9B9B",
                Dark: "#5C5C5C",
            }),
            placeholder: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
        }
    }
}
