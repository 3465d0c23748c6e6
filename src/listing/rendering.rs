//! The two render entry points: the mode line and the body.
//!
//! Both return a [`TextBlock`] for the external renderer to place on
//! screen. The body also records how many entries it managed to show, which
//! is what page-up and page-down move by.

use super::model::Listing;
use super::provider::Provider;
use super::scrollbar::render_scrollbar;
use super::window::compute_window;
use crate::text::{trim_to_width, TextBlock};
use unicode_width::UnicodeWidthStr;

impl<P: Provider> Listing<P> {
    /// Renders the mode line: the provider's title, a space, then the
    /// filter, all within `width` columns. The title takes precedence; the
    /// filter gets whatever is left. The cursor goes right after the filter.
    pub fn mode_line(&self, width: usize) -> TextBlock {
        let title = self.provider.mode_title(self.selected);
        let title = trim_to_width(&title, width);
        let mut b = TextBlock::new(width);
        b.write_str(title, &[self.styles.mode_title.clone()]);
        let rest = width.saturating_sub(title.width());
        if rest > 0 {
            b.write_str(" ", &[]);
            b.write_str(
                trim_to_width(&self.filter, rest - 1),
                &[self.styles.filter.clone()],
            );
        }
        b.set_dot(b.cursor());
        b
    }

    /// Renders the entries around the selection into at most `max_height`
    /// lines of `width` columns.
    ///
    /// When the window covers only part of the entries, the last column is
    /// given over to a scrollbar. With no entries at all, the placeholder is
    /// shown instead.
    pub fn list(&mut self, width: usize, max_height: usize) -> TextBlock {
        let n = self.provider.len();
        let mut b = TextBlock::new(width);
        if n == 0 {
            let placeholder = self
                .provider
                .placeholder()
                .unwrap_or_else(|| self.config.placeholder.clone());
            b.write_str(
                trim_to_width(&placeholder, width),
                &[self.styles.placeholder.clone()],
            );
            return b;
        }

        let window = compute_window(&self.provider, self.selected, width, max_height);
        self.page_size = window.len();

        let scrollbar = (window.height > 0 && window.needs_scrollbar(n)).then(|| {
            render_scrollbar(
                n,
                window.low,
                window.high,
                window.height,
                &self.config.scrollbar,
                &self.styles.scrollbar,
            )
        });

        for (i, entry) in window.iter() {
            if i > window.low {
                b.newline();
            }
            let overlay = (self.selected == Some(i)).then_some(&self.styles.selected);
            b.write_styled(entry, overlay);
        }
        if let Some(scrollbar) = scrollbar {
            b.extend_horizontal(&scrollbar, width.saturating_sub(1));
        }
        b
    }
}
