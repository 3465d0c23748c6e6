//! Proportional scrollbar for a window over a larger entry set.

use crate::config::ScrollbarGlyphs;
use crate::text::TextBlock;
use lipgloss_extras::prelude::*;
use tracing::trace;

/// Maps the window `[low, high)` over `n` entries onto a track `height`
/// rows tall and returns the thumb as a half-open row interval.
///
/// Each endpoint is placed at `round(x / n * height)`. When both land on the
/// same row the thumb is widened by one row, downwards unless that would run
/// past the end of the track. For `n > 0` and `height > 0` the result always
/// satisfies `0 <= low < high <= height`.
pub fn scroll_interval(n: usize, low: usize, high: usize, height: usize) -> (usize, usize) {
    let f = |i: usize| (i as f64 / n as f64 * height as f64).round() as usize;
    let (mut slow, mut shigh) = (f(low), f(high));
    if slow == shigh {
        if shigh == height {
            slow = slow.saturating_sub(1);
        } else {
            shigh += 1;
        }
    }
    trace!(n, low, high, height, slow, shigh, "scroll interval");
    (slow, shigh)
}

/// Renders a one-column scrollbar `height` rows tall.
pub fn render_scrollbar(
    n: usize,
    low: usize,
    high: usize,
    height: usize,
    glyphs: &ScrollbarGlyphs,
    style: &Style,
) -> TextBlock {
    let (slow, shigh) = scroll_interval(n, low, high, height);
    let styles = [style.clone()];
    let mut b = TextBlock::new(1);
    for i in 0..height {
        if i > 0 {
            b.newline();
        }
        if (slow..shigh).contains(&i) {
            b.write_str(&glyphs.thumb, &styles);
        } else {
            b.write_str(&glyphs.track, &styles);
        }
    }
    b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_rounds_up() {
        // 5 / 10 * 5 = 2.5 rounds to 3.
        assert_eq!(scroll_interval(10, 0, 5, 5), (0, 3));
    }

    #[test]
    fn test_thumb_in_the_middle() {
        assert_eq!(scroll_interval(100, 40, 50, 10), (4, 5));
    }

    #[test]
    fn test_degenerate_thumb_grows_down() {
        // 1 / 100 * 10 rounds to 0 as well.
        assert_eq!(scroll_interval(100, 0, 1, 10), (0, 1));
    }

    #[test]
    fn test_degenerate_thumb_at_end_grows_up() {
        assert_eq!(scroll_interval(100, 99, 100, 10), (9, 10));
    }

    #[test]
    fn test_render_marks_thumb_rows() {
        let glyphs = ScrollbarGlyphs {
            thumb: "#".into(),
            track: "|".into(),
        };
        let b = render_scrollbar(10, 0, 5, 5, &glyphs, &Style::new());
        assert_eq!(b.plain_lines(), vec!["#", "#", "#", "|", "|"]);
    }
}
