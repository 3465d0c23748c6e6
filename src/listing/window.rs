//! Choosing which entries fit in the viewport.
//!
//! The window starts at the selected entry and grows outwards, one entry
//! below, then one entry above, and so on, until the height budget is used
//! up or every entry is in. This keeps the selection near the middle of the
//! viewport instead of pinning it to an edge.
//!
//! Entries can span several lines. When the last entry taken in on either
//! side does not fit, it is cut line-wise: an entry added below keeps its
//! leading lines, an entry added above keeps its trailing lines. The window
//! therefore never exceeds the budget, even when a single entry is taller
//! than the whole viewport.

use super::provider::Provider;
use crate::text::Styled;
use std::collections::VecDeque;
use tracing::trace;

/// The entries visible in one render.
#[derive(Debug, Clone)]
pub struct Window {
    /// First visible index.
    pub low: usize,
    /// One past the last visible index.
    pub high: usize,
    /// Total number of lines taken by `entries`.
    pub height: usize,
    /// Rendered blocks for `low..high`, already cut to fit.
    pub entries: VecDeque<Styled>,
}

impl Window {
    /// Number of entries in the window.
    pub fn len(&self) -> usize {
        self.high - self.low
    }

    /// Whether the window holds no entries.
    pub fn is_empty(&self) -> bool {
        self.low == self.high
    }

    /// Whether the window covers only part of `count` entries and needs a
    /// scrollbar.
    ///
    /// The check against the end is `high < count - 1`, so a window that
    /// reaches the second-to-last entry from the top counts as complete.
    pub fn needs_scrollbar(&self, count: usize) -> bool {
        self.low > 0 || self.high + 1 < count
    }

    /// Iterates over `(index, entry)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Styled)> {
        (self.low..self.high).zip(self.entries.iter())
    }
}

/// Computes the window around `selected` for a viewport `width` columns wide
/// and at most `max_height` lines tall.
///
/// With no selection the window is seeded at index 0. An empty provider
/// gives an empty window.
pub fn compute_window<P>(
    provider: &P,
    selected: Option<usize>,
    width: usize,
    max_height: usize,
) -> Window
where
    P: Provider + ?Sized,
{
    let n = provider.len();
    let seed = selected.unwrap_or(0).min(n);
    let mut low = seed;
    let mut high = seed;
    let mut height = 0;
    let mut entries = VecDeque::new();

    let get_entry = |i: usize| {
        let s = provider.show(i, width);
        let h = s.line_count();
        (s, h)
    };

    // Growing `high` first makes the selected entry the first one taken in.
    let mut extend_low = false;
    while height < max_height && !(low == 0 && high == n) {
        if (extend_low && low > 0) || high == n {
            low -= 1;
            let (mut s, h) = get_entry(low);
            height += h;
            if height > max_height {
                s = s.keep_trailing_lines(h - (height - max_height));
                height = max_height;
            }
            entries.push_front(s);
        } else {
            let (mut s, h) = get_entry(high);
            height += h;
            if height > max_height {
                s = s.keep_leading_lines(h - (height - max_height));
                height = max_height;
            }
            entries.push_back(s);
            high += 1;
        }
        extend_low = !extend_low;
    }

    trace!(n, ?selected, low, high, height, max_height, "computed window");
    Window {
        low,
        high,
        height,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Entries whose text is `lines[i]` lines of the form `"i.j"`.
    struct Tall {
        lines: Vec<usize>,
    }

    impl Provider for Tall {
        type Context = ();

        fn len(&self) -> usize {
            self.lines.len()
        }

        fn show(&self, index: usize, _width: usize) -> Styled {
            let text = (0..self.lines[index])
                .map(|j| format!("{index}.{j}"))
                .collect::<Vec<_>>()
                .join("\n");
            Styled::plain(text)
        }

        fn filter(&mut self, _text: &str) -> Option<usize> {
            if self.lines.is_empty() {
                None
            } else {
                Some(0)
            }
        }

        fn accept(&mut self, _index: usize, _ctx: &mut ()) {}

        fn mode_title(&self, _selected: Option<usize>) -> String {
            String::new()
        }
    }

    fn uniform(n: usize) -> Tall {
        Tall { lines: vec![1; n] }
    }

    #[test]
    fn test_empty_provider() {
        let w = compute_window(&uniform(0), None, 10, 5);
        assert!(w.is_empty());
        assert_eq!(w.height, 0);
    }

    #[test]
    fn test_selection_at_top() {
        let w = compute_window(&uniform(10), Some(0), 10, 5);
        assert_eq!((w.low, w.high, w.height), (0, 5, 5));
        assert!(w.needs_scrollbar(10));
    }

    #[test]
    fn test_selection_centered() {
        // Grows 5 (down), 4 (up), 6, 3, ...
        let w = compute_window(&uniform(20), Some(5), 10, 4);
        assert_eq!((w.low, w.high), (3, 7));
        let w = compute_window(&uniform(20), Some(5), 10, 5);
        assert_eq!((w.low, w.high), (3, 8));
    }

    #[test]
    fn test_selection_at_bottom() {
        let w = compute_window(&uniform(10), Some(9), 10, 3);
        assert_eq!((w.low, w.high), (7, 10));
    }

    #[test]
    fn test_no_selection_seeds_at_zero() {
        let w = compute_window(&uniform(10), None, 10, 3);
        assert_eq!((w.low, w.high), (0, 3));
    }

    #[test]
    fn test_everything_fits() {
        let w = compute_window(&uniform(3), Some(1), 10, 10);
        assert_eq!((w.low, w.high, w.height), (0, 3, 3));
        assert!(!w.needs_scrollbar(3));
    }

    #[test]
    fn test_tall_entry_keeps_leading_lines() {
        let w = compute_window(&Tall { lines: vec![8] }, Some(0), 10, 3);
        assert_eq!((w.low, w.high, w.height), (0, 1, 3));
        assert_eq!(w.entries[0].text, "0.0\n0.1\n0.2");
    }

    #[test]
    fn test_entry_above_keeps_trailing_lines() {
        // Takes 1 (1 line), then 0 (3 lines, only the last fits).
        let w = compute_window(&Tall { lines: vec![3, 1] }, Some(1), 10, 2);
        assert_eq!((w.low, w.high, w.height), (0, 2, 2));
        assert_eq!(w.entries[0].text, "0.2");
        assert_eq!(w.entries[1].text, "1.0");
    }

    #[test]
    fn test_scrollbar_threshold_near_end() {
        // A window ending at n - 1 with low == 0 does not count as partial.
        let w = Window {
            low: 0,
            high: 9,
            height: 9,
            entries: VecDeque::new(),
        };
        assert!(!w.needs_scrollbar(10));
        assert!(w.needs_scrollbar(11));
    }

    #[test]
    fn test_iter_pairs_indices() {
        let w = compute_window(&uniform(10), Some(4), 10, 3);
        let indices: Vec<usize> = w.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![3, 4, 5]);
        for (i, s) in w.iter() {
            assert_eq!(s.text, format!("{i}.0"));
        }
    }
}
