//! Styled text exchanged between providers, the listing and the renderer.
//!
//! Providers hand the listing [`Styled`] values: a piece of text, possibly
//! spanning several lines, plus the lipgloss style it should be drawn with.
//! The listing assembles them into a [`TextBlock`], a grid of styled spans
//! that stays renderer-agnostic until [`TextBlock::render`] turns it into an
//! ANSI string.
//!
//! Widths are measured in terminal columns with `unicode-width`, never in
//! bytes.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_listing::text::{Styled, TextBlock};
//!
//! let entry = Styled::plain("first\nsecond\nthird");
//! assert_eq!(entry.line_count(), 3);
//!
//! let mut block = TextBlock::new(20);
//! block.write_styled(&entry.keep_leading_lines(2), None);
//! assert_eq!(block.plain_lines(), vec!["first", "second"]);
//! ```

use lipgloss_extras::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A block of text rendered by a provider for a single entry.
#[derive(Debug, Clone)]
pub struct Styled {
    /// The entry text. Lines are separated by `\n`.
    pub text: String,
    /// Style the provider wants the text drawn with.
    pub style: Style,
}

impl Styled {
    /// Creates a styled block.
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Creates a block with the empty style.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::new())
    }

    /// Number of lines the block occupies.
    pub fn line_count(&self) -> usize {
        self.text.matches('\n').count() + 1
    }

    /// Keeps only the first `n` lines.
    pub fn keep_leading_lines(&self, n: usize) -> Self {
        let text = self.text.split('\n').take(n).collect::<Vec<_>>().join("\n");
        Self::new(text, self.style.clone())
    }

    /// Keeps only the last `n` lines.
    pub fn keep_trailing_lines(&self, n: usize) -> Self {
        let lines: Vec<&str> = self.text.split('\n').collect();
        let skip = lines.len().saturating_sub(n);
        Self::new(lines[skip..].join("\n"), self.style.clone())
    }
}

/// Trims `s` so that it occupies at most `width` terminal columns.
///
/// Characters are never split; a wide character that would straddle the
/// limit is dropped entirely.
pub fn trim_to_width(s: &str, width: usize) -> &str {
    let mut used = 0;
    for (i, ch) in s.char_indices() {
        used += ch.width().unwrap_or(0);
        if used > width {
            return &s[..i];
        }
    }
    s
}

/// A run of text on a single line plus the styles layered over it.
///
/// Styles are applied in order, so later entries wrap earlier ones. This is
/// how the listing puts its "selected" highlight on top of whatever style
/// the provider chose.
#[derive(Debug, Clone)]
pub struct Span {
    /// Text of the span. Never contains `\n`.
    pub text: String,
    /// Style layers, innermost first.
    pub styles: Vec<Style>,
}

impl Span {
    fn width(&self) -> usize {
        self.text.width()
    }

    fn render(&self) -> String {
        self.styles
            .iter()
            .fold(self.text.clone(), |acc, style| style.clone().render(&acc))
    }
}

/// A rectangular block of styled lines, produced by the listing for an
/// external renderer.
#[derive(Debug, Clone)]
pub struct TextBlock {
    width: usize,
    lines: Vec<Vec<Span>>,
    dot: Option<(usize, usize)>,
}

impl TextBlock {
    /// Creates a block with a single empty line.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            lines: vec![Vec::new()],
            dot: None,
        }
    }

    /// Width the block was laid out for.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of lines in the block.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Starts a new line.
    pub fn newline(&mut self) {
        self.lines.push(Vec::new());
    }

    /// Writes `text` with the given style layers. Embedded `\n` start new
    /// lines.
    pub fn write_str(&mut self, text: &str, styles: &[Style]) {
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                self.newline();
            }
            if part.is_empty() {
                continue;
            }
            if let Some(line) = self.lines.last_mut() {
                line.push(Span {
                    text: part.to_string(),
                    styles: styles.to_vec(),
                });
            }
        }
    }

    /// Writes a provider block, optionally with an extra style on top.
    pub fn write_styled(&mut self, styled: &Styled, overlay: Option<&Style>) {
        let mut styles = vec![styled.style.clone()];
        if let Some(overlay) = overlay {
            styles.push(overlay.clone());
        }
        self.write_str(&styled.text, &styles);
    }

    /// Position right after the last written character, as `(line, column)`.
    pub fn cursor(&self) -> (usize, usize) {
        let line = self.lines.len() - 1;
        let col = self.lines[line].iter().map(Span::width).sum();
        (line, col)
    }

    /// Sets where the terminal cursor should be placed.
    pub fn set_dot(&mut self, dot: (usize, usize)) {
        self.dot = Some(dot);
    }

    /// Where the terminal cursor should be placed, if anywhere.
    pub fn dot(&self) -> Option<(usize, usize)> {
        self.dot
    }

    /// The styled spans of each line.
    pub fn lines(&self) -> &[Vec<Span>] {
        &self.lines
    }

    /// The lines with all styling removed.
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|spans| spans.iter().map(|s| s.text.as_str()).collect())
            .collect()
    }

    /// Places `other` to the right of this block, starting at column
    /// `margin`. Lines of this block are cut or padded to exactly `margin`
    /// columns first; if `other` is taller, empty lines are added.
    pub fn extend_horizontal(&mut self, other: &TextBlock, margin: usize) {
        while self.lines.len() < other.lines.len() {
            self.newline();
        }
        for (line, extra) in self.lines.iter_mut().zip(&other.lines) {
            fit_line(line, margin);
            line.extend(extra.iter().cloned());
        }
    }

    /// Renders the block into a string with ANSI styling, one terminal line
    /// per block line.
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(|spans| spans.iter().map(Span::render).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Cuts or pads `line` so it spans exactly `margin` columns.
fn fit_line(line: &mut Vec<Span>, margin: usize) {
    let mut used = 0;
    let mut keep = 0;
    for span in line.iter_mut() {
        if used >= margin {
            break;
        }
        let w = span.width();
        if used + w > margin {
            span.text = trim_to_width(&span.text, margin - used).to_string();
            used += span.width();
            keep += 1;
            break;
        }
        used += w;
        keep += 1;
    }
    line.truncate(keep);
    if used < margin {
        line.push(Span {
            text: " ".repeat(margin - used),
            styles: Vec::new(),
        });
    }
}
