//! Type-safe key bindings.
//!
//! A [`KeyPress`] is a crossterm key code plus its modifiers. A [`Binding`]
//! groups the presses that trigger one action together with the help text
//! shown for it, and the [`KeyMap`] trait exposes bindings to help views.
//!
//! Key presses can also be written as strings, which is how configuration
//! files name them:
//!
//! ```rust
//! use bubbletea_listing::key::KeyPress;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let k: KeyPress = "ctrl+c".parse().unwrap();
//! assert_eq!(k, KeyPress::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
//!
//! let k: KeyPress = "pgup".parse().unwrap();
//! assert_eq!(k, KeyPress::from(KeyCode::PageUp));
//! ```

use crate::error::KeyParseError;
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use std::fmt;
use std::str::FromStr;

/// A single key press: a key code and the modifiers held with it.
///
/// Shift is dropped for character keys, since the character itself already
/// says whether it was shifted (`'A'` vs `'a'`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers held during the press.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Creates a normalized key press.
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        let modifiers = match code {
            KeyCode::Char(_) => modifiers.difference(KeyModifiers::SHIFT),
            _ => modifiers,
        };
        Self { code, modifiers }
    }

    /// Returns the character this press would insert as text, if any.
    ///
    /// Only unmodified, non-control characters count.
    pub fn printable(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) if self.modifiers.is_empty() && !c.is_control() => Some(c),
            _ => None,
        }
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self::new(code, modifiers)
    }
}

impl From<&KeyMsg> for KeyPress {
    fn from(msg: &KeyMsg) -> Self {
        Self::new(msg.key, msg.modifiers)
    }
}

const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("up", KeyCode::Up),
    ("down", KeyCode::Down),
    ("left", KeyCode::Left),
    ("right", KeyCode::Right),
    ("pgup", KeyCode::PageUp),
    ("pgdown", KeyCode::PageDown),
    ("home", KeyCode::Home),
    ("end", KeyCode::End),
    ("tab", KeyCode::Tab),
    ("backtab", KeyCode::BackTab),
    ("enter", KeyCode::Enter),
    ("backspace", KeyCode::Backspace),
    ("delete", KeyCode::Delete),
    ("insert", KeyCode::Insert),
    ("esc", KeyCode::Esc),
    ("space", KeyCode::Char(' ')),
];

impl FromStr for KeyPress {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts: Vec<&str> = s.split('+').collect();
        // "+" and "ctrl++" name the plus key.
        if s == "+" || s.ends_with("++") {
            parts.truncate(parts.len() - 2);
            parts.push("+");
        }
        let key = match parts.pop() {
            Some(k) if !k.is_empty() => k,
            _ => return Err(KeyParseError::Empty),
        };

        let mut modifiers = KeyModifiers::NONE;
        for m in parts {
            modifiers |= match m.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" | "meta" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => return Err(KeyParseError::UnknownModifier(m.to_string())),
            };
        }

        let mut chars = key.chars();
        let code = match (chars.next(), chars.next()) {
            (Some(c), None) if modifiers.contains(KeyModifiers::SHIFT) => {
                // Shifted characters arrive already shifted: shift+a is 'A'.
                let mut upper = c.to_uppercase();
                match (upper.next(), upper.next()) {
                    (Some(u), None) => KeyCode::Char(u),
                    _ => KeyCode::Char(c),
                }
            }
            (Some(c), None) => KeyCode::Char(c),
            _ => {
                let lower = key.to_ascii_lowercase();
                if let Some((_, code)) = NAMED_KEYS.iter().find(|(name, _)| *name == lower) {
                    *code
                } else if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse().ok()) {
                    KeyCode::F(n)
                } else {
                    return Err(KeyParseError::UnknownKey(key.to_string()));
                }
            }
        };
        Ok(Self::new(code, modifiers))
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            f.write_str("alt+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            f.write_str("shift+")?;
        }
        match self.code {
            KeyCode::Char(' ') => f.write_str("space"),
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::F(n) => write!(f, "f{n}"),
            code => match NAMED_KEYS.iter().find(|(_, c)| *c == code) {
                Some((name, _)) => f.write_str(name),
                None => write!(f, "{code:?}"),
            },
        }
    }
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short rendering of the keys, e.g. `"↑/k"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of key presses bound to one action, with help text.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
}

impl Binding {
    /// Creates a binding from key codes or `(code, modifiers)` pairs.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
        }
    }

    /// Creates a binding from key spec strings such as `"ctrl+["`.
    ///
    /// # Errors
    ///
    /// Returns the first spec that fails to parse.
    pub fn from_specs(specs: &[&str]) -> Result<Self, KeyParseError> {
        let keys = specs
            .iter()
            .map(|s| s.parse())
            .collect::<Result<Vec<KeyPress>, _>>()?;
        Ok(Self::new(keys))
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// The presses that trigger this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether `key` triggers this binding.
    pub fn matches(&self, key: &KeyPress) -> bool {
        self.keys.contains(key)
    }
}

/// Implemented by anything that can describe its key bindings to a help
/// view.
pub trait KeyMap {
    /// Bindings for the compact, single-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings for the expanded help, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_keys() {
        assert_eq!("up".parse::<KeyPress>(), Ok(KeyPress::from(KeyCode::Up)));
        assert_eq!("PgDown".parse::<KeyPress>(), Ok(KeyPress::from(KeyCode::PageDown)));
        assert_eq!("f5".parse::<KeyPress>(), Ok(KeyPress::from(KeyCode::F(5))));
        assert_eq!(
            "space".parse::<KeyPress>(),
            Ok(KeyPress::from(KeyCode::Char(' ')))
        );
    }

    #[test]
    fn test_parse_modifiers() {
        assert_eq!(
            "ctrl+[".parse::<KeyPress>(),
            Ok(KeyPress::new(KeyCode::Char('['), KeyModifiers::CONTROL))
        );
        assert_eq!(
            "alt+ctrl+x".parse::<KeyPress>(),
            Ok(KeyPress::new(
                KeyCode::Char('x'),
                KeyModifiers::ALT | KeyModifiers::CONTROL
            ))
        );
        assert_eq!(
            "shift+a".parse::<KeyPress>(),
            Ok(KeyPress::new(KeyCode::Char('A'), KeyModifiers::SHIFT))
        );
        assert_ne!(
            "shift+a".parse::<KeyPress>(),
            Ok(KeyPress::from(KeyCode::Char('a')))
        );
        assert_eq!(
            "ctrl+shift+x".parse::<KeyPress>(),
            Ok(KeyPress::new(KeyCode::Char('X'), KeyModifiers::CONTROL))
        );
        assert_eq!(
            "ctrl++".parse::<KeyPress>(),
            Ok(KeyPress::new(KeyCode::Char('+'), KeyModifiers::CONTROL))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<KeyPress>(), Err(KeyParseError::Empty));
        assert_eq!("ctrl+".parse::<KeyPress>(), Err(KeyParseError::Empty));
        assert_eq!(
            "hyper+x".parse::<KeyPress>(),
            Err(KeyParseError::UnknownModifier("hyper".into()))
        );
        assert_eq!(
            "pageup".parse::<KeyPress>(),
            Err(KeyParseError::UnknownKey("pageup".into()))
        );
    }

    #[test]
    fn test_shift_dropped_for_chars() {
        let k = KeyPress::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(k.modifiers, KeyModifiers::NONE);
        assert_eq!(k.printable(), Some('A'));

        let k = KeyPress::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(k.modifiers, KeyModifiers::SHIFT);
    }

    #[test]
    fn test_printable() {
        assert_eq!(KeyPress::from(KeyCode::Char('é')).printable(), Some('é'));
        assert_eq!(KeyPress::from(KeyCode::Enter).printable(), None);
        assert_eq!(
            KeyPress::new(KeyCode::Char('a'), KeyModifiers::CONTROL).printable(),
            None
        );
    }

    #[test]
    fn test_display_round_trips() {
        for spec in ["ctrl+c", "pgup", "tab", "alt+x", "f12", "space"] {
            let k: KeyPress = spec.parse().unwrap();
            assert_eq!(k.to_string(), spec);
        }
    }

    #[test]
    fn test_binding_matches() {
        let b = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up");
        assert!(b.matches(&KeyPress::from(KeyCode::Char('k'))));
        assert!(!b.matches(&KeyPress::from(KeyCode::Down)));
        assert_eq!(b.help().desc, "up");

        let b = Binding::from_specs(&["ctrl+["]).unwrap();
        assert!(b.matches(&KeyPress::new(KeyCode::Char('['), KeyModifiers::CONTROL)));
    }
}
