//! Keybinding system
//!
//! Maps keyboard input to commands. Supports single keys, modifier
//! combinations and two-key sequences such as "g g".
//!
//! Key patterns are textual and serializable, so a keymap could be loaded
//! from a file later on.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::command_id::CommandId;

/// A second key must follow within this time to complete a sequence
const SEQUENCE_TIMEOUT: Duration = Duration::from_secs(2);

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual representation of the key(s) - e.g., "ctrl+c", "g g", "pageup"
    pub keys: String,
    /// Display hint for the UI - e.g., "PgUp", "gg"
    pub hint: String,
    /// The command this binding triggers
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedKeyPattern {
    /// Single key with optional modifiers
    Single {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Two-key sequence (e.g., "g g" -> press 'g', then 'g')
    Sequence { first: char, second: char },
}

/// Parse a textual key pattern into a matchable form
///
/// Supported formats:
/// - Single char: "q", "+", "G" (case-sensitive for single chars)
/// - With modifiers: "ctrl+c", "shift+tab"
/// - Special keys: "enter", "esc", "pageup", "pagedown", "up", "down", ...
/// - Two-key sequence: "g g" (space-separated)
pub fn parse_key_pattern(pattern: &str) -> Option<ParsedKeyPattern> {
    let pattern = pattern.trim();

    if pattern.contains(' ') {
        let parts: Vec<&str> = pattern.split_whitespace().collect();
        if let [first, second] = parts.as_slice() {
            if first.chars().count() == 1 && second.chars().count() == 1 {
                return Some(ParsedKeyPattern::Sequence {
                    first: first.chars().next()?,
                    second: second.chars().next()?,
                });
            }
        }
        return None;
    }

    // Single characters keep their case; "+" is a key here, not a separator
    if pattern.chars().count() == 1 {
        let c = pattern.chars().next()?;
        // Uppercase letters come with SHIFT modifier from terminal
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(ParsedKeyPattern::Single {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let pattern_lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = pattern_lower.as_str();

    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => break,
        }
        key_part = rest;
    }

    let code = parse_key_code(key_part)?;
    Some(ParsedKeyPattern::Single { code, modifiers })
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),
        s if s.starts_with('f') && s.len() > 1 => s[1..].parse().ok().map(KeyCode::F),
        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),
        _ => None,
    }
}

/// First key of a sequence, waiting for the second one
#[derive(Debug, Clone)]
pub struct PendingKey {
    pub key: char,
    pub timestamp: Instant,
}

impl PendingKey {
    pub fn new(key: char) -> Self {
        Self {
            key,
            timestamp: Instant::now(),
        }
    }

    fn is_expired(&self) -> bool {
        self.timestamp.elapsed() >= SEQUENCE_TIMEOUT
    }
}

/// Result of matching a key against the keymap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMatch {
    /// One or more commands are bound to the key
    Commands(Vec<CommandId>),
    /// The key starts a sequence, wait for the next one
    Pending(char),
    /// Nothing is bound to the key
    Unbound,
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, ParsedKeyPattern)>,
}

impl Keymap {
    /// Create a new keymap; bindings with unparsable keys are skipped
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring invalid key pattern {:?}", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings: parsed }
    }

    /// Try to match a key event against the keymap
    ///
    /// A pending first key completes a sequence if possible; otherwise the
    /// key is matched on its own.
    pub fn match_key(&self, key: &KeyEvent, pending: Option<&PendingKey>) -> KeyMatch {
        let current_char = match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        };

        if let (Some(pending), Some(current)) = (pending.filter(|p| !p.is_expired()), current_char)
        {
            let completed = self.bindings.iter().find_map(|(binding, pattern)| match pattern {
                ParsedKeyPattern::Sequence { first, second }
                    if *first == pending.key && *second == current =>
                {
                    Some(binding.command)
                }
                _ => None,
            });
            if let Some(command) = completed {
                return KeyMatch::Commands(vec![command]);
            }
        }

        let mut matches = Vec::new();
        let mut starts_sequence = false;

        for (binding, pattern) in &self.bindings {
            match pattern {
                ParsedKeyPattern::Single { code, modifiers } => {
                    if key.code == *code && modifiers_match(key, *modifiers) {
                        matches.push(binding.command);
                    }
                }
                ParsedKeyPattern::Sequence { first, .. } => {
                    starts_sequence |= current_char == Some(*first);
                }
            }
        }

        if !matches.is_empty() {
            KeyMatch::Commands(matches)
        } else if let (true, Some(c)) = (starts_sequence, current_char) {
            KeyMatch::Pending(c)
        } else {
            KeyMatch::Unbound
        }
    }

    /// Get a compact hint string for a command (e.g., "k/↑" for NavigatePrevious)
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut unique_hints: Vec<&str> = Vec::new();
        for (binding, _) in self.bindings.iter().filter(|(b, _)| b.command == command) {
            if !unique_hints.contains(&binding.hint.as_str()) {
                unique_hints.push(&binding.hint);
            }
        }

        if unique_hints.is_empty() {
            None
        } else {
            Some(unique_hints.join("/"))
        }
    }
}

/// Symbols such as "+" arrive with or without SHIFT depending on the terminal
fn modifiers_match(key: &KeyEvent, expected: KeyModifiers) -> bool {
    match key.code {
        KeyCode::Char(c) if !c.is_alphabetic() => {
            key.modifiers - KeyModifiers::SHIFT == expected - KeyModifiers::SHIFT
        }
        KeyCode::BackTab => true,
        _ => key.modifiers == expected,
    }
}

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    Keymap::new(vec![
        // Log source
        KeyBinding::new("o", "o", LogOpen),
        KeyBinding::new("c", "c", LogClear),
        KeyBinding::new("r", "r", LogRefresh),
        KeyBinding::new("a", "a", LogToggleAutoRefresh),
        KeyBinding::new("+", "+", LogIncreaseInterval),
        KeyBinding::new("-", "-", LogDecreaseInterval),
        // Display
        KeyBinding::new("n", "n", ViewToggleLineNumbers),
        KeyBinding::new("w", "w", ViewToggleWrap),
        KeyBinding::new("]", "]", ViewWidenWrap),
        KeyBinding::new("[", "[", ViewNarrowWrap),
        // Scrolling
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("up", "↑", NavigatePrevious),
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("pageup", "PgUp", ScrollPageUp),
        KeyBinding::new("pagedown", "PgDn", ScrollPageDown),
        KeyBinding::new("g g", "gg", NavigateToTop),
        KeyBinding::new("home", "Home", NavigateToTop),
        KeyBinding::new("G", "G", NavigateToBottom),
        KeyBinding::new("end", "End", NavigateToBottom),
        // General
        KeyBinding::new("q", "q", GlobalQuit),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_uppercase_key_pattern_parsing() {
        assert_eq!(
            parse_key_pattern("G"),
            Some(ParsedKeyPattern::Single {
                code: KeyCode::Char('G'),
                modifiers: KeyModifiers::SHIFT,
            })
        );
        assert_eq!(
            parse_key_pattern("g"),
            Some(ParsedKeyPattern::Single {
                code: KeyCode::Char('g'),
                modifiers: KeyModifiers::NONE,
            })
        );
    }

    #[test]
    fn test_symbol_and_modifier_patterns() {
        assert_eq!(
            parse_key_pattern("+"),
            Some(ParsedKeyPattern::Single {
                code: KeyCode::Char('+'),
                modifiers: KeyModifiers::NONE,
            })
        );
        assert_eq!(
            parse_key_pattern("ctrl+c"),
            Some(ParsedKeyPattern::Single {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            })
        );
        assert_eq!(
            parse_key_pattern("g g"),
            Some(ParsedKeyPattern::Sequence {
                first: 'g',
                second: 'g'
            })
        );
        assert_eq!(parse_key_pattern("g g g"), None);
        assert_eq!(parse_key_pattern("hyper+x"), None);
    }

    #[test]
    fn test_single_key_matches() {
        let keymap = default_keymap();
        assert_eq!(
            keymap.match_key(&press(KeyCode::Char('r'), KeyModifiers::NONE), None),
            KeyMatch::Commands(vec![CommandId::LogRefresh])
        );
        assert_eq!(
            keymap.match_key(&press(KeyCode::PageDown, KeyModifiers::NONE), None),
            KeyMatch::Commands(vec![CommandId::ScrollPageDown])
        );
    }

    #[test]
    fn test_plus_matches_with_or_without_shift() {
        let keymap = default_keymap();
        let expected = KeyMatch::Commands(vec![CommandId::LogIncreaseInterval]);
        assert_eq!(
            keymap.match_key(&press(KeyCode::Char('+'), KeyModifiers::NONE), None),
            expected
        );
        assert_eq!(
            keymap.match_key(&press(KeyCode::Char('+'), KeyModifiers::SHIFT), None),
            expected
        );
    }

    #[test]
    fn test_ctrl_modified_letter_is_not_a_hotkey() {
        let keymap = default_keymap();
        assert_eq!(
            keymap.match_key(&press(KeyCode::Char('r'), KeyModifiers::CONTROL), None),
            KeyMatch::Unbound
        );
    }

    #[test]
    fn test_sequence_needs_two_keys() {
        let keymap = default_keymap();
        let g = press(KeyCode::Char('g'), KeyModifiers::NONE);

        assert_eq!(keymap.match_key(&g, None), KeyMatch::Pending('g'));

        let pending = PendingKey::new('g');
        assert_eq!(
            keymap.match_key(&g, Some(&pending)),
            KeyMatch::Commands(vec![CommandId::NavigateToTop])
        );
    }

    #[test]
    fn test_expired_pending_key_starts_over() {
        let keymap = default_keymap();
        let Some(timestamp) = Instant::now().checked_sub(SEQUENCE_TIMEOUT) else {
            return;
        };
        let pending = PendingKey {
            key: 'g',
            timestamp,
        };

        assert_eq!(
            keymap.match_key(&press(KeyCode::Char('g'), KeyModifiers::NONE), Some(&pending)),
            KeyMatch::Pending('g')
        );
    }

    #[test]
    fn test_uppercase_key_matching() {
        let keymap = default_keymap();
        assert_eq!(
            keymap.match_key(&press(KeyCode::Char('G'), KeyModifiers::SHIFT), None),
            KeyMatch::Commands(vec![CommandId::NavigateToBottom])
        );
    }

    #[test]
    fn test_compact_hint_joins_with_slash() {
        let keymap = default_keymap();
        assert_eq!(
            keymap.compact_hint_for_command(CommandId::NavigatePrevious),
            Some("k/↑".to_string())
        );
        assert_eq!(
            keymap.compact_hint_for_command(CommandId::NavigateToTop),
            Some("gg/Home".to_string())
        );
        assert_eq!(keymap.compact_hint_for_command(CommandId::GlobalClose), None);
    }

    #[test]
    fn test_invalid_bindings_are_skipped() {
        let keymap = Keymap::new(vec![
            KeyBinding::new("q", "q", CommandId::GlobalQuit),
            KeyBinding::new("not a key", "?", CommandId::LogClear),
        ]);
        assert_eq!(keymap.compact_hint_for_command(CommandId::LogClear), None);
        assert_eq!(
            keymap.compact_hint_for_command(CommandId::GlobalQuit),
            Some("q".to_string())
        );
    }
}
