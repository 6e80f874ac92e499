//! Single-line text editing.
//!
//! The edited text is owned by the form controller; this module only keeps
//! the cursor and selection for each input and applies key presses to a
//! borrowed copy of the text.

use crate::event::{Key, Modifiers};

/// Cursor and selection for one input, in characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Caret {
    pub cursor: usize,
    /// Anchor position for selection. When Some and != cursor, text is selected.
    pub anchor: Option<usize>,
}

impl Caret {
    /// Caret placed after the last character of `text`.
    pub fn at_end(text: &str) -> Self {
        Self {
            cursor: text.chars().count(),
            anchor: None,
        }
    }

    /// Get the selection range as (start, end) where start <= end.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.anchor.and_then(|a| {
            if a != self.cursor {
                Some(if a < self.cursor {
                    (a, self.cursor)
                } else {
                    (self.cursor, a)
                })
            } else {
                None
            }
        })
    }

    /// Clear the selection anchor.
    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    /// Keep the caret inside `text`, which may have been replaced under it.
    fn clamp(&mut self, text: &str) {
        let len = text.chars().count();
        self.cursor = self.cursor.min(len);
        if let Some(anchor) = self.anchor {
            self.anchor = Some(anchor.min(len));
        }
    }
}

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// Apply a key press to `text`.
pub fn handle_key(
    text: &mut String,
    caret: &mut Caret,
    key: Key,
    modifiers: Modifiers,
) -> TextEditResult {
    caret.clamp(text);

    match key {
        Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
            insert_char(text, caret, c);
            TextEditResult::Changed
        }

        Key::Backspace if modifiers.none() => {
            if delete_back(text, caret) {
                TextEditResult::Changed
            } else {
                TextEditResult::Handled
            }
        }

        Key::Delete if modifiers.none() => {
            if delete_forward(text, caret) {
                TextEditResult::Changed
            } else {
                TextEditResult::Handled
            }
        }

        Key::Left if !modifiers.ctrl => {
            move_cursor(text, caret, -1, modifiers.shift);
            TextEditResult::Handled
        }

        Key::Right if !modifiers.ctrl => {
            move_cursor(text, caret, 1, modifiers.shift);
            TextEditResult::Handled
        }

        Key::Home if !modifiers.ctrl => {
            move_to(caret, 0, modifiers.shift);
            TextEditResult::Handled
        }

        Key::End if !modifiers.ctrl => {
            move_to(caret, text.chars().count(), modifiers.shift);
            TextEditResult::Handled
        }

        Key::Char('a') if modifiers.ctrl => {
            if !text.is_empty() {
                caret.anchor = Some(0);
                caret.cursor = text.chars().count();
            }
            TextEditResult::Handled
        }

        _ => TextEditResult::Ignored,
    }
}

/// Insert a character at cursor, replacing selection if any.
fn insert_char(text: &mut String, caret: &mut Caret, c: char) {
    if let Some((start, end)) = caret.selection() {
        remove_range(text, start, end);
        caret.cursor = start;
        caret.clear_selection();
    }
    let at = char_to_byte_index(text, caret.cursor);
    text.insert(at, c);
    caret.cursor += 1;
}

/// Delete character before cursor or delete selection.
/// Returns true if text changed.
fn delete_back(text: &mut String, caret: &mut Caret) -> bool {
    if let Some((start, end)) = caret.selection() {
        remove_range(text, start, end);
        caret.cursor = start;
        caret.clear_selection();
        true
    } else if caret.cursor > 0 {
        remove_range(text, caret.cursor - 1, caret.cursor);
        caret.cursor -= 1;
        true
    } else {
        false
    }
}

/// Delete character after cursor or delete selection.
/// Returns true if text changed.
fn delete_forward(text: &mut String, caret: &mut Caret) -> bool {
    if let Some((start, end)) = caret.selection() {
        remove_range(text, start, end);
        caret.cursor = start;
        caret.clear_selection();
        true
    } else if caret.cursor < text.chars().count() {
        remove_range(text, caret.cursor, caret.cursor + 1);
        true
    } else {
        false
    }
}

/// Move cursor by delta characters.
fn move_cursor(text: &str, caret: &mut Caret, delta: i32, extend_selection: bool) {
    let char_count = text.chars().count();

    if extend_selection && caret.anchor.is_none() {
        caret.anchor = Some(caret.cursor);
    } else if !extend_selection {
        // Collapse an existing selection to the edge in the direction of travel
        if let Some((start, end)) = caret.selection() {
            caret.cursor = if delta < 0 { start } else { end };
            caret.clear_selection();
            return;
        }
        caret.clear_selection();
    }

    caret.cursor = (caret.cursor as i32 + delta).clamp(0, char_count as i32) as usize;
}

fn move_to(caret: &mut Caret, position: usize, extend_selection: bool) {
    if extend_selection && caret.anchor.is_none() {
        caret.anchor = Some(caret.cursor);
    } else if !extend_selection {
        caret.clear_selection();
    }
    caret.cursor = position;
}

/// Remove the characters in `start..end`.
fn remove_range(text: &mut String, start: usize, end: usize) {
    let start = char_to_byte_index(text, start);
    let end = char_to_byte_index(text, end);
    text.replace_range(start..end, "");
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(text: &mut String, caret: &mut Caret, key: Key) -> TextEditResult {
        handle_key(text, caret, key, Modifiers::default())
    }

    fn shift() -> Modifiers {
        Modifiers {
            shift: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_typing_appends() {
        let mut text = String::new();
        let mut caret = Caret::default();
        for c in "Ann".chars() {
            assert_eq!(press(&mut text, &mut caret, Key::Char(c)), TextEditResult::Changed);
        }
        assert_eq!(text, "Ann");
        assert_eq!(caret.cursor, 3);
    }

    #[test]
    fn test_insert_in_middle_of_multibyte_text() {
        let mut text = String::from("añb");
        let mut caret = Caret { cursor: 2, anchor: None };
        press(&mut text, &mut caret, Key::Char('x'));
        assert_eq!(text, "añxb");
        assert_eq!(caret.cursor, 3);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut text = String::from("secret");
        let mut caret = Caret::at_end(&text);
        assert_eq!(press(&mut text, &mut caret, Key::Backspace), TextEditResult::Changed);
        assert_eq!(text, "secre");

        press(&mut text, &mut caret, Key::Home);
        assert_eq!(press(&mut text, &mut caret, Key::Backspace), TextEditResult::Handled);
        assert_eq!(press(&mut text, &mut caret, Key::Delete), TextEditResult::Changed);
        assert_eq!(text, "ecre");
    }

    #[test]
    fn test_shift_selection_replaced_by_typing() {
        let mut text = String::from("hello");
        let mut caret = Caret::at_end(&text);
        handle_key(&mut text, &mut caret, Key::Left, shift());
        handle_key(&mut text, &mut caret, Key::Left, shift());
        assert_eq!(caret.selection(), Some((3, 5)));

        press(&mut text, &mut caret, Key::Char('p'));
        assert_eq!(text, "help");
        assert_eq!(caret.selection(), None);
    }

    #[test]
    fn test_select_all_then_delete() {
        let mut text = String::from("a@b.com");
        let mut caret = Caret::default();
        let ctrl = Modifiers {
            ctrl: true,
            ..Default::default()
        };
        assert_eq!(
            handle_key(&mut text, &mut caret, Key::Char('a'), ctrl),
            TextEditResult::Handled
        );
        press(&mut text, &mut caret, Key::Backspace);
        assert_eq!(text, "");
        assert_eq!(caret.cursor, 0);
    }

    #[test]
    fn test_caret_clamped_after_external_change() {
        let mut text = String::new();
        let mut caret = Caret { cursor: 9, anchor: Some(4) };
        press(&mut text, &mut caret, Key::Char('z'));
        assert_eq!(text, "z");
        assert_eq!(caret.cursor, 1);
    }

    #[test]
    fn test_unhandled_keys_pass_through() {
        let mut text = String::new();
        let mut caret = Caret::default();
        assert_eq!(press(&mut text, &mut caret, Key::Tab), TextEditResult::Ignored);
        assert_eq!(press(&mut text, &mut caret, Key::Enter), TextEditResult::Ignored);
    }
}
