//! Screen layout: turns the app state into styled lines.

use signup_form::{FieldLine, FieldView};
use unicode_width::UnicodeWidthChar;

use crate::app::{App, Notice};
use crate::focus::Target;
use crate::text_input::Caret;

const TITLE: &str = "Sign up";
const HELP: &str = "Tab/Shift+Tab: move  Enter: next/submit  Ctrl+S: submit  Ctrl+R: reset  Esc: quit";
const INDENT: &str = "  ";

/// How a span is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Title,
    Muted,
    Label,
    Input,
    InvalidInput,
    Cursor,
    Error,
    Button,
    FocusedButton,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

pub type Line = Vec<Span>;

/// Lay out the whole screen for a terminal `width` cells wide.
pub fn screen(app: &App, width: u16) -> Vec<Line> {
    let inner = (width as usize).saturating_sub(INDENT.len() * 2).max(1);
    let mut lines: Vec<Line> = vec![vec![Span::new(TITLE, Tone::Title)], Vec::new()];

    for view in app.form().views() {
        let focused = app.focused() == Target::Field(view.field);
        let caret = app.caret(view.field);
        lines.extend(field_lines(&view, focused, caret, inner));
        lines.push(Vec::new());
    }

    let button = if app.focused() == Target::Submit {
        Tone::FocusedButton
    } else {
        Tone::Button
    };
    lines.push(vec![
        Span::new(INDENT, Tone::Normal),
        Span::new("[ Submit ]", button),
    ]);
    lines.push(Vec::new());

    if let Some(notice) = app.notice() {
        let (text, tone) = match notice {
            Notice::Success(text) => (text, Tone::Success),
            Notice::Error(text) => (text, Tone::Error),
            Notice::Info(text) => (text, Tone::Muted),
        };
        lines.push(vec![Span::new(INDENT, Tone::Normal), Span::new(text, tone)]);
    }
    lines.push(vec![Span::new(HELP, Tone::Muted)]);

    lines
}

fn field_lines(view: &FieldView, focused: bool, caret: Caret, width: usize) -> Vec<Line> {
    let marker = if focused { "> " } else { INDENT };

    view.lines(width)
        .into_iter()
        .map(|line| match line {
            FieldLine::Label(label) => {
                vec![Span::new(marker, Tone::Label), Span::new(label, Tone::Label)]
            }
            FieldLine::Input { text, invalid } => {
                let tone = if invalid { Tone::InvalidInput } else { Tone::Input };
                let mut spans = vec![Span::new(INDENT, Tone::Normal)];
                if focused {
                    spans.extend(input_with_cursor(&view.display_value(), caret, width, tone));
                } else {
                    spans.push(Span::new(text, tone));
                }
                spans
            }
            FieldLine::Error(message) => {
                vec![Span::new(INDENT, Tone::Normal), Span::new(message, Tone::Error)]
            }
        })
        .collect()
}

/// Render input text with a reverse-video cursor, scrolled so the cursor
/// stays within `width` terminal cells.
fn input_with_cursor(text: &str, caret: Caret, width: usize, tone: Tone) -> Vec<Span> {
    let chars: Vec<char> = text.chars().collect();
    let cursor = caret.cursor.min(chars.len());
    let cell = |c: &char| c.width().unwrap_or(0);

    // Cursor at end - show a space as cursor
    let at = chars.get(cursor).copied().unwrap_or(' ');
    let mut used = cell(&at).max(1);

    let mut start = cursor;
    while start > 0 && used + cell(&chars[start - 1]) <= width {
        start -= 1;
        used += cell(&chars[start]);
    }

    let mut end = (cursor + 1).min(chars.len());
    while end < chars.len() && used + cell(&chars[end]) <= width {
        used += cell(&chars[end]);
        end += 1;
    }

    let before: String = chars[start..cursor].iter().collect();
    let after: String = chars[(cursor + 1).min(end)..end].iter().collect();

    vec![
        Span::new(before, tone),
        Span::new(at.to_string(), Tone::Cursor),
        Span::new(after, tone),
    ]
}
