//! One-line key hints for the mode that has focus
//!
//! Hints come in groups (movement, filtering, leaving). Groups are drawn
//! left to right and a group that does not fit the width is dropped whole
//! rather than cut mid-hint.

use crate::tui::state::Mode;
use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const HINT_GAP: &str = "  ";
const GROUP_SEPARATOR: &str = " │ ";

/// A key and the action it triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    key: &'static str,
    action: &'static str,
}

impl KeyHint {
    const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }

    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    #[must_use]
    pub const fn action(&self) -> &'static str {
        self.action
    }
}

const NORMAL_HINTS: &[&[KeyHint]] = &[
    &[KeyHint::new("Arrows", "move"), KeyHint::new("Enter", "details")],
    &[KeyHint::new("Tab", "category"), KeyHint::new("F2", "categories")],
    &[KeyHint::new("F1", "help"), KeyHint::new("Esc", "quit")],
];

const DETAILS_HINTS: &[&[KeyHint]] = &[&[KeyHint::new("Esc/Enter/q", "close")]];

const MENU_HINTS: &[&[KeyHint]] = &[
    &[KeyHint::new("↑/↓", "move"), KeyHint::new("Enter", "select")],
    &[KeyHint::new("Esc", "close")],
];

const HELP_HINTS: &[&[KeyHint]] = &[&[KeyHint::new("any key", "close")]];

/// Hint groups for the mode that currently has focus
#[must_use]
pub const fn hint_groups(mode: Mode) -> &'static [&'static [KeyHint]] {
    match mode {
        Mode::Normal => NORMAL_HINTS,
        Mode::Details => DETAILS_HINTS,
        Mode::CategoryMenu => MENU_HINTS,
        Mode::Help => HELP_HINTS,
    }
}

/// Bottom line showing the hints for one mode
pub struct HelpBar<'a> {
    groups: &'static [&'static [KeyHint]],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn for_mode(mode: Mode, theme: &'a Theme) -> Self {
        Self {
            groups: hint_groups(mode),
            theme,
        }
    }

    fn group_spans(&self, group: &[KeyHint]) -> Vec<Span<'static>> {
        let mut spans = Vec::with_capacity(group.len() * 4);
        for (i, hint) in group.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(HINT_GAP));
            }
            spans.push(Span::styled(hint.key, self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action));
        }
        spans
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let available = usize::from(area.width);
        let mut line = Line::default();

        for group in self.groups {
            let spans = self.group_spans(group);
            let separator = (!line.spans.is_empty())
                .then(|| Span::styled(GROUP_SEPARATOR, self.theme.dimmed_style()));

            let needed = separator.as_ref().map_or(0, Span::width)
                + spans.iter().map(Span::width).sum::<usize>();
            if line.width() + needed > available {
                break;
            }

            line.spans.extend(separator);
            line.spans.extend(spans);
        }

        Paragraph::new(line).render(area, buf);
    }
}
