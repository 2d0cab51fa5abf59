//! Editable player-name field.

use noughts_core::Mark;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Bordered field showing a player's name. When focused, the border is
/// highlighted and a caret follows the text.
#[derive(Debug, Clone, Copy)]
pub struct NameInput<'a> {
    mark: Mark,
    value: &'a str,
    focused: bool,
}

impl<'a> NameInput<'a> {
    /// Field for `mark` showing `value`.
    pub fn new(mark: Mark, value: &'a str, focused: bool) -> Self {
        Self {
            mark,
            value,
            focused,
        }
    }
}

impl Widget for NameInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border, text_style) = if self.focused {
            (Style::default().fg(Color::Yellow), Style::default().fg(Color::White))
        } else {
            (Style::default().fg(Color::DarkGray), Style::default())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" Player {} ", self.mark));

        let inner_width = block.inner(area).width as usize;
        let text = if self.focused {
            format!("{}▏", visible_tail(self.value, inner_width.saturating_sub(1)))
        } else {
            visible_tail(self.value, inner_width).to_string()
        };

        Paragraph::new(text)
            .style(text_style)
            .block(block)
            .render(area, buf);
    }
}

/// Longest suffix of `value` that fits in `width` terminal columns, so the
/// end of a long name stays visible while typing.
pub fn visible_tail(value: &str, width: usize) -> &str {
    let mut rest = value;
    while rest.width() > width {
        let mut chars = rest.chars();
        chars.next();
        rest = chars.as_str();
    }
    rest
}
