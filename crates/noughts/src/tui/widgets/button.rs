//! Clickable action button.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// A bordered label with its keyboard shortcut.
#[derive(Debug, Clone, Copy)]
pub struct Button<'a> {
    label: &'a str,
    hotkey: char,
}

impl<'a> Button<'a> {
    /// Button reading `label`, triggered by `hotkey` on the keyboard.
    pub fn new(label: &'a str, hotkey: char) -> Self {
        Self { label, hotkey }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(format!("{} ({})", self.label, self.hotkey))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
