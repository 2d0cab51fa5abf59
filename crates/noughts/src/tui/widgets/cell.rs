//! A single board cell.

use noughts_core::{Cell, Mark, Position};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Widget},
};

/// Renders one cell: its mark, or its 1-based key when empty.
///
/// Purely presentational. Whether a click on it is legal is decided by the
/// session, never here.
#[derive(Debug, Clone, Copy)]
pub struct CellView {
    position: Position,
    cell: Cell,
    highlighted: bool,
    focused: bool,
}

impl CellView {
    /// View of `cell` sitting at `position`.
    pub fn new(position: Position, cell: Cell) -> Self {
        Self {
            position,
            cell,
            highlighted: false,
            focused: false,
        }
    }

    /// Marks the cell as part of the winning line.
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// Marks the cell as under the keyboard cursor.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn symbol(&self) -> String {
        match self.cell {
            Cell::Empty => (self.position.to_index() + 1).to_string(),
            Cell::Marked(mark) => mark.to_string(),
        }
    }

    fn style(&self) -> Style {
        let base = match self.cell {
            Cell::Empty => Style::default().fg(Color::DarkGray),
            Cell::Marked(Mark::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            Cell::Marked(Mark::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        };
        match (self.highlighted, self.focused) {
            (true, true) => base
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::UNDERLINED),
            (true, false) => base.bg(Color::Green).fg(Color::Black),
            (false, true) => base.bg(Color::White).fg(Color::Black),
            (false, false) => base,
        }
    }
}

impl Widget for CellView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        let style = self.style();
        buf.set_style(area, style);

        // Symbol on the middle line.
        let line = Rect {
            y: area.y + area.height / 2,
            height: area.height.min(1),
            ..area
        };
        Paragraph::new(self.symbol())
            .style(style)
            .alignment(Alignment::Center)
            .render(line, buf);
    }
}
