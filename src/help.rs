use crate::command::Command;
use crate::ui::colors::{HELP_BG, HELP_BORDER_FG, HELP_HEADER_FG, HELP_HIGHLIGHT_FG};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Width of the key column in the help popup.
const KEY_COLUMN_WIDTH: usize = 12;

#[derive(Debug, Default)]
pub struct Help {
    visible: bool,
}

impl Help {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Renders the bindings of the active screen.
    pub fn render(&self, title: &str, bindings: &[(String, Command)], area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let mut lines = vec![
            Line::from(title.to_string()).style(Style::default().fg(HELP_HEADER_FG).add_modifier(Modifier::BOLD)),
        ];
        lines.extend(bindings.iter().map(|(key, command)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", key, width = KEY_COLUMN_WIDTH),
                    Style::default().fg(HELP_HIGHLIGHT_FG),
                ),
                Span::raw(command.description()),
            ])
        }));

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(HELP_BORDER_FG))
            .style(Style::default().bg(HELP_BG));

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
