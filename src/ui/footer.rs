use crate::app::{App, ViewState};
use crate::ui::colors::{FOOTER_BG, STATUS_FG};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Widget},
};

impl App {
    /// Position information for the right side of the footer.
    pub(super) fn format_context_info(&self) -> String {
        match self.view_state {
            ViewState::MainMenu => String::new(),
            ViewState::WaitingRoom => format!("{} waiting", self.queue.len()),
            ViewState::History => match self.history.cursor_position() {
                Some(position) => format!("record {}/{}", position + 1, self.history.len()),
                None => format!("{} records", self.history.len()),
            },
        }
    }

    pub(super) fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let left = Line::from(format!(" {}", self.status.as_deref().unwrap_or_default()))
            .style(Style::default().fg(STATUS_FG));
        let middle = Line::from("F1:View Help").centered();
        let right = Line::from(self.format_context_info() + " ").right_aligned();

        let footer = Block::default()
            .title_bottom(left)
            .title_bottom(middle)
            .title_bottom(right)
            .style(Style::default().bg(FOOTER_BG));
        footer.render(area, buf);
    }
}
