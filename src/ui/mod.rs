pub mod colors;
mod footer;
mod lists;
mod popups;
mod scrollable_list;

use crate::app::{App, Overlay, ViewState};
use crate::keybindings::KeybindingRegistry;
use colors::{GRAY_COLOR, WHITE_COLOR};
pub use popups::popup_area;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
};

/// Width of the help popup.
const HELP_WIDTH: u16 = 50;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [top, middle, bottom] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        // Title
        let title_middle = Line::from(format!(" {} ", self.view_state.title())).centered();
        let title_right = Line::from(format!("v{} ", env!("CARGO_PKG_VERSION")))
            .right_aligned()
            .style(Style::default().fg(WHITE_COLOR));
        let title = Block::default()
            .title_bottom(title_middle)
            .title_bottom(title_right)
            .style(Style::default().bg(GRAY_COLOR));
        title.render(top, buf);

        // Main view
        match self.view_state {
            ViewState::MainMenu => self.render_main_menu(middle, buf),
            ViewState::WaitingRoom => self.render_waiting_room(middle, buf),
            ViewState::History => self.render_history(middle, buf),
        }

        self.render_footer(bottom, buf);

        // Overlays
        if let Some(ref overlay) = self.overlay {
            match overlay {
                Overlay::Form => self.render_form_popup(area, buf),
                Overlay::Message(message) => self.render_message_popup(message, area, buf),
                Overlay::Error(error_msg) => self.render_error_popup(error_msg, area, buf),
            }
        }

        // Help popup
        if self.help.is_visible() {
            let context = KeybindingRegistry::context_for(&self.view_state, &self.overlay);
            let bindings = self.keybindings.get_keybindings_for_context(&context);
            let title = match &self.overlay {
                Some(Overlay::Form) => self.form.kind().map_or("Form", |kind| kind.title()),
                Some(_) => "Message",
                None => self.view_state.title(),
            };
            let help_area = popup_area(area, HELP_WIDTH, bindings.len() as u16 + 3);
            self.help.render(title, &bindings, help_area, buf);
        }
    }
}
