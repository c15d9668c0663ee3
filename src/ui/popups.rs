use crate::app::App;
use crate::ui::colors::{
    FORM_BORDER, FORM_FOCUSED_FG, FORM_INPUT_BG, FORM_LABEL_FG, MESSAGE_BORDER, MESSAGE_ERROR_FG, MESSAGE_INFO_FG,
};
use ratatui::widgets::{BorderType, Padding, Wrap};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use tui_input::Input;

/// Widest a message popup grows before its text wraps.
const MAX_MESSAGE_WIDTH: u16 = 90;
/// Width of the form popups.
const FORM_WIDTH: u16 = 60;

/// Calculates a centered popup area within the given rect.
///
/// The popup will be centered with at least 2 characters margin on all sides.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let min_margin = 2;

    let max_width = area.width.saturating_sub(2 * min_margin);
    let max_height = area.height.saturating_sub(2 * min_margin);

    let popup_width = width.min(max_width);
    let popup_height = height.min(max_height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x,
        y,
        width: popup_width,
        height: popup_height,
    }
}

/// Splits the input text around the cursor so the cursor cell can be highlighted.
fn input_spans(input: &Input, focused: bool) -> Vec<Span<'static>> {
    let value = input.value();
    if !focused {
        return vec![Span::raw(format!(" {}", value))];
    }

    let cursor = input.cursor();
    let before: String = value.chars().take(cursor).collect();
    let at: String = value.chars().nth(cursor).map_or(" ".to_string(), String::from);
    let after: String = value.chars().skip(cursor + 1).collect();

    vec![
        Span::raw(format!(" {}", before)),
        Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(after),
    ]
}

impl App {
    /// Renders a centered popup that adapts to content size.
    pub(super) fn render_popup(&self, message: &str, title: &str, title_color: Color, area: Rect, buf: &mut Buffer) {
        let max_line_width = message.lines().map(|line| line.chars().count()).max().unwrap_or(0);

        let popup_width = (max_line_width as u16 + 6).min(MAX_MESSAGE_WIDTH);
        let text_width = popup_width.saturating_sub(6).max(1) as usize;
        let wrapped_lines: usize = message
            .lines()
            .map(|line| line.chars().count().div_ceil(text_width).max(1))
            .sum();
        let popup_height = wrapped_lines as u16 + 4;
        let popup_area = popup_area(area, popup_width, popup_height);

        Clear.render(popup_area, buf);

        let border_color = if title == "Error" {
            MESSAGE_ERROR_FG
        } else {
            MESSAGE_BORDER
        };

        let block = Block::default()
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(title_color))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .padding(Padding::new(2, 2, 1, 1));

        let popup = Paragraph::new(message)
            .block(block)
            .wrap(Wrap { trim: false })
            .alignment(Alignment::Left);

        popup.render(popup_area, buf);
    }

    /// Renders a centered message popup that adapts to content size.
    pub(super) fn render_message_popup(&self, message: &str, area: Rect, buf: &mut Buffer) {
        self.render_popup(message, "Message", MESSAGE_INFO_FG, area, buf);
    }

    /// Renders a centered error popup that adapts to content size.
    pub(super) fn render_error_popup(&self, error_msg: &str, area: Rect, buf: &mut Buffer) {
        self.render_popup(error_msg, "Error", MESSAGE_ERROR_FG, area, buf);
    }

    /// Renders the active form with one label and one input line per field.
    pub(super) fn render_form_popup(&self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();
        for (i, field) in self.form.fields().iter().enumerate() {
            let focused = i == self.form.focused();
            let label_style = if focused {
                Style::default().fg(FORM_FOCUSED_FG).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(FORM_LABEL_FG)
            };
            lines.push(Line::from(field.label.clone()).style(label_style));
            lines.push(Line::from(input_spans(&field.input, focused)).style(Style::default().bg(FORM_INPUT_BG)));
        }
        if let Some(error) = self.form.error() {
            lines.push(Line::default());
            lines.push(Line::from(error.to_string()).style(Style::default().fg(MESSAGE_ERROR_FG)));
        }

        let popup_area = popup_area(area, FORM_WIDTH, lines.len() as u16 + 4);
        Clear.render(popup_area, buf);

        let title = self.form.kind().map_or("Form", |kind| kind.title());
        let block = Block::default()
            .title(format!(" {} ", title))
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(" Enter: next/submit  Esc: cancel ").centered())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(FORM_BORDER))
            .padding(Padding::uniform(1));

        Paragraph::new(lines).block(block).render(popup_area, buf);
    }
}
