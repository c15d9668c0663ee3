use super::colors::{
    EMPTY_LIST_FG, HISTORY_BORDER, LIST_HIGHLIGHT_BG, MENU_BORDER, PATIENT_ID_FG, QUEUE_BORDER, RECORD_DATE_FG,
    RECORD_PREVIEW_FG, RIGHT_ARROW, WHITE_COLOR,
};
use super::popups::popup_area;
use super::scrollable_list::ScrollableList;
use crate::app::{App, HistoryOrder, MAIN_MENU_ITEMS};
use crate::history::EMPTY_VIEW;
use crate::list_view_state::ListViewState;
use crate::record::Record;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

/// Height of the current record panel, borders included.
const RECORD_PANEL_HEIGHT: u16 = 5;

fn bordered_block<'a>(title: String, border_color: ratatui::style::Color) -> Block<'a> {
    Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(Style::default().bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
}

fn render_empty(text: &str, block: Block, area: Rect, buf: &mut Buffer) {
    Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(EMPTY_LIST_FG))
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_list(items: Vec<Line>, state: &ListViewState, block: Block, area: Rect, buf: &mut Buffer) {
    state.set_viewport_height(block.inner(area).height as usize);

    ScrollableList::new(items)
        .selection(state.selected_index(), state.viewport_offset())
        .highlight_symbol(RIGHT_ARROW)
        .highlight_style(Style::default().bg(LIST_HIGHLIGHT_BG).add_modifier(Modifier::BOLD))
        .render(area, buf, block);
}

impl App {
    pub(super) fn render_main_menu(&self, area: Rect, buf: &mut Buffer) {
        let menu_area = popup_area(area, 36, MAIN_MENU_ITEMS.len() as u16 + 2);

        let items: Vec<Line> = MAIN_MENU_ITEMS
            .iter()
            .enumerate()
            .map(|(i, item)| Line::from(format!(" {}. {}", i + 1, item)))
            .collect();

        let mut list_state = ListState::default();
        list_state.select(Some(self.menu_state.selected_index()));

        let menu = List::new(items)
            .block(bordered_block(" Main Menu ".to_string(), MENU_BORDER))
            .style(Style::default().fg(WHITE_COLOR))
            .highlight_symbol(RIGHT_ARROW)
            .highlight_style(Style::default().bg(LIST_HIGHLIGHT_BG).add_modifier(Modifier::BOLD));

        StatefulWidget::render(menu, menu_area, buf, &mut list_state);
    }

    pub(super) fn render_waiting_room(&self, area: Rect, buf: &mut Buffer) {
        let block = bordered_block(format!(" Queue ({}) ", self.queue.len()), QUEUE_BORDER);

        if self.queue.is_empty() {
            render_empty("No patients waiting.", block, area, buf);
            return;
        }

        let items: Vec<Line> = self
            .queue
            .iter()
            .enumerate()
            .map(|(position, patient)| {
                Line::from(vec![
                    Span::raw(format!(" {:>3}  ", position)),
                    Span::styled(format!("{:<6}", patient.id()), Style::default().fg(PATIENT_ID_FG)),
                    Span::raw(format!("{}  ", patient.name)),
                    Span::styled(patient.reason_for_visit.clone(), Style::default().fg(RECORD_PREVIEW_FG)),
                ])
            })
            .collect();

        render_list(items, &self.queue_list_state, block, area, buf);
    }

    pub(super) fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let [record_area, list_area] =
            Layout::vertical([Constraint::Length(RECORD_PANEL_HEIGHT), Constraint::Fill(1)]).areas(area);

        self.render_current_record(record_area, buf);

        let order = match self.history_order {
            HistoryOrder::OldestFirst => "oldest first",
            HistoryOrder::NewestFirst => "newest first",
        };
        let block = bordered_block(format!(" Records ({}) ", order), HISTORY_BORDER);

        if self.history.is_empty() {
            render_empty(EMPTY_VIEW, block, list_area, buf);
            return;
        }

        let records: Vec<&Record> = match self.history_order {
            HistoryOrder::OldestFirst => self.history.oldest_first().collect(),
            HistoryOrder::NewestFirst => self.history.newest_first().collect(),
        };
        let items: Vec<Line> = records
            .into_iter()
            .map(|record| {
                Line::from(vec![
                    Span::styled(format!(" {}  ", record.visit_date), Style::default().fg(RECORD_DATE_FG)),
                    Span::raw(format!("{:<16}", record.diagnosis)),
                    Span::styled(record.treatment_notes.clone(), Style::default().fg(RECORD_PREVIEW_FG)),
                ])
            })
            .collect();

        render_list(items, &self.history_list_state, block, list_area, buf);
    }

    fn render_current_record(&self, area: Rect, buf: &mut Buffer) {
        let title = match self.history.cursor_position() {
            Some(position) => format!(" Record {}/{} ", position + 1, self.history.len()),
            None => " No current record ".to_string(),
        };
        let block = bordered_block(title, HISTORY_BORDER);

        let Some(record) = self.history.current_record() else {
            render_empty("Press n or o to jump to a record.", block, area, buf);
            return;
        };

        let label = Style::default().fg(RECORD_PREVIEW_FG);
        let lines = vec![
            Line::from(vec![
                Span::styled(" Visit date: ", label),
                Span::styled(record.visit_date.clone(), Style::default().fg(RECORD_DATE_FG)),
            ]),
            Line::from(vec![
                Span::styled(" Diagnosis:  ", label),
                Span::styled(record.diagnosis.clone(), Style::default().bold()),
            ]),
            Line::from(vec![
                Span::styled(" Treatment:  ", label),
                Span::raw(record.treatment_notes.clone()),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
