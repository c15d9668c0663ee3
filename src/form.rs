use crate::patient::Patient;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::{Input, InputRequest};

/// Message shown when a numeric field does not parse.
pub const INVALID_NUMBER: &str = "Please enter a valid number.";

/// The input forms the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    AddPatient,
    EmergencyPatient,
    InsertRecord,
}

impl FormKind {
    pub fn title(&self) -> &'static str {
        match self {
            FormKind::AddPatient => "Add Patient",
            FormKind::EmergencyPatient => "Emergency Patient",
            FormKind::InsertRecord => "Insert Record",
        }
    }
}

#[derive(Debug)]
pub struct FormField {
    pub label: String,
    pub input: Input,
}

/// A small multi-field text form rendered as an overlay.
#[derive(Debug, Default)]
pub struct Form {
    kind: Option<FormKind>,
    fields: Vec<FormField>,
    focused: usize,
    error: Option<String>,
    /// Emergency patient kept between retries so it keeps its ID.
    pending_patient: Option<Patient>,
}

impl Form {
    /// Replaces the form contents with empty fields carrying `labels`.
    pub fn open(&mut self, kind: FormKind, labels: Vec<String>) {
        self.kind = Some(kind);
        self.fields = labels
            .into_iter()
            .map(|label| FormField {
                label,
                input: Input::default(),
            })
            .collect();
        self.focused = 0;
        self.error = None;
        self.pending_patient = None;
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn kind(&self) -> Option<FormKind> {
        self.kind
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn is_last_field_focused(&self) -> bool {
        self.focused + 1 >= self.fields.len()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub fn set_label(&mut self, index: usize, label: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.label = label.into();
        }
    }

    /// Trimmed value of the field at `index`.
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|field| field.input.value().trim())
            .unwrap_or("")
    }

    /// Parses the field at `index` as a position. Blank means "not given".
    pub fn position(&self, index: usize) -> Result<Option<i64>, &'static str> {
        let raw = self.value(index);
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse::<i64>().map(Some).map_err(|_| INVALID_NUMBER)
    }

    pub fn focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focused = index;
        }
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_previous(&mut self) {
        if !self.fields.is_empty() {
            self.focused = if self.focused == 0 {
                self.fields.len() - 1
            } else {
                self.focused - 1
            };
        }
    }

    pub fn set_pending_patient(&mut self, patient: Patient) {
        self.pending_patient = Some(patient);
    }

    pub fn take_pending_patient(&mut self) -> Option<Patient> {
        self.pending_patient.take()
    }

    /// Feeds an unbound key press to the focused input.
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        let request = match key_event.code {
            KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => InputRequest::InsertChar(c),
            KeyCode::Char('u') => InputRequest::DeleteLine,
            KeyCode::Char('w') => InputRequest::DeletePrevWord,
            KeyCode::Backspace => InputRequest::DeletePrevChar,
            KeyCode::Delete => InputRequest::DeleteNextChar,
            KeyCode::Left => InputRequest::GoToPrevChar,
            KeyCode::Right => InputRequest::GoToNextChar,
            KeyCode::Home => InputRequest::GoToStart,
            KeyCode::End => InputRequest::GoToEnd,
            _ => return,
        };
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.input.handle(request);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut Form, text: &str) {
        for c in text.chars() {
            form.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty()));
        }
    }

    fn open_form() -> Form {
        let mut form = Form::default();
        form.open(
            FormKind::EmergencyPatient,
            vec!["Name".to_string(), "Reason".to_string(), "Position".to_string()],
        );
        form
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = open_form();
        type_text(&mut form, "Ada");
        form.focus_next();
        type_text(&mut form, " Chest pain ");

        assert_eq!(form.value(0), "Ada");
        assert_eq!(form.value(1), "Chest pain");
        assert_eq!(form.value(2), "");
    }

    #[test]
    fn test_editing_keys() {
        let mut form = open_form();
        type_text(&mut form, "Adx");
        form.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::empty()));
        type_text(&mut form, "a");
        assert_eq!(form.value(0), "Ada");

        form.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(form.value(0), "");
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = open_form();
        form.focus_previous();
        assert_eq!(form.focused(), 2);
        assert!(form.is_last_field_focused());
        form.focus_next();
        assert_eq!(form.focused(), 0);
    }

    #[test]
    fn test_position_parsing() {
        let mut form = open_form();
        form.focus(2);
        assert_eq!(form.position(2), Ok(None));

        type_text(&mut form, "-3");
        assert_eq!(form.position(2), Ok(Some(-3)));

        type_text(&mut form, "x");
        assert_eq!(form.position(2), Err(INVALID_NUMBER));
    }

    #[test]
    fn test_close_resets() {
        let mut form = open_form();
        form.set_error("oops");
        form.close();
        assert_eq!(form.kind(), None);
        assert!(form.fields().is_empty());
        assert_eq!(form.error(), None);
    }
}
