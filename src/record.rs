use serde::Deserialize;
use std::fmt;

/// A single patient visit entry stored in the history.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub visit_date: String,
    pub diagnosis: String,
    pub treatment_notes: String,
}

impl Record {
    pub fn new(
        visit_date: impl Into<String>,
        diagnosis: impl Into<String>,
        treatment_notes: impl Into<String>,
    ) -> Self {
        Self {
            visit_date: visit_date.into(),
            diagnosis: diagnosis.into(),
            treatment_notes: treatment_notes.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PatientRecord {{ visitDate={}, diagnosis='{}', treatmentNotes='{}'}}",
            self.visit_date, self.diagnosis, self.treatment_notes
        )
    }
}
