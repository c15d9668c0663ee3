use std::fmt;

/// Default prefix for generated patient IDs.
pub const DEFAULT_ID_PREFIX: &str = "P";

/// A patient waiting to be seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    id: String,
    pub name: String,
    pub reason_for_visit: String,
}

impl Patient {
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patient {{ id={}, name='{}', reasonForVisit={}}}",
            self.id, self.name, self.reason_for_visit
        )
    }
}

/// Hands out sequential patient IDs (`P1`, `P2`, ...).
#[derive(Debug, Clone)]
pub struct PatientIdGenerator {
    prefix: String,
    next: u64,
}

impl Default for PatientIdGenerator {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_ID_PREFIX)
    }
}

impl PatientIdGenerator {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Returns the next unused ID.
    pub fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }

    /// Builds a patient carrying the next unused ID.
    pub fn create(&mut self, name: impl Into<String>, reason_for_visit: impl Into<String>) -> Patient {
        Patient {
            id: self.next_id(),
            name: name.into(),
            reason_for_visit: reason_for_visit.into(),
        }
    }
}
