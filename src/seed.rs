use crate::history::{HistoryError, HistoryNavigator};
use crate::record::Record;

/// Built-in visit records loaded into an empty history at start-up.
const DEFAULT_RECORDS: [(&str, &str, &str); 10] = [
    ("2026-01-01", "Flu", "Rest, hydration"),
    ("2026-01-03", "Sprain", "Ice, wrap, elevate"),
    ("2026-01-06", "Migraine", "Pain relief + rest"),
    ("2026-01-10", "Allergy", "Antihistamine"),
    ("2026-01-14", "Sore throat", "Supportive care"),
    ("2026-01-18", "Back pain", "Stretching plan"),
    ("2026-01-22", "Checkup", "Vitals normal"),
    ("2026-01-26", "Stomach bug", "Fluids + rest"),
    ("2026-02-02", "Skin rash", "Topical cream"),
    ("2026-02-10", "Follow-up", "Improving"),
];

pub fn default_records() -> Vec<Record> {
    DEFAULT_RECORDS
        .iter()
        .map(|(date, diagnosis, notes)| Record::new(*date, *diagnosis, *notes))
        .collect()
}

/// Appends `records` to the history in order.
pub fn seed_history(
    history: &mut HistoryNavigator,
    records: impl IntoIterator<Item = Record>,
) -> Result<(), HistoryError> {
    for record in records {
        history.insert_at(record, history.len() as i64)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ten_records_oldest_first() {
        let mut history = HistoryNavigator::new();
        seed_history(&mut history, default_records()).unwrap();

        assert_eq!(history.len(), 10);
        assert_eq!(history.jump_to_oldest().unwrap().diagnosis, "Flu");
        assert_eq!(history.jump_to_newest().unwrap().diagnosis, "Follow-up");
    }

    #[test]
    fn test_seed_appends_after_existing() {
        let mut history = HistoryNavigator::new();
        history.insert_at(Record::new("2025-12-01", "Intake", "-"), 0).unwrap();
        seed_history(&mut history, default_records()).unwrap();

        assert_eq!(history.len(), 11);
        assert_eq!(history.oldest_first().next().unwrap().diagnosis, "Intake");
        // cursor stays on the first record ever inserted
        assert_eq!(history.current_record().unwrap().diagnosis, "Intake");
    }
}
