use crate::patient::{Patient, PatientIdGenerator};
use std::collections::VecDeque;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    /// The patient is handed back so the caller can retry with another position.
    #[error("invalid position {position}, expected 0 to {size}")]
    OutOfRange {
        patient: Patient,
        position: i64,
        size: usize,
    },
}

/// Waiting room queue: FIFO service with emergency insertion at any position.
#[derive(Debug, Default)]
pub struct WaitingQueue {
    patients: VecDeque<Patient>,
    ids: PatientIdGenerator,
}

impl WaitingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue whose patients get IDs starting with `prefix`.
    pub fn with_id_prefix(prefix: impl Into<String>) -> Self {
        Self {
            patients: VecDeque::new(),
            ids: PatientIdGenerator::with_prefix(prefix),
        }
    }

    /// Builds a patient with the next ID from this queue's generator.
    ///
    /// The patient is not queued yet.
    pub fn new_patient(&mut self, name: impl Into<String>, reason_for_visit: impl Into<String>) -> Patient {
        self.ids.create(name, reason_for_visit)
    }

    /// Appends a patient to the back of the queue.
    pub fn enqueue(&mut self, patient: Patient) -> &Patient {
        self.patients.push_back(patient);
        &self.patients[self.patients.len() - 1]
    }

    /// Removes and returns the patient at the front of the queue.
    pub fn dequeue_next(&mut self) -> Option<Patient> {
        self.patients.pop_front()
    }

    /// Inserts a patient at `position` (0 is the front, `len()` the back).
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::OutOfRange`] with the patient if `position` is
    /// outside `0..=len()`. The queue is left unchanged.
    pub fn insert_at(&mut self, patient: Patient, position: i64) -> Result<(), QueueError> {
        let size = self.patients.len();
        match usize::try_from(position) {
            Ok(index) if index <= size => {
                self.patients.insert(index, patient);
                Ok(())
            }
            _ => Err(QueueError::OutOfRange {
                patient,
                position,
                size,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Iterates patients from front to back.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Patient> {
        self.patients.iter()
    }

    /// One line per patient, front to back. Empty when no one is waiting.
    pub fn render_all(&self) -> String {
        self.patients
            .iter()
            .map(|patient| format!("{}\n", patient))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(queue: &WaitingQueue) -> Vec<&str> {
        queue.iter().map(|p| p.name.as_str()).collect()
    }

    fn queue_with(names: &[&str]) -> WaitingQueue {
        let mut queue = WaitingQueue::new();
        for name in names {
            let patient = queue.new_patient(*name, "reason");
            queue.enqueue(patient);
        }
        queue
    }

    #[test]
    fn test_empty_queue() {
        let mut queue = WaitingQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.dequeue_next(), None);
        assert_eq!(queue.render_all(), "");
    }

    #[test]
    fn test_enqueue_returns_stored_patient() {
        let mut queue = WaitingQueue::new();
        let patient = queue.new_patient("Ada", "Checkup");
        let stored = queue.enqueue(patient);
        assert_eq!(stored.id(), "P1");
        assert_eq!(stored.name, "Ada");
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = queue_with(&["A", "B"]);
        let served = queue.dequeue_next().unwrap();
        assert_eq!(served.name, "A");
        assert_eq!(queue.len(), 1);
        assert_eq!(names(&queue), ["B"]);
    }

    #[test]
    fn test_emergency_insert_in_middle() {
        let mut queue = queue_with(&["A", "B"]);
        let patient = queue.new_patient("C", "Emergency");
        queue.insert_at(patient, 1).unwrap();
        assert_eq!(names(&queue), ["A", "C", "B"]);
    }

    #[test]
    fn test_insert_at_bounds_succeeds() {
        let mut queue = queue_with(&["A"]);
        let front = queue.new_patient("front", "r");
        queue.insert_at(front, 0).unwrap();
        let back = queue.new_patient("back", "r");
        queue.insert_at(back, 2).unwrap();
        assert_eq!(names(&queue), ["front", "A", "back"]);
    }

    #[test]
    fn test_insert_out_of_range_leaves_queue_untouched() {
        let mut queue = queue_with(&["A", "B"]);
        for position in [-1, -100, 3, 42] {
            let patient = queue.new_patient("C", "r");
            let err = queue.insert_at(patient.clone(), position).unwrap_err();
            assert_eq!(
                err,
                QueueError::OutOfRange {
                    patient,
                    position,
                    size: 2
                }
            );
            assert_eq!(queue.len(), 2);
            assert_eq!(names(&queue), ["A", "B"]);
        }
    }

    #[test]
    fn test_retry_after_out_of_range() {
        let mut queue = queue_with(&["A"]);
        let patient = queue.new_patient("C", "r");
        let Err(QueueError::OutOfRange { patient, .. }) = queue.insert_at(patient, 5) else {
            panic!("expected out of range");
        };
        queue.insert_at(patient, 1).unwrap();
        assert_eq!(names(&queue), ["A", "C"]);
        assert_eq!(queue.iter().last().unwrap().id(), "P2");
    }

    #[test]
    fn test_render_all() {
        let queue = queue_with(&["A", "B"]);
        assert_eq!(
            queue.render_all(),
            "Patient { id=P1, name='A', reasonForVisit=reason}\nPatient { id=P2, name='B', reasonForVisit=reason}\n"
        );
    }

    #[test]
    fn test_id_prefix() {
        let mut queue = WaitingQueue::with_id_prefix("W");
        assert_eq!(queue.new_patient("A", "r").id(), "W1");
    }
}
