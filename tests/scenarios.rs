use clinicq::history::{HistoryError, HistoryNavigator, SEPARATOR};
use clinicq::queue::{QueueError, WaitingQueue};
use clinicq::record::Record;
use clinicq::seed;

fn record(diagnosis: &str) -> Record {
    Record::new("2026-03-01", diagnosis, "notes")
}

fn diagnoses(history: &HistoryNavigator) -> Vec<&str> {
    history.oldest_first().map(|r| r.diagnosis.as_str()).collect()
}

#[test]
fn single_record_is_both_ends() {
    let mut history = HistoryNavigator::new();
    assert_eq!(history.jump_to_newest(), None);

    history.insert_at(record("R1"), 0).unwrap();
    assert_eq!(history.jump_to_oldest(), Some(&record("R1")));
    assert_eq!(history.jump_to_newest(), Some(&record("R1")));
    assert!(history.is_at_oldest());
    assert!(history.is_at_newest());
}

#[test]
fn appended_records_keep_order_both_ways() {
    let mut history = HistoryNavigator::new();
    for name in ["R1", "R2", "R3"] {
        history.insert_at(record(name), history.len() as i64).unwrap();
    }

    assert_eq!(diagnoses(&history), ["R1", "R2", "R3"]);
    let newest: Vec<&str> = history.newest_first().map(|r| r.diagnosis.as_str()).collect();
    assert_eq!(newest, ["R3", "R2", "R1"]);

    let oldest_rendered: Vec<String> = history
        .render_oldest_first()
        .split(SEPARATOR)
        .map(String::from)
        .collect();
    let mut newest_rendered: Vec<String> = history
        .render_newest_first()
        .split(SEPARATOR)
        .map(String::from)
        .collect();
    newest_rendered.reverse();
    assert_eq!(oldest_rendered, newest_rendered);
}

#[test]
fn clamped_positions_follow_a_vec_model() {
    let mut history = HistoryNavigator::new();
    let mut model: Vec<String> = Vec::new();

    for (i, position) in [0i64, 5, -3, 1, 2, 100, 3, -1, 4].into_iter().enumerate() {
        let name = format!("R{}", i);
        history.insert_at(record(&name), position).unwrap();
        let index = position.clamp(0, model.len() as i64) as usize;
        model.insert(index, name);
        assert_eq!(history.len(), i + 1);
    }

    assert_eq!(diagnoses(&history), model);
}

#[test]
fn stepping_past_the_ends_is_clamped() {
    let mut history = HistoryNavigator::new();
    seed::seed_history(&mut history, seed::default_records()).unwrap();

    let oldest = history.jump_to_oldest().cloned();
    for _ in 0..3 {
        assert_eq!(history.step_previous().cloned(), oldest);
        assert!(history.is_at_oldest());
    }

    let newest = history.jump_to_newest().cloned();
    for _ in 0..3 {
        assert_eq!(history.step_next().cloned(), newest);
        assert!(history.is_at_newest());
    }

    // walking back from the middle always ends at the oldest record
    history.jump_to_newest();
    history.step_previous();
    history.step_previous();
    for _ in 0..history.len() {
        history.step_previous();
    }
    assert!(history.is_at_oldest());
}

#[test]
fn absent_record_is_rejected() {
    let mut history = HistoryNavigator::new();
    assert!(matches!(
        history.insert_at(None::<Record>, 0),
        Err(HistoryError::InvalidArgument(_))
    ));
    assert!(history.is_empty());
}

#[test]
fn queue_serves_in_arrival_order() {
    let mut queue = WaitingQueue::new();
    for name in ["A", "B"] {
        let patient = queue.new_patient(name, "Checkup");
        queue.enqueue(patient);
    }

    let served = queue.dequeue_next().unwrap();
    assert_eq!(served.name, "A");
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.iter().next().unwrap().name, "B");
}

#[test]
fn emergency_insert_in_the_middle() {
    let mut queue = WaitingQueue::new();
    for name in ["A", "B"] {
        let patient = queue.new_patient(name, "Checkup");
        queue.enqueue(patient);
    }

    let urgent = queue.new_patient("C", "Chest pain");
    queue.insert_at(urgent, 1).unwrap();

    let names: Vec<&str> = queue.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["A", "C", "B"]);
}

#[test]
fn queue_rejects_out_of_range_positions() {
    let mut queue = WaitingQueue::new();
    let patient = queue.new_patient("A", "Checkup");
    queue.enqueue(patient);

    for position in [-1i64, 2, 50] {
        let patient = queue.new_patient("X", "Urgent");
        let Err(QueueError::OutOfRange { patient: returned, size, .. }) = queue.insert_at(patient, position) else {
            panic!("position {} should be rejected", position);
        };
        assert_eq!(returned.name, "X");
        assert_eq!(size, 1);
        assert_eq!(queue.len(), 1);
    }

    for position in [0i64, 2] {
        let patient = queue.new_patient("Y", "Urgent");
        queue.insert_at(patient, position).unwrap();
    }
    assert_eq!(queue.len(), 3);
}
