use crate::record::Record;
use std::iter::{FusedIterator, Rev};
use thiserror::Error;

/// Separator placed between consecutive records in a rendered view.
pub const SEPARATOR: &str = " <-> ";
/// Rendered view of a navigator without records.
pub const EMPTY_VIEW: &str = "(Empty)";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

#[derive(Debug, Clone)]
struct Node {
    record: Record,
    next: Option<usize>,
    previous: Option<usize>,
}

/// Doubly linked visit history with a movable cursor.
///
/// Nodes live in an arena and link to each other by index. Nodes are never
/// removed, so every arena slot is reachable from `head` and the cursor index
/// stays valid for the lifetime of the navigator.
#[derive(Debug, Default, Clone)]
pub struct HistoryNavigator {
    nodes: Vec<Node>,
    head: Option<usize>,
    tail: Option<usize>,
    /// Cursor into the chain (None only while empty).
    current: Option<usize>,
}

impl HistoryNavigator {
    /// Creates an empty navigator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the history.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Inserts a record so that it ends up at `position` (0-based).
    ///
    /// Positions are clamped: anything `<= 0` inserts at the head, anything
    /// `>= len()` appends at the tail. The first insertion also places the
    /// cursor on the new record; later insertions leave the cursor alone.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidArgument`] if no record is given.
    pub fn insert_at(
        &mut self,
        record: impl Into<Option<Record>>,
        position: i64,
    ) -> Result<(), HistoryError> {
        let record = record
            .into()
            .ok_or(HistoryError::InvalidArgument("record must not be absent"))?;
        let index = self.nodes.len();

        let (Some(head), Some(tail)) = (self.head, self.tail) else {
            self.nodes.push(Node {
                record,
                next: None,
                previous: None,
            });
            self.head = Some(index);
            self.tail = Some(index);
            self.current = Some(index);
            return Ok(());
        };

        if position <= 0 {
            self.nodes.push(Node {
                record,
                next: Some(head),
                previous: None,
            });
            self.nodes[head].previous = Some(index);
            self.head = Some(index);
        } else if position >= self.len() as i64 {
            self.nodes.push(Node {
                record,
                next: None,
                previous: Some(tail),
            });
            self.nodes[tail].next = Some(index);
            self.tail = Some(index);
        } else {
            // Interior: link after the node currently at position - 1.
            let before = self.node_at(position as usize - 1).unwrap_or(tail);
            let after = self.nodes[before].next;

            self.nodes.push(Node {
                record,
                next: after,
                previous: Some(before),
            });
            self.nodes[before].next = Some(index);
            match after {
                Some(after) => self.nodes[after].previous = Some(index),
                None => self.tail = Some(index),
            }
        }

        Ok(())
    }

    /// Walks `steps` links forward from the head.
    fn node_at(&self, steps: usize) -> Option<usize> {
        let mut node = self.head;
        for _ in 0..steps {
            node = node.and_then(|index| self.nodes[index].next);
        }
        node
    }

    /// Iterates records from the oldest (head) to the newest (tail).
    pub fn oldest_first(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.nodes.len(),
        }
    }

    /// Iterates records from the newest (tail) to the oldest (head).
    pub fn newest_first(&self) -> Rev<Iter<'_>> {
        self.oldest_first().rev()
    }

    /// Renders every record oldest first, joined by [`SEPARATOR`].
    pub fn render_oldest_first(&self) -> String {
        render(self.oldest_first())
    }

    /// Renders every record newest first, joined by [`SEPARATOR`].
    pub fn render_newest_first(&self) -> String {
        render(self.newest_first())
    }

    /// Moves the cursor to the tail and returns its record.
    pub fn jump_to_newest(&mut self) -> Option<&Record> {
        let tail = self.tail?;
        self.current = Some(tail);
        Some(&self.nodes[tail].record)
    }

    /// Moves the cursor to the head and returns its record.
    pub fn jump_to_oldest(&mut self) -> Option<&Record> {
        let head = self.head?;
        self.current = Some(head);
        Some(&self.nodes[head].record)
    }

    /// Moves the cursor one record towards the tail.
    ///
    /// At the tail the cursor stays put and the current record is returned;
    /// use [`is_at_newest`](Self::is_at_newest) to tell the two cases apart.
    pub fn step_next(&mut self) -> Option<&Record> {
        let current = self.current?;
        let target = self.nodes[current].next.unwrap_or(current);
        self.current = Some(target);
        Some(&self.nodes[target].record)
    }

    /// Moves the cursor one record towards the head, clamping at the head.
    pub fn step_previous(&mut self) -> Option<&Record> {
        let current = self.current?;
        let target = self.nodes[current].previous.unwrap_or(current);
        self.current = Some(target);
        Some(&self.nodes[target].record)
    }

    pub fn is_at_oldest(&self) -> bool {
        self.current.is_some() && self.current == self.head
    }

    pub fn is_at_newest(&self) -> bool {
        self.current.is_some() && self.current == self.tail
    }

    /// Returns the record under the cursor.
    pub fn current_record(&self) -> Option<&Record> {
        self.current.map(|index| &self.nodes[index].record)
    }

    /// 0-based distance of the cursor from the head.
    pub fn cursor_position(&self) -> Option<usize> {
        let current = self.current?;
        let mut node = self.head;
        let mut position = 0;
        while let Some(index) = node {
            if index == current {
                return Some(position);
            }
            node = self.nodes[index].next;
            position += 1;
        }
        None
    }
}

fn render<'a>(records: impl ExactSizeIterator<Item = &'a Record>) -> String {
    if records.len() == 0 {
        return EMPTY_VIEW.to_string();
    }
    records
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Iterator over the records of a [`HistoryNavigator`], following the links.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    nodes: &'a [Node],
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.front?;
        self.front = self.nodes[index].next;
        self.remaining -= 1;
        Some(&self.nodes[index].record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.back?;
        self.back = self.nodes[index].previous;
        self.remaining -= 1;
        Some(&self.nodes[index].record)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(diagnosis: &str) -> Record {
        Record::new("2026-01-01", diagnosis, "notes")
    }

    fn diagnoses<'a>(records: impl Iterator<Item = &'a Record>) -> Vec<&'a str> {
        records.map(|r| r.diagnosis.as_str()).collect()
    }

    fn navigator_with(names: &[&str]) -> HistoryNavigator {
        let mut history = HistoryNavigator::new();
        for name in names {
            history.insert_at(record(name), history.len() as i64).unwrap();
        }
        history
    }

    /// Checks link symmetry and head/tail terminators.
    fn assert_links_consistent(history: &HistoryNavigator) {
        let forward = diagnoses(history.oldest_first());
        let mut backward = diagnoses(history.newest_first());
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), history.len());

        if let (Some(head), Some(tail)) = (history.head, history.tail) {
            assert_eq!(history.nodes[head].previous, None);
            assert_eq!(history.nodes[tail].next, None);
        }
        for (index, node) in history.nodes.iter().enumerate() {
            if let Some(next) = node.next {
                assert_eq!(history.nodes[next].previous, Some(index));
            }
            if let Some(previous) = node.previous {
                assert_eq!(history.nodes[previous].next, Some(index));
            }
        }
    }

    #[test]
    fn test_empty_navigator() {
        let mut history = HistoryNavigator::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.jump_to_newest(), None);
        assert_eq!(history.jump_to_oldest(), None);
        assert_eq!(history.step_next(), None);
        assert_eq!(history.step_previous(), None);
        assert_eq!(history.current_record(), None);
        assert_eq!(history.cursor_position(), None);
        assert!(!history.is_at_oldest());
        assert!(!history.is_at_newest());
    }

    #[test]
    fn test_render_empty() {
        let history = HistoryNavigator::new();
        assert_eq!(history.render_oldest_first(), EMPTY_VIEW);
        assert_eq!(history.render_newest_first(), EMPTY_VIEW);
    }

    #[test]
    fn test_insert_absent_record_fails() {
        let mut history = navigator_with(&["a"]);
        assert_eq!(
            history.insert_at(None::<Record>, 0),
            Err(HistoryError::InvalidArgument("record must not be absent"))
        );
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_first_insert_positions_cursor() {
        let mut history = HistoryNavigator::new();
        history.insert_at(record("r1"), 0).unwrap();

        assert_eq!(history.current_record(), Some(&record("r1")));
        assert_eq!(history.jump_to_oldest(), Some(&record("r1")));
        assert_eq!(history.jump_to_newest(), Some(&record("r1")));
        assert!(history.is_at_oldest());
        assert!(history.is_at_newest());
    }

    #[test]
    fn test_append_order() {
        let history = navigator_with(&["r1", "r2", "r3"]);
        assert_eq!(diagnoses(history.oldest_first()), ["r1", "r2", "r3"]);
        assert_eq!(diagnoses(history.newest_first()), ["r3", "r2", "r1"]);
    }

    #[test]
    fn test_insert_clamps_position() {
        let mut history = navigator_with(&["b"]);
        history.insert_at(record("a"), -5).unwrap();
        history.insert_at(record("z"), 100).unwrap();
        history.insert_at(record("head"), 0).unwrap();

        assert_eq!(diagnoses(history.oldest_first()), ["head", "a", "b", "z"]);
        assert_links_consistent(&history);
    }

    #[test]
    fn test_insert_interior() {
        let mut history = navigator_with(&["a", "b", "d"]);
        history.insert_at(record("c"), 2).unwrap();
        history.insert_at(record("a2"), 1).unwrap();

        assert_eq!(diagnoses(history.oldest_first()), ["a", "a2", "b", "c", "d"]);
        assert_links_consistent(&history);
    }

    #[test]
    fn test_insert_at_len_minus_one_keeps_tail() {
        let mut history = navigator_with(&["a", "b"]);
        history.insert_at(record("mid"), 1).unwrap();

        assert_eq!(diagnoses(history.oldest_first()), ["a", "mid", "b"]);
        assert_eq!(history.jump_to_newest(), Some(&record("b")));
        assert_links_consistent(&history);
    }

    #[test]
    fn test_order_matches_vec_model() {
        // Reference model: Vec::insert with the same clamping.
        let positions = [0, 5, -1, 2, 1, 3, 100, 4, 0, 7];
        let mut history = HistoryNavigator::new();
        let mut model: Vec<String> = Vec::new();

        for (i, position) in positions.iter().enumerate() {
            let name = format!("r{}", i);
            history.insert_at(record(&name), *position).unwrap();
            let clamped = (*position).clamp(0, model.len() as i64) as usize;
            model.insert(clamped, name);

            assert_eq!(history.len(), i + 1);
            assert_eq!(diagnoses(history.oldest_first()), model);
        }
        assert_links_consistent(&history);
    }

    #[test]
    fn test_later_inserts_keep_cursor() {
        let mut history = navigator_with(&["a"]);
        history.insert_at(record("before"), 0).unwrap();
        history.insert_at(record("after"), 10).unwrap();

        assert_eq!(history.current_record(), Some(&record("a")));
        assert_eq!(history.cursor_position(), Some(1));
    }

    #[test]
    fn test_step_next_clamps_at_newest() {
        let mut history = navigator_with(&["a", "b", "c"]);
        assert_eq!(history.jump_to_newest(), Some(&record("c")));
        for _ in 0..5 {
            assert_eq!(history.step_next(), Some(&record("c")));
            assert!(history.is_at_newest());
        }
    }

    #[test]
    fn test_step_previous_clamps_at_oldest() {
        let mut history = navigator_with(&["a", "b", "c"]);
        assert_eq!(history.jump_to_oldest(), Some(&record("a")));
        for _ in 0..5 {
            assert_eq!(history.step_previous(), Some(&record("a")));
            assert!(history.is_at_oldest());
        }
    }

    #[test]
    fn test_step_through_history() {
        let mut history = navigator_with(&["a", "b", "c"]);
        history.jump_to_oldest();

        assert_eq!(history.step_next(), Some(&record("b")));
        assert!(!history.is_at_oldest());
        assert!(!history.is_at_newest());
        assert_eq!(history.cursor_position(), Some(1));

        assert_eq!(history.step_next(), Some(&record("c")));
        assert!(history.is_at_newest());

        assert_eq!(history.step_previous(), Some(&record("b")));
        assert_eq!(history.step_previous(), Some(&record("a")));
        assert!(history.is_at_oldest());
    }

    #[test]
    fn test_exhausting_previous_reaches_oldest_from_anywhere() {
        let mut history = navigator_with(&["a", "b", "c", "d", "e"]);
        history.jump_to_newest();
        history.step_previous();

        for _ in 0..history.len() {
            history.step_previous();
        }
        assert!(history.is_at_oldest());
        assert_eq!(history.current_record(), Some(&record("a")));
    }

    #[test]
    fn test_render_joins_with_separator() {
        let history = navigator_with(&["a", "b"]);
        let a = record("a").to_string();
        let b = record("b").to_string();

        assert_eq!(history.render_oldest_first(), format!("{a} <-> {b}"));
        assert_eq!(history.render_newest_first(), format!("{b} <-> {a}"));
    }

    #[test]
    fn test_iterators_are_restartable_and_sized() {
        let history = navigator_with(&["a", "b", "c"]);
        let iter = history.oldest_first();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.clone().count(), 3);
        assert_eq!(diagnoses(iter), ["a", "b", "c"]);
        assert_eq!(diagnoses(history.oldest_first()), ["a", "b", "c"]);
    }

    #[test]
    fn test_iterator_meets_in_the_middle() {
        let history = navigator_with(&["a", "b", "c"]);
        let mut iter = history.oldest_first();
        assert_eq!(iter.next().map(|r| r.diagnosis.as_str()), Some("a"));
        assert_eq!(iter.next_back().map(|r| r.diagnosis.as_str()), Some("c"));
        assert_eq!(iter.next().map(|r| r.diagnosis.as_str()), Some("b"));
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None);
    }
}
