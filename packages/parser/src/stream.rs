//! Forward cursor over a section's line records with relative lookups.

use crate::types::LineRecord;

/// Read-once-forward stream of line records.
///
/// Relative lookups (`ahead`, `behind`) clamp to the first or last record
/// instead of failing. Ambiguity resolution depends on always getting a
/// concrete record back, even if it is a duplicate at the edges.
#[derive(Debug, Clone)]
pub struct RecordStream {
    records: Vec<LineRecord>,
    position: usize,
    started: bool,
}

impl RecordStream {
    /// Create a stream positioned before the first record.
    #[must_use]
    pub fn new(records: Vec<LineRecord>) -> Self {
        Self {
            records,
            position: 0,
            started: false,
        }
    }

    /// Move to the next record.
    ///
    /// Returns the new position, or `None` once the stream is exhausted.
    /// The position does not move past the last record.
    pub fn advance(&mut self) -> Option<usize> {
        let next = if self.started { self.position + 1 } else { 0 };
        if next >= self.records.len() {
            return None;
        }
        self.started = true;
        self.position = next;
        Some(next)
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at an absolute index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LineRecord> {
        self.records.get(index)
    }

    /// The record at the current position.
    #[must_use]
    pub fn current(&self) -> Option<&LineRecord> {
        self.ahead(0)
    }

    /// The record before the current one, or the first record.
    #[must_use]
    pub fn previous(&self) -> Option<&LineRecord> {
        self.behind(1)
    }

    /// The record `n` positions ahead, clamped to the last record.
    ///
    /// Only returns `None` when the stream holds no records.
    #[must_use]
    pub fn ahead(&self, n: usize) -> Option<&LineRecord> {
        let last = self.records.len().checked_sub(1)?;
        self.records.get(self.position.saturating_add(n).min(last))
    }

    /// The record `n` positions behind, clamped to the first record.
    ///
    /// Only returns `None` when the stream holds no records.
    #[must_use]
    pub fn behind(&self, n: usize) -> Option<&LineRecord> {
        self.records.get(self.position.saturating_sub(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream_of(texts: &[&str]) -> RecordStream {
        RecordStream::new(texts.iter().map(|t| LineRecord::plain(*t)).collect())
    }

    fn text(record: Option<&LineRecord>) -> Option<&str> {
        record.and_then(|r| r.text.as_deref())
    }

    #[test]
    fn test_advance_yields_each_record_once() {
        let mut stream = stream_of(&["one", "two", "three"]);
        let mut seen = Vec::new();
        while let Some(index) = stream.advance() {
            seen.push(text(stream.get(index)).unwrap().to_string());
        }
        assert_eq!(seen, vec!["one", "two", "three"]);
        assert_eq!(stream.advance(), None);
        assert_eq!(stream.position(), 2);
    }

    #[test]
    fn test_current_and_previous() {
        let mut stream = stream_of(&["one", "two", "three"]);
        stream.advance();
        stream.advance();
        assert_eq!(text(stream.current()), Some("two"));
        assert_eq!(text(stream.previous()), Some("one"));
    }

    #[test]
    fn test_previous_at_start_clamps_to_first() {
        let mut stream = stream_of(&["one", "two"]);
        stream.advance();
        assert_eq!(text(stream.previous()), Some("one"));
    }

    #[test]
    fn test_ahead_clamps_to_last() {
        let mut stream = stream_of(&["one", "two", "three"]);
        stream.advance();
        assert_eq!(text(stream.ahead(1)), Some("two"));
        assert_eq!(text(stream.ahead(2)), Some("three"));
        assert_eq!(text(stream.ahead(3)), Some("three"));
        assert_eq!(text(stream.ahead(usize::MAX)), Some("three"));
    }

    #[test]
    fn test_behind_clamps_to_first() {
        let mut stream = stream_of(&["one", "two", "three"]);
        while stream.advance().is_some() {}
        assert_eq!(text(stream.behind(1)), Some("two"));
        assert_eq!(text(stream.behind(2)), Some("one"));
        assert_eq!(text(stream.behind(10)), Some("one"));
        assert_eq!(text(stream.behind(usize::MAX)), Some("one"));
    }

    #[test]
    fn test_all_offsets_return_a_record() {
        let mut stream = stream_of(&["one", "two", "three", "four"]);
        while stream.advance().is_some() {
            for n in 0..10 {
                assert!(stream.ahead(n).is_some());
                assert!(stream.behind(n).is_some());
            }
        }
    }

    #[test]
    fn test_empty_stream() {
        let mut stream = RecordStream::new(Vec::new());
        assert!(stream.is_empty());
        assert_eq!(stream.advance(), None);
        assert!(stream.current().is_none());
        assert!(stream.ahead(1).is_none());
        assert!(stream.behind(1).is_none());
    }
}
