//! Accumulated log content

use crate::reader::ReadOutcome;
use std::borrow::Cow;

/// Bytes read from the source so far, in order
///
/// The buffer is unbounded: it is never trimmed from the front while the
/// same source stays bound.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    content: Vec<u8>,
    /// Set by an explicit "clear display". Content is always empty while set.
    cleared: bool,
    revision: u64,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Content decoded as UTF-8, invalid sequences replaced
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    /// Counter bumped on every mutation, for cheap change detection
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of lines, counted the way `str::lines` splits them
    pub fn line_count(&self) -> usize {
        let newlines = self.content.iter().filter(|&&b| b == b'\n').count();
        match self.content.last() {
            None => 0,
            Some(b'\n') => newlines,
            Some(_) => newlines + 1,
        }
    }

    pub fn append(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        self.content.extend_from_slice(bytes);
        self.cleared = false;
        self.bump();
    }

    pub fn replace(&mut self, bytes: Vec<u8>) {
        self.content = bytes;
        self.cleared = false;
        self.bump();
    }

    /// Empty the content, leaving the cleared flag as it is
    pub fn reset(&mut self) {
        if self.content.is_empty() {
            return;
        }
        self.content.clear();
        self.bump();
    }

    /// "Clear display": empty the content and raise the cleared flag
    pub fn clear(&mut self) {
        self.content.clear();
        self.cleared = true;
        self.bump();
    }

    /// Lower the cleared flag, returning whether it was set
    pub fn take_cleared(&mut self) -> bool {
        let was_cleared = std::mem::take(&mut self.cleared);
        if was_cleared {
            self.bump();
        }
        was_cleared
    }

    /// Drop content and flag (a new source is being bound)
    pub fn discard(&mut self) {
        self.content.clear();
        self.cleared = false;
        self.bump();
    }

    /// Apply the outcome of a successful read
    pub fn apply(&mut self, outcome: ReadOutcome) {
        match outcome {
            ReadOutcome::Emptied => self.reset(),
            ReadOutcome::Unchanged => {}
            ReadOutcome::Appended(bytes) => self.append(&bytes),
            ReadOutcome::Reloaded(bytes) => self.replace(bytes),
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_concatenates_in_order() {
        let mut buffer = LogBuffer::new();
        buffer.append(b"line1\n");
        buffer.append(b"line2\n");
        assert_eq!(buffer.content(), b"line1\nline2\n");
        assert_eq!(buffer.line_count(), 2);
    }

    #[test]
    fn test_clear_sets_flag_and_empties() {
        let mut buffer = LogBuffer::new();
        buffer.append(b"line1\n");
        buffer.clear();
        assert!(buffer.is_cleared());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_append_lowers_cleared_flag() {
        let mut buffer = LogBuffer::new();
        buffer.clear();
        buffer.append(b"x");
        assert!(!buffer.is_cleared());
    }

    #[test]
    fn test_take_cleared() {
        let mut buffer = LogBuffer::new();
        assert!(!buffer.take_cleared());
        buffer.clear();
        assert!(buffer.take_cleared());
        assert!(!buffer.is_cleared());
    }

    #[test]
    fn test_apply_outcomes() {
        let mut buffer = LogBuffer::new();
        buffer.apply(ReadOutcome::Reloaded(b"old\n".to_vec()));
        buffer.apply(ReadOutcome::Appended(b"more\n".to_vec()));
        assert_eq!(buffer.content(), b"old\nmore\n");

        buffer.apply(ReadOutcome::Reloaded(b"new\n".to_vec()));
        assert_eq!(buffer.content(), b"new\n");

        buffer.apply(ReadOutcome::Unchanged);
        assert_eq!(buffer.content(), b"new\n");

        buffer.apply(ReadOutcome::Emptied);
        assert!(buffer.is_empty());
        assert!(!buffer.is_cleared());
    }

    #[test]
    fn test_revision_tracks_mutations() {
        let mut buffer = LogBuffer::new();
        let start = buffer.revision();
        buffer.apply(ReadOutcome::Unchanged);
        buffer.append(b"");
        assert_eq!(buffer.revision(), start);

        buffer.append(b"a");
        assert_ne!(buffer.revision(), start);
    }

    #[test]
    fn test_line_count() {
        let mut buffer = LogBuffer::new();
        assert_eq!(buffer.line_count(), 0);
        buffer.append(b"a");
        assert_eq!(buffer.line_count(), 1);
        buffer.append(b"\nb\n");
        assert_eq!(buffer.line_count(), 2);
        buffer.append(b"\n");
        assert_eq!(buffer.line_count(), 3);
    }

    #[test]
    fn test_text_is_lossy() {
        let mut buffer = LogBuffer::new();
        buffer.append(&[b'o', b'k', 0xff]);
        assert_eq!(buffer.text(), "ok\u{fffd}");
    }
}
