use lineedit_core::{
    ChangeKind, DocumentProcessor, DocumentSink, DocumentSnapshot, EditorSession, LineEnding,
    Position,
};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MemorySink {
    saved: Vec<String>,
}

impl DocumentSink for MemorySink {
    type Error = std::convert::Infallible;

    fn write(&mut self, snapshot: &DocumentSnapshot) -> Result<(), Self::Error> {
        self.saved.push(snapshot.text_for_saving());
        Ok(())
    }
}

struct ReadOnlySink;

impl DocumentSink for ReadOnlySink {
    type Error = String;

    fn write(&mut self, snapshot: &DocumentSnapshot) -> Result<(), Self::Error> {
        Err(format!("refusing to write version {}", snapshot.version))
    }
}

/// Counts non-empty lines, recomputed only when the document changed.
#[derive(Default)]
struct NonEmptyLines {
    count: usize,
    runs: usize,
    seen_version: Option<u64>,
}

impl DocumentProcessor for NonEmptyLines {
    type Error = std::convert::Infallible;

    fn process(&mut self, session: &EditorSession) -> Result<(), Self::Error> {
        if self.seen_version == Some(session.document_version()) {
            return Ok(());
        }
        self.count = session
            .buffer()
            .lines()
            .iter()
            .filter(|l| !l.is_empty())
            .count();
        self.runs += 1;
        self.seen_version = Some(session.document_version());
        Ok(())
    }
}

#[test]
fn test_save_marks_clean_and_keeps_line_endings() {
    let mut session = EditorSession::new("one\r\ntwo\r\n");
    assert_eq!(session.line_ending(), LineEnding::Crlf);
    assert!(!session.is_modified());

    session.set_cursor(Position::new(1, 3));
    session.insert_text("!");
    assert!(session.is_modified());

    let mut sink = MemorySink::default();
    session.save_with(&mut sink).unwrap();
    assert_eq!(sink.saved, vec!["one\r\ntwo!\r\n".to_string()]);
    assert!(!session.is_modified());

    session.undo();
    assert!(session.is_modified());
    session.redo();
    assert!(!session.is_modified());
}

#[test]
fn test_failed_save_leaves_session_modified() {
    let mut session = EditorSession::new("draft");
    session.set_cursor_to_end();
    session.split_line();

    let err = session.save_with(&mut ReadOnlySink).unwrap_err();
    assert!(err.contains("refusing"));
    assert!(session.is_modified());
}

#[test]
fn test_snapshot_is_independent_of_later_edits() {
    let mut session = EditorSession::new("abc");
    let snapshot = session.snapshot();

    session.set_cursor_to_end();
    session.backspace();

    let handle = std::thread::spawn(move || snapshot.text_for_saving());
    assert_eq!(handle.join().unwrap(), "abc");
    assert_eq!(&*session.text(), "ab");
}

#[test]
fn test_sink_behind_trait_object() {
    let mut session = EditorSession::new("x");
    let mut sink = MemorySink::default();
    let dyn_sink: &mut dyn DocumentSink<Error = std::convert::Infallible> = &mut sink;
    session.save_with(dyn_sink).unwrap();
    assert_eq!(sink.saved, vec!["x".to_string()]);
}

#[test]
fn test_processor_skips_cursor_only_changes() {
    let mut session = EditorSession::from_lines(["a", "", "b"]);
    let mut counter = NonEmptyLines::default();
    session.apply_processor(&mut counter).unwrap();
    assert_eq!((counter.count, counter.runs), (2, 1));

    session.set_cursor(Position::new(1, 0));
    session.apply_processor(&mut counter).unwrap();
    assert_eq!(counter.runs, 1);

    session.insert_text("c");
    session.apply_processor(&mut counter).unwrap();
    assert_eq!((counter.count, counter.runs), (3, 2));
}

#[test]
fn test_multi_line_insert_notifies_each_step() {
    let mut session = EditorSession::empty();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    session.subscribe(move |change| {
        sink.lock()
            .unwrap()
            .push((change.kind, change.text.to_string()));
    });

    session.insert_text("a\r\nb");
    assert_eq!(session.buffer().lines(), &["a", "b"]);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            (ChangeKind::Edit, "a".to_string()),
            (ChangeKind::Edit, "a\n".to_string()),
            (ChangeKind::Edit, "a\nb".to_string()),
        ]
    );

    // One undo step per command.
    session.undo();
    session.undo();
    assert_eq!(&*session.text(), "a");
}
