//! Unit tests for the mutation probe sequence

use crate::application::probe::run_probes;
use crate::port::ReportSink;

/// Recording sink: captures every probe event in call order
#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Initial { label: String, contents: String },
    Failure { kind: String },
    After { label: String, op: String, contents: String },
    Separator,
}

#[derive(Default)]
struct RecordingSink {
    events: Vec<Event>,
}

impl ReportSink for RecordingSink {
    fn report_initial(&mut self, label: &str, contents: &str) {
        self.events.push(Event::Initial {
            label: label.to_string(),
            contents: contents.to_string(),
        });
    }

    fn report_failure(&mut self, kind: &str) {
        self.events.push(Event::Failure {
            kind: kind.to_string(),
        });
    }

    fn report_after(&mut self, label: &str, op: &str, contents: &str) {
        self.events.push(Event::After {
            label: label.to_string(),
            op: op.to_string(),
            contents: contents.to_string(),
        });
    }

    fn separator(&mut self) {
        self.events.push(Event::Separator);
    }
}

#[test]
fn test_event_counts() {
    let mut sink = RecordingSink::default();
    run_probes(&mut sink);

    let initials = sink
        .events
        .iter()
        .filter(|e| matches!(e, Event::Initial { .. }))
        .count();
    let afters = sink
        .events
        .iter()
        .filter(|e| matches!(e, Event::After { .. }))
        .count();
    let failures = sink
        .events
        .iter()
        .filter(|e| matches!(e, Event::Failure { .. }))
        .count();
    let separators = sink
        .events
        .iter()
        .filter(|e| matches!(e, Event::Separator))
        .count();

    assert_eq!(initials, 3);
    assert_eq!(afters, 5);
    assert_eq!(failures, 3);
    assert_eq!(separators, 3);
}

#[test]
fn test_growable_block_has_no_failure() {
    let mut sink = RecordingSink::default();
    run_probes(&mut sink);

    // First block: everything up to the first separator
    let first_separator = sink
        .events
        .iter()
        .position(|e| matches!(e, Event::Separator))
        .unwrap();
    let block = &sink.events[..first_separator];

    assert!(block.iter().all(|e| !matches!(e, Event::Failure { .. })));
    assert_eq!(
        block.last(),
        Some(&Event::After {
            label: "list".to_string(),
            op: "list.push(0)".to_string(),
            contents: "[0]".to_string(),
        })
    );
}

#[test]
fn test_all_failures_are_unsupported_operation() {
    let mut sink = RecordingSink::default();
    run_probes(&mut sink);

    for event in &sink.events {
        if let Event::Failure { kind } = event {
            assert_eq!(kind, "unsupported operation");
        }
    }
}

#[test]
fn test_failed_attempts_leave_contents_unchanged() {
    let mut sink = RecordingSink::default();
    run_probes(&mut sink);

    // Every failure is immediately followed by the after-line of the
    // attempt that failed; its contents must match the state before it
    let mut last_contents: Option<String> = None;
    let mut pending_failure = false;

    for event in &sink.events {
        match event {
            Event::Initial { contents, .. } => {
                last_contents = Some(contents.clone());
                pending_failure = false;
            }
            Event::Failure { .. } => pending_failure = true,
            Event::After { contents, .. } => {
                if pending_failure {
                    assert_eq!(Some(contents), last_contents.as_ref());
                    pending_failure = false;
                }
                last_contents = Some(contents.clone());
            }
            Event::Separator => {}
        }
    }
}
