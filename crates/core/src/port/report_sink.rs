// Report Sink Port (for testability)

/// Sink for probe output (allows capturing the exact line sequence in tests)
pub trait ReportSink {
    /// "as originally assigned" state line for a container
    fn report_initial(&mut self, label: &str, contents: &str);

    /// Caught-failure report, by category name only
    fn report_failure(&mut self, kind: &str);

    /// State line after a mutation attempt, labeled with the operation tried
    fn report_after(&mut self, label: &str, op: &str, contents: &str);

    /// Blank line closing a container's block
    fn separator(&mut self);
}

/// Console sink (production): state lines to stdout, failures to stderr
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn report_initial(&mut self, label: &str, contents: &str) {
        println!("{} as originally assigned: {}", label, contents);
    }

    fn report_failure(&mut self, kind: &str) {
        eprintln!("caught failure: {}", kind);
    }

    fn report_after(&mut self, label: &str, op: &str, contents: &str) {
        println!("{} after {}: {}", label, op, contents);
    }

    fn separator(&mut self) {
        println!();
    }
}
