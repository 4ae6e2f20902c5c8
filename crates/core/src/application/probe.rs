// Mutation Probe Use Case

use crate::domain::{FixedViewList, GrowableList, ReadOnlyList};
use crate::port::ReportSink;

/// Run the three mutation probes in fixed order: growable, fixed-view,
/// read-only. Every mutation failure is caught here and reported through
/// the sink by category name; nothing propagates to the caller.
pub fn run_probes(sink: &mut dyn ReportSink) {
    probe_growable(sink);
    probe_fixed_view(sink);
    probe_read_only(sink);
}

/// Growable probe: starts empty, append always succeeds
fn probe_growable(sink: &mut dyn ReportSink) {
    let mut list = GrowableList::new();
    sink.report_initial("list", &list.to_string());

    tracing::debug!(op = "push", value = 0, "probing growable list");
    if let Err(e) = list.push(0) {
        sink.report_failure(e.kind());
    }
    sink.report_after("list", "list.push(0)", &list.to_string());

    sink.separator();
}

/// Fixed-view probe: replacement succeeds, structural append fails
fn probe_fixed_view(sink: &mut dyn ReportSink) {
    let mut fixed = FixedViewList::from_items([0, 1, 2]);
    sink.report_initial("fixed", &fixed.to_string());

    tracing::debug!(op = "set", index = 0, value = 6, "probing fixed view");
    if let Err(e) = fixed.set(0, 6) {
        sink.report_failure(e.kind());
    }
    sink.report_after("fixed", "fixed.set(0, 6)", &fixed.to_string());

    tracing::debug!(op = "push", value = 3, "probing fixed view");
    if let Err(e) = fixed.push(3) {
        sink.report_failure(e.kind());
    }
    sink.report_after("fixed", "fixed.push(3)", &fixed.to_string());

    sink.separator();
}

/// Read-only probe: both replacement and append fail
fn probe_read_only(sink: &mut dyn ReportSink) {
    let mut readonly = ReadOnlyList::new(FixedViewList::from_items([0, 1, 2]));
    sink.report_initial("readonly", &readonly.to_string());

    tracing::debug!(op = "set", index = 0, value = 6, "probing read-only list");
    if let Err(e) = readonly.set(0, 6) {
        sink.report_failure(e.kind());
    }
    sink.report_after("readonly", "readonly.set(0, 6)", &readonly.to_string());

    tracing::debug!(op = "push", value = 3, "probing read-only list");
    if let Err(e) = readonly.push(3) {
        sink.report_failure(e.kind());
    }
    sink.report_after("readonly", "readonly.push(3)", &readonly.to_string());

    sink.separator();
}
