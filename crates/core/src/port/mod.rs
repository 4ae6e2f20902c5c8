// Port Layer - Interfaces for external dependencies

pub mod report_sink;

// Re-exports
pub use report_sink::{ConsoleSink, ReportSink};
