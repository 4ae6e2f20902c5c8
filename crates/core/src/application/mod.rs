// Application Layer - Probe Use Case

pub mod probe;

#[cfg(test)]
mod probe_test;

// Re-exports
pub use probe::run_probes;
