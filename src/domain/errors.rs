use derive_more::Display;

/// Boundary errors of the chart.
///
/// The chart core itself has no fatal paths: empty input, degenerate
/// domains and out-of-range gestures all degrade to safe defaults. What
/// remains is the presentation boundary, where host-supplied JSON or a
/// missing canvas element can be invalid.
#[derive(Debug, Clone, Display)]
pub enum ChartError {
    #[display(fmt = "invalid records: {}", _0)]
    InvalidRecords(String),
    #[display(fmt = "invalid configuration: {}", _0)]
    InvalidConfig(String),
    #[display(fmt = "canvas error: {}", _0)]
    Canvas(String),
}

impl std::error::Error for ChartError {}
