//! Analysis of generated layouts for audits and reporting

/// Flood-fill reachability over floor cells
pub mod connectivity;
/// Per-layout and batch statistics
pub mod statistics;
