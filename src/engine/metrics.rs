//! Engine run metrics.
//!
//! `Scorer::run` is the normal path. `Scorer::run_with_metrics` additionally
//! records how long each rule took and what it awarded, which the CLI report
//! prints. Collection is opt-in so the HTTP path never pays for it.

use crate::Contribution;
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for [`Scorer::run_with_metrics`].
    pub total: Duration,
    /// One entry per evaluated rule, in evaluation order.
    pub rules: Vec<RuleMetrics>,
}

/// Outcome of a single rule evaluation.
#[derive(Debug, Default, Clone)]
pub struct RuleMetrics {
    pub name: &'static str,
    pub duration: Duration,
    /// Sum of the points this rule awarded.
    pub points: u64,
    /// Number of breakdown lines this rule produced.
    pub lines: usize,
}

/// Scorer output bundled with timing information.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub contributions: Vec<Contribution>,
    pub metrics: RunMetrics,
}
