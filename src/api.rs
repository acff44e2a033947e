use crate::engine::{self, CompiledRules, RuleMask};
use crate::{Contribution, Receipt, Rule};
use once_cell::sync::Lazy;
use std::time::Duration;

static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(crate::rules::get);

/// Options that affect scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Rules to evaluate. Defaults to every rule.
    pub rules: RuleMask,
}

/// Points awarded to a receipt together with the per-rule breakdown.
///
/// `points` is always the sum of `breakdown[..].points`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub points: u64,
    /// Contributions in rule order.
    pub breakdown: Vec<Contribution>,
}

impl ScoreResult {
    fn from_contributions(breakdown: Vec<Contribution>) -> Self {
        let points = breakdown.iter().map(|c| c.points).sum();
        ScoreResult { points, breakdown }
    }

    /// The breakdown rendered as `"<points> points - <reason>"` lines.
    pub fn lines(&self) -> Vec<String> {
        self.breakdown.iter().map(ToString::to_string).collect()
    }
}

/// Timing for one evaluated rule.
#[derive(Debug, Clone)]
pub struct RuleTiming {
    pub rule: String,
    pub duration: Duration,
    pub points: u64,
    pub lines: usize,
}

/// Additional details returned by [`score_verbose_with`].
#[derive(Debug, Clone)]
pub struct ScoreDetails {
    /// Total elapsed time.
    pub total: Duration,
    /// Names of rules that were active for this run.
    pub active_rules: Vec<String>,
    pub rules: Vec<RuleTiming>,
}

/// Result from [`score_verbose_with`].
#[derive(Debug, Clone)]
pub struct ScoreResultVerbose {
    pub result: ScoreResult,
    pub details: ScoreDetails,
}

/// Score `receipt` with every rule enabled.
///
/// # Example
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use receipt_points::{Cents, Receipt, score};
///
/// let receipt = Receipt {
///     retailer: "Target".to_string(),
///     total: Cents(3535),
///     purchase_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
///     purchase_time: NaiveTime::from_hms_opt(13, 1, 0).unwrap(),
///     items: vec![],
/// };
/// assert_eq!(score(&receipt).points, 12);
/// ```
pub fn score(receipt: &Receipt) -> ScoreResult {
    score_with(receipt, &Options::default())
}

/// Score `receipt` with the rules selected by `options`.
pub fn score_with(receipt: &Receipt, options: &Options) -> ScoreResult {
    let scorer = engine::Scorer::new(receipt, CompiledRules::new(&DEFAULT_RULES, options.rules));
    ScoreResult::from_contributions(scorer.run())
}

/// Score `receipt` and also return per-rule timings.
///
/// The default [`score_with`] path does not collect these.
pub fn score_verbose_with(receipt: &Receipt, options: &Options) -> ScoreResultVerbose {
    let scorer = engine::Scorer::new(receipt, CompiledRules::new(&DEFAULT_RULES, options.rules));
    let active_rules = scorer.active_rule_names().into_iter().map(|s| s.to_string()).collect();

    let run = scorer.run_with_metrics();

    let rules = run
        .metrics
        .rules
        .iter()
        .map(|m| RuleTiming { rule: m.name.to_string(), duration: m.duration, points: m.points, lines: m.lines })
        .collect();

    ScoreResultVerbose {
        result: ScoreResult::from_contributions(run.contributions),
        details: ScoreDetails { total: run.metrics.total, active_rules, rules },
    }
}

/// Names of all rules, in breakdown order.
pub fn rule_names() -> Vec<&'static str> {
    DEFAULT_RULES.iter().map(|r| r.name).collect()
}
