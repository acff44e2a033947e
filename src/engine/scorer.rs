//! Rule evaluation over a single receipt.
//!
//! Usage: `Scorer::new(&receipt, compiled).run()`.
//!
//! ```text
//! for rule in compiled.rules (table order):
//!     contributions ++= (rule.production)(receipt)
//! ```
//!
//! No rule can fail: the receipt has already been validated, and every
//! production is total over a valid `Receipt`.

use super::compiled_rules::CompiledRules;
use super::metrics::{RuleMetrics, RunMetrics, RunResult};
use crate::{Contribution, Receipt, Rule};
use std::time::Instant;

#[derive(Debug)]
pub struct Scorer<'a> {
    receipt: &'a Receipt,
    compiled: CompiledRules<'a>,
}

impl<'a> Scorer<'a> {
    pub fn new(receipt: &'a Receipt, compiled: CompiledRules<'a>) -> Self {
        Scorer { receipt, compiled }
    }

    /// Names of the rules this scorer will evaluate.
    pub fn active_rule_names(&self) -> Vec<&'static str> {
        self.compiled.names()
    }

    /// Evaluate every active rule and return the breakdown in rule order.
    pub fn run(&self) -> Vec<Contribution> {
        self.compiled.rules.iter().flat_map(|rule| self.apply(rule)).collect()
    }

    /// Like [`Scorer::run`], also timing each rule.
    pub fn run_with_metrics(&self) -> RunResult {
        let started = Instant::now();
        let mut contributions = Vec::new();
        let mut rules = Vec::with_capacity(self.compiled.rules.len());

        for rule in &self.compiled.rules {
            let rule_started = Instant::now();
            let produced = self.apply(rule);
            rules.push(RuleMetrics {
                name: rule.name,
                duration: rule_started.elapsed(),
                points: produced.iter().map(|c| c.points).sum(),
                lines: produced.len(),
            });
            contributions.extend(produced);
        }

        RunResult { contributions, metrics: RunMetrics { total: started.elapsed(), rules } }
    }

    fn apply(&self, rule: &Rule) -> Vec<Contribution> {
        let produced = (rule.production)(self.receipt);
        tracing::debug!(
            rule = rule.name,
            lines = produced.len(),
            points = produced.iter().map(|c| c.points).sum::<u64>(),
            "rule evaluated"
        );
        produced
    }
}
