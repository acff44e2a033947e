//! Scoring engine.
//!
//! The engine applies a fixed, ordered rule table to one validated receipt.
//! It is split into small submodules under `src/engine/`:
//!
//! ```text
//! rules (all) ── CompiledRules::new(rules, mask)   (compiled_rules.rs)
//!                     │  keep rules whose bit is in the mask, in table order
//!                     v
//! receipt ───── Scorer::run / run_with_metrics      (scorer.rs)
//!                     │  evaluate every active rule independently
//!                     │  concatenate contributions in rule order
//!                     v
//!              Vec<Contribution> (+ RunMetrics)      (metrics.rs)
//! ```
//!
//! Rules do not interact: each one reads the receipt and returns its own
//! contributions. The score is the plain sum, so the order of the table only
//! affects the order of the breakdown, never the total.
//!
//! ## Adding a rule
//!
//! - Add a `RuleMask` bit in `compiled_rules.rs`.
//! - Build the rule with `rule!` under `src/rules/` and append it to
//!   `rules::get` at the position its breakdown line should appear.
//!
//! ## Debugging
//!
//! Run with `RUST_LOG=receipt_points=debug` to trace each rule evaluation.

#[path = "engine/compiled_rules.rs"]
mod compiled_rules;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/scorer.rs"]
mod scorer;

pub use compiled_rules::{CompiledRules, RuleMask};
#[allow(unused_imports)]
pub use metrics::{RuleMetrics, RunMetrics, RunResult};
pub use scorer::Scorer;
