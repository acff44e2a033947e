extern crate self as receipt_points;

use chrono::{NaiveDate, NaiveTime};

#[macro_use]
mod macros;
mod api;
mod engine;
mod http;
mod money;
mod receipt;
mod rules;
mod store;

pub use api::{
    Options, RuleTiming, ScoreDetails, ScoreResult, ScoreResultVerbose, rule_names, score, score_verbose_with,
    score_with,
};
pub use engine::RuleMask;
pub use http::{
    ApiConfig, ApiError, ApiResult, AppState, ErrorResponse, HealthResponse, PointsResponse, ProcessReceiptResponse,
    create_router, create_server, run_server,
};
pub use money::{AmountError, Cents};
pub use receipt::{ReceiptError, ValidationError, parse_receipt, parse_receipt_json};
pub use store::{MAX_ID_ATTEMPTS, ReceiptStore, StoreError, StoredReceipt};

// --- Receipt model ------------------------------------------------------------

/// A validated purchase receipt.
///
/// Values of this type only come out of [`parse_receipt`] (or are built by
/// hand in tests), so every field already satisfies the scoring preconditions.
/// `total` is trusted as submitted; it is never compared to the item prices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub retailer: String,
    pub total: Cents,
    pub purchase_date: NaiveDate,
    /// Minute precision; seconds are always zero.
    pub purchase_time: NaiveTime,
    pub items: Vec<Item>,
}

/// A single line item. `short_description` is kept exactly as submitted;
/// rules trim it before measuring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub short_description: String,
    pub price: Cents,
}

/// One entry of a score breakdown: which rule awarded how many points, and why.
///
/// Renders as `"<points> points - <reason>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    /// Name of the rule that produced this entry.
    pub rule: &'static str,
    pub points: u64,
    pub reason: String,
}

impl Contribution {
    pub fn new(rule: &'static str, points: u64, reason: impl Into<String>) -> Self {
        Contribution { rule, points, reason: reason.into() }
    }
}

impl std::fmt::Display for Contribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} points - {}", self.points, self.reason)
    }
}

// --- Rules ----------------------------------------------------------------------

// Trait to convert rule production results into breakdown entries
pub(crate) trait IntoContributions {
    fn into_contributions(self) -> Vec<Contribution>;
}

impl IntoContributions for Contribution {
    fn into_contributions(self) -> Vec<Contribution> {
        vec![self]
    }
}

impl IntoContributions for Option<Contribution> {
    fn into_contributions(self) -> Vec<Contribution> {
        self.into_iter().collect()
    }
}

impl IntoContributions for Vec<Contribution> {
    fn into_contributions(self) -> Vec<Contribution> {
        self
    }
}

pub(crate) type Production = Box<dyn Fn(&Receipt) -> Vec<Contribution> + Send + Sync>;

/// A scoring rule: a name, the `RuleMask` bit that enables it, and a
/// `production` that inspects a receipt and returns zero or more
/// contributions.
///
/// Rules never see each other's output; the engine sums whatever they produce.
pub(crate) struct Rule {
    pub name: &'static str,
    pub kind: RuleMask,
    pub production: Production,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("production", &"<function>")
            .finish()
    }
}
