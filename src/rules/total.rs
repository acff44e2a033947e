use crate::Contribution;
use crate::Rule;
use crate::engine::RuleMask;
use crate::rules::predicates::{is_quarter_multiple, is_round_dollar};

pub fn get() -> Vec<Rule> {
    vec![
        rule! {
            name: "round_dollar",
            kind: RuleMask::ROUND_DOLLAR,
            prod: |receipt| -> Option<Contribution> {
                is_round_dollar(receipt.total)
                    .then(|| Contribution::new("round_dollar", 50, "total is a round dollar amount"))
            }
        },
        rule! {
            name: "quarter_multiple",
            kind: RuleMask::QUARTER_MULTIPLE,
            prod: |receipt| -> Option<Contribution> {
                is_quarter_multiple(receipt.total)
                    .then(|| Contribution::new("quarter_multiple", 25, "total is a multiple of 0.25"))
            }
        },
    ]
}
