use crate::Contribution;
use crate::Rule;
use crate::engine::RuleMask;
use crate::rules::predicates::{is_afternoon_window, is_odd_day};

pub fn get() -> Vec<Rule> {
    vec![
        rule! {
            name: "odd_day",
            kind: RuleMask::ODD_DAY,
            prod: |receipt| -> Option<Contribution> {
                is_odd_day(receipt.purchase_date).then(|| Contribution::new("odd_day", 6, "purchase day is odd"))
            }
        },
        rule! {
            name: "afternoon_window",
            kind: RuleMask::AFTERNOON_WINDOW,
            prod: |receipt| -> Option<Contribution> {
                is_afternoon_window(receipt.purchase_time).then(|| {
                    Contribution::new("afternoon_window", 10, "purchase time is between 2:00pm and 4:00pm")
                })
            }
        },
    ]
}
