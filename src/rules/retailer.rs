use crate::Contribution;
use crate::Rule;
use crate::engine::RuleMask;
use crate::rules::helpers::alphanumeric_count;

pub fn get() -> Vec<Rule> {
    vec![rule! {
        name: "retailer_name",
        kind: RuleMask::RETAILER_NAME,
        prod: |receipt| -> Contribution {
            let count = alphanumeric_count(&receipt.retailer);
            Contribution::new(
                "retailer_name",
                count,
                format!("retailer name has {} alphanumeric characters", count),
            )
        }
    }]
}
