use crate::Contribution;
use crate::Rule;
use crate::engine::RuleMask;
use crate::rules::helpers::{description_bonus, pair_count};
use crate::rules::predicates::has_bonus_description;

pub fn get() -> Vec<Rule> {
    vec![
        rule! {
            name: "item_pairs",
            kind: RuleMask::ITEM_PAIRS,
            prod: |receipt| -> Contribution {
                let count = receipt.items.len();
                let pairs = pair_count(count);
                Contribution::new(
                    "item_pairs",
                    pairs * 5,
                    format!("{} items ({} pairs @ 5 points each)", count, pairs),
                )
            }
        },
        // One line per qualifying item, in item order, even at a price of 0.00.
        rule! {
            name: "item_description",
            kind: RuleMask::ITEM_DESCRIPTION,
            prod: |receipt| -> Vec<Contribution> {
                receipt
                    .items
                    .iter()
                    .filter(|item| has_bonus_description(&item.short_description))
                    .map(|item| {
                        Contribution::new(
                            "item_description",
                            description_bonus(item.price),
                            format!("\"{}\" description length is a multiple of 3", item.short_description.trim()),
                        )
                    })
                    .collect()
            }
        },
    ]
}
