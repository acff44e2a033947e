//! The scoring rule table.
//!
//! Rules are grouped by the part of the receipt they read. `get` returns them
//! in breakdown order: retailer, total, items, purchase date and time.

pub(crate) mod helpers;
pub(crate) mod items;
pub(crate) mod predicates;
pub(crate) mod purchase;
pub(crate) mod retailer;
pub(crate) mod total;


use crate::Rule;

/// Build the full rule table in breakdown order.
pub(crate) fn get() -> Vec<Rule> {
    let mut rules = Vec::new();
    rules.extend(retailer::get());
    rules.extend(total::get());
    rules.extend(items::get());
    rules.extend(purchase::get());
    rules
}
