//! Rule selection.
//!
//! `CompiledRules` is the static side of a scoring run: the subset of the rule
//! table that is enabled by the caller's `RuleMask`, kept in table order.
//!
//! ## Invariants
//!
//! - Every rule in the table carries exactly one `RuleMask` bit.
//! - `CompiledRules::rules` preserves the relative order of the table, which is
//!   the breakdown order.

use crate::Rule;

bitflags::bitflags! {
    /// One bit per scoring rule.
    ///
    /// Flag names double as the user-facing rule names: `RETAILER_NAME` is
    /// selected on the command line as `retailer_name` or `retailer-name`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RuleMask: u8 {
        const RETAILER_NAME     = 1 << 0;
        const ROUND_DOLLAR      = 1 << 1;
        const QUARTER_MULTIPLE  = 1 << 2;
        const ITEM_PAIRS        = 1 << 3;
        const ITEM_DESCRIPTION  = 1 << 4;
        const ODD_DAY           = 1 << 5;
        const AFTERNOON_WINDOW  = 1 << 6;
    }
}

impl Default for RuleMask {
    fn default() -> Self {
        RuleMask::all()
    }
}

impl RuleMask {
    /// Look up a single rule bit by name, case-insensitively, treating `-`
    /// and `_` alike.
    pub fn from_rule_name(name: &str) -> Option<RuleMask> {
        let normalized = name.trim().to_ascii_uppercase().replace('-', "_");
        RuleMask::from_name(&normalized)
    }
}

/// The active subset of a rule table.
#[derive(Debug)]
pub struct CompiledRules<'a> {
    pub rules: Vec<&'a Rule>,
    pub mask: RuleMask,
}

impl<'a> CompiledRules<'a> {
    /// Keep the rules whose bit intersects `mask`.
    pub fn new(rules: &'a [Rule], mask: RuleMask) -> Self {
        let rules = rules.iter().filter(|r| mask.intersects(r.kind)).collect();
        CompiledRules { rules, mask }
    }

    /// Names of the active rules, in evaluation order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_names_parse_loosely() {
        assert_eq!(RuleMask::from_rule_name("retailer_name"), Some(RuleMask::RETAILER_NAME));
        assert_eq!(RuleMask::from_rule_name("Afternoon-Window"), Some(RuleMask::AFTERNOON_WINDOW));
        assert_eq!(RuleMask::from_rule_name(" odd_day "), Some(RuleMask::ODD_DAY));
        assert_eq!(RuleMask::from_rule_name("bonus"), None);
    }

    #[test]
    fn mask_filters_and_keeps_table_order() {
        let table = crate::rules::get();

        let all = CompiledRules::new(&table, RuleMask::all());
        assert_eq!(all.rules.len(), table.len());

        let some = CompiledRules::new(&table, RuleMask::ODD_DAY | RuleMask::RETAILER_NAME);
        assert_eq!(some.names(), vec!["retailer_name", "odd_day"]);

        let none = CompiledRules::new(&table, RuleMask::empty());
        assert!(none.rules.is_empty());
    }
}
