use crate::Cents;

/// Count ASCII letters and digits. Whitespace, punctuation and non-ASCII
/// letters do not count.
pub fn alphanumeric_count(s: &str) -> u64 {
    s.chars().filter(|c| c.is_ascii_alphanumeric()).count() as u64
}

/// Number of complete pairs among `count` items.
pub fn pair_count(count: usize) -> u64 {
    (count / 2) as u64
}

/// Length in characters of the description once surrounding whitespace is
/// removed.
pub fn trimmed_len(description: &str) -> usize {
    description.trim().chars().count()
}

/// `ceil(price * 0.2)` computed on cents: a fifth of a dollar amount is
/// `cents / 500` whole points.
pub fn description_bonus(price: Cents) -> u64 {
    price.get().div_ceil(500)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_only_ascii_alphanumerics() {
        assert_eq!(alphanumeric_count("Target"), 6);
        assert_eq!(alphanumeric_count("M&M Corner Market"), 14);
        assert_eq!(alphanumeric_count("  7-Eleven #42 "), 9);
        assert_eq!(alphanumeric_count("Café"), 3);
        assert_eq!(alphanumeric_count(""), 0);
    }

    #[test]
    fn pairs_round_down() {
        assert_eq!(pair_count(0), 0);
        assert_eq!(pair_count(1), 0);
        assert_eq!(pair_count(5), 2);
        assert_eq!(pair_count(6), 3);
    }

    #[test]
    fn description_bonus_rounds_up() {
        assert_eq!(description_bonus(Cents(1225)), 3);
        assert_eq!(description_bonus(Cents(1200)), 3);
        assert_eq!(description_bonus(Cents(500)), 1);
        assert_eq!(description_bonus(Cents(501)), 2);
        assert_eq!(description_bonus(Cents(1)), 1);
        assert_eq!(description_bonus(Cents(0)), 0);
    }

    #[test]
    fn trims_before_measuring() {
        assert_eq!(trimmed_len("   Klarbrunn 12-PK 12 FL OZ  "), 24);
        assert_eq!(trimmed_len("\tabc\n"), 3);
        assert_eq!(trimmed_len("   "), 0);
    }
}
