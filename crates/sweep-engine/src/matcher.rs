//! Criterion evaluation and rule matching.
//!
//! Matching fails closed: an empty rule set never matches, regardless of
//! logic. Value comparison is deliberately loose (string equality, or
//! numeric equality when both sides parse as numbers) to preserve the
//! behavior spam rules were written against; see the matcher tests for
//! the false-positive potential this carries.

use sweep_model::{CleanerConfig, Criterion, Entry, MatchLogic};

/// Criterion value that matches empty fields instead of a literal.
pub const BLANK_TOKEN: &str = "blank";

/// Loose equality: exact string match, or numeric equality when both
/// sides parse as numbers (`"42"` matches `"42.0"`).
pub fn values_match_loose(lhs: &str, rhs: &str) -> bool {
    if lhs == rhs {
        return true;
    }
    match (lhs.trim().parse::<f64>(), rhs.trim().parse::<f64>()) {
        (Ok(lhs), Ok(rhs)) => lhs == rhs,
        _ => false,
    }
}

/// Evaluate one criterion against an entry. Missing fields read as empty.
pub fn criterion_matches(entry: &Entry, criterion: &Criterion) -> bool {
    let field_value = entry.value(&criterion.field_id);
    if criterion.value.trim().eq_ignore_ascii_case(BLANK_TOKEN) {
        return field_value.trim().is_empty();
    }
    values_match_loose(field_value, &criterion.value)
}

/// Combine all criteria into one match decision.
pub fn entry_matches(entry: &Entry, criteria: &[Criterion], logic: MatchLogic) -> bool {
    if criteria.is_empty() {
        return false;
    }
    match logic {
        MatchLogic::And => criteria.iter().all(|rule| criterion_matches(entry, rule)),
        MatchLogic::Or => criteria.iter().any(|rule| criterion_matches(entry, rule)),
    }
}

/// Evaluate a saved config against an entry; non-actionable configs match
/// nothing.
pub fn config_matches(entry: &Entry, config: &CleanerConfig) -> bool {
    config.is_actionable() && entry_matches(entry, &config.criteria, config.logic)
}
