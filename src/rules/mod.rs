//! Rule inference: from aligned text tokens to the active rule set.
//!
//! Rules are not stored anywhere between turns. Every turn the scanner walks
//! the board, matches `SUBJECTS IS [NOT] COMPLEMENTS` token sequences in both
//! scan directions, and produces a fresh [`RuleSet`]. A rule stays "active"
//! only because the text forming it has not moved.

mod rule;
mod ruleset;
mod scanner;

pub use rule::{Complement, Rule};
pub use ruleset::RuleSet;
pub use scanner::scan_rules;

pub use crate::objects::Property;
