//! Text tokens and their roles in rule formation.

use serde::{Deserialize, Serialize};

use super::definition::TypeKey;
use super::property::Property;

/// What a text token contributes to a rule sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// Names a regular object type (BABA names the baba entity key).
    Noun(TypeKey),
    /// The verb IS.
    Is,
    /// The conjunction AND, joining subject or complement lists.
    And,
    /// The negation NOT, inverting the rule it completes.
    Not,
    /// A behavioral property word (YOU, WIN, STOP, ...).
    Property(Property),
}

impl Token {
    /// The role-only view of this token.
    #[must_use]
    pub const fn role(self) -> TokenRole {
        match self {
            Token::Noun(_) => TokenRole::Noun,
            Token::Is => TokenRole::Verb,
            Token::And => TokenRole::Conjunction,
            Token::Not => TokenRole::Negation,
            Token::Property(_) => TokenRole::Property,
        }
    }
}

/// The grammatical role of a text token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenRole {
    Noun,
    Verb,
    Conjunction,
    Negation,
    Property,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles() {
        assert_eq!(Token::Noun(TypeKey::new(1)).role(), TokenRole::Noun);
        assert_eq!(Token::Is.role(), TokenRole::Verb);
        assert_eq!(Token::And.role(), TokenRole::Conjunction);
        assert_eq!(Token::Not.role(), TokenRole::Negation);
        assert_eq!(Token::Property(Property::Win).role(), TokenRole::Property);
    }
}
