//! The rule triple.

use serde::{Deserialize, Serialize};

use crate::objects::{ObjectRegistry, Property, TypeKey};

/// The right-hand side of a rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Complement {
    /// `BABA IS YOU` - grants a behavior.
    Property(Property),
    /// `ROCK IS BABA` - transforms every subject instance.
    Noun(TypeKey),
}

/// A single rule: subject, complement, polarity.
///
/// `BABA IS YOU` is `{ subject: baba, complement: Property(You), negated:
/// false }`. A negated rule grants nothing; it suppresses the matching
/// positive rule discovered in the same turn (negation wins over assertion).
///
/// Identity is the whole triple - two scans discovering the same rule
/// collapse to one entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    pub subject: TypeKey,
    pub complement: Complement,
    pub negated: bool,
}

impl Rule {
    /// A positive property rule.
    #[must_use]
    pub const fn property(subject: TypeKey, property: Property) -> Self {
        Self {
            subject,
            complement: Complement::Property(property),
            negated: false,
        }
    }

    /// A positive transformation rule.
    #[must_use]
    pub const fn transform(subject: TypeKey, target: TypeKey) -> Self {
        Self {
            subject,
            complement: Complement::Noun(target),
            negated: false,
        }
    }

    /// The same rule with inverted polarity.
    #[must_use]
    pub const fn negated(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Human-readable form, e.g. `"BABA IS NOT YOU"`.
    ///
    /// Needs the registry for subject/target names.
    #[must_use]
    pub fn describe(&self, registry: &ObjectRegistry) -> String {
        let subject = registry.name(self.subject).to_uppercase();
        let not = if self.negated { "NOT " } else { "" };
        match self.complement {
            Complement::Property(property) => format!("{subject} IS {not}{property}"),
            Complement::Noun(target) => {
                format!("{subject} IS {not}{}", registry.name(target).to_uppercase())
            }
        }
    }
}
