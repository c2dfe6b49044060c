//! The per-turn rule set and its query surface.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::rule::{Complement, Rule};
use crate::objects::{ObjectRegistry, Property, TypeKey};

/// All rules active this turn, with derived lookup tables.
///
/// Insertion order is discovery order (row scans before column scans) and is
/// the documented tie-break for multi-target transformations. Duplicate
/// rules collapse on insert, which makes rule discovery idempotent and
/// order-independent across re-scans.
///
/// Negation overrides assertion: `BABA IS NOT YOU` suppresses `BABA IS YOU`
/// no matter which scan direction found which.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Rule>", into = "Vec<Rule>")]
pub struct RuleSet {
    rules: Vec<Rule>,
    seen: FxHashSet<Rule>,
    properties: FxHashMap<TypeKey, FxHashSet<Property>>,
    negated_properties: FxHashSet<(TypeKey, Property)>,
    transforms: FxHashMap<TypeKey, Vec<TypeKey>>,
    negated_transforms: FxHashSet<(TypeKey, TypeKey)>,
}

impl RuleSet {
    /// An empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, collapsing duplicates.
    ///
    /// Returns `true` if the rule was new.
    pub fn insert(&mut self, rule: Rule) -> bool {
        if !self.seen.insert(rule) {
            return false;
        }
        self.rules.push(rule);

        match (rule.complement, rule.negated) {
            (Complement::Property(property), false) => {
                self.properties
                    .entry(rule.subject)
                    .or_default()
                    .insert(property);
            }
            (Complement::Property(property), true) => {
                self.negated_properties.insert((rule.subject, property));
            }
            (Complement::Noun(target), false) => {
                let targets = self.transforms.entry(rule.subject).or_default();
                if !targets.contains(&target) {
                    targets.push(target);
                }
            }
            (Complement::Noun(target), true) => {
                self.negated_transforms.insert((rule.subject, target));
            }
        }
        true
    }

    // === Query surface ===

    /// Does `subject` hold `property` this turn?
    #[must_use]
    pub fn has_property(&self, subject: TypeKey, property: Property) -> bool {
        if self.negated_properties.contains(&(subject, property)) {
            return false;
        }
        self.properties
            .get(&subject)
            .is_some_and(|props| props.contains(&property))
    }

    /// Every type key holding `property`, sorted for determinism.
    #[must_use]
    pub fn subjects_with_property(&self, property: Property) -> Vec<TypeKey> {
        let mut subjects: Vec<TypeKey> = self
            .properties
            .iter()
            .filter(|(subject, props)| {
                props.contains(&property)
                    && !self.negated_properties.contains(&(**subject, property))
            })
            .map(|(subject, _)| *subject)
            .collect();
        subjects.sort();
        subjects
    }

    /// Transformation targets for `subject`, in discovery order.
    ///
    /// Negated pairings are filtered out. A subject may legally map to
    /// several targets; the resolver applies the first.
    #[must_use]
    pub fn transformations_for(&self, subject: TypeKey) -> Vec<TypeKey> {
        self.transforms
            .get(&subject)
            .map(|targets| {
                targets
                    .iter()
                    .copied()
                    .filter(|target| !self.negated_transforms.contains(&(subject, *target)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Is this exact rule in the set?
    #[must_use]
    pub fn contains(&self, rule: &Rule) -> bool {
        self.seen.contains(rule)
    }

    /// Rules in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Number of distinct rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Is the set empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Human-readable listing, in discovery order.
    #[must_use]
    pub fn describe(&self, registry: &ObjectRegistry) -> Vec<String> {
        self.rules.iter().map(|rule| rule.describe(registry)).collect()
    }
}

impl PartialEq for RuleSet {
    fn eq(&self, other: &Self) -> bool {
        self.rules == other.rules
    }
}

impl Eq for RuleSet {}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        let mut set = RuleSet::new();
        for rule in rules {
            set.insert(rule);
        }
        set
    }
}

impl From<RuleSet> for Vec<Rule> {
    fn from(set: RuleSet) -> Self {
        set.rules
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut set = RuleSet::new();
        for rule in iter {
            set.insert(rule);
        }
        set
    }
}
