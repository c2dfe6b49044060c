//! Object type definitions.

use serde::{Deserialize, Serialize};

use super::token::Token;

/// Identifier for an object *type* (regular or textual).
///
/// Type keys are the subjects and complements of rules: `BABA IS YOU` grants
/// YOU to the type key the BABA noun names, and every instance of that type
/// picks the property up for free.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeKey(pub u16);

impl TypeKey {
    /// Create a type key.
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Get the raw key value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TypeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Type({})", self.0)
    }
}

/// What kind of board object a definition describes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefKind {
    /// A regular game object (baba, rock, wall, ...).
    Entity,
    /// A rule-forming text token.
    Text(Token),
}

/// A registered object type.
///
/// Definitions are static for the lifetime of a registry; instances reference
/// them by [`TypeKey`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDef {
    /// Unique key for this type.
    pub key: TypeKey,

    /// Lowercase name for entities ("baba"), uppercase-style token name for
    /// text ("baba_text", "is_text").
    pub name: String,

    /// Entity or text token.
    pub kind: DefKind,
}

impl ObjectDef {
    /// Create a regular entity definition.
    #[must_use]
    pub fn entity(key: TypeKey, name: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
            kind: DefKind::Entity,
        }
    }

    /// Create a text token definition.
    #[must_use]
    pub fn text(key: TypeKey, name: impl Into<String>, token: Token) -> Self {
        Self {
            key,
            name: name.into(),
            kind: DefKind::Text(token),
        }
    }

    /// Is this a text token?
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self.kind, DefKind::Text(_))
    }

    /// The token for text definitions.
    #[must_use]
    pub fn token(&self) -> Option<Token> {
        match self.kind {
            DefKind::Text(token) => Some(token),
            DefKind::Entity => None,
        }
    }
}
