//! Object registry for definition lookup.
//!
//! The `ObjectRegistry` stores every object type a level can contain and
//! answers the identity queries the rest of the engine needs: is this type a
//! text token, which token is it, what is its display name.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{DefKind, ObjectDef, TypeKey};
use super::token::{Token, TokenRole};
use crate::core::GameError;

/// Registry of object type definitions.
///
/// ## Example
///
/// ```
/// use rulegrid::objects::{ObjectRegistry, Token, TokenRole};
///
/// let mut registry = ObjectRegistry::new();
/// let baba = registry.register_entity("baba");
/// let baba_text = registry.register_text("baba_text", Token::Noun(baba));
///
/// assert!(!registry.is_text(baba));
/// assert_eq!(registry.token_role(baba_text).unwrap(), TokenRole::Noun);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ObjectRegistry {
    defs: FxHashMap<TypeKey, ObjectDef>,
    by_name: FxHashMap<String, TypeKey>,
    next_key: u16,
}

impl ObjectRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition with an explicit key.
    ///
    /// Panics if the key or name is already registered.
    pub fn register(&mut self, def: ObjectDef) {
        if self.defs.contains_key(&def.key) {
            panic!("type key {:?} already registered", def.key);
        }
        if self.by_name.contains_key(&def.name) {
            panic!("type name {:?} already registered", def.name);
        }
        if def.key.0 >= self.next_key {
            self.next_key = def.key.0 + 1;
        }
        self.by_name.insert(def.name.clone(), def.key);
        self.defs.insert(def.key, def);
    }

    /// Register a regular entity with an auto-assigned key.
    pub fn register_entity(&mut self, name: impl Into<String>) -> TypeKey {
        let key = self.alloc_key();
        self.register(ObjectDef::entity(key, name));
        key
    }

    /// Register a text token with an auto-assigned key.
    pub fn register_text(&mut self, name: impl Into<String>, token: Token) -> TypeKey {
        let key = self.alloc_key();
        self.register(ObjectDef::text(key, name, token));
        key
    }

    fn alloc_key(&mut self) -> TypeKey {
        let key = TypeKey::new(self.next_key);
        self.next_key += 1;
        key
    }

    /// Get a definition by key.
    #[must_use]
    pub fn get(&self, key: TypeKey) -> Option<&ObjectDef> {
        self.defs.get(&key)
    }

    /// Get a definition by key, panicking if absent.
    ///
    /// Use when the key is known to come from this registry.
    #[must_use]
    pub fn get_unchecked(&self, key: TypeKey) -> &ObjectDef {
        self.defs.get(&key).expect("type key not registered")
    }

    /// Look up a type key by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<TypeKey> {
        self.by_name.get(name).copied()
    }

    /// The display name of a type.
    #[must_use]
    pub fn name(&self, key: TypeKey) -> &str {
        &self.get_unchecked(key).name
    }

    /// Is this type a text token?
    #[must_use]
    pub fn is_text(&self, key: TypeKey) -> bool {
        self.get_unchecked(key).is_text()
    }

    /// The token carried by a text type, if any.
    #[must_use]
    pub fn token(&self, key: TypeKey) -> Option<Token> {
        self.get(key).and_then(ObjectDef::token)
    }

    /// The grammatical role of a text type.
    ///
    /// Errors with [`GameError::NotText`] for entity types - asking a rock
    /// for its token role is a programming mistake, not a game state.
    pub fn token_role(&self, key: TypeKey) -> Result<TokenRole, GameError> {
        match self.get_unchecked(key).kind {
            DefKind::Text(token) => Ok(token.role()),
            DefKind::Entity => Err(GameError::NotText { key }),
        }
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Is the registry empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Iterate over all definitions.
    pub fn iter(&self) -> impl Iterator<Item = &ObjectDef> {
        self.defs.values()
    }
}
