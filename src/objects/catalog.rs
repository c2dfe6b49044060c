//! The standard object catalog.
//!
//! Levels built from the common vocabulary (baba, rock, wall, flag, water,
//! skull and their text tokens) share one registry layout. The [`Catalog`]
//! holds the assigned keys as plain fields so callers and tests never look
//! types up by name.

use serde::{Deserialize, Serialize};

use super::definition::TypeKey;
use super::property::Property;
use super::registry::ObjectRegistry;
use super::token::Token;

/// Type keys for the standard vocabulary.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Catalog {
    // Entities
    pub baba: TypeKey,
    pub rock: TypeKey,
    pub wall: TypeKey,
    pub flag: TypeKey,
    pub water: TypeKey,
    pub skull: TypeKey,
    pub lava: TypeKey,

    // Noun text
    pub baba_text: TypeKey,
    pub rock_text: TypeKey,
    pub wall_text: TypeKey,
    pub flag_text: TypeKey,
    pub water_text: TypeKey,
    pub skull_text: TypeKey,
    pub lava_text: TypeKey,

    // Structure text
    pub is_text: TypeKey,
    pub and_text: TypeKey,
    pub not_text: TypeKey,

    // Property text
    pub you_text: TypeKey,
    pub win_text: TypeKey,
    pub stop_text: TypeKey,
    pub push_text: TypeKey,
    pub sink_text: TypeKey,
    pub defeat_text: TypeKey,
    pub hot_text: TypeKey,
    pub melt_text: TypeKey,
}

impl Catalog {
    /// Build the standard registry and its catalog of keys.
    #[must_use]
    pub fn standard() -> (ObjectRegistry, Catalog) {
        let mut registry = ObjectRegistry::new();

        let baba = registry.register_entity("baba");
        let rock = registry.register_entity("rock");
        let wall = registry.register_entity("wall");
        let flag = registry.register_entity("flag");
        let water = registry.register_entity("water");
        let skull = registry.register_entity("skull");
        let lava = registry.register_entity("lava");

        let baba_text = registry.register_text("baba_text", Token::Noun(baba));
        let rock_text = registry.register_text("rock_text", Token::Noun(rock));
        let wall_text = registry.register_text("wall_text", Token::Noun(wall));
        let flag_text = registry.register_text("flag_text", Token::Noun(flag));
        let water_text = registry.register_text("water_text", Token::Noun(water));
        let skull_text = registry.register_text("skull_text", Token::Noun(skull));
        let lava_text = registry.register_text("lava_text", Token::Noun(lava));

        let is_text = registry.register_text("is_text", Token::Is);
        let and_text = registry.register_text("and_text", Token::And);
        let not_text = registry.register_text("not_text", Token::Not);

        let you_text = registry.register_text("you_text", Token::Property(Property::You));
        let win_text = registry.register_text("win_text", Token::Property(Property::Win));
        let stop_text = registry.register_text("stop_text", Token::Property(Property::Stop));
        let push_text = registry.register_text("push_text", Token::Property(Property::Push));
        let sink_text = registry.register_text("sink_text", Token::Property(Property::Sink));
        let defeat_text = registry.register_text("defeat_text", Token::Property(Property::Defeat));
        let hot_text = registry.register_text("hot_text", Token::Property(Property::Hot));
        let melt_text = registry.register_text("melt_text", Token::Property(Property::Melt));

        let catalog = Catalog {
            baba,
            rock,
            wall,
            flag,
            water,
            skull,
            lava,
            baba_text,
            rock_text,
            wall_text,
            flag_text,
            water_text,
            skull_text,
            lava_text,
            is_text,
            and_text,
            not_text,
            you_text,
            win_text,
            stop_text,
            push_text,
            sink_text,
            defeat_text,
            hot_text,
            melt_text,
        };

        (registry, catalog)
    }
}
