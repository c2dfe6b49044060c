//! Behavioral properties grantable by rules.

use serde::{Deserialize, Serialize};

/// A behavior a rule can grant to an object type.
///
/// Properties are never intrinsic: an object has a property for exactly as
/// long as some `NOUN IS PROPERTY` text stays aligned on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Property {
    /// Player-controlled this turn.
    You,
    /// Victory trigger on contact with a YOU object.
    Win,
    /// Blocks movement unless the blocker also has PUSH.
    Stop,
    /// Displaced by movers and push chains.
    Push,
    /// Destroys itself and everything sharing its cell.
    Sink,
    /// Destroys any YOU object sharing its cell.
    Defeat,
    /// Melts co-located MELT objects.
    Hot,
    /// Destroyed when sharing a cell with a HOT object.
    Melt,
}

impl Property {
    /// All properties, in a fixed order.
    pub const ALL: [Property; 8] = [
        Property::You,
        Property::Win,
        Property::Stop,
        Property::Push,
        Property::Sink,
        Property::Defeat,
        Property::Hot,
        Property::Melt,
    ];

    /// The uppercase token name (as it appears on the board).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Property::You => "YOU",
            Property::Win => "WIN",
            Property::Stop => "STOP",
            Property::Push => "PUSH",
            Property::Sink => "SINK",
            Property::Defeat => "DEFEAT",
            Property::Hot => "HOT",
            Property::Melt => "MELT",
        }
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
