//! Object model: type definitions, text tokens, and instances.
//!
//! Objects carry *identity only*. No behavioral property (YOU, WIN, STOP,
//! ...) is attached to a definition - behavior is granted exclusively by the
//! rule set derived from the board each turn, and can vanish mid-game when
//! the text forming a rule is pushed apart.
//!
//! Two kinds of definition exist:
//! - **Entity**: a regular board object (baba, rock, wall, ...).
//! - **Text**: a token that participates in rule formation (BABA, IS, YOU).
//!
//! A text definition knows its [`Token`]: which noun it names, or which
//! property it grants, or that it is the verb/conjunction/negation.

mod catalog;
mod definition;
mod instance;
mod property;
mod registry;
mod token;

pub use catalog::Catalog;
pub use definition::{DefKind, ObjectDef, TypeKey};
pub use instance::{InstanceId, ObjectInstance};
pub use property::Property;
pub use registry::ObjectRegistry;
pub use token::{Token, TokenRole};
