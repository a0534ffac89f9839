//! Battle state: units, commands and the arena that owns them.
//!
//! State types are plain data with invariant-keeping mutators. They know
//! nothing about rounds or strokes; the engine drives them.
mod ability;
mod arena;
mod command;
mod common;
mod effect;
mod error;
mod unit;

pub use ability::{Ability, AbilityState, AbilityTemplate, UseCondition};
pub use arena::Arena;
pub use command::Command;
pub use common::{ResourceKind, Side, UnitId, UnitRef};
pub use effect::{Attach, Effect, EffectSet, EffectTemplate};
pub use error::{AbilityError, CommandError};
pub use unit::{AppliedModifier, Unit};
