//! State management errors.
//!
//! Errors raised by units and commands before any action runs.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Side, UnitId};

/// Ability misuse, rejected before an action is constructed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityError {
    /// Ability resource has not reached its maximum.
    #[error("Ability '{name}' is not ready")]
    NotReady { name: String },

    /// Disposable ability already used.
    #[error("Ability '{name}' is spent")]
    Spent { name: String },

    /// No ability in the given slot.
    #[error("Unit has no ability at slot {0}")]
    UnknownAbility(usize),
}

impl GameError for AbilityError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use AbilityError::*;
        match self {
            NotReady { .. } => "ABILITY_NOT_READY",
            Spent { .. } => "ABILITY_SPENT",
            UnknownAbility(_) => "ABILITY_UNKNOWN",
        }
    }
}

/// Errors raised while assembling commands.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandError {
    /// Unit id already present in the command or the arena.
    #[error("Duplicate unit id {0}")]
    DuplicateUnit(UnitId),

    /// Unit stored on the wrong side.
    #[error("Unit {unit} belongs to {actual}, expected {expected}")]
    WrongSide {
        unit: UnitId,
        actual: Side,
        expected: Side,
    },
}

impl GameError for CommandError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use CommandError::*;
        match self {
            DuplicateUnit(_) => "COMMAND_DUPLICATE_UNIT",
            WrongSide { .. } => "COMMAND_WRONG_SIDE",
        }
    }
}
