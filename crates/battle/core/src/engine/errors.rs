//! Error types for the round/battle loop.

use crate::action::ActionError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{AbilityError, Side, UnitId, UnitRef};

/// Errors that abort a battle. There is no partial result once one is raised.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    #[error("action of {unit} failed: {source}")]
    Action { unit: UnitRef, source: ActionError },

    #[error("ability of {unit} failed: {source}")]
    Ability { unit: UnitRef, source: AbilityError },

    /// Stroke requested for a missing, dead or already-acted unit.
    #[error("unit {0} cannot take a stroke")]
    InactiveActor(UnitRef),

    /// Round exceeded its stroke ceiling.
    #[error("unexpected round ending: round {round} reached {strokes} strokes (limit {limit})")]
    UnexpectedRoundEnding { round: u32, strokes: u32, limit: u32 },

    #[error("round limit exceeded: no winner after {limit} rounds")]
    RoundLimitExceeded { limit: u32 },

    #[error("{0} command has no living units")]
    EmptyCommand(Side),

    #[error("unit id {0} appears more than once")]
    DuplicateUnit(UnitId),

    #[error("battle ended with no surviving side")]
    NoSurvivors,
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        use EngineError::*;
        match self {
            Action { source, .. } => source.severity(),
            Ability { source, .. } => source.severity(),
            EmptyCommand(_) | DuplicateUnit(_) => ErrorSeverity::Validation,
            InactiveActor(_) => ErrorSeverity::Internal,
            UnexpectedRoundEnding { .. } | RoundLimitExceeded { .. } | NoSurvivors => {
                ErrorSeverity::Fatal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use EngineError::*;
        match self {
            Action { source, .. } => source.error_code(),
            Ability { source, .. } => source.error_code(),
            InactiveActor(_) => "ENGINE_INACTIVE_ACTOR",
            UnexpectedRoundEnding { .. } => "ENGINE_UNEXPECTED_ROUND_ENDING",
            RoundLimitExceeded { .. } => "ENGINE_ROUND_LIMIT_EXCEEDED",
            EmptyCommand(_) => "ENGINE_EMPTY_COMMAND",
            DuplicateUnit(_) => "ENGINE_DUPLICATE_UNIT",
            NoSurvivors => "ENGINE_NO_SURVIVORS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_keep_their_classification() {
        let err = EngineError::Action {
            unit: UnitRef::new(Side::Left, UnitId(1)),
            source: ActionError::InconsistentCommand { side: Side::Right },
        };
        assert_eq!(err.severity(), ErrorSeverity::Internal);
        assert_eq!(err.error_code(), "ACTION_INCONSISTENT_COMMAND");
        assert_eq!(
            EngineError::RoundLimitExceeded { limit: 100 }.severity(),
            ErrorSeverity::Fatal
        );
    }
}
