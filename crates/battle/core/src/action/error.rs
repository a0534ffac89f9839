//! Action execution errors.
//!
//! Every variant is a consistency violation. Expected conditions such as
//! "nobody to heal" are reported through
//! [`ActionOutcome`](crate::action::ActionOutcome) instead.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Side, UnitId, UnitRef};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// Actor handle does not resolve to a unit.
    #[error("Actor {0} not found")]
    ActorNotFound(UnitRef),

    /// Resolved target vanished before the action touched it.
    #[error("Target {0} not found")]
    TargetNotFound(UnitRef),

    /// Enemy side already wiped; the stroke should have stopped earlier.
    #[error("No valid target: {side} command has no living units")]
    NoValidTarget { side: Side },

    /// Command reports living members but yields no target.
    #[error("{side} command is alive but yielded no target")]
    InconsistentCommand { side: Side },

    /// Id generator handed out an id already in the arena.
    #[error("Summoned unit id {0} already exists")]
    DuplicateUnit(UnitId),

    /// Effects applying effects beyond the configured depth.
    #[error("Effect chain too deep: '{effect}' reached depth {depth}")]
    EffectChainTooDeep { effect: String, depth: u32 },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            ActorNotFound(_) | TargetNotFound(_) | InconsistentCommand { .. } => {
                ErrorSeverity::Internal
            }
            NoValidTarget { .. } | DuplicateUnit(_) | EffectChainTooDeep { .. } => {
                ErrorSeverity::Fatal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            ActorNotFound(_) => "ACTION_ACTOR_NOT_FOUND",
            TargetNotFound(_) => "ACTION_TARGET_NOT_FOUND",
            NoValidTarget { .. } => "ACTION_NO_VALID_TARGET",
            InconsistentCommand { .. } => "ACTION_INCONSISTENT_COMMAND",
            DuplicateUnit(_) => "ACTION_DUPLICATE_UNIT",
            EffectChainTooDeep { .. } => "ACTION_EFFECT_CHAIN_TOO_DEEP",
        }
    }
}
