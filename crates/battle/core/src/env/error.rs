//! Ruleset errors.
//!
//! Configuration problems surface while a battle is set up, never mid-battle.

use crate::error::{ErrorSeverity, GameError};
use crate::state::UnitId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RulesetError {
    #[error("Unknown race '{0}'")]
    UnknownRace(String),

    #[error("Unknown class '{0}'")]
    UnknownClass(String),

    /// A race or class lists an ability the ruleset does not define.
    #[error("'{owner}' references unknown ability '{ability}'")]
    UnknownAbility { owner: String, ability: String },

    #[error("Invalid template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error("Duplicate unit id {0}")]
    DuplicateUnit(UnitId),
}

impl RulesetError {
    pub(crate) fn invalid(template: &str, reason: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            template: template.to_owned(),
            reason: reason.into(),
        }
    }
}

impl GameError for RulesetError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use RulesetError::*;
        match self {
            UnknownRace(_) => "RULESET_UNKNOWN_RACE",
            UnknownClass(_) => "RULESET_UNKNOWN_CLASS",
            UnknownAbility { .. } => "RULESET_UNKNOWN_ABILITY",
            InvalidTemplate { .. } => "RULESET_INVALID_TEMPLATE",
            DuplicateUnit(_) => "RULESET_DUPLICATE_UNIT",
        }
    }
}
