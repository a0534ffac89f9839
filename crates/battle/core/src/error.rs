//! Common error infrastructure for battle-core.
//!
//! Domain-specific errors live next to the code that raises them:
//! [`RulesetError`](crate::env::RulesetError) for setup,
//! [`AbilityError`](crate::state::AbilityError) for ability misuse,
//! [`ActionError`](crate::action::ActionError) for action execution and
//! [`EngineError`](crate::engine::EngineError) for the round/battle loop.
//!
//! Expected outcomes such as "nobody to heal" are never errors; they surface
//! as [`ActionOutcome`](crate::action::ActionOutcome) values instead.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may continue with an alternative
/// - **Validation**: invalid input or data, rejected before the battle runs
/// - **Internal**: state inconsistency, indicates an engine bug
/// - **Fatal**: the simulation cannot continue and produces no result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative action.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown class id, ability used while dormant
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: a command reports living members but yields no target
    Internal,

    /// Fatal error - battle aborted, no partial result.
    ///
    /// Examples: round limit exceeded, runaway round
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all battle-core errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_covers_fatal() {
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
