//! Deterministic turn-based battle engine.
//!
//! `battle-core` resolves a full battle between two commands of units:
//! rounds of strokes, each stroke handling the actor's actions in order,
//! until one command has no living units. Randomness, id generation,
//! message text and the log sink are injected collaborators (see [`env`]),
//! so the same rosters and seed always replay the same battle.
//!
//! Start with [`simulate`] for the common case, or drive a
//! [`BattleEngine`] directly with custom collaborators.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod statistics;

pub use action::{
    Action, ActionCollection, ActionContext, ActionError, ActionKind, ActionOutcome,
    ActionReport, ActionTag, ActionTemplate, BaseAction, BuffStat, ModifyMethod, Power,
    TargetRule,
};
pub use config::{BattleConfig, ResourceRules};
pub use engine::{BattleEngine, BattleOutcome, BattleReport, EngineError, simulate};
pub use env::{
    BattleEnv, BattleLog, BattleRng, Chat, ClassTemplate, CreatureTemplate, IdGenerator,
    MessageFormatter, PcgRng, PlainMessages, RaceTemplate, Ruleset, RulesetError, SequenceRng,
    SequentialIds, UnitSpec,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Ability, AbilityError, AbilityState, AbilityTemplate, Arena, Command, CommandError, Effect,
    EffectSet, EffectTemplate, ResourceKind, Side, Unit, UnitId, UnitRef, UseCondition,
};
pub use statistics::{Statistics, UnitStatistic};
