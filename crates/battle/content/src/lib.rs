//! Data-driven battle content and loaders.
//!
//! This crate houses the default battle content and provides loaders for
//! RON/TOML data files:
//! - Ruleset: races, classes and abilities (RON)
//! - Rosters: lists of units to field on one side (RON)
//! - Battle configuration (TOML)
//!
//! Content is resolved into `battle-core` types before a battle starts and
//! is never consulted mid-battle.

#[cfg(feature = "loaders")]
pub mod defaults;
#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use defaults::{
    DEFAULT_ROSTERS, default_arena, default_config, default_roster, default_ruleset,
};
#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, RosterLoader, RulesetLoader};
