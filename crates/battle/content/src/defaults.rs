//! Default content compiled into the crate.
//!
//! The same files live under `data/`, so a [`ContentFactory`] pointed at
//! that directory loads identical content.
//!
//! [`ContentFactory`]: crate::ContentFactory

use battle_core::{Arena, BattleConfig, Ruleset, UnitSpec};

use crate::loaders::factory::assemble;
use crate::loaders::{ConfigLoader, LoadResult, RosterLoader, RulesetLoader};

const RULESET: &str = include_str!("../data/ruleset.ron");
const CONFIG: &str = include_str!("../data/config.toml");

/// Names accepted by [`default_roster`].
pub const DEFAULT_ROSTERS: [&str; 3] = ["alliance", "horde", "scourge"];

pub fn default_ruleset() -> LoadResult<Ruleset> {
    RulesetLoader::parse(RULESET)
}

pub fn default_config() -> LoadResult<BattleConfig> {
    ConfigLoader::parse(CONFIG)
}

pub fn default_roster(name: &str) -> LoadResult<Vec<UnitSpec>> {
    let content = match name {
        "alliance" => include_str!("../data/rosters/alliance.ron"),
        "horde" => include_str!("../data/rosters/horde.ron"),
        "scourge" => include_str!("../data/rosters/scourge.ron"),
        other => anyhow::bail!(
            "Unknown roster '{}', expected one of {:?}",
            other,
            DEFAULT_ROSTERS
        ),
    };
    RosterLoader::parse(content)
}

/// Default ruleset with two default rosters facing each other.
pub fn default_arena(left: &str, right: &str) -> LoadResult<Arena> {
    assemble(&default_ruleset()?, &default_roster(left)?, &default_roster(right)?)
}
