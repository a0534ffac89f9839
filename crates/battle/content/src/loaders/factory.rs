//! Content factory for building battles from data files.

use std::path::{Path, PathBuf};

use battle_core::{Arena, BattleConfig, Ruleset, SequentialIds, Side, UnitSpec};

use crate::loaders::{ConfigLoader, LoadResult, RosterLoader, RulesetLoader};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── ruleset.ron
/// └── rosters/
///     ├── alliance.ron
///     └── horde.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load and validate the ruleset from `ruleset.ron`.
    pub fn load_ruleset(&self) -> LoadResult<Ruleset> {
        RulesetLoader::load(&self.data_dir.join("ruleset.ron"))
    }

    /// Load a roster from `rosters/{name}.ron`.
    pub fn load_roster(&self, name: &str) -> LoadResult<Vec<UnitSpec>> {
        let path = self.data_dir.join("rosters").join(format!("{}.ron", name));
        RosterLoader::load(&path)
    }

    /// Builds an arena with roster `left` against roster `right`.
    ///
    /// Ids are assigned from 1 upwards, left roster first.
    pub fn build_arena(&self, left: &str, right: &str) -> LoadResult<Arena> {
        let ruleset = self.load_ruleset()?;
        let left = self.load_roster(left)?;
        let right = self.load_roster(right)?;
        assemble(&ruleset, &left, &right)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Resolves two rosters against `ruleset` into an arena.
pub(crate) fn assemble(
    ruleset: &Ruleset,
    left: &[UnitSpec],
    right: &[UnitSpec],
) -> LoadResult<Arena> {
    let mut ids = SequentialIds::default();
    let left = ruleset.build_command(Side::Left, left, &mut ids)?;
    let right = ruleset.build_command(Side::Right, right, &mut ids)?;
    Ok(Arena::new(left, right)?)
}
