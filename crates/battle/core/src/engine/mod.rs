//! Battle, round and stroke control loop.
//!
//! Control flows strictly downward: the battle runs rounds, a round runs
//! strokes, a stroke handles actions. Nothing below the stroke knows about
//! rounds or the battle.
//!
//! ```text
//! run ─┬─ round ─┬─ begin_round (reset acted, round gains, effect ticks)
//!      │         └─ stroke × n (alternating sides)
//!      └─ until one command has no living units
//! ```
mod errors;
mod round;
mod stroke;

pub use errors::EngineError;

use std::collections::BTreeSet;

use tracing::{error, info};

use crate::action::{ActionContext, ActionReport};
use crate::config::BattleConfig;
use crate::env::{BattleEnv, Chat, PcgRng, PlainMessages, SequentialIds};
use crate::state::{Arena, Side};
use crate::statistics::Statistics;

/// Final result of a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleOutcome {
    pub winner: Side,
    pub rounds: u32,
    pub strokes: u32,
    pub statistics: Statistics,
}

/// Drives one battle over a borrowed arena.
pub struct BattleEngine<'a> {
    arena: &'a mut Arena,
    config: &'a BattleConfig,
    env: BattleEnv<'a>,
    statistics: Statistics,
    round_number: u32,
}

impl<'a> BattleEngine<'a> {
    /// Checks both commands can fight and prepares statistics.
    pub fn new(
        arena: &'a mut Arena,
        config: &'a BattleConfig,
        env: BattleEnv<'a>,
    ) -> Result<Self, EngineError> {
        for side in Side::BOTH {
            if !arena.command(side).is_alive() {
                return Err(EngineError::EmptyCommand(side));
            }
        }

        let mut seen = BTreeSet::new();
        if let Some(unit) = arena.iter().find(|u| !seen.insert(u.id())) {
            return Err(EngineError::DuplicateUnit(unit.id()));
        }

        let statistics = Statistics::for_arena(arena);
        Ok(Self {
            arena,
            config,
            env,
            statistics,
            round_number: 0,
        })
    }

    pub fn arena(&self) -> &Arena {
        self.arena
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Runs rounds until one command has no living units.
    pub fn run(mut self) -> Result<BattleOutcome, EngineError> {
        info!(
            left = self.arena.command(Side::Left).len(),
            right = self.arena.command(Side::Right).len(),
            "battle started"
        );

        let mut start = match self.config.first_side {
            Some(side) => side,
            None => Side::BOTH[self.env.rng.gen_index(Side::BOTH.len())],
        };

        while self.arena.both_alive() {
            if self.statistics.rounds() >= self.config.max_rounds {
                let limit = self.config.max_rounds;
                error!(limit, "round limit exceeded");
                return Err(EngineError::RoundLimitExceeded { limit });
            }
            start = self.run_round(start)?;
        }

        let Some(winner) = self.arena.survivor() else {
            error!("battle ended with no survivors");
            return Err(EngineError::NoSurvivors);
        };

        let rounds = self.statistics.rounds();
        let message = self.env.messages.battle_end(winner, rounds);
        self.env.record(message);
        info!(%winner, rounds, strokes = self.statistics.strokes(), "battle finished");

        Ok(BattleOutcome {
            winner,
            rounds,
            strokes: self.statistics.strokes(),
            statistics: self.statistics,
        })
    }

    fn context(&mut self) -> ActionContext<'_, 'a> {
        ActionContext::new(&mut *self.arena, &mut self.env, self.config)
    }

    /// Logs and counts handled actions, triggered ones included.
    fn record_reports(&mut self, reports: &[ActionReport]) {
        for report in reports.iter().flat_map(ActionReport::flatten) {
            self.statistics.add_unit_action(report);
            let message = self.env.messages.action(report);
            self.env.record(message);
        }
    }
}

// ============================================================================
// Facade
// ============================================================================

/// Everything observable about a finished battle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    pub log: Vec<String>,
    /// Final state of both commands.
    pub arena: Arena,
}

/// Runs a full battle with the default collaborators.
///
/// The same arena, config and seed always replay the same battle.
pub fn simulate(
    mut arena: Arena,
    config: &BattleConfig,
    seed: u64,
) -> Result<BattleReport, EngineError> {
    let mut rng = PcgRng::seed_from_u64(seed);
    let mut ids = SequentialIds::after(&arena);
    let mut chat = Chat::new();

    let outcome = {
        let env = BattleEnv::new(&mut rng, &mut ids, &PlainMessages, &mut chat);
        BattleEngine::new(&mut arena, config, env)?.run()?
    };

    Ok(BattleReport {
        outcome,
        log: chat.into_messages(),
        arena,
    })
}
