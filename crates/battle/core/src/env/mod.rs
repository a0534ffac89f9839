//! Collaborators injected into the engine.
//!
//! The engine never reaches for globals: randomness, id generation, message
//! text and the log sink all come in through [`BattleEnv`]. The [`Ruleset`]
//! is the static data provider used while commands are built.
mod error;
mod ids;
mod log;
mod messages;
mod rng;
mod ruleset;

pub use error::RulesetError;
pub use ids::{IdGenerator, SequentialIds};
pub use log::{BattleLog, Chat};
pub use messages::{MessageFormatter, PlainMessages};
pub use rng::{BattleRng, PcgRng, SequenceRng};
pub use ruleset::{ClassTemplate, CreatureTemplate, RaceTemplate, Ruleset, UnitSpec};

/// Mutable capabilities the engine borrows for one battle.
pub struct BattleEnv<'a> {
    pub rng: &'a mut dyn BattleRng,
    pub ids: &'a mut dyn IdGenerator,
    pub messages: &'a dyn MessageFormatter,
    pub log: &'a mut dyn BattleLog,
}

impl<'a> BattleEnv<'a> {
    pub fn new(
        rng: &'a mut dyn BattleRng,
        ids: &'a mut dyn IdGenerator,
        messages: &'a dyn MessageFormatter,
        log: &'a mut dyn BattleLog,
    ) -> Self {
        Self {
            rng,
            ids,
            messages,
            log,
        }
    }

    /// Formats and records one message.
    pub(crate) fn record(&mut self, message: String) {
        self.log.add(message);
    }
}
