//! Round: every living unit on both sides takes one stroke.

use tracing::{debug, error};

use super::{BattleEngine, EngineError};
use crate::action::run_effect_batch;
use crate::state::{Side, UnitRef};

impl<'a> BattleEngine<'a> {
    /// Runs one round opened by `start`.
    ///
    /// Strokes alternate between the sides; a side with nobody left to act
    /// is skipped until neither side has a pending unit or one side is wiped.
    /// Returns the side that opens the next round.
    pub fn run_round(&mut self, start: Side) -> Result<Side, EngineError> {
        self.round_number += 1;
        let round = self.round_number;
        let message = self.env.messages.round(round);
        self.env.record(message);
        debug!(round, %start, "round started");

        self.begin_round()?;

        let limit = self.config.max_strokes_per_round;
        let mut strokes = 0;
        let mut active = start;

        while self.arena.both_alive() {
            let next = [active, active.opponent()].into_iter().find_map(|side| {
                self.arena
                    .command(side)
                    .unit_without_action()
                    .map(|id| UnitRef::new(side, id))
            });
            let Some(actor) = next else {
                break;
            };

            if strokes >= limit {
                error!(round, strokes, limit, "round exceeded its stroke ceiling");
                return Err(EngineError::UnexpectedRoundEnding {
                    round,
                    strokes,
                    limit,
                });
            }

            self.handle_stroke(actor)?;
            strokes += 1;
            active = actor.side.opponent();
        }

        self.statistics.increase_round();
        debug!(round, strokes, "round finished");
        Ok(start)
    }

    /// Round-start bookkeeping: acted flags, round resource gains, then
    /// effect ticks (left command first, in iteration order).
    fn begin_round(&mut self) -> Result<(), EngineError> {
        let gains = &self.config.resources;
        for side in Side::BOTH {
            for unit in self.arena.command_mut(side).iter_mut() {
                unit.reset_acted();
                unit.gain_concentration(gains.round_concentration);
                unit.gain_rage(gains.round_rage);
            }
        }

        let owners: Vec<UnitRef> = self
            .arena
            .iter()
            .filter(|u| u.is_alive() && !u.effects().is_empty())
            .map(|u| u.unit_ref())
            .collect();

        for owner in owners {
            if !self.arena.both_alive() {
                break;
            }
            self.tick_effects(owner)?;
        }
        Ok(())
    }

    /// Fires `on_each_round` for every effect on `owner`, decrements it and
    /// fires `on_disable` for the ones that ran out.
    fn tick_effects(&mut self, owner: UnitRef) -> Result<(), EngineError> {
        let names = match self.arena.unit(owner) {
            Some(unit) => unit.effects().names(),
            None => return Ok(()),
        };

        for name in names {
            let alive = self.arena.unit(owner).is_some_and(|u| u.is_alive());
            if !alive || !self.arena.both_alive() {
                break;
            }
            let Some(effect) = self
                .arena
                .unit(owner)
                .and_then(|u| u.effects().get(&name))
                .cloned()
            else {
                continue;
            };

            let reports = {
                let mut ctx = self.context();
                run_effect_batch(
                    &effect.name,
                    &effect.on_each_round,
                    effect.caster,
                    owner,
                    &mut ctx,
                )
            }
            .map_err(|source| self.fail(effect.caster, source))?;
            self.record_reports(&reports);

            let expired = self
                .arena
                .unit_mut(owner)
                .and_then(|u| u.effects_mut().decrement(&name));
            let Some(expired) = expired else {
                continue;
            };

            let owner_name = self
                .arena
                .unit(owner)
                .map(|u| u.name().to_owned())
                .unwrap_or_default();
            let message = self.env.messages.effect_expired(&expired.name, &owner_name);
            self.env.record(message);
            debug!(%owner, effect = %expired.name, "effect expired");

            if !self.arena.both_alive() {
                break;
            }
            let reports = {
                let mut ctx = self.context();
                run_effect_batch(
                    &expired.name,
                    &expired.on_disable,
                    expired.caster,
                    owner,
                    &mut ctx,
                )
            }
            .map_err(|source| self.fail(expired.caster, source))?;
            self.record_reports(&reports);
        }
        Ok(())
    }
}
