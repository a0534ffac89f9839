//! Stroke: one living unit takes its turn.

use tracing::{debug, error};

use super::{BattleEngine, EngineError};
use crate::action::{
    Action, ActionCollection, ActionError, ActionReport, ActionTag, ActionTemplate, BaseAction,
};
use crate::error::GameError;
use crate::state::UnitRef;

impl<'a> BattleEngine<'a> {
    /// Executes one stroke for `actor`.
    ///
    /// The actor's actions run strictly in order and stop as soon as the
    /// enemy command has no living units. The actor is then marked as acted
    /// and the board is logged.
    pub fn handle_stroke(&mut self, actor: UnitRef) -> Result<(), EngineError> {
        let ready = self
            .arena
            .unit(actor)
            .is_some_and(|u| u.is_alive() && !u.has_acted());
        if !ready {
            error!(%actor, "stroke requested for inactive unit");
            return Err(EngineError::InactiveActor(actor));
        }

        let actions = self.collect_actions(actor)?;
        debug!(%actor, actions = actions.len(), "stroke");

        let enemy_side = actor.side.opponent();
        for action in &actions {
            if !self.arena.command(enemy_side).is_alive() {
                debug!(%actor, "enemy command wiped, stroke stops");
                break;
            }
            let report = {
                let mut ctx = self.context();
                action.handle(&mut ctx)
            }
            .map_err(|source| self.fail(actor, source))?;

            self.grant_resources(&report);
            self.record_reports(std::slice::from_ref(&report));
        }

        if let Some(unit) = self.arena.unit_mut(actor) {
            unit.mark_acted();
        }
        self.statistics.increase_stroke();
        let board = self.env.messages.board(&*self.arena);
        self.env.record(board);
        Ok(())
    }

    /// Ability-driven actions when a ready ability is usable, otherwise the
    /// unit's base action.
    fn collect_actions(&mut self, actor: UnitRef) -> Result<ActionCollection, EngineError> {
        let (enemies, allies) = self.arena.sides_of(actor.side);
        let unit = allies
            .get(actor.id)
            .ok_or(EngineError::InactiveActor(actor))?;

        if let Some(slot) = unit.ready_ability(enemies, allies) {
            let ability = unit.abilities()[slot].name().to_owned();
            let templates = self
                .arena
                .unit_mut(actor)
                .ok_or(EngineError::InactiveActor(actor))?
                .use_ability(slot)
                .map_err(|source| EngineError::Ability {
                    unit: actor,
                    source,
                })?;
            debug!(%actor, %ability, "ability used");
            return Ok(templates
                .iter()
                .map(|template| Action::from_template(actor, template))
                .collect());
        }

        let template = match unit.base_action() {
            BaseAction::Attack => ActionTemplate::attack(),
            BaseAction::HealOrAttack { multiplier } if allies.has_wounded_besides(actor.id) => {
                ActionTemplate::heal(multiplier)
            }
            BaseAction::HealOrAttack { .. } => ActionTemplate::attack(),
            BaseAction::Wait => ActionTemplate::wait(),
        };
        Ok(vec![Action::from_template(actor, &template)])
    }

    /// Concentration and rage earned by a Damage/Heal action that reached
    /// another unit.
    fn grant_resources(&mut self, report: &ActionReport) {
        let Some(target) = report.target else {
            return;
        };
        if !report.is_applied() || target == report.actor {
            return;
        }
        let damage = match report.tag {
            ActionTag::Damage => true,
            ActionTag::Heal => false,
            _ => return,
        };

        let gains = &self.config.resources;
        if let Some(unit) = self.arena.unit_mut(report.actor) {
            unit.gain_concentration(gains.actor_concentration);
            if damage {
                unit.gain_rage(gains.actor_rage);
            }
        }
        if let Some(unit) = self.arena.unit_mut(target) {
            unit.gain_concentration(gains.target_concentration);
            if damage {
                unit.gain_rage(gains.target_rage);
            }
        }
    }

    pub(super) fn fail(&self, unit: UnitRef, source: ActionError) -> EngineError {
        error!(%unit, code = source.error_code(), %source, "action failed");
        EngineError::Action { unit, source }
    }
}
