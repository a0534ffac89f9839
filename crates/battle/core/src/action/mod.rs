//! Actions: the atomic, executable units of battle effect.
//!
//! An [`Action`] binds an [`ActionTemplate`] to an actor. It is created fresh
//! whenever a unit (or an effect) decides to act, handled exactly once and
//! then discarded; its only durable trace is the [`ActionReport`] it returns
//! and the state it mutated.
//!
//! Dispatch is a single `match` over the closed [`ActionKind`] set; each
//! variant's behavior lives in `kinds/`.
mod error;
mod execute;
mod kind;
mod kinds;
mod report;
mod targeting;

pub use error::ActionError;
pub use execute::{ActionContext, run_effect_batch};
pub use kind::{
    ActionKind, ActionTag, ActionTemplate, BaseAction, BuffStat, ModifyMethod, Power, TargetRule,
};
pub(crate) use kind::scale;
pub use report::{ActionOutcome, ActionReport};
pub use targeting::resolve_target;

use crate::state::{Unit, UnitRef};

/// Actions a unit contributes on its turn, executed strictly in order.
pub type ActionCollection = Vec<Action>;

/// An action bound to its actor.
#[derive(Clone, Debug, PartialEq)]
pub struct Action {
    pub actor: UnitRef,
    pub name: String,
    pub kind: ActionKind,
}

impl Action {
    pub fn new(actor: UnitRef, name: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            actor,
            name: name.into(),
            kind,
        }
    }

    pub fn from_template(actor: UnitRef, template: &ActionTemplate) -> Self {
        Self::new(actor, template.name.clone(), template.kind.clone())
    }

    pub fn tag(&self) -> ActionTag {
        self.kind.tag()
    }

    /// Executes the action once: resolves the target, mutates state and
    /// reports what happened.
    pub fn handle(&self, ctx: &mut ActionContext<'_, '_>) -> Result<ActionReport, ActionError> {
        let actor = ctx
            .arena
            .unit(self.actor)
            .map(ActorView::of)
            .ok_or(ActionError::ActorNotFound(self.actor))?;

        let report = match &self.kind {
            ActionKind::Damage { target, power } => {
                kinds::damage::handle(self, &actor, *target, *power, ctx)?
            }
            ActionKind::Heal { target, power } => {
                kinds::heal::handle(self, &actor, *target, *power, ctx)?
            }
            ActionKind::Wait => kinds::wait::handle(self, &actor),
            ActionKind::Summon { creature } => {
                kinds::summon::handle(self, &actor, creature, ctx)?
            }
            ActionKind::Buff {
                target,
                stat,
                method,
                tag,
            } => kinds::buff::handle(self, &actor, *target, *stat, *method, tag, ctx)?,
            ActionKind::ApplyEffect { target, effect } => {
                kinds::apply_effect::handle(self, &actor, *target, effect, ctx)?
            }
        };

        tracing::trace!(
            actor = %self.actor,
            action = %self.name,
            outcome = %report.outcome,
            factual_power = report.factual_power,
            "action handled"
        );
        Ok(report)
    }
}

/// Actor data captured when an action starts.
#[derive(Clone, Debug, PartialEq)]
pub struct ActorView {
    pub unit: UnitRef,
    pub name: String,
    pub melee: bool,
    pub damage: u32,
    pub attack_speed: f64,
}

impl ActorView {
    pub fn of(unit: &Unit) -> Self {
        Self {
            unit: unit.unit_ref(),
            name: unit.name().to_owned(),
            melee: unit.is_melee(),
            damage: unit.damage(),
            attack_speed: unit.attack_speed(),
        }
    }

    /// Empty report for `action` performed by this actor.
    pub(crate) fn report(&self, action: &Action) -> ActionReport {
        ActionReport::new(action.name.clone(), action.tag(), self.unit, self.name.clone())
    }
}
