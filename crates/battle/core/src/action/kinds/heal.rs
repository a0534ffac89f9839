//! Heal: restore life to a target, capped by its missing life.

use tracing::warn;

use crate::action::{
    Action, ActionContext, ActionError, ActionReport, ActorView, Power, TargetRule,
    resolve_target,
};

pub(crate) fn handle(
    action: &Action,
    actor: &ActorView,
    rule: TargetRule,
    power: Power,
    ctx: &mut ActionContext<'_, '_>,
) -> Result<ActionReport, ActionError> {
    let mut report = actor.report(action);
    report.power = power.resolve(actor.damage, actor.attack_speed);

    let Some(target) = resolve_target(rule, action.tag(), actor, ctx)? else {
        warn!(actor = %actor.unit, action = %action.name, "heal found nobody to heal");
        return Ok(report);
    };
    let unit = ctx
        .arena
        .unit_mut(target)
        .ok_or(ActionError::TargetNotFound(target))?;

    let restored = unit.apply_heal(report.power);
    let mut report = report.on_target(target, unit.name());
    report.factual_power = restored;
    Ok(report)
}
