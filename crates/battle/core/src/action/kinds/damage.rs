//! Damage: remove life from a target.

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
        return Ok(report);
    };
    let unit = ctx
        .arena
        .unit_mut(target)
        .ok_or(ActionError::TargetNotFound(target))?;

    let dealt = unit.apply_damage(report.power);
    let killed = dealt > 0 && !unit.is_alive();
    let mut report = report.on_target(target, unit.name());
    report.factual_power = dealt;
    report.killed = killed;
    Ok(report)
}
