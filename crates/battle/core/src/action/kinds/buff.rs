//! Buff: modify a stat of the target.

use crate::action::{
    Action, ActionContext, ActionError, ActionReport, ActorView, BuffStat, ModifyMethod,
    TargetRule, resolve_target,
};

pub(crate) fn handle(
    action: &Action,
    actor: &ActorView,
    rule: TargetRule,
    stat: BuffStat,
    method: ModifyMethod,
    tag: &str,
    ctx: &mut ActionContext<'_, '_>,
) -> Result<ActionReport, ActionError> {
    let report = actor.report(action);
    let Some(target) = resolve_target(rule, action.tag(), actor, ctx)? else {
        return Ok(report);
    };
    let unit = ctx
        .arena
        .unit_mut(target)
        .ok_or(ActionError::TargetNotFound(target))?;

    let delta = unit.apply_modifier(stat, method, tag);
    let magnitude = match stat {
        BuffStat::AttackSpeed => (delta * 100.0).abs().round(),
        BuffStat::MaxLife | BuffStat::Damage => delta.abs().round(),
    };

    let mut report = report.on_target(target, unit.name());
    report.factual_power = magnitude as u32;
    report.power = report.factual_power;
    Ok(report)
}
