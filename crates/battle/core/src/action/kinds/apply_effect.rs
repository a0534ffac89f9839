//! Effect-apply: attach a timed effect and fire its `on_apply` batch.

use tracing::warn;

use crate::action::{
    Action, ActionContext, ActionError, ActionOutcome, ActionReport, ActorView, TargetRule,
    resolve_target, run_effect_batch,
};
use crate::state::{Attach, Effect, EffectTemplate};

pub(crate) fn handle(
    action: &Action,
    actor: &ActorView,
    rule: TargetRule,
    template: &EffectTemplate,
    ctx: &mut ActionContext<'_, '_>,
) -> Result<ActionReport, ActionError> {
    let mut report = actor.report(action);
    report.effect = Some(template.name.clone());

    let Some(target) = resolve_target(rule, action.tag(), actor, ctx)? else {
        return Ok(report);
    };
    let unit = ctx
        .arena
        .unit_mut(target)
        .ok_or(ActionError::TargetNotFound(target))?;

    let effect = Effect::from_template(template, actor.unit);
    let attach = unit.effects_mut().attach(effect);
    let mut report = report.on_target(target, unit.name());

    match attach {
        Attach::Added => {
            report.triggered =
                run_effect_batch(&template.name, &template.on_apply, actor.unit, target, ctx)?;
        }
        Attach::Refreshed => report.outcome = ActionOutcome::Refreshed,
        Attach::Ignored => {
            warn!(target = %target, effect = %template.name, "effect ignored, no room left");
            report.outcome = ActionOutcome::Ignored;
        }
    }
    Ok(report)
}
