//! Summon: add a fresh unit to the actor's command.

use tracing::debug;

use crate::action::{Action, ActionContext, ActionError, ActionReport, ActorView};
use crate::env::CreatureTemplate;

pub(crate) fn handle(
    action: &Action,
    actor: &ActorView,
    creature: &CreatureTemplate,
    ctx: &mut ActionContext<'_, '_>,
) -> Result<ActionReport, ActionError> {
    let id = ctx.env.ids.next_id();
    if ctx.arena.contains(id) {
        return Err(ActionError::DuplicateUnit(id));
    }

    // Summoned units wait for the next round.
    let mut unit = creature.spawn(id, actor.unit.side);
    unit.mark_acted();
    let summoned = unit.unit_ref();
    ctx.arena
        .add(unit)
        .map_err(|_| ActionError::DuplicateUnit(id))?;

    debug!(actor = %actor.unit, summoned = %summoned, creature = %creature.name, "unit summoned");

    let mut report = actor.report(action).on_target(summoned, creature.name.clone());
    report.summoned = Some(summoned);
    Ok(report)
}
