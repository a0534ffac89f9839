//! Wait: the actor spends its turn on itself.

use crate::action::{Action, ActionReport, ActorView};

pub(crate) fn handle(action: &Action, actor: &ActorView) -> ActionReport {
    actor.report(action).on_target(actor.unit, actor.name.clone())
}
