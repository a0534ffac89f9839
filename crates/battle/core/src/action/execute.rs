//! Execution context and batch runner.

use tracing::trace;

use crate::action::{Action, ActionError, ActionReport, ActionTemplate};
use crate::config::BattleConfig;
use crate::env::BattleEnv;
use crate::state::{Arena, UnitRef};

// ============================================================================
// Action Context
// ============================================================================

/// Everything an action may read or mutate while it runs.
pub struct ActionContext<'a, 'e> {
    pub arena: &'a mut Arena,
    pub env: &'a mut BattleEnv<'e>,
    pub config: &'a BattleConfig,

    /// Unit carrying the effect whose batch is running.
    pub owner: Option<UnitRef>,

    /// Nesting level of effect batches.
    pub depth: u32,
}

impl<'a, 'e> ActionContext<'a, 'e> {
    pub fn new(
        arena: &'a mut Arena,
        env: &'a mut BattleEnv<'e>,
        config: &'a BattleConfig,
    ) -> Self {
        Self {
            arena,
            env,
            config,
            owner: None,
            depth: 0,
        }
    }

    /// Context for an effect batch one level deeper.
    fn nested(&mut self, owner: UnitRef) -> ActionContext<'_, 'e> {
        ActionContext {
            arena: &mut *self.arena,
            env: &mut *self.env,
            config: self.config,
            owner: Some(owner),
            depth: self.depth + 1,
        }
    }
}

// ============================================================================
// Batches
// ============================================================================

/// Runs an effect's action batch with `caster` as actor and `owner` as the
/// effect owner.
///
/// Execution stops as soon as the caster's enemy command is wiped.
pub fn run_effect_batch(
    effect: &str,
    templates: &[ActionTemplate],
    caster: UnitRef,
    owner: UnitRef,
    ctx: &mut ActionContext<'_, '_>,
) -> Result<Vec<ActionReport>, ActionError> {
    if templates.is_empty() {
        return Ok(Vec::new());
    }

    let depth = ctx.depth + 1;
    if depth > ctx.config.max_effect_depth {
        return Err(ActionError::EffectChainTooDeep {
            effect: effect.to_owned(),
            depth,
        });
    }

    let mut nested = ctx.nested(owner);
    let mut reports = Vec::with_capacity(templates.len());
    for template in templates {
        if !nested.arena.command(caster.side.opponent()).is_alive() {
            trace!(effect, "enemy side wiped, batch stops");
            break;
        }
        let action = Action::from_template(caster, template);
        reports.push(action.handle(&mut nested)?);
    }
    Ok(reports)
}
