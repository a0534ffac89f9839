//! Target resolution.
//!
//! Expected exhaustion (nobody wounded, owner already dead) resolves to
//! `Ok(None)`. An `Enemy` rule against a wiped side, or a living side that
//! yields nothing, is a consistency violation.

use crate::action::{ActionContext, ActionError, ActionTag, ActorView, TargetRule};
use crate::state::{Unit, UnitRef};

/// Picks the target of an action with the given rule and tag.
pub fn resolve_target(
    rule: TargetRule,
    tag: ActionTag,
    actor: &ActorView,
    ctx: &mut ActionContext<'_, '_>,
) -> Result<Option<UnitRef>, ActionError> {
    match rule {
        TargetRule::Enemy => enemy_target(tag, actor, ctx).map(Some),
        TargetRule::WoundedAlly => {
            let side = actor.unit.side;
            Ok(ctx
                .arena
                .command(side)
                .unit_for_heal(ctx.env.rng)
                .map(|id| UnitRef::new(side, id)))
        }
        TargetRule::OtherWoundedAlly => {
            let side = actor.unit.side;
            Ok(ctx
                .arena
                .command(side)
                .unit_for_heal_besides(actor.unit.id, ctx.env.rng)
                .map(|id| UnitRef::new(side, id)))
        }
        TargetRule::Actor => Ok(living(actor.unit, ctx)),
        TargetRule::EffectOwner => Ok(living(ctx.owner.unwrap_or(actor.unit), ctx)),
    }
}

/// Melee actors dealing damage must hit living melee enemies while any
/// remain; everyone else may hit any living enemy.
fn enemy_target(
    tag: ActionTag,
    actor: &ActorView,
    ctx: &mut ActionContext<'_, '_>,
) -> Result<UnitRef, ActionError> {
    let side = actor.unit.side.opponent();
    let enemies = ctx.arena.command(side);
    if !enemies.is_alive() {
        return Err(ActionError::NoValidTarget { side });
    }

    let screened = tag == ActionTag::Damage && actor.melee && enemies.exist_melee_units();
    let picked = if screened {
        enemies.melee_unit_for_attacks(ctx.env.rng)
    } else {
        enemies.unit_for_attacks(ctx.env.rng)
    };

    picked
        .map(|id| UnitRef::new(side, id))
        .ok_or(ActionError::InconsistentCommand { side })
}

fn living(unit: UnitRef, ctx: &ActionContext<'_, '_>) -> Option<UnitRef> {
    ctx.arena
        .unit(unit)
        .filter(|u| u.is_alive())
        .map(Unit::unit_ref)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BattleConfig;
    use crate::env::{BattleEnv, Chat, PlainMessages, SequenceRng, SequentialIds};
    use crate::state::{Arena, Command, Side, UnitId};

    fn arena() -> Arena {
        let left = Command::with_units(
            Side::Left,
            [Unit::new(UnitId(1), Side::Left, "Knight", true, 10, 1.0, 50)],
        )
        .unwrap();
        let right = Command::with_units(
            Side::Right,
            [
                Unit::new(UnitId(2), Side::Right, "Archer", false, 10, 1.0, 50),
                Unit::new(UnitId(3), Side::Right, "Guard", true, 10, 1.0, 50),
                Unit::new(UnitId(4), Side::Right, "Mage", false, 10, 1.0, 50),
            ],
        )
        .unwrap();
        Arena::new(left, right).unwrap()
    }

    #[test]
    fn melee_damage_is_screened_by_melee_enemies() {
        let mut arena = arena();
        let knight = ActorView::of(arena.find(UnitId(1)).unwrap());
        let config = BattleConfig::default();
        let mut rng = SequenceRng::new(vec![0, 1, 2, 3, 4, 5, 6]);
        let mut ids = SequentialIds::default();
        let mut chat = Chat::new();
        let mut env = BattleEnv::new(&mut rng, &mut ids, &PlainMessages, &mut chat);
        let mut ctx = ActionContext::new(&mut arena, &mut env, &config);

        for _ in 0..7 {
            let target =
                resolve_target(TargetRule::Enemy, ActionTag::Damage, &knight, &mut ctx)
                    .unwrap()
                    .unwrap();
            assert_eq!(target.id, UnitId(3));
        }
    }

    #[test]
    fn wiped_enemy_side_is_a_violation() {
        let mut arena = arena();
        for id in [2, 3, 4] {
            arena
                .unit_mut(UnitRef::new(Side::Right, UnitId(id)))
                .unwrap()
                .apply_damage(50);
        }
        let knight = ActorView::of(arena.find(UnitId(1)).unwrap());
        let config = BattleConfig::default();
        let mut rng = SequenceRng::first();
        let mut ids = SequentialIds::default();
        let mut chat = Chat::new();
        let mut env = BattleEnv::new(&mut rng, &mut ids, &PlainMessages, &mut chat);
        let mut ctx = ActionContext::new(&mut arena, &mut env, &config);

        assert_eq!(
            resolve_target(TargetRule::Enemy, ActionTag::Damage, &knight, &mut ctx),
            Err(ActionError::NoValidTarget { side: Side::Right })
        );
    }

    #[test]
    fn wounded_ally_rule_may_find_nobody() {
        let mut arena = arena();
        let knight = ActorView::of(arena.find(UnitId(1)).unwrap());
        let config = BattleConfig::default();
        let mut rng = SequenceRng::first();
        let mut ids = SequentialIds::default();
        let mut chat = Chat::new();
        let mut env = BattleEnv::new(&mut rng, &mut ids, &PlainMessages, &mut chat);
        let mut ctx = ActionContext::new(&mut arena, &mut env, &config);

        assert_eq!(
            resolve_target(TargetRule::WoundedAlly, ActionTag::Heal, &knight, &mut ctx),
            Ok(None)
        );
    }
}
