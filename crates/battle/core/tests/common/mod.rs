//! Fixture builders shared by the integration tests.
#![allow(dead_code)]

use battle_core::{
    AbilityTemplate, ActionKind, ActionTemplate, Arena, BaseAction, Command, EffectTemplate,
    Power, ResourceKind, Side, TargetRule, Unit, UnitId, UseCondition,
};

pub fn unit(id: u32, side: Side, name: &str, melee: bool, damage: u32, life: u32) -> Unit {
    Unit::new(UnitId(id), side, name, melee, damage, 1.0, life)
}

/// Unit that never does anything but wait.
pub fn idler(id: u32, side: Side) -> Unit {
    unit(id, side, &format!("idler{id}"), true, 1, 100).with_base_action(BaseAction::Wait)
}

pub fn arena(left: Vec<Unit>, right: Vec<Unit>) -> Arena {
    Arena::new(
        Command::with_units(Side::Left, left).unwrap(),
        Command::with_units(Side::Right, right).unwrap(),
    )
    .unwrap()
}

pub fn ability(
    name: &str,
    trigger: ResourceKind,
    condition: UseCondition,
    actions: Vec<ActionTemplate>,
) -> AbilityTemplate {
    AbilityTemplate {
        name: name.to_owned(),
        icon: String::new(),
        trigger,
        disposable: false,
        condition,
        actions,
    }
}

pub fn strike(name: &str, multiplier: f64) -> ActionTemplate {
    ActionTemplate::new(
        name,
        ActionKind::Damage {
            target: TargetRule::Enemy,
            power: Power::Scaled(multiplier),
        },
    )
}

pub fn great_heal() -> AbilityTemplate {
    ability(
        "great heal",
        ResourceKind::Concentration,
        UseCondition::Always,
        vec![ActionTemplate::new(
            "great heal",
            ActionKind::Heal {
                target: TargetRule::WoundedAlly,
                power: Power::Scaled(3.0),
            },
        )],
    )
}

pub fn effect(name: &str, duration: u32) -> EffectTemplate {
    EffectTemplate {
        name: name.to_owned(),
        icon: String::new(),
        duration,
        on_apply: Vec::new(),
        on_each_round: Vec::new(),
        on_disable: Vec::new(),
    }
}

pub fn owner_damage(amount: u32) -> ActionTemplate {
    ActionTemplate::new(
        "poison",
        ActionKind::Damage {
            target: TargetRule::EffectOwner,
            power: Power::Fixed(amount),
        },
    )
}

/// Routes engine events to the test output; `RUST_LOG=battle_core=debug`
/// shows rounds and strokes.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
