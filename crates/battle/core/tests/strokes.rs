//! Stroke-level scenarios: ability power, heals, short-circuits.

mod common;

use battle_core::{
    AbilityState, ActionKind, ActionTemplate, BaseAction, BattleConfig, BattleEngine, BattleEnv,
    Chat, CreatureTemplate, EngineError, PlainMessages, ResourceKind, ResourceRules, SequenceRng,
    SequentialIds, Side, UnitId, UnitRef, UseCondition,
};
use common::*;

fn quiet_config() -> BattleConfig {
    BattleConfig::default()
        .with_first_side(Side::Left)
        .with_resources(ResourceRules::none())
}

const LEFT_1: UnitRef = UnitRef::new(Side::Left, UnitId(1));

#[test]
fn heavy_strike_deals_two_and_a_half_times_damage() {
    let striker = unit(1, Side::Left, "Warrior", true, 20, 100)
        .with_ability(ability(
            "heavy strike",
            ResourceKind::Rage,
            UseCondition::Always,
            vec![strike("heavy strike", 2.5)],
        ))
        .with_rage(1000);
    let mut arena = arena(vec![striker], vec![unit(2, Side::Right, "Orc", true, 5, 100)]);

    let config = quiet_config();
    let mut rng = SequenceRng::first();
    let mut ids = SequentialIds::after(&arena);
    let mut chat = Chat::new();
    {
        let env = BattleEnv::new(&mut rng, &mut ids, &PlainMessages, &mut chat);
        let mut engine = BattleEngine::new(&mut arena, &config, env).unwrap();
        engine.handle_stroke(LEFT_1).unwrap();

        let stats = engine.statistics().unit(UnitId(1)).unwrap();
        assert_eq!(stats.caused_damage, 50);
        assert_eq!(engine.statistics().strokes(), 1);
    }

    assert_eq!(arena.find(UnitId(2)).unwrap().life(), 50);
    let warrior = arena.find(UnitId(1)).unwrap();
    assert_eq!(warrior.rage(), 0);
    assert!(warrior.has_acted());
    assert_eq!(
        chat.messages()[0],
        "Warrior uses heavy strike on Orc: 50 damage"
    );
}

#[test]
fn great_heal_is_clamped_to_missing_life() {
    let priest = unit(1, Side::Left, "Priest", false, 15, 80)
        .with_ability(great_heal())
        .with_concentration(1000);
    let wounded = unit(3, Side::Left, "Knight", true, 10, 100).with_life(60);
    let mut arena = arena(
        vec![priest, wounded],
        vec![unit(2, Side::Right, "Orc", true, 5, 100)],
    );

    let config = quiet_config();
    let mut rng = SequenceRng::first();
    let mut ids = SequentialIds::after(&arena);
    let mut chat = Chat::new();
    {
        let env = BattleEnv::new(&mut rng, &mut ids, &PlainMessages, &mut chat);
        let mut engine = BattleEngine::new(&mut arena, &config, env).unwrap();
        engine.handle_stroke(LEFT_1).unwrap();

        let priest = engine.statistics().unit(UnitId(1)).unwrap();
        assert_eq!(priest.heal_given, 40);
        assert_eq!(engine.statistics().unit(UnitId(3)).unwrap().heal_received, 40);
    }
    assert_eq!(arena.find(UnitId(3)).unwrap().life(), 100);
}

#[test]
fn wasted_heal_still_consumes_concentration() {
    let priest = unit(1, Side::Left, "Priest", false, 15, 80)
        .with_ability(great_heal())
        .with_concentration(1000);
    let mut arena = arena(vec![priest], vec![unit(2, Side::Right, "Orc", true, 5, 100)]);

    let config = quiet_config();
    let mut rng = SequenceRng::first();
    let mut ids = SequentialIds::after(&arena);
    let mut chat = Chat::new();
    {
        let env = BattleEnv::new(&mut rng, &mut ids, &PlainMessages, &mut chat);
        let mut engine = BattleEngine::new(&mut arena, &config, env).unwrap();
        engine.handle_stroke(LEFT_1).unwrap();
    }

    let priest = arena.find(UnitId(1)).unwrap();
    assert_eq!(priest.concentration(), 0);
    assert_eq!(priest.abilities()[0].state(), AbilityState::Dormant);
    assert_eq!(arena.find(UnitId(2)).unwrap().life(), 100);
    assert_eq!(
        chat.messages()[0],
        "Priest tries great heal, but nobody needs healing"
    );
}

#[test]
fn stroke_stops_once_enemy_command_is_wiped() {
    let archer = unit(1, Side::Left, "Archer", false, 10, 60)
        .with_ability(ability(
            "double shot",
            ResourceKind::Rage,
            UseCondition::Always,
            vec![strike("first shot", 1.0), strike("second shot", 1.0)],
        ))
        .with_rage(1000);
    let victim = unit(2, Side::Right, "Goblin", true, 5, 10).with_life(1);
    let mut arena = arena(vec![archer], vec![victim]);

    let config = quiet_config();
    let mut rng = SequenceRng::first();
    let mut ids = SequentialIds::after(&arena);
    let mut chat = Chat::new();
    {
        let env = BattleEnv::new(&mut rng, &mut ids, &PlainMessages, &mut chat);
        let mut engine = BattleEngine::new(&mut arena, &config, env).unwrap();
        engine.handle_stroke(LEFT_1).unwrap();

        let archer = engine.statistics().unit(UnitId(1)).unwrap();
        assert_eq!(archer.actions, 1);
        assert_eq!(archer.caused_damage, 1);
        assert_eq!(archer.kills, 1);
    }

    assert!(!arena.command(Side::Right).is_alive());
    let action_lines: Vec<&String> = chat
        .messages()
        .iter()
        .filter(|m| m.contains("shot"))
        .collect();
    assert_eq!(action_lines.len(), 1);
    assert!(action_lines[0].contains("(Goblin falls)"));
}

#[test]
fn ready_but_unusable_ability_falls_back_to_base_action() {
    let priest = unit(1, Side::Left, "Priest", false, 10, 80)
        .with_ability(ability(
            "mend",
            ResourceKind::Concentration,
            UseCondition::WoundedAlly,
            vec![ActionTemplate::heal(2.0)],
        ))
        .with_concentration(1000);
    let mut arena = arena(vec![priest], vec![unit(2, Side::Right, "Orc", true, 5, 100)]);

    let config = quiet_config();
    let mut rng = SequenceRng::first();
    let mut ids = SequentialIds::after(&arena);
    let mut chat = Chat::new();
    {
        let env = BattleEnv::new(&mut rng, &mut ids, &PlainMessages, &mut chat);
        let mut engine = BattleEngine::new(&mut arena, &config, env).unwrap();
        engine.handle_stroke(LEFT_1).unwrap();
    }

    let priest = arena.find(UnitId(1)).unwrap();
    assert!(priest.abilities()[0].is_ready());
    assert_eq!(priest.concentration(), 1000);
    assert_eq!(arena.find(UnitId(2)).unwrap().life(), 90);
}

#[test]
fn damage_grants_resources_to_both_ends() {
    let mut arena = arena(
        vec![unit(1, Side::Left, "Knight", true, 10, 100)],
        vec![unit(2, Side::Right, "Orc", true, 5, 100)],
    );

    let config = BattleConfig::default().with_first_side(Side::Left);
    let mut rng = SequenceRng::first();
    let mut ids = SequentialIds::after(&arena);
    let mut chat = Chat::new();
    {
        let env = BattleEnv::new(&mut rng, &mut ids, &PlainMessages, &mut chat);
        let mut engine = BattleEngine::new(&mut arena, &config, env).unwrap();
        engine.handle_stroke(LEFT_1).unwrap();
    }

    let rules = &config.resources;
    let knight = arena.find(UnitId(1)).unwrap();
    assert_eq!(knight.concentration(), rules.actor_concentration);
    assert_eq!(knight.rage(), rules.actor_rage);
    let orc = arena.find(UnitId(2)).unwrap();
    assert_eq!(orc.concentration(), rules.target_concentration);
    assert_eq!(orc.rage(), rules.target_rage);
}

#[test]
fn summoned_unit_joins_allies_and_waits_for_next_round() {
    let skeleton = CreatureTemplate {
        name: "Skeleton".into(),
        melee: true,
        damage: 6,
        attack_speed: 1.0,
        life: 30,
        base_action: BaseAction::Attack,
        abilities: Vec::new(),
    };
    let mut summon = ability(
        "summon skeleton",
        ResourceKind::Concentration,
        UseCondition::Always,
        vec![ActionTemplate::new(
            "summon skeleton",
            ActionKind::Summon { creature: skeleton },
        )],
    );
    summon.disposable = true;

    let necromancer = unit(1, Side::Left, "Necromancer", false, 8, 70)
        .with_ability(summon)
        .with_concentration(1000);
    let mut arena = arena(vec![necromancer], vec![unit(2, Side::Right, "Orc", true, 5, 100)]);

    let config = quiet_config();
    let mut rng = SequenceRng::first();
    let mut ids = SequentialIds::after(&arena);
    let mut chat = Chat::new();
    {
        let env = BattleEnv::new(&mut rng, &mut ids, &PlainMessages, &mut chat);
        let mut engine = BattleEngine::new(&mut arena, &config, env).unwrap();
        engine.handle_stroke(LEFT_1).unwrap();
        assert_eq!(engine.statistics().unit(UnitId(1)).unwrap().summons, 1);
    }

    let skeleton = arena.find(UnitId(3)).unwrap();
    assert_eq!(skeleton.side(), Side::Left);
    assert!(skeleton.has_acted());
    assert_eq!(arena.command(Side::Left).unit_without_action(), None);

    let necromancer = arena.find(UnitId(1)).unwrap();
    assert_eq!(necromancer.abilities()[0].state(), AbilityState::Spent);
    assert_eq!(
        chat.messages()[0],
        "Necromancer uses summon skeleton and summons Skeleton"
    );
}

#[test]
fn stroke_for_acted_unit_is_rejected() {
    let mut arena = arena(vec![idler(1, Side::Left)], vec![idler(2, Side::Right)]);
    let config = quiet_config();
    let mut rng = SequenceRng::first();
    let mut ids = SequentialIds::after(&arena);
    let mut chat = Chat::new();
    let env = BattleEnv::new(&mut rng, &mut ids, &PlainMessages, &mut chat);
    let mut engine = BattleEngine::new(&mut arena, &config, env).unwrap();

    engine.handle_stroke(LEFT_1).unwrap();
    assert_eq!(
        engine.handle_stroke(LEFT_1),
        Err(EngineError::InactiveActor(LEFT_1))
    );
}

#[test]
fn healer_mends_a_wounded_ally_with_its_base_action() {
    let priest = unit(1, Side::Left, "Priest", false, 13, 80)
        .with_base_action(BaseAction::HealOrAttack { multiplier: 1.2 });
    let knight = unit(3, Side::Left, "Knight", true, 10, 100).with_life(50);
    let mut arena = arena(
        vec![priest, knight],
        vec![unit(2, Side::Right, "Orc", true, 5, 100)],
    );

    let config = quiet_config();
    let mut rng = SequenceRng::first();
    let mut ids = SequentialIds::after(&arena);
    let mut chat = Chat::new();
    {
        let env = BattleEnv::new(&mut rng, &mut ids, &PlainMessages, &mut chat);
        let mut engine = BattleEngine::new(&mut arena, &config, env).unwrap();
        engine.handle_stroke(LEFT_1).unwrap();
    }

    assert_eq!(arena.find(UnitId(3)).unwrap().life(), 65);
    assert_eq!(arena.find(UnitId(2)).unwrap().life(), 100);
    assert_eq!(chat.messages()[0], "Priest uses heal on Knight: +15 life");
}

#[test]
fn healer_attacks_when_only_itself_is_wounded() {
    let priest = unit(1, Side::Left, "Priest", false, 13, 80)
        .with_base_action(BaseAction::HealOrAttack { multiplier: 1.2 })
        .with_life(40);
    let knight = unit(3, Side::Left, "Knight", true, 10, 100);
    let mut arena = arena(
        vec![priest, knight],
        vec![unit(2, Side::Right, "Orc", true, 5, 100)],
    );

    let config = quiet_config();
    let mut rng = SequenceRng::first();
    let mut ids = SequentialIds::after(&arena);
    let mut chat = Chat::new();
    {
        let env = BattleEnv::new(&mut rng, &mut ids, &PlainMessages, &mut chat);
        let mut engine = BattleEngine::new(&mut arena, &config, env).unwrap();
        engine.handle_stroke(LEFT_1).unwrap();
    }

    assert_eq!(arena.find(UnitId(1)).unwrap().life(), 40);
    assert_eq!(arena.find(UnitId(2)).unwrap().life(), 87);
    assert_eq!(chat.messages()[0], "Priest uses attack on Orc: 13 damage");
}

/// Life the enemy keeps after a captain with a last-stand ability acts next
/// to an ally with `ally_life`.
fn after_last_stand(ally_life: u32) -> u32 {
    let captain = unit(1, Side::Left, "Captain", true, 10, 100)
        .with_ability(ability(
            "last stand",
            ResourceKind::Rage,
            UseCondition::AlliesBelow(2),
            vec![strike("last stand", 3.0)],
        ))
        .with_rage(1000);
    let ally = idler(3, Side::Left).with_life(ally_life);
    let mut arena = arena(
        vec![captain, ally],
        vec![unit(2, Side::Right, "Orc", true, 5, 100)],
    );

    let config = quiet_config();
    let mut rng = SequenceRng::first();
    let mut ids = SequentialIds::after(&arena);
    let mut chat = Chat::new();
    {
        let env = BattleEnv::new(&mut rng, &mut ids, &PlainMessages, &mut chat);
        let mut engine = BattleEngine::new(&mut arena, &config, env).unwrap();
        engine.handle_stroke(LEFT_1).unwrap();
    }
    arena.find(UnitId(2)).unwrap().life()
}

#[test]
fn allies_below_condition_waits_for_losses() {
    // Two living allies: the ability stays ready and the captain attacks.
    assert_eq!(after_last_stand(100), 90);
    // The captain stands alone.
    assert_eq!(after_last_stand(0), 70);
}
