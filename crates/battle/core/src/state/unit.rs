//! Combatant state.

use crate::action::{ActionTemplate, BaseAction, BuffStat, ModifyMethod, scale};
use crate::state::{
    Ability, AbilityError, AbilityTemplate, Command, EffectSet, ResourceKind, Side, UnitId,
    UnitRef,
};

/// Stat modifier recorded by a Buff so it can be reverted by tag.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppliedModifier {
    pub tag: String,
    pub stat: BuffStat,
    /// Amount actually added to the stat (negative for reductions).
    pub delta: f64,
}

/// A single combatant.
///
/// Invariants, kept by every mutator:
/// - `life <= total_life` and `total_life >= 1`
/// - `concentration <= MAX_CONCENTRATION`, `rage <= MAX_RAGE`
/// - a dead unit (`life == 0`) never changes again except for the acted flag
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    id: UnitId,
    side: Side,
    name: String,
    race: String,
    class: String,
    melee: bool,

    damage: u32,
    attack_speed: f64,
    life: u32,
    total_life: u32,
    concentration: u32,
    rage: u32,

    acted: bool,
    base_action: BaseAction,
    abilities: Vec<Ability>,
    effects: EffectSet,
    modifiers: Vec<AppliedModifier>,
}

impl Unit {
    pub const MAX_CONCENTRATION: u32 = 1000;
    pub const MAX_RAGE: u32 = 1000;

    pub fn new(
        id: UnitId,
        side: Side,
        name: impl Into<String>,
        melee: bool,
        damage: u32,
        attack_speed: f64,
        life: u32,
    ) -> Self {
        let total_life = life.max(1);
        Self {
            id,
            side,
            name: name.into(),
            race: String::new(),
            class: String::new(),
            melee,
            damage,
            attack_speed: attack_speed.max(0.0),
            life: total_life,
            total_life,
            concentration: 0,
            rage: 0,
            acted: false,
            base_action: BaseAction::Attack,
            abilities: Vec::new(),
            effects: EffectSet::empty(),
            modifiers: Vec::new(),
        }
    }

    // ========================================================================
    // Builders
    // ========================================================================

    pub fn with_origin(mut self, race: impl Into<String>, class: impl Into<String>) -> Self {
        self.race = race.into();
        self.class = class.into();
        self
    }

    pub fn with_base_action(mut self, base_action: BaseAction) -> Self {
        self.base_action = base_action;
        self
    }

    pub fn with_ability(mut self, template: AbilityTemplate) -> Self {
        let mut ability = Ability::new(template);
        ability.sync(self.resource(ability.trigger()), Self::max_resource(ability.trigger()));
        self.abilities.push(ability);
        self
    }

    pub fn with_abilities(self, templates: impl IntoIterator<Item = AbilityTemplate>) -> Self {
        templates
            .into_iter()
            .fold(self, |unit, template| unit.with_ability(template))
    }

    /// Current life, clamped to `total_life`. Zero makes a dead unit.
    pub fn with_life(mut self, life: u32) -> Self {
        self.life = life.min(self.total_life);
        self
    }

    pub fn with_concentration(mut self, value: u32) -> Self {
        self.concentration = value.min(Self::MAX_CONCENTRATION);
        self.sync_abilities(ResourceKind::Concentration);
        self
    }

    pub fn with_rage(mut self, value: u32) -> Self {
        self.rage = value.min(Self::MAX_RAGE);
        self.sync_abilities(ResourceKind::Rage);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn unit_ref(&self) -> UnitRef {
        UnitRef::new(self.side, self.id)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn race(&self) -> &str {
        &self.race
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn is_melee(&self) -> bool {
        self.melee
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn attack_speed(&self) -> f64 {
        self.attack_speed
    }

    pub fn life(&self) -> u32 {
        self.life
    }

    pub fn total_life(&self) -> u32 {
        self.total_life
    }

    pub fn missing_life(&self) -> u32 {
        self.total_life - self.life
    }

    pub fn concentration(&self) -> u32 {
        self.concentration
    }

    pub fn rage(&self) -> u32 {
        self.rage
    }

    pub fn resource(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Concentration => self.concentration,
            ResourceKind::Rage => self.rage,
        }
    }

    pub const fn max_resource(kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Concentration => Self::MAX_CONCENTRATION,
            ResourceKind::Rage => Self::MAX_RAGE,
        }
    }

    pub fn has_acted(&self) -> bool {
        self.acted
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Alive and below full life.
    pub fn is_wounded(&self) -> bool {
        self.is_alive() && self.life < self.total_life
    }

    pub fn base_action(&self) -> BaseAction {
        self.base_action
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn effects(&self) -> &EffectSet {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut EffectSet {
        &mut self.effects
    }

    pub fn modifiers(&self) -> &[AppliedModifier] {
        &self.modifiers
    }

    // ========================================================================
    // Life
    // ========================================================================

    /// Removes up to `amount` life. Returns the life actually removed.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        let removed = amount.min(self.life);
        self.life -= removed;
        removed
    }

    /// Restores up to the missing life. Returns the life actually restored.
    pub fn apply_heal(&mut self, amount: u32) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        let restored = amount.min(self.missing_life());
        self.life += restored;
        restored
    }

    // ========================================================================
    // Resources and abilities
    // ========================================================================

    pub fn gain_concentration(&mut self, amount: u32) {
        self.gain(ResourceKind::Concentration, amount);
    }

    pub fn gain_rage(&mut self, amount: u32) {
        self.gain(ResourceKind::Rage, amount);
    }

    pub fn gain(&mut self, kind: ResourceKind, amount: u32) {
        if !self.is_alive() || amount == 0 {
            return;
        }
        let max = Self::max_resource(kind);
        let slot = self.resource_mut(kind);
        *slot = slot.saturating_add(amount).min(max);
        self.sync_abilities(kind);
    }

    /// Resets a resource to zero; abilities it fed go dormant.
    pub fn consume(&mut self, kind: ResourceKind) {
        *self.resource_mut(kind) = 0;
        self.sync_abilities(kind);
    }

    /// First ability that is ready and usable against the given commands.
    ///
    /// Class abilities precede race abilities in slot order.
    pub fn ready_ability(&self, enemies: &Command, allies: &Command) -> Option<usize> {
        self.abilities
            .iter()
            .position(|ability| ability.can_be_used(enemies, allies))
    }

    /// Uses the ability in `slot` and consumes its resource.
    ///
    /// Returns the ability's action templates, in order.
    pub fn use_ability(&mut self, slot: usize) -> Result<Vec<ActionTemplate>, AbilityError> {
        let ability = self
            .abilities
            .get_mut(slot)
            .ok_or(AbilityError::UnknownAbility(slot))?;
        let actions = ability.usage()?;
        let trigger = ability.trigger();
        self.consume(trigger);
        Ok(actions)
    }

    fn resource_mut(&mut self, kind: ResourceKind) -> &mut u32 {
        match kind {
            ResourceKind::Concentration => &mut self.concentration,
            ResourceKind::Rage => &mut self.rage,
        }
    }

    fn sync_abilities(&mut self, kind: ResourceKind) {
        let value = self.resource(kind);
        let max = Self::max_resource(kind);
        self.abilities
            .iter_mut()
            .filter(|ability| ability.trigger() == kind)
            .for_each(|ability| ability.sync(value, max));
    }

    // ========================================================================
    // Round bookkeeping
    // ========================================================================

    pub fn mark_acted(&mut self) {
        self.acted = true;
    }

    pub fn reset_acted(&mut self) {
        self.acted = false;
    }

    // ========================================================================
    // Modifiers
    // ========================================================================

    /// Applies or reverts a stat modifier. Returns the change applied to the
    /// stat; dead units are left untouched.
    pub fn apply_modifier(&mut self, stat: BuffStat, method: ModifyMethod, tag: &str) -> f64 {
        if !self.is_alive() {
            return 0.0;
        }

        let delta = match method {
            ModifyMethod::Revert => {
                let mut total = 0.0;
                self.modifiers.retain(|m| {
                    let matches = m.tag == tag && m.stat == stat;
                    if matches {
                        total += m.delta;
                    }
                    !matches
                });
                return self.shift_stat(stat, -total);
            }
            ModifyMethod::Multiply(percent) => {
                let factor = f64::from(percent) / 100.0;
                match stat {
                    BuffStat::MaxLife => {
                        f64::from(scale(self.total_life, factor)) - f64::from(self.total_life)
                    }
                    BuffStat::Damage => {
                        f64::from(scale(self.damage, factor)) - f64::from(self.damage)
                    }
                    BuffStat::AttackSpeed => self.attack_speed * factor - self.attack_speed,
                }
            }
            ModifyMethod::Add(amount) => match stat {
                BuffStat::AttackSpeed => f64::from(amount) / 100.0,
                BuffStat::MaxLife | BuffStat::Damage => f64::from(amount),
            },
        };

        let applied = self.shift_stat(stat, delta);
        if applied != 0.0 {
            self.modifiers.push(AppliedModifier {
                tag: tag.to_owned(),
                stat,
                delta: applied,
            });
        }
        applied
    }

    /// Moves a stat by `delta`, respecting its floor. Returns the change
    /// actually made.
    fn shift_stat(&mut self, stat: BuffStat, delta: f64) -> f64 {
        match stat {
            BuffStat::MaxLife => {
                let old = self.total_life;
                let new = shifted(old, delta).max(1);
                if new > old {
                    self.life += new - old;
                } else {
                    self.life = self.life.min(new);
                }
                self.total_life = new;
                f64::from(new) - f64::from(old)
            }
            BuffStat::Damage => {
                let old = self.damage;
                self.damage = shifted(old, delta);
                f64::from(self.damage) - f64::from(old)
            }
            BuffStat::AttackSpeed => {
                let old = self.attack_speed;
                self.attack_speed = (old + delta).max(0.0);
                self.attack_speed - old
            }
        }
    }
}

fn shifted(value: u32, delta: f64) -> u32 {
    let shifted = (f64::from(value) + delta.round()).round();
    if shifted <= 0.0 {
        0
    } else if shifted >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        shifted as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::UseCondition;

    fn warrior() -> Unit {
        Unit::new(UnitId(1), Side::Left, "Warrior", true, 20, 1.0, 100)
    }

    fn rage_ability() -> AbilityTemplate {
        AbilityTemplate {
            name: "heavy strike".into(),
            icon: String::new(),
            trigger: ResourceKind::Rage,
            disposable: false,
            condition: UseCondition::Always,
            actions: vec![ActionTemplate::attack()],
        }
    }

    #[test]
    fn damage_and_heal_report_actual_amounts() {
        let mut unit = warrior();
        assert_eq!(unit.apply_damage(30), 30);
        assert_eq!(unit.apply_heal(45), 30);
        assert_eq!(unit.life(), 100);
        assert_eq!(unit.apply_damage(250), 100);
        assert!(!unit.is_alive());
    }

    #[test]
    fn dead_unit_is_inert() {
        let mut unit = warrior().with_life(0);
        assert_eq!(unit.apply_heal(50), 0);
        assert_eq!(unit.apply_damage(50), 0);
        unit.gain_rage(500);
        assert_eq!(unit.rage(), 0);
        assert_eq!(unit.life(), 0);
    }

    #[test]
    fn resources_clamp_and_drive_readiness() {
        let mut unit = warrior().with_ability(rage_ability());
        unit.gain_rage(700);
        assert!(!unit.abilities()[0].is_ready());
        unit.gain_rage(700);
        assert_eq!(unit.rage(), Unit::MAX_RAGE);
        assert!(unit.abilities()[0].is_ready());

        let actions = unit.use_ability(0).unwrap();
        assert_eq!(actions.len(), 1);
        assert_eq!(unit.rage(), 0);
        assert!(!unit.abilities()[0].is_ready());
    }

    #[test]
    fn using_missing_slot_fails() {
        let mut unit = warrior();
        assert_eq!(unit.use_ability(3), Err(AbilityError::UnknownAbility(3)));
    }

    #[test]
    fn max_life_buff_moves_life_and_reverts() {
        let mut unit = warrior();
        unit.apply_damage(10);
        let delta = unit.apply_modifier(BuffStat::MaxLife, ModifyMethod::Multiply(130), "fury");
        assert_eq!(delta, 30.0);
        assert_eq!(unit.total_life(), 130);
        assert_eq!(unit.life(), 120);

        unit.apply_modifier(BuffStat::MaxLife, ModifyMethod::Revert, "fury");
        assert_eq!(unit.total_life(), 100);
        assert_eq!(unit.life(), 100);
        assert!(unit.modifiers().is_empty());
    }

    #[test]
    fn lowering_max_life_clamps_life() {
        let mut unit = warrior();
        unit.apply_modifier(BuffStat::MaxLife, ModifyMethod::Add(-60), "curse");
        assert_eq!(unit.total_life(), 40);
        assert_eq!(unit.life(), 40);
    }

    #[test]
    fn attack_speed_add_uses_hundredths() {
        let mut unit = warrior();
        unit.apply_modifier(BuffStat::AttackSpeed, ModifyMethod::Add(50), "haste");
        assert!((unit.attack_speed() - 1.5).abs() < 1e-9);
        unit.apply_modifier(BuffStat::AttackSpeed, ModifyMethod::Revert, "haste");
        assert!((unit.attack_speed() - 1.0).abs() < 1e-9);
    }
}
