//! Ruleset templates and unit construction.
//!
//! A [`Ruleset`] is the data provider behind unit creation: races, classes
//! and abilities keyed by id. It is consulted only while commands are built
//! and never mutated afterwards. Templates deserialize directly from RON
//! files (see `battle-content`).

use std::collections::BTreeMap;

use crate::action::{ActionKind, ActionTemplate, BaseAction, Power};
use crate::env::{IdGenerator, RulesetError};
use crate::state::{AbilityTemplate, Command, CommandError, Side, Unit, UnitId};

fn default_attack_speed() -> f64 {
    1.0
}

/// Race template: abilities every member of the race carries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaceTemplate {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: Vec<String>,
}

/// Class template: fighting style, default action and class abilities.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassTemplate {
    pub name: String,
    pub melee: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_action: BaseAction,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: Vec<String>,
}

/// Self-contained template for a summoned creature.
///
/// Summons happen mid-battle, so the creature carries its abilities inline
/// rather than by ruleset id.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureTemplate {
    pub name: String,
    pub melee: bool,
    pub damage: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_attack_speed"))]
    pub attack_speed: f64,
    pub life: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_action: BaseAction,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: Vec<AbilityTemplate>,
}

impl CreatureTemplate {
    /// Spawns a fresh unit from this template.
    pub fn spawn(&self, id: UnitId, side: Side) -> Unit {
        Unit::new(
            id,
            side,
            self.name.clone(),
            self.melee,
            self.damage,
            self.attack_speed,
            self.life,
        )
        .with_base_action(self.base_action)
        .with_abilities(self.abilities.iter().cloned())
    }
}

/// Roster entry: one unit to create from the ruleset.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitSpec {
    pub name: String,
    pub race: String,
    pub class: String,
    pub damage: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_attack_speed"))]
    pub attack_speed: f64,
    pub life: u32,
}

impl UnitSpec {
    pub fn new(
        name: impl Into<String>,
        race: impl Into<String>,
        class: impl Into<String>,
        damage: u32,
        life: u32,
    ) -> Self {
        Self {
            name: name.into(),
            race: race.into(),
            class: class.into(),
            damage,
            attack_speed: default_attack_speed(),
            life,
        }
    }

    pub fn with_attack_speed(mut self, attack_speed: f64) -> Self {
        self.attack_speed = attack_speed;
        self
    }
}

/// Races, classes and abilities keyed by id.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Ruleset {
    pub races: BTreeMap<String, RaceTemplate>,
    pub classes: BTreeMap<String, ClassTemplate>,
    pub abilities: BTreeMap<String, AbilityTemplate>,
}

impl Ruleset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_race(mut self, id: impl Into<String>, race: RaceTemplate) -> Self {
        self.races.insert(id.into(), race);
        self
    }

    pub fn with_class(mut self, id: impl Into<String>, class: ClassTemplate) -> Self {
        self.classes.insert(id.into(), class);
        self
    }

    pub fn with_ability(mut self, id: impl Into<String>, ability: AbilityTemplate) -> Self {
        self.abilities.insert(id.into(), ability);
        self
    }

    /// Checks every reference and template value.
    pub fn validate(&self) -> Result<(), RulesetError> {
        for (id, ability) in &self.abilities {
            validate_ability(id, ability)?;
        }
        for (id, race) in &self.races {
            self.resolve_abilities(id, &race.abilities)?;
        }
        for (id, class) in &self.classes {
            validate_base_action(id, class.base_action)?;
            self.resolve_abilities(id, &class.abilities)?;
        }
        Ok(())
    }

    /// Creates a unit with class abilities first, then race abilities.
    pub fn create_unit(&self, id: UnitId, side: Side, spec: &UnitSpec) -> Result<Unit, RulesetError> {
        let race = self
            .races
            .get(&spec.race)
            .ok_or_else(|| RulesetError::UnknownRace(spec.race.clone()))?;
        let class = self
            .classes
            .get(&spec.class)
            .ok_or_else(|| RulesetError::UnknownClass(spec.class.clone()))?;

        if spec.life == 0 {
            return Err(RulesetError::invalid(&spec.name, "life must be positive"));
        }
        if !spec.attack_speed.is_finite() || spec.attack_speed < 0.0 {
            return Err(RulesetError::invalid(
                &spec.name,
                "attack speed must be a non-negative number",
            ));
        }

        let mut abilities = self.resolve_abilities(&spec.class, &class.abilities)?;
        abilities.extend(self.resolve_abilities(&spec.race, &race.abilities)?);

        Ok(Unit::new(
            id,
            side,
            spec.name.clone(),
            class.melee,
            spec.damage,
            spec.attack_speed,
            spec.life,
        )
        .with_origin(spec.race.clone(), spec.class.clone())
        .with_base_action(class.base_action)
        .with_abilities(abilities))
    }

    /// Builds a command, drawing ids from `ids` in roster order.
    pub fn build_command(
        &self,
        side: Side,
        specs: &[UnitSpec],
        ids: &mut dyn IdGenerator,
    ) -> Result<Command, RulesetError> {
        let mut command = Command::new(side);
        for spec in specs {
            let unit = self.create_unit(ids.next_id(), side, spec)?;
            command.add(unit).map_err(|e| match e {
                CommandError::DuplicateUnit(id) | CommandError::WrongSide { unit: id, .. } => {
                    RulesetError::DuplicateUnit(id)
                }
            })?;
        }
        Ok(command)
    }

    fn resolve_abilities(
        &self,
        owner: &str,
        ids: &[String],
    ) -> Result<Vec<AbilityTemplate>, RulesetError> {
        ids.iter()
            .map(|id| {
                self.abilities
                    .get(id)
                    .cloned()
                    .ok_or_else(|| RulesetError::UnknownAbility {
                        owner: owner.to_owned(),
                        ability: id.clone(),
                    })
            })
            .collect()
    }
}

// ============================================================================
// Template validation
// ============================================================================

fn validate_ability(id: &str, ability: &AbilityTemplate) -> Result<(), RulesetError> {
    if ability.actions.is_empty() {
        return Err(RulesetError::invalid(id, "ability has no actions"));
    }
    ability
        .actions
        .iter()
        .try_for_each(|action| validate_action(id, action))
}

fn validate_base_action(id: &str, base_action: BaseAction) -> Result<(), RulesetError> {
    match base_action {
        BaseAction::HealOrAttack { multiplier } if !(multiplier.is_finite() && multiplier > 0.0) => {
            Err(RulesetError::invalid(id, "heal multiplier must be positive"))
        }
        _ => Ok(()),
    }
}

fn validate_power(id: &str, power: Power) -> Result<(), RulesetError> {
    match power {
        Power::Scaled(m) if !(m.is_finite() && m > 0.0) => {
            Err(RulesetError::invalid(id, "multiplier must be positive"))
        }
        _ => Ok(()),
    }
}

fn validate_action(id: &str, action: &ActionTemplate) -> Result<(), RulesetError> {
    match &action.kind {
        ActionKind::Damage { power, .. } | ActionKind::Heal { power, .. } => {
            validate_power(id, *power)
        }
        ActionKind::Wait | ActionKind::Buff { .. } => Ok(()),
        ActionKind::Summon { creature } => {
            if creature.life == 0 {
                return Err(RulesetError::invalid(&creature.name, "life must be positive"));
            }
            validate_base_action(&creature.name, creature.base_action)?;
            creature
                .abilities
                .iter()
                .try_for_each(|ability| validate_ability(&creature.name, ability))
        }
        ActionKind::ApplyEffect { effect, .. } => {
            if effect.duration == 0 {
                return Err(RulesetError::invalid(&effect.name, "duration must be positive"));
            }
            effect
                .on_apply
                .iter()
                .chain(&effect.on_each_round)
                .chain(&effect.on_disable)
                .try_for_each(|nested| validate_action(&effect.name, nested))
        }
    }
}
