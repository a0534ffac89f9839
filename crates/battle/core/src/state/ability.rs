//! Ability readiness gate.
//!
//! ```text
//! Dormant --(resource reaches max)--> Ready --(use)--> Dormant
//!                                       \--(use, disposable)--> Spent
//! ```
//!
//! Readiness follows the unit's resource: [`Ability::sync`] runs after every
//! resource change and is idempotent. Spent is terminal.

use crate::action::ActionTemplate;
use crate::state::{AbilityError, Command, ResourceKind};

/// Static ability parameters from the ruleset.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityTemplate {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: String,
    /// Resource whose maximum makes the ability ready.
    pub trigger: ResourceKind,
    /// Usable once per battle.
    #[cfg_attr(feature = "serde", serde(default))]
    pub disposable: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub condition: UseCondition,
    pub actions: Vec<ActionTemplate>,
}

/// Battle-state condition checked on top of readiness.
///
/// A ready ability whose condition fails is skipped for the turn; the
/// unit falls through to its base action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UseCondition {
    #[default]
    Always,
    /// At least one living ally below full life.
    WoundedAlly,
    /// Fewer than `n` living allies.
    AlliesBelow(u32),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AbilityState {
    #[default]
    Dormant,
    Ready,
    Spent,
}

/// Ability instance bound to one unit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    template: AbilityTemplate,
    state: AbilityState,
}

impl Ability {
    pub fn new(template: AbilityTemplate) -> Self {
        Self {
            template,
            state: AbilityState::Dormant,
        }
    }

    pub fn name(&self) -> &str {
        &self.template.name
    }

    pub fn icon(&self) -> &str {
        &self.template.icon
    }

    pub fn trigger(&self) -> ResourceKind {
        self.template.trigger
    }

    pub fn is_disposable(&self) -> bool {
        self.template.disposable
    }

    pub fn state(&self) -> AbilityState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == AbilityState::Ready
    }

    /// Re-evaluates readiness against the current resource value.
    pub fn sync(&mut self, value: u32, max: u32) {
        self.state = match self.state {
            AbilityState::Spent => AbilityState::Spent,
            _ if value >= max => AbilityState::Ready,
            _ => AbilityState::Dormant,
        };
    }

    /// Ready and the battle state allows it this turn.
    pub fn can_be_used(&self, enemies: &Command, allies: &Command) -> bool {
        if !self.is_ready() || !enemies.is_alive() {
            return false;
        }
        match self.template.condition {
            UseCondition::Always => true,
            UseCondition::WoundedAlly => allies.wounded_count() > 0,
            UseCondition::AlliesBelow(n) => (allies.living_count() as u64) < u64::from(n),
        }
    }

    /// Leaves Ready and hands out the ability's action templates.
    ///
    /// The owning unit resets the triggering resource.
    pub fn usage(&mut self) -> Result<Vec<ActionTemplate>, AbilityError> {
        match self.state {
            AbilityState::Ready => {
                self.state = if self.template.disposable {
                    AbilityState::Spent
                } else {
                    AbilityState::Dormant
                };
                Ok(self.template.actions.clone())
            }
            AbilityState::Dormant => Err(AbilityError::NotReady {
                name: self.template.name.clone(),
            }),
            AbilityState::Spent => Err(AbilityError::Spent {
                name: self.template.name.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strike(disposable: bool) -> Ability {
        Ability::new(AbilityTemplate {
            name: "heavy strike".into(),
            icon: String::new(),
            trigger: ResourceKind::Rage,
            disposable,
            condition: UseCondition::Always,
            actions: vec![ActionTemplate::attack()],
        })
    }

    #[test]
    fn sync_is_idempotent() {
        let mut ability = strike(false);
        ability.sync(1000, 1000);
        ability.sync(1000, 1000);
        assert!(ability.is_ready());
        ability.sync(10, 1000);
        assert_eq!(ability.state(), AbilityState::Dormant);
    }

    #[test]
    fn usage_requires_ready() {
        let mut ability = strike(false);
        assert_eq!(
            ability.usage(),
            Err(AbilityError::NotReady {
                name: "heavy strike".into()
            })
        );
    }

    #[test]
    fn disposable_ability_is_spent_forever() {
        let mut ability = strike(true);
        ability.sync(1000, 1000);
        assert_eq!(ability.usage().map(|a| a.len()), Ok(1));
        assert_eq!(ability.state(), AbilityState::Spent);

        ability.sync(1000, 1000);
        assert_eq!(ability.state(), AbilityState::Spent);
        assert!(matches!(ability.usage(), Err(AbilityError::Spent { .. })));
    }
}
