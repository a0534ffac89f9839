//! Timed effects attached to units.
//!
//! An effect carries three ordered action batches:
//! - `on_apply` fires once, when the effect is first attached
//! - `on_each_round` fires at every round start while the effect is active
//! - `on_disable` fires once, when the duration runs out
//!
//! The set itself is plain data; the engine drives the batches.

use arrayvec::ArrayVec;

use crate::action::ActionTemplate;
use crate::config::BattleConfig;
use crate::state::UnitRef;

/// Static description of an effect, carried by an `ApplyEffect` action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectTemplate {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: String,
    /// Rounds the effect stays active. Must be positive.
    pub duration: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_apply: Vec<ActionTemplate>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_each_round: Vec<ActionTemplate>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_disable: Vec<ActionTemplate>,
}

/// A live effect instance owned by the unit it is attached to.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub name: String,
    pub icon: String,
    /// Remaining rounds. `0 <= duration <= total_duration`.
    duration: u32,
    total_duration: u32,
    /// Unit that applied the effect; acts in every batch.
    pub caster: UnitRef,
    pub on_apply: Vec<ActionTemplate>,
    pub on_each_round: Vec<ActionTemplate>,
    pub on_disable: Vec<ActionTemplate>,
}

impl Effect {
    pub fn from_template(template: &EffectTemplate, caster: UnitRef) -> Self {
        Self {
            name: template.name.clone(),
            icon: template.icon.clone(),
            duration: template.duration,
            total_duration: template.duration,
            caster,
            on_apply: template.on_apply.clone(),
            on_each_round: template.on_each_round.clone(),
            on_disable: template.on_disable.clone(),
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn total_duration(&self) -> u32 {
        self.total_duration
    }

    pub fn is_expired(&self) -> bool {
        self.duration == 0
    }
}

/// Result of attaching an effect to a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attach {
    /// New instance stored; its `on_apply` batch must fire.
    Added,
    /// Same-named effect already active; duration reset to full.
    Refreshed,
    /// No room left on the unit; nothing changed.
    Ignored,
}

/// Active effects on a unit, bounded by [`BattleConfig::MAX_EFFECTS_PER_UNIT`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectSet {
    effects: ArrayVec<Effect, { BattleConfig::MAX_EFFECTS_PER_UNIT }>,
}

impl EffectSet {
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Effect> {
        self.effects.iter().find(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Names of the active effects, in attach order.
    pub fn names(&self) -> Vec<String> {
        self.effects.iter().map(|e| e.name.clone()).collect()
    }

    /// Attaches an effect.
    ///
    /// A same-named effect is refreshed to its total duration instead of
    /// stacking. A full set silently ignores the new effect.
    pub fn attach(&mut self, effect: Effect) -> Attach {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.name == effect.name) {
            existing.duration = existing.total_duration;
            return Attach::Refreshed;
        }

        if self.effects.is_full() {
            return Attach::Ignored;
        }

        self.effects.push(effect);
        Attach::Added
    }

    /// Decrements the named effect by one round.
    ///
    /// Returns the effect when it expired, after removing it from the set.
    pub fn decrement(&mut self, name: &str) -> Option<Effect> {
        let index = self.effects.iter().position(|e| e.name == name)?;
        let effect = &mut self.effects[index];
        effect.duration = effect.duration.saturating_sub(1);
        if effect.is_expired() {
            Some(self.effects.remove(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Side, UnitId};

    fn template(name: &str, duration: u32) -> EffectTemplate {
        EffectTemplate {
            name: name.to_owned(),
            icon: String::new(),
            duration,
            on_apply: Vec::new(),
            on_each_round: Vec::new(),
            on_disable: Vec::new(),
        }
    }

    fn caster() -> UnitRef {
        UnitRef::new(Side::Left, UnitId(1))
    }

    #[test]
    fn reapplying_refreshes_duration() {
        let mut set = EffectSet::empty();
        let poison = template("poison", 3);
        assert_eq!(set.attach(Effect::from_template(&poison, caster())), Attach::Added);
        assert!(set.decrement("poison").is_none());
        assert_eq!(set.get("poison").map(Effect::duration), Some(2));

        assert_eq!(
            set.attach(Effect::from_template(&poison, caster())),
            Attach::Refreshed
        );
        assert_eq!(set.get("poison").map(Effect::duration), Some(3));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn expiry_removes_effect() {
        let mut set = EffectSet::empty();
        set.attach(Effect::from_template(&template("fury", 1), caster()));
        let expired = set.decrement("fury").unwrap();
        assert_eq!(expired.total_duration(), 1);
        assert!(expired.is_expired());
        assert!(set.is_empty());
    }

    #[test]
    fn full_set_ignores_new_effects() {
        let mut set = EffectSet::empty();
        for i in 0..BattleConfig::MAX_EFFECTS_PER_UNIT {
            set.attach(Effect::from_template(&template(&format!("e{i}"), 2), caster()));
        }
        let outcome = set.attach(Effect::from_template(&template("extra", 2), caster()));
        assert_eq!(outcome, Attach::Ignored);
        assert!(!set.contains("extra"));
    }
}
