//! Action vocabulary.
//!
//! Every concrete behavior is data: a [`ActionKind`] variant plus its
//! payload (target rule, power formula, template). New abilities are new
//! data, not new types.

use crate::env::CreatureTemplate;
use crate::state::EffectTemplate;

/// Reusable, actor-less description of an action.
///
/// Templates live in abilities, effects and class defaults; they become an
/// [`Action`](super::Action) once bound to an actor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionTemplate {
    /// Display verb ("attack", "heavy strike", ...).
    pub name: String,
    pub kind: ActionKind,
}

impl ActionTemplate {
    pub fn new(name: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Default attack against any eligible enemy.
    pub fn attack() -> Self {
        Self::new(
            "attack",
            ActionKind::Damage {
                target: TargetRule::Enemy,
                power: Power::Attack,
            },
        )
    }

    /// Default heal of a wounded ally. A healer never mends itself this way.
    pub fn heal(multiplier: f64) -> Self {
        Self::new(
            "heal",
            ActionKind::Heal {
                target: TargetRule::OtherWoundedAlly,
                power: Power::Scaled(multiplier),
            },
        )
    }

    pub fn wait() -> Self {
        Self::new("wait", ActionKind::Wait)
    }
}

/// The closed set of action behaviors.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Remove life from a target.
    Damage { target: TargetRule, power: Power },

    /// Restore life to a target, capped by its missing life.
    Heal { target: TargetRule, power: Power },

    /// Skip the turn; the actor applies the action to itself.
    Wait,

    /// Add a new unit to the actor's command.
    Summon { creature: CreatureTemplate },

    /// Modify a stat of the target.
    Buff {
        target: TargetRule,
        stat: BuffStat,
        method: ModifyMethod,
        /// Groups modifiers so a later `Revert` can undo them.
        tag: String,
    },

    /// Attach a timed effect to the target.
    ApplyEffect {
        target: TargetRule,
        effect: EffectTemplate,
    },
}

impl ActionKind {
    pub fn tag(&self) -> ActionTag {
        match self {
            Self::Damage { .. } => ActionTag::Damage,
            Self::Heal { .. } => ActionTag::Heal,
            Self::Wait => ActionTag::Wait,
            Self::Summon { .. } => ActionTag::Summon,
            Self::Buff { .. } => ActionTag::Buff,
            Self::ApplyEffect { .. } => ActionTag::ApplyEffect,
        }
    }
}

/// Payload-free discriminator of [`ActionKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ActionTag {
    Damage,
    Heal,
    Wait,
    Summon,
    Buff,
    ApplyEffect,
}

/// How an action picks its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TargetRule {
    /// A living enemy. Damage from a melee actor prefers living melee
    /// enemies while any remain.
    Enemy,

    /// A living ally below full life. No candidate turns the action into a
    /// no-op.
    WoundedAlly,

    /// Like [`TargetRule::WoundedAlly`] but never the actor.
    OtherWoundedAlly,

    /// The actor itself.
    Actor,

    /// The unit carrying the effect whose batch is running. Outside an
    /// effect batch this is the actor.
    EffectOwner,
}

/// Nominal magnitude of a Damage/Heal action.
///
/// Scaling truncates toward zero.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Power {
    /// `floor(damage × attack_speed)`, the plain attack.
    Attack,
    /// `floor(damage × multiplier)`.
    Scaled(f64),
    /// A fixed amount, independent of the actor.
    Fixed(u32),
}

impl Power {
    /// Resolves the nominal power for an actor with the given stats.
    pub fn resolve(&self, damage: u32, attack_speed: f64) -> u32 {
        match *self {
            Power::Attack => scale(damage, attack_speed),
            Power::Scaled(multiplier) => scale(damage, multiplier),
            Power::Fixed(amount) => amount,
        }
    }
}

/// `floor(base × factor)`, saturating at the `u32` bounds.
///
/// The epsilon absorbs the binary representation error of decimal factors
/// (`10 × 0.7` must be 7, not 6).
pub(crate) fn scale(base: u32, factor: f64) -> u32 {
    let value = (f64::from(base) * factor + 1e-9).floor();
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value as u32
    }
}

/// Stat touched by a [`ActionKind::Buff`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BuffStat {
    MaxLife,
    Damage,
    AttackSpeed,
}

/// How a [`ActionKind::Buff`] changes its stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModifyMethod {
    /// Multiply by `percent / 100` (130 = +30%).
    Multiply(u32),
    /// Add a flat amount (hundredths of a point for attack speed).
    Add(i32),
    /// Undo every modifier previously applied with the same tag and stat.
    Revert,
}

/// What a unit does on its turn when no ability is ready and usable.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseAction {
    #[default]
    Attack,
    /// Heal another wounded ally for `floor(damage × multiplier)`, or attack
    /// when no ally besides the healer is wounded. Two lone healers would
    /// otherwise mend themselves forever.
    HealOrAttack { multiplier: f64 },
    Wait,
}
