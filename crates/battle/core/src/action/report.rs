//! Resolved outcome of a handled action.

use crate::action::ActionTag;
use crate::state::UnitRef;

/// How an action ended.
///
/// None of these is an error: "no target" is an expected battle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ActionOutcome {
    /// Reached its target and changed state.
    Applied,
    /// No eligible target; nothing changed.
    NoTarget,
    /// Effect already active on the target; duration reset.
    Refreshed,
    /// Target had no room for another effect.
    Ignored,
}

/// Everything a message or statistics consumer needs about one action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionReport {
    /// Display verb.
    pub name: String,
    pub tag: ActionTag,
    pub actor: UnitRef,
    pub actor_name: String,
    pub target: Option<UnitRef>,
    pub target_name: Option<String>,
    /// Nominal magnitude.
    pub power: u32,
    /// Magnitude actually applied after clamping. For buffs, the stat change
    /// (hundredths for attack speed).
    pub factual_power: u32,
    pub outcome: ActionOutcome,
    /// The action took the target's last life point.
    pub killed: bool,
    /// Unit created by a summon.
    pub summoned: Option<UnitRef>,
    /// Effect name for effect actions.
    pub effect: Option<String>,
    /// Actions fired by this one (an effect's `on_apply` batch).
    pub triggered: Vec<ActionReport>,
}

impl ActionReport {
    pub fn new(
        name: impl Into<String>,
        tag: ActionTag,
        actor: UnitRef,
        actor_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            tag,
            actor,
            actor_name: actor_name.into(),
            target: None,
            target_name: None,
            power: 0,
            factual_power: 0,
            outcome: ActionOutcome::NoTarget,
            killed: false,
            summoned: None,
            effect: None,
            triggered: Vec::new(),
        }
    }

    pub(crate) fn on_target(mut self, target: UnitRef, name: impl Into<String>) -> Self {
        self.target = Some(target);
        self.target_name = Some(name.into());
        self.outcome = ActionOutcome::Applied;
        self
    }

    pub fn is_applied(&self) -> bool {
        self.outcome == ActionOutcome::Applied
    }

    /// This report followed by every triggered report, depth first.
    pub fn flatten(&self) -> Vec<&ActionReport> {
        let mut out = vec![self];
        for nested in &self.triggered {
            out.extend(nested.flatten());
        }
        out
    }
}
