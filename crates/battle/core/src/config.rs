use crate::state::Side;

/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Rounds a battle may run before it is aborted with
    /// [`EngineError::RoundLimitExceeded`](crate::engine::EngineError::RoundLimitExceeded).
    pub max_rounds: u32,

    /// Strokes a single round may execute before it is aborted with
    /// [`EngineError::UnexpectedRoundEnding`](crate::engine::EngineError::UnexpectedRoundEnding).
    pub max_strokes_per_round: u32,

    /// Nesting depth of effect batches (an effect applying an effect ...).
    pub max_effect_depth: u32,

    /// Side that opens the first round. `None` lets the seeded RNG decide.
    pub first_side: Option<Side>,

    /// Resource gains driving ability readiness.
    pub resources: ResourceRules,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_EFFECTS_PER_UNIT: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_ROUNDS: u32 = 100;
    pub const DEFAULT_MAX_STROKES_PER_ROUND: u32 = 500;
    pub const DEFAULT_MAX_EFFECT_DEPTH: u32 = 8;

    pub fn new() -> Self {
        Self {
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            max_strokes_per_round: Self::DEFAULT_MAX_STROKES_PER_ROUND,
            max_effect_depth: Self::DEFAULT_MAX_EFFECT_DEPTH,
            first_side: None,
            resources: ResourceRules::default(),
        }
    }

    pub fn with_first_side(mut self, side: Side) -> Self {
        self.first_side = Some(side);
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_max_strokes_per_round(mut self, max_strokes: u32) -> Self {
        self.max_strokes_per_round = max_strokes;
        self
    }

    pub fn with_max_effect_depth(mut self, depth: u32) -> Self {
        self.max_effect_depth = depth;
        self
    }

    pub fn with_resources(mut self, resources: ResourceRules) -> Self {
        self.resources = resources;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Concentration and rage handed out while the battle runs.
///
/// Actor/target gains apply after every Damage or Heal action that reached a
/// target during a stroke. Rage is only earned through damage. Round gains
/// apply to every living unit when a round opens.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResourceRules {
    pub actor_concentration: u32,
    pub actor_rage: u32,
    pub target_concentration: u32,
    pub target_rage: u32,
    pub round_concentration: u32,
    pub round_rage: u32,
}

impl ResourceRules {
    /// Rules that never grant anything; handy for fixtures that drive
    /// resources by hand.
    pub const fn none() -> Self {
        Self {
            actor_concentration: 0,
            actor_rage: 0,
            target_concentration: 0,
            target_rage: 0,
            round_concentration: 0,
            round_rage: 0,
        }
    }
}

impl Default for ResourceRules {
    fn default() -> Self {
        Self {
            actor_concentration: 200,
            actor_rage: 100,
            target_concentration: 100,
            target_rage: 200,
            round_concentration: 0,
            round_rage: 0,
        }
    }
}
