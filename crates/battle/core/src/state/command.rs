//! One side's roster.

use crate::env::BattleRng;
use crate::state::{CommandError, Side, Unit, UnitId};

/// Ordered roster of units on one side.
///
/// Insertion order is iteration/display order and the order in which units
/// take their strokes. Units are never removed; death is a state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    side: Side,
    units: Vec<Unit>,
}

impl Command {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            units: Vec::new(),
        }
    }

    /// Builds a command from units, rejecting duplicates and foreign units.
    pub fn with_units(
        side: Side,
        units: impl IntoIterator<Item = Unit>,
    ) -> Result<Self, CommandError> {
        let mut command = Self::new(side);
        for unit in units {
            command.add(unit)?;
        }
        Ok(command)
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Unit> {
        self.units.iter_mut()
    }

    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id() == id)
    }

    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.iter_mut().find(|u| u.id() == id)
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.get(id).is_some()
    }

    /// Appends a unit at the end of the iteration order.
    pub fn add(&mut self, unit: Unit) -> Result<(), CommandError> {
        if unit.side() != self.side {
            return Err(CommandError::WrongSide {
                unit: unit.id(),
                actual: unit.side(),
                expected: self.side,
            });
        }
        if self.contains(unit.id()) {
            return Err(CommandError::DuplicateUnit(unit.id()));
        }
        self.units.push(unit);
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// At least one member is alive.
    pub fn is_alive(&self) -> bool {
        self.units.iter().any(Unit::is_alive)
    }

    /// At least one living member fights in melee.
    pub fn exist_melee_units(&self) -> bool {
        self.units.iter().any(|u| u.is_alive() && u.is_melee())
    }

    pub fn living_count(&self) -> usize {
        self.units.iter().filter(|u| u.is_alive()).count()
    }

    pub fn wounded_count(&self) -> usize {
        self.units.iter().filter(|u| u.is_wounded()).count()
    }

    /// A wounded member other than `id` exists.
    pub fn has_wounded_besides(&self, id: UnitId) -> bool {
        self.units.iter().any(|u| u.is_wounded() && u.id() != id)
    }

    /// Living members that still owe a stroke this round.
    pub fn pending_count(&self) -> usize {
        self.units
            .iter()
            .filter(|u| u.is_alive() && !u.has_acted())
            .count()
    }

    /// Largest id in use, if any.
    pub fn max_id(&self) -> Option<UnitId> {
        self.units.iter().map(Unit::id).max()
    }

    // ========================================================================
    // Target selection
    // ========================================================================
    //
    // Every "pick one of several" draws uniformly from the eligible members
    // in iteration order. `None` is an expected outcome, not an error.

    /// Any living member.
    pub fn unit_for_attacks(&self, rng: &mut dyn BattleRng) -> Option<UnitId> {
        self.pick(rng, Unit::is_alive)
    }

    /// Living melee member; callers fall back to [`Self::unit_for_attacks`].
    pub fn melee_unit_for_attacks(&self, rng: &mut dyn BattleRng) -> Option<UnitId> {
        self.pick(rng, |u| u.is_alive() && u.is_melee())
    }

    /// Living member below full life.
    pub fn unit_for_heal(&self, rng: &mut dyn BattleRng) -> Option<UnitId> {
        self.pick(rng, Unit::is_wounded)
    }

    /// Wounded member other than `healer`.
    pub fn unit_for_heal_besides(
        &self,
        healer: UnitId,
        rng: &mut dyn BattleRng,
    ) -> Option<UnitId> {
        self.pick(rng, |u| u.is_wounded() && u.id() != healer)
    }

    /// Next living member, in iteration order, that has not acted this round.
    pub fn unit_without_action(&self) -> Option<UnitId> {
        self.units
            .iter()
            .find(|u| u.is_alive() && !u.has_acted())
            .map(Unit::id)
    }

    fn pick(&self, rng: &mut dyn BattleRng, eligible: impl Fn(&Unit) -> bool) -> Option<UnitId> {
        let candidates: Vec<UnitId> = self
            .units
            .iter()
            .filter(|u| eligible(u))
            .map(Unit::id)
            .collect();
        match candidates.len() {
            0 => None,
            1 => Some(candidates[0]),
            n => candidates.get(rng.gen_index(n)).copied(),
        }
    }
}
