use crate::state::{Command, CommandError, Side, Unit, UnitId, UnitRef};

/// Both commands of a battle.
///
/// The arena owns every unit; everything else reaches units through
/// [`UnitRef`] lookups.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    left: Command,
    right: Command,
}

impl Arena {
    /// Pairs two commands; ids must be unique across both sides.
    pub fn new(left: Command, right: Command) -> Result<Self, CommandError> {
        for (command, side) in [(&left, Side::Left), (&right, Side::Right)] {
            if command.side() != side {
                let unit = command.iter().next().map(Unit::id).unwrap_or_default();
                return Err(CommandError::WrongSide {
                    unit,
                    actual: command.side(),
                    expected: side,
                });
            }
        }
        if let Some(shared) = left.iter().map(Unit::id).find(|id| right.contains(*id)) {
            return Err(CommandError::DuplicateUnit(shared));
        }
        Ok(Self { left, right })
    }

    pub fn command(&self, side: Side) -> &Command {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn command_mut(&mut self, side: Side) -> &mut Command {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Returns `(enemies, allies)` as seen from `side`.
    pub fn sides_of(&self, side: Side) -> (&Command, &Command) {
        (self.command(side.opponent()), self.command(side))
    }

    pub fn unit(&self, unit: UnitRef) -> Option<&Unit> {
        self.command(unit.side).get(unit.id)
    }

    pub fn unit_mut(&mut self, unit: UnitRef) -> Option<&mut Unit> {
        self.command_mut(unit.side).get_mut(unit.id)
    }

    /// Finds a unit by id on either side.
    pub fn find(&self, id: UnitId) -> Option<&Unit> {
        self.left.get(id).or_else(|| self.right.get(id))
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.find(id).is_some()
    }

    pub fn both_alive(&self) -> bool {
        self.left.is_alive() && self.right.is_alive()
    }

    /// The only side with living units, if exactly one has them.
    pub fn survivor(&self) -> Option<Side> {
        match (self.left.is_alive(), self.right.is_alive()) {
            (true, false) => Some(Side::Left),
            (false, true) => Some(Side::Right),
            _ => None,
        }
    }

    /// Largest id in use across both commands.
    pub fn max_id(&self) -> Option<UnitId> {
        self.left.max_id().max(self.right.max_id())
    }

    /// Adds a unit to its own side, keeping ids unique across the arena.
    pub fn add(&mut self, unit: Unit) -> Result<(), CommandError> {
        if self.contains(unit.id()) {
            return Err(CommandError::DuplicateUnit(unit.id()));
        }
        self.command_mut(unit.side()).add(unit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.left.iter().chain(self.right.iter())
    }
}
