use crate::state::{Arena, UnitId};

/// Source of fresh ids for summoned units.
pub trait IdGenerator {
    fn next_id(&mut self) -> UnitId;
}

/// Hands out increasing ids from a starting point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequentialIds {
    next: u32,
}

impl SequentialIds {
    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// Continues after the largest id already in the arena.
    pub fn after(arena: &Arena) -> Self {
        let first = arena
            .max_id()
            .map_or(1, |UnitId(max)| max.saturating_add(1));
        Self::starting_at(first)
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> UnitId {
        let id = UnitId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}
