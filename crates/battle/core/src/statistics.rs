//! Battle statistics accumulator.
//!
//! Append-only while the battle runs, read-only afterwards.

use std::collections::BTreeMap;

use crate::action::{ActionReport, ActionTag};
use crate::state::{Arena, Side, UnitId, UnitRef};

/// Counters for one unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitStatistic {
    pub name: String,
    pub side: Option<Side>,
    pub actions: u32,
    pub hits: u32,
    pub caused_damage: u64,
    pub taken_damage: u64,
    pub heal_given: u64,
    pub heal_received: u64,
    pub kills: u32,
    pub summons: u32,
    pub effects_applied: u32,
    pub buffs: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    rounds: u32,
    strokes: u32,
    units: BTreeMap<UnitId, UnitStatistic>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with an empty record for every unit already in the arena.
    pub fn for_arena(arena: &Arena) -> Self {
        let mut stats = Self::new();
        for unit in arena.iter() {
            stats.entry(unit.unit_ref(), unit.name());
        }
        stats
    }

    pub fn increase_round(&mut self) {
        self.rounds += 1;
    }

    pub fn increase_stroke(&mut self) {
        self.strokes += 1;
    }

    /// Records one handled action. Triggered reports are recorded separately.
    pub fn add_unit_action(&mut self, report: &ActionReport) {
        let actor = self.entry(report.actor, &report.actor_name);
        actor.actions += 1;

        if !report.is_applied() {
            return;
        }
        let amount = u64::from(report.factual_power);

        match report.tag {
            ActionTag::Damage => {
                let actor = self.entry(report.actor, &report.actor_name);
                actor.hits += 1;
                actor.caused_damage += amount;
                if report.killed {
                    actor.kills += 1;
                }
                if let Some(target) = self.target_entry(report) {
                    target.taken_damage += amount;
                }
            }
            ActionTag::Heal => {
                self.entry(report.actor, &report.actor_name).heal_given += amount;
                if let Some(target) = self.target_entry(report) {
                    target.heal_received += amount;
                }
            }
            ActionTag::Summon => {
                self.entry(report.actor, &report.actor_name).summons += 1;
                self.target_entry(report);
            }
            ActionTag::ApplyEffect => {
                self.entry(report.actor, &report.actor_name).effects_applied += 1;
            }
            ActionTag::Buff => {
                self.entry(report.actor, &report.actor_name).buffs += 1;
            }
            ActionTag::Wait => {}
        }
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn strokes(&self) -> u32 {
        self.strokes
    }

    pub fn unit(&self, id: UnitId) -> Option<&UnitStatistic> {
        self.units.get(&id)
    }

    pub fn units(&self) -> impl Iterator<Item = (&UnitId, &UnitStatistic)> {
        self.units.iter()
    }

    /// Damage caused by every unit of a side.
    pub fn side_damage(&self, side: Side) -> u64 {
        self.units
            .values()
            .filter(|s| s.side == Some(side))
            .map(|s| s.caused_damage)
            .sum()
    }

    fn entry(&mut self, unit: UnitRef, name: &str) -> &mut UnitStatistic {
        self.units.entry(unit.id).or_insert_with(|| UnitStatistic {
            name: name.to_owned(),
            side: Some(unit.side),
            ..UnitStatistic::default()
        })
    }

    fn target_entry(&mut self, report: &ActionReport) -> Option<&mut UnitStatistic> {
        let target = report.target?;
        let name = report.target_name.as_deref().unwrap_or_default();
        Some(self.entry(target, name))
    }
}
