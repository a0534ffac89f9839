//! Message formatting collaborator.
//!
//! The engine resolves every fact an action message needs (actor, target,
//! verb, factual power) before asking for text; formatting is entirely up to
//! the [`MessageFormatter`] implementation.

use crate::action::{ActionOutcome, ActionReport, ActionTag};
use crate::state::{Arena, Command, Side};

/// Turns resolved battle facts into display strings.
pub trait MessageFormatter {
    /// One line per executed action.
    fn action(&self, report: &ActionReport) -> String;

    /// Snapshot of both commands, logged after every stroke.
    fn board(&self, arena: &Arena) -> String;

    fn round(&self, number: u32) -> String;

    /// An effect ran out on a unit.
    fn effect_expired(&self, effect: &str, unit: &str) -> String;

    fn battle_end(&self, winner: Side, rounds: u32) -> String;
}

/// Plain English messages.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainMessages;

impl PlainMessages {
    fn command_line(out: &mut String, command: &Command) {
        out.push_str(&format!("{}:", command.side()));
        for unit in command.iter() {
            out.push_str(&format!(
                " {} {}/{}",
                unit.name(),
                unit.life(),
                unit.total_life()
            ));
            if !unit.is_alive() {
                out.push_str(" (dead)");
            }
            let names = unit.effects().names();
            if !names.is_empty() {
                out.push_str(&format!(" [{}]", names.join(", ")));
            }
            out.push(';');
        }
    }
}

impl MessageFormatter for PlainMessages {
    fn action(&self, report: &ActionReport) -> String {
        let actor = report.actor_name.as_str();
        let target = report.target_name.as_deref().unwrap_or("nobody");
        let name = report.name.as_str();
        let effect = report.effect.as_deref().unwrap_or(name);

        let line = match (report.tag, report.outcome) {
            (ActionTag::Wait, _) => format!("{actor} waits"),
            (ActionTag::Heal, ActionOutcome::NoTarget) => {
                format!("{actor} tries {name}, but nobody needs healing")
            }
            (_, ActionOutcome::NoTarget) => format!("{actor} tries {name}, but finds no target"),
            (ActionTag::Damage, _) => format!(
                "{actor} uses {name} on {target}: {} damage",
                report.factual_power
            ),
            (ActionTag::Heal, _) => format!(
                "{actor} uses {name} on {target}: +{} life",
                report.factual_power
            ),
            (ActionTag::Summon, _) => format!("{actor} uses {name} and summons {target}"),
            (ActionTag::Buff, _) => format!("{actor} uses {name} on {target}"),
            (ActionTag::ApplyEffect, ActionOutcome::Refreshed) => {
                format!("{effect} on {target} is renewed")
            }
            (ActionTag::ApplyEffect, ActionOutcome::Ignored) => {
                format!("{effect} fizzles, {target} cannot hold more effects")
            }
            (ActionTag::ApplyEffect, _) => format!("{actor} puts {effect} on {target}"),
        };

        if report.killed {
            format!("{line} ({target} falls)")
        } else {
            line
        }
    }

    fn board(&self, arena: &Arena) -> String {
        let mut out = String::new();
        Self::command_line(&mut out, arena.command(Side::Left));
        out.push_str(" | ");
        Self::command_line(&mut out, arena.command(Side::Right));
        out
    }

    fn round(&self, number: u32) -> String {
        format!("Round {number}")
    }

    fn effect_expired(&self, effect: &str, unit: &str) -> String {
        format!("{effect} on {unit} wears off")
    }

    fn battle_end(&self, winner: Side, rounds: u32) -> String {
        format!("{winner} side wins after {rounds} rounds")
    }
}
