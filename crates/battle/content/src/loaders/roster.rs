//! Roster loader.

use std::path::Path;

use battle_core::UnitSpec;

use crate::loaders::{LoadResult, read_file};

/// Loader for rosters (one side's units) from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// RON format: `[UnitSpec]`, fielded in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<UnitSpec>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load roster {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<UnitSpec>> {
        let specs: Vec<UnitSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;
        if specs.is_empty() {
            anyhow::bail!("roster has no units");
        }
        Ok(specs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_speed_defaults_to_one() {
        let specs = RosterLoader::parse(
            r#"[
                (name: "Grom", race: "orc", class: "warrior", damage: 20, life: 150),
                (name: "Lira", race: "elf", class: "archer", damage: 12, attack_speed: 1.5, life: 90),
            ]"#,
        )
        .unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].attack_speed, 1.0);
        assert_eq!(specs[1], UnitSpec::new("Lira", "elf", "archer", 12, 90).with_attack_speed(1.5));
    }

    #[test]
    fn empty_roster_is_rejected() {
        assert!(RosterLoader::parse("[]").is_err());
    }
}
