//! Ruleset loader.

use std::path::Path;

use battle_core::Ruleset;

use crate::loaders::{LoadResult, read_file};

/// Loader for the ruleset (races, classes, abilities) from RON files.
pub struct RulesetLoader;

impl RulesetLoader {
    /// Load and validate a ruleset.
    ///
    /// RON format: `(races: {id: RaceTemplate}, classes: {id: ClassTemplate},
    /// abilities: {id: AbilityTemplate})`
    pub fn load(path: &Path) -> LoadResult<Ruleset> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load ruleset {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Ruleset> {
        let ruleset: Ruleset = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse ruleset RON: {}", e))?;
        ruleset.validate()?;
        Ok(ruleset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{ActionKind, Power};

    const MINIMAL: &str = r#"
(
    races: {
        "orc": (name: "Orc"),
    },
    classes: {
        "warrior": (name: "Warrior", melee: true, abilities: ["heavy_strike"]),
    },
    abilities: {
        "heavy_strike": (
            name: "heavy strike",
            trigger: Rage,
            actions: [
                (name: "heavy strike", kind: Damage(target: Enemy, power: Scaled(2.5))),
            ],
        ),
    },
)
"#;

    #[test]
    fn parses_minimal_ruleset() {
        let ruleset = RulesetLoader::parse(MINIMAL).unwrap();
        assert!(ruleset.races["orc"].abilities.is_empty());
        let strike = &ruleset.abilities["heavy_strike"];
        assert!(!strike.disposable);
        assert_eq!(
            strike.actions[0].kind,
            ActionKind::Damage {
                target: battle_core::TargetRule::Enemy,
                power: Power::Scaled(2.5),
            }
        );
    }

    #[test]
    fn dangling_ability_reference_is_rejected() {
        let broken = MINIMAL.replace("[\"heavy_strike\"]", "[\"cleave\"]");
        let err = RulesetLoader::parse(&broken).unwrap_err();
        assert!(err.to_string().contains("cleave"));
    }

    #[test]
    fn malformed_ron_reports_parse_failure() {
        let err = RulesetLoader::parse("(races: {").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse ruleset RON"));
    }
}
