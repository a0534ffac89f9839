//! Battle configuration loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
///
/// Missing keys fall back to [`BattleConfig::default`].
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.max_rounds == 0 || config.max_strokes_per_round == 0 {
            anyhow::bail!("round and stroke limits must be positive");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::Side;

    #[test]
    fn missing_keys_use_defaults() {
        let config = ConfigLoader::parse("max_rounds = 30\n").unwrap();
        assert_eq!(config.max_rounds, 30);
        assert_eq!(
            config.max_strokes_per_round,
            BattleConfig::DEFAULT_MAX_STROKES_PER_ROUND
        );
        assert_eq!(config.first_side, None);
        assert_eq!(config.resources, BattleConfig::default().resources);
    }

    #[test]
    fn reads_side_and_resource_table() {
        let config = ConfigLoader::parse(
            r#"
first_side = "right"

[resources]
round_rage = 50
"#,
        )
        .unwrap();
        assert_eq!(config.first_side, Some(Side::Right));
        assert_eq!(config.resources.round_rage, 50);
        assert_eq!(config.resources.actor_concentration, 200);
    }

    #[test]
    fn zero_limits_are_rejected() {
        assert!(ConfigLoader::parse("max_rounds = 0\n").is_err());
    }
}
