//! Filter policy configuration.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Specifies which transitions to keep in the filtered graph.
///
/// Every toggle defaults to `false`, i.e. the matching transitions are
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectConfig {
    pub keep_world: bool,
    pub keep_relative: bool,
    pub keep_shops: bool,
    pub keep_derelict: bool,
    pub keep_previous: bool,
    pub keep_auto_intra: bool,
    pub keep_hardcoded_intra: bool,
    pub keep_post_sewers: bool,
}

impl CollectConfig {
    /// A configuration that keeps everything.
    pub fn keep_all() -> Self {
        Self {
            keep_world: true,
            keep_relative: true,
            keep_shops: true,
            keep_derelict: true,
            keep_previous: true,
            keep_auto_intra: true,
            keep_hardcoded_intra: true,
            keep_post_sewers: true,
        }
    }

    /// Parse a configuration from TOML. Missing keys default to `false`.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_drops_everything() {
        let cfg = CollectConfig::default();
        assert!(!cfg.keep_world);
        assert!(!cfg.keep_post_sewers);
        assert_ne!(cfg, CollectConfig::keep_all());
    }

    #[test]
    fn test_from_toml_partial() {
        let cfg = CollectConfig::from_toml_str("keep_shops = true\nkeep_post_sewers = true\n").unwrap();

        assert!(cfg.keep_shops);
        assert!(cfg.keep_post_sewers);
        assert!(!cfg.keep_world);
        assert!(!cfg.keep_relative);
    }

    #[test]
    fn test_from_toml_empty() {
        let cfg = CollectConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, CollectConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_bad_type() {
        assert!(CollectConfig::from_toml_str("keep_world = \"yes\"").is_err());
    }
}
