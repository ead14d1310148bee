// Copyright (c) 2024 Botho Foundation

//! Mint filter configuration.
//!
//! ```toml
//! native_denom = "ubth"
//! denom_policy = "any_denom"   # or "native_only"
//! ```

use crate::coin::{validate_denom, DenomClass};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Denomination of the protocol-controlled supply.
pub const DEFAULT_NATIVE_DENOM: &str = "ubth";

/// Which denominations an admin mint or payout is gated for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenomPolicy {
    /// Gate admin messages whatever denomination they carry.
    #[default]
    AnyDenom,
    /// Gate admin messages only when they carry the native denomination.
    NativeOnly,
}

impl DenomPolicy {
    /// Whether a coin of `class` falls under the filter.
    pub fn covers(&self, class: DenomClass) -> bool {
        match self {
            DenomPolicy::AnyDenom => true,
            DenomPolicy::NativeOnly => class == DenomClass::Native,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintFilterConfig {
    #[serde(default = "default_native_denom")]
    pub native_denom: String,

    #[serde(default)]
    pub denom_policy: DenomPolicy,
}

fn default_native_denom() -> String {
    DEFAULT_NATIVE_DENOM.to_string()
}

impl Default for MintFilterConfig {
    fn default() -> Self {
        Self {
            native_denom: default_native_denom(),
            denom_policy: DenomPolicy::default(),
        }
    }
}

impl MintFilterConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).context("Failed to parse mint filter config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate_denom(&self.native_denom).context("native_denom")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MintFilterConfig::default();
        assert_eq!(config.native_denom, DEFAULT_NATIVE_DENOM);
        assert_eq!(config.denom_policy, DenomPolicy::AnyDenom);
        assert_eq!(MintFilterConfig::from_toml_str("").unwrap(), config);
    }

    #[test]
    fn test_parse_native_only() {
        let config = MintFilterConfig::from_toml_str(
            r#"
            native_denom = "umfx"
            denom_policy = "native_only"
            "#,
        )
        .unwrap();
        assert_eq!(config.native_denom, "umfx");
        assert_eq!(config.denom_policy, DenomPolicy::NativeOnly);
    }

    #[test]
    fn test_rejects_invalid_native_denom() {
        assert!(MintFilterConfig::from_toml_str("native_denom = \"x\"").is_err());
        assert!(MintFilterConfig::from_toml_str("denom_policy = \"sometimes\"").is_err());
    }

    #[test]
    fn test_policy_coverage() {
        assert!(DenomPolicy::AnyDenom.covers(DenomClass::Native));
        assert!(DenomPolicy::AnyDenom.covers(DenomClass::Independent));
        assert!(DenomPolicy::NativeOnly.covers(DenomClass::Native));
        assert!(!DenomPolicy::NativeOnly.covers(DenomClass::Independent));
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filter").join("mint_filter.toml");
        let config = MintFilterConfig {
            native_denom: "ubth".to_string(),
            denom_policy: DenomPolicy::NativeOnly,
        };
        config.save(&path).unwrap();
        assert_eq!(MintFilterConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = MintFilterConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
