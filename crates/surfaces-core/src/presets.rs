//! Named variants ("hero", "section", ...) mapped to configuration overrides.
//!
//! The built-in table ships as JSON next to the crate so the values can be
//! tuned, or swapped out entirely, without touching the update logic.

use crate::config::{ConfigOverrides, SurfaceConfig};
use crate::error::ConfigError;
use fnv::FnvHashMap;
use serde::Deserialize;

pub static PRESETS_JSON: &str = include_str!("../data/presets.json");

#[derive(Debug, Deserialize)]
struct PresetFile {
    fallback: String,
    #[serde(default)]
    aliases: FnvHashMap<String, String>,
    variants: FnvHashMap<String, ConfigOverrides>,
}

#[derive(Clone, Debug)]
pub struct PresetTable {
    fallback: String,
    aliases: FnvHashMap<String, String>,
    variants: FnvHashMap<String, ConfigOverrides>,
}

/// Outcome of a lookup: the variant that was actually used and the merged config.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved {
    pub variant: String,
    pub fell_back: bool,
    pub config: SurfaceConfig,
}

impl PresetTable {
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(PRESETS_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let file: PresetFile = serde_json::from_str(json)?;
        if !file.variants.contains_key(&file.fallback) {
            return Err(ConfigError::UnknownFallback(file.fallback));
        }
        for (alias, target) in &file.aliases {
            if !file.variants.contains_key(target) {
                return Err(ConfigError::DanglingAlias {
                    alias: alias.clone(),
                    target: target.clone(),
                });
            }
        }
        Ok(Self {
            fallback: file.fallback,
            aliases: file.aliases,
            variants: file.variants,
        })
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Variant names in alphabetical order (aliases excluded).
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.variants.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn get(&self, name: &str) -> Option<&ConfigOverrides> {
        let canonical = self.aliases.get(name).map(String::as_str).unwrap_or(name);
        self.variants.get(canonical)
    }

    /// Merge defaults, the named preset and `overrides`, in that order.
    ///
    /// Unknown names resolve to the table's fallback variant.
    pub fn resolve(&self, name: &str, overrides: &ConfigOverrides) -> Result<Resolved, ConfigError> {
        let canonical = self.aliases.get(name).map(String::as_str).unwrap_or(name);
        let (variant, preset, fell_back) = match self.variants.get(canonical) {
            Some(p) => (canonical, p, false),
            None => {
                log::warn!(
                    "[presets] unknown variant '{}', falling back to '{}'",
                    name,
                    self.fallback
                );
                let p = self
                    .variants
                    .get(&self.fallback)
                    .ok_or_else(|| ConfigError::UnknownFallback(self.fallback.clone()))?;
                (self.fallback.as_str(), p, true)
            }
        };
        let config = SurfaceConfig::default().merged(preset).merged(overrides);
        config.validate()?;
        Ok(Resolved {
            variant: variant.to_string(),
            fell_back,
            config,
        })
    }
}
