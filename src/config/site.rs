//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::{KindProfile, PostKind, SlugCharset};
use crate::error::{PostError, Result};

/// Main site configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Character set kept in slugs
    pub slug_charset: SlugCharset,

    /// Per-kind overrides of the built-in front-matter profiles
    pub kinds: HashMap<PostKind, ProfileOverride>,
}

/// Partial profile; unset fields keep the built-in value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileOverride {
    pub layout: Option<String>,
    pub category: Option<String>,
    pub disq_id: Option<String>,
    pub lang: Option<String>,
    pub sources: Option<bool>,
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| PostError::io(path, e))?;
        Self::parse(&content).map_err(|source| PostError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from YAML text. An empty document yields defaults.
    pub fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Resolve the profile for a kind, applying any override
    pub fn profile(&self, kind: PostKind) -> KindProfile {
        let mut profile = kind.default_profile();
        if let Some(over) = self.kinds.get(&kind) {
            if let Some(layout) = &over.layout {
                profile.layout = layout.clone();
            }
            if let Some(category) = &over.category {
                profile.category = category.clone();
            }
            if let Some(disq_id) = &over.disq_id {
                profile.disq_id = disq_id.clone();
            }
            if let Some(lang) = &over.lang {
                profile.lang = lang.clone();
            }
            if let Some(sources) = over.sources {
                profile.sources = sources;
            }
        }
        profile
    }
}
