//! postkit: scaffold new article and TIL posts for a Jekyll-style blog
//!
//! A post is created from a title and a timestamp: the title is slugified,
//! a front-matter scaffold is rendered for the chosen kind, and the result is
//! written to `{YYYY-MM-DD}-{slug}.md`.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod templates;

use chrono::{DateTime, TimeZone};
use std::io::Write;
use std::path::{Path, PathBuf};

use commands::new::PostScaffolder;
use commands::prompt::TitleSource;
use content::PostKind;
use error::Result;
use templates::ScaffoldRenderer;

/// The blog being written to
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Directory new posts are written to
    pub base_dir: PathBuf,
}

impl Blog {
    /// Open a blog directory, reading `_config.yml` when it exists
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// Scaffolder using this blog's config and scaffold overrides
    pub fn scaffolder(&self) -> Result<PostScaffolder> {
        let renderer = ScaffoldRenderer::load(&self.base_dir)?;
        Ok(PostScaffolder::new(self.config.clone(), renderer))
    }

    /// Create a new post, printing the editor hint to `out`
    pub fn new_post<S, W, Tz>(
        &self,
        kind: PostKind,
        source: &mut S,
        out: &mut W,
        now: &DateTime<Tz>,
    ) -> Result<PathBuf>
    where
        S: TitleSource + ?Sized,
        W: Write + ?Sized,
        Tz: TimeZone,
    {
        commands::new::create_post(self, kind, source, out, now)
    }
}
