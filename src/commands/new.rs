//! Create a new article or TIL post

use chrono::{DateTime, TimeZone};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::commands::prompt::TitleSource;
use crate::config::SiteConfig;
use crate::content::{slugify_with, PostKind};
use crate::error::{PostError, Result};
use crate::templates::ScaffoldRenderer;
use crate::Blog;

/// Editor suggested after a post is created
pub const EDITOR: &str = "vim";

/// A rendered post that has not been written yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    /// Raw title as entered
    pub title: String,
    /// Slug derived from the title
    pub slug: String,
    /// `{YYYY-MM-DD}-{slug}.md`
    pub filename: String,
    /// File body
    pub content: String,
}

impl NewPost {
    /// Write the post into `dir`, replacing any file with the same name
    pub fn write<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.filename);
        fs::write(&path, &self.content).map_err(|e| PostError::io(&path, e))?;
        tracing::info!("Created {:?} for {:?}", path, self.title);
        Ok(path)
    }
}

/// Builds posts from a title, a timestamp and a kind
#[derive(Debug, Clone, Default)]
pub struct PostScaffolder {
    config: SiteConfig,
    renderer: ScaffoldRenderer,
}

impl PostScaffolder {
    pub fn new(config: SiteConfig, renderer: ScaffoldRenderer) -> Self {
        Self { config, renderer }
    }

    /// Render a post. Pure: nothing touches the filesystem.
    pub fn scaffold<Tz: TimeZone>(
        &self,
        title: &str,
        now: &DateTime<Tz>,
        kind: PostKind,
    ) -> NewPost {
        let slug = slugify_with(title, self.config.slug_charset);
        tracing::debug!("Slug for {:?}: {:?}", title, slug);

        let date = now.date_naive().format("%Y-%m-%d");
        let filename = format!("{}-{}.md", date, slug);

        let profile = self.config.profile(kind);
        let content = self.renderer.render(kind, &profile, title);

        NewPost {
            title: title.to_string(),
            slug,
            filename,
            content,
        }
    }
}

/// Render a post with the built-in profiles and scaffolds
pub fn scaffold<Tz: TimeZone>(title: &str, now: &DateTime<Tz>, kind: PostKind) -> NewPost {
    PostScaffolder::default().scaffold(title, now, kind)
}

/// Read a title, write the post into the blog directory and print the editor
/// hint to `out`
pub fn create_post<S, W, Tz>(
    blog: &Blog,
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
    let title = source.read_title()?;
    let post = blog.scaffolder()?.scaffold(&title, now, kind);
    let path = post.write(&blog.base_dir)?;

    writeln!(out, "{} {}", EDITOR, path.display()).map_err(PostError::Output)?;
    out.flush().map_err(PostError::Output)?;

    Ok(path)
}
