//! Post scaffolds
//!
//! The article and TIL scaffolds are embedded in the binary. A site can
//! replace either one with `scaffolds/<kind>.md` in its base directory.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::{KindProfile, PostKind};
use crate::error::{PostError, Result};

const ARTICLE_SCAFFOLD: &str = include_str!("scaffolds/article.md");
const TIL_SCAFFOLD: &str = include_str!("scaffolds/til.md");

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{ (\w+) \}\}").unwrap();
}

/// Substituted for `{{ sources }}` when the profile asks for it
const SOURCES_SECTION: &str = "### sources\n\n* \n\n";

/// Scaffold renderer holding one template per post kind
#[derive(Debug, Clone)]
pub struct ScaffoldRenderer {
    scaffolds: HashMap<PostKind, String>,
}

impl Default for ScaffoldRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScaffoldRenderer {
    /// Create a renderer with the built-in scaffolds
    pub fn new() -> Self {
        let mut scaffolds = HashMap::new();
        scaffolds.insert(PostKind::Article, ARTICLE_SCAFFOLD.to_string());
        scaffolds.insert(PostKind::Til, TIL_SCAFFOLD.to_string());
        Self { scaffolds }
    }

    /// Create a renderer, preferring `<base_dir>/scaffolds/<kind>.md` when present
    pub fn load<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let mut renderer = Self::new();
        let scaffold_dir = base_dir.as_ref().join("scaffolds");

        for kind in [PostKind::Article, PostKind::Til] {
            let path = scaffold_dir.join(format!("{}.md", kind));
            if path.is_file() {
                let content = fs::read_to_string(&path).map_err(|e| PostError::io(&path, e))?;
                tracing::debug!("Using scaffold {:?} for {}", path, kind);
                renderer.scaffolds.insert(kind, content);
            }
        }

        Ok(renderer)
    }

    /// Render the scaffold for `kind`
    ///
    /// Placeholders are expanded in one pass, so substituted values are never
    /// expanded again. Unknown placeholders are left as written.
    pub fn render(&self, kind: PostKind, profile: &KindProfile, title: &str) -> String {
        let scaffold = &self.scaffolds[&kind];
        let sources = if profile.sources { SOURCES_SECTION } else { "" };

        PLACEHOLDER
            .replace_all(scaffold, |caps: &Captures| match &caps[1] {
                "layout" => profile.layout.clone(),
                "category" => profile.category.clone(),
                "disq_id" => profile.disq_id.clone(),
                "lang" => profile.lang.clone(),
                "sources" => sources.to_string(),
                "title" => title.to_string(),
                _ => caps[0].to_string(),
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_article() {
        let renderer = ScaffoldRenderer::new();
        let profile = PostKind::Article.default_profile();
        let out = renderer.render(PostKind::Article, &profile, "My First Post");
        assert_eq!(
            out,
            "---\nlayout: article_post\ncategories: article\ntitle:  \"My First Post\"\n\
             disq_id: 99\ndescription:\n  \n---\n\n```elixir\n\n```\n\n### sources\n\n* \n\n"
        );
    }

    #[test]
    fn test_render_til() {
        let renderer = ScaffoldRenderer::new();
        let profile = PostKind::Til.default_profile();
        let out = renderer.render(PostKind::Til, &profile, "Pattern matching");
        assert_eq!(
            out,
            "---\nlayout: til_post\ntitle:  \"Pattern matching\"\ncategories: til\n\
             disq_id: til-99\n---\n\n```ruby\n\n```\n\n"
        );
    }

    #[test]
    fn test_render_sources_toggle() {
        let renderer = ScaffoldRenderer::new();
        let mut profile = PostKind::Til.default_profile();
        profile.sources = true;
        let out = renderer.render(PostKind::Til, &profile, "x");
        assert!(out.ends_with("```\n\n### sources\n\n* \n\n"));
    }

    #[test]
    fn test_title_is_not_expanded() {
        let renderer = ScaffoldRenderer::new();
        let profile = PostKind::Til.default_profile();
        let out = renderer.render(PostKind::Til, &profile, "about {{ layout }}");
        assert!(out.contains("title:  \"about {{ layout }}\""));
    }

    #[test]
    fn test_profile_values_are_not_expanded() {
        let renderer = ScaffoldRenderer::new();
        let mut profile = PostKind::Til.default_profile();
        profile.lang = "{{ title }}".to_string();
        profile.layout = "{{ category }}".to_string();
        let out = renderer.render(PostKind::Til, &profile, "Hello");
        assert!(out.contains("```{{ title }}\n"));
        assert!(out.contains("layout: {{ category }}\n"));
        assert!(out.contains("title:  \"Hello\"\n"));
    }

    #[test]
    fn test_unknown_placeholder_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("scaffolds")).unwrap();
        fs::write(
            dir.path().join("scaffolds/til.md"),
            "{{ author }}: {{ title }}\n",
        )
        .unwrap();

        let renderer = ScaffoldRenderer::load(dir.path()).unwrap();
        let out = renderer.render(PostKind::Til, &PostKind::Til.default_profile(), "x");
        assert_eq!(out, "{{ author }}: x\n");
    }

    #[test]
    fn test_load_override() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("scaffolds")).unwrap();
        fs::write(
            dir.path().join("scaffolds/til.md"),
            "# {{ title }} ({{ category }})\n",
        )
        .unwrap();

        let renderer = ScaffoldRenderer::load(dir.path()).unwrap();
        let til = renderer.render(PostKind::Til, &PostKind::Til.default_profile(), "Hi");
        assert_eq!(til, "# Hi (til)\n");

        let article = renderer.render(
            PostKind::Article,
            &PostKind::Article.default_profile(),
            "Hi",
        );
        assert!(article.starts_with("---\nlayout: article_post\n"));
    }
}
