//! Post kinds and their front-matter profiles

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of post to scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    /// Long-form article
    Article,
    /// "Today I learned" note
    Til,
}

impl PostKind {
    /// Name used for scaffold files and config keys
    pub fn as_str(&self) -> &'static str {
        match self {
            PostKind::Article => "article",
            PostKind::Til => "til",
        }
    }

    /// Built-in profile for this kind
    pub fn default_profile(&self) -> KindProfile {
        match self {
            PostKind::Article => KindProfile {
                layout: "article_post".to_string(),
                category: "article".to_string(),
                disq_id: "99".to_string(),
                lang: "elixir".to_string(),
                sources: true,
            },
            PostKind::Til => KindProfile {
                layout: "til_post".to_string(),
                category: "til".to_string(),
                disq_id: "til-99".to_string(),
                lang: "ruby".to_string(),
                sources: false,
            },
        }
    }
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values substituted into a scaffold for one kind of post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindProfile {
    /// Jekyll layout name
    pub layout: String,
    /// Value of the `categories` field
    pub category: String,
    /// Disqus thread id
    pub disq_id: String,
    /// Language tag of the placeholder code fence
    pub lang: String,
    /// Append a `### sources` section
    pub sources: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profiles() {
        let article = PostKind::Article.default_profile();
        assert_eq!(article.layout, "article_post");
        assert_eq!(article.disq_id, "99");
        assert!(article.sources);

        let til = PostKind::Til.default_profile();
        assert_eq!(til.category, "til");
        assert_eq!(til.lang, "ruby");
        assert!(!til.sources);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(PostKind::Article.to_string(), "article");
        let kind: PostKind = serde_yaml::from_str("til").unwrap();
        assert_eq!(kind, PostKind::Til);
    }
}
