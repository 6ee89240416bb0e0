//! Title to slug conversion

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref ASCII_SPACE: Regex = Regex::new(r"[ \t\n\x0B\x0C\r]+").unwrap();
    static ref ASCII_INVALID: Regex = Regex::new(r"[^A-Za-z0-9_-]").unwrap();
    static ref UNICODE_SPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref UNICODE_INVALID: Regex = Regex::new(r"[^\w-]").unwrap();
    static ref HYPHEN_RUN: Regex = Regex::new(r"-{2,}").unwrap();
}

/// Which characters count as word characters when building a slug
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlugCharset {
    /// `[A-Za-z0-9_]` only, everything else is dropped
    #[default]
    Ascii,
    /// Unicode letters, marks and digits are kept
    Unicode,
}

/// Slugify a title with the default ASCII charset
///
/// # Examples
/// ```ignore
/// slugify("My First Post") // -> "my-first-post"
/// ```
pub fn slugify(title: &str) -> String {
    slugify_with(title, SlugCharset::Ascii)
}

/// Slugify a title
///
/// Edge hyphens are kept: `" hi "` becomes `"-hi-"`. Only runs of hyphens
/// are collapsed.
pub fn slugify_with(title: &str, charset: SlugCharset) -> String {
    let (space, invalid) = match charset {
        SlugCharset::Ascii => (&*ASCII_SPACE, &*ASCII_INVALID),
        SlugCharset::Unicode => (&*UNICODE_SPACE, &*UNICODE_INVALID),
    };

    let lowered = title.to_lowercase();
    let hyphenated = space.replace_all(&lowered, "-");
    let stripped = invalid.replace_all(&hyphenated, "");
    HYPHEN_RUN.replace_all(&stripped, "-").into_owned()
}
