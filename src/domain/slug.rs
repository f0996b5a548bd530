// src/domain/slug.rs
use crate::domain::DomainError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_SLUG_CHARS: Regex =
        Regex::new(r"[^\w\s-]").expect("Failed to compile non-slug character regex");
    static ref SEPARATOR_RUNS: Regex =
        Regex::new(r"[-\s]+").expect("Failed to compile separator run regex");
}

/// Convert arbitrary text into a URL- and filesystem-safe slug.
///
/// Steps, in order:
/// 1. lower-case
/// 2. trim surrounding whitespace
/// 3. drop every character that is not a word character, whitespace or `-`
/// 4. collapse each run of hyphens and/or whitespace into one `-`
///
/// An empty result is possible and must be treated as invalid by callers.
///
/// # Examples
///
/// ```
/// use notewall::domain::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  multiple   spaces--here "), "multiple-spaces-here");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(lowered.trim(), "");
    SEPARATOR_RUNS.replace_all(&stripped, "-").into_owned()
}

/// Human-readable title for a slug: `-` and `_` become spaces, then each word is
/// title-cased.
///
/// A letter is upper-cased when it does not follow another letter and
/// lower-cased otherwise, so `note2go` becomes `Note2Go`. The mapping is lossy and
/// never used to recover the original title.
pub fn display_title(slug: &str) -> String {
    let spaced = slug.replace(['-', '_'], " ");
    let mut title = String::with_capacity(spaced.len());
    let mut after_letter = false;
    for c in spaced.chars() {
        if c.is_alphabetic() {
            if after_letter {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            title.push(c);
            after_letter = false;
        }
    }
    title
}

/// Check a slug addressed directly by the user (not produced by [`slugify`]).
///
/// It must be non-empty and must not contain a path separator, the same rule
/// a single URL path segment obeys.
pub fn ensure_addressable(slug: &str) -> Result<&str, DomainError> {
    if slug.is_empty() || slug.contains(['/', '\\']) {
        return Err(DomainError::InvalidSlug(slug.to_string()));
    }
    Ok(slug)
}
