use crate::error::{Result, StoreError};
use once_cell::sync::Lazy;
use regex::Regex;

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("slug pattern compiles"));

#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

/// Rejects anything that is not lowercase kebab-case.
///
/// Must run on the raw caller input, before the slug is used to build a path.
pub fn validate_slug(slug: &str) -> Result<()> {
    if is_valid_slug(slug) {
        return Ok(());
    }
    log::warn!("rejected invalid project slug {slug:?}");
    Err(StoreError::InvalidSlug(slug.to_string()))
}
