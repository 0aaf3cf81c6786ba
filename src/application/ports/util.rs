// src/application/ports/util.rs

/// Turns free text into the base of a slug: lowercase ASCII words joined by
/// single hyphens, no leading or trailing hyphen. May return an empty string.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
