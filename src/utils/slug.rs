use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SEPARATORS: Regex = Regex::new(r"[^a-z0-9]+").expect("slug pattern");
}

/// Lowercase the input and collapse every non-alphanumeric run into a single
/// dash, producing a routable path segment.
pub fn slugify(input: &str) -> String {
    SEPARATORS
        .replace_all(&input.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

/// Strip trailing slashes so `/a` and `/a/` resolve to the same page. The
/// bare root keeps its slash.
pub fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}
