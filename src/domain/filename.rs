use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("static regex is valid"));

/// Reduces a client-supplied filename to a flat ASCII name that is safe to use as a
/// storage key. The result can be empty when nothing usable survives.
pub fn sanitize_filename(raw: &str) -> String {
    let ascii: String = raw.nfkd().filter(char::is_ascii).collect();
    let flattened = ascii.replace(['/', '\\'], " ");
    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");

    DISALLOWED
        .replace_all(&joined, "")
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}
