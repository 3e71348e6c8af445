//! BCP 47 language tag helpers

/// Returns true if the tag names Latin script explicitly, e.g. `zh-Latn` or `ja-Latn-JP`
#[must_use]
pub fn is_explicit_latin_script(language_code: &str) -> bool {
    language_code
        .split(['-', '_'])
        .nth(1)
        .is_some_and(|script| script.eq_ignore_ascii_case("latn"))
}

/// Primary language subtag, lower-cased (`zh` for `zh-Hant-TW`)
#[must_use]
pub fn language_subtag(language_code: &str) -> String {
    language_code
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Trim a value and map empty results to `None`
#[must_use]
pub fn trim_to_none(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
