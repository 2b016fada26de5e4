//! Input validation and text normalization before inference.

use std::sync::LazyLock;

use regex::Regex;

/// Shortest accepted sentence, in characters after trimming.
pub const MIN_CHARS: usize = 5;

/// Common-word canonicalization table. Every entry currently maps a word to
/// itself; the pass is kept so new spellings can be folded in here.
pub const REPLACEMENTS: [(&str, &str); 10] = [
    ("rất", "rất"),
    ("dở", "dở"),
    ("tệ", "tệ"),
    ("tuyệt", "tuyệt"),
    ("hay", "hay"),
    ("buồn", "buồn"),
    ("vui", "vui"),
    ("mệt", "mệt"),
    ("ổn", "ổn"),
    ("tốt", "tốt"),
];

/// Anything that is not a word character, whitespace, or `. , ! ?`.
static STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s.,!?]").expect("hardcoded regex is valid"));

/// Whether `text` is long enough to classify.
#[must_use]
pub fn is_valid(text: &str) -> bool {
    text.trim().chars().count() >= MIN_CHARS
}

/// Trim, apply [`REPLACEMENTS`], and strip symbols.
///
/// Vietnamese letters with diacritics are Unicode word characters and survive.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = text.trim().to_string();
    for (from, to) in REPLACEMENTS {
        if from != to {
            out = out.replace(from, to);
        }
    }
    STRIP.replace_all(&out, "").into_owned()
}
