//! Mapping from backend-native labels to [`Sentiment`].

use vsa_core::enums::Sentiment;

/// Every label vocabulary the supported models emit.
const LABELS: &[(&str, Sentiment)] = &[
    ("POSITIVE", Sentiment::Positive),
    ("NEGATIVE", Sentiment::Negative),
    ("NEUTRAL", Sentiment::Neutral),
    ("POS", Sentiment::Positive),
    ("NEG", Sentiment::Negative),
    ("NEU", Sentiment::Neutral),
    ("LABEL_2", Sentiment::Positive),
    ("LABEL_0", Sentiment::Negative),
    ("LABEL_1", Sentiment::Neutral),
    ("1 star", Sentiment::Negative),
    ("2 stars", Sentiment::Negative),
    ("3 stars", Sentiment::Neutral),
    ("4 stars", Sentiment::Positive),
    ("5 stars", Sentiment::Positive),
];

/// Map a raw label, ignoring case and surrounding whitespace.
/// Unknown labels are NEUTRAL.
#[must_use]
pub fn map_label(raw: &str) -> Sentiment {
    let raw = raw.trim();
    LABELS
        .iter()
        .find(|(label, _)| label.eq_ignore_ascii_case(raw))
        .map_or(Sentiment::Neutral, |(_, sentiment)| *sentiment)
}
