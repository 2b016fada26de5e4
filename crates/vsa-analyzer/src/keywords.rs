//! Keyword heuristic over fixed Vietnamese gazetteers.
//!
//! Each gazetteer entry that occurs as a substring of the lowercased text
//! counts once. Entries are counted as listed, so a word that appears twice
//! in a list contributes two matches.

use vsa_core::enums::Sentiment;

const POSITIVE: &[&str] = &[
    "vui", "tuyệt", "hay", "đẹp", "hạnh phúc", "thích", "yêu", "xuất sắc", "hoàn hảo",
    "tuyệt vời", "tốt lắm", "rất tốt", "ngon", "cảm ơn", "cám ơn", "hài lòng", "thành công",
    "tích cực", "tuyệt", "tuyệt vời", "tốt", "hay lắm", "yêu thích", "thích thú", "vui vẻ",
];

const NEGATIVE: &[&str] = &[
    "buồn", "tệ", "dở", "kém", "xấu", "ghét", "thất bại", "thất vọng", "chán", "mệt", "tồi",
    "tệ hại", "không tốt", "không hay", "tệ quá", "dở quá", "không thích", "thảm họa",
    "tiêu cực", "tệ", "kém", "dở", "tồi tệ", "tệ hại", "không tốt", "xấu", "chán",
];

const NEUTRAL: &[&str] = &["ổn định", "bình thường", "thường", "trung bình"];

/// Confidence of a neutral-only match.
const NEUTRAL_CONFIDENCE: f32 = 0.70;
const BASE_CONFIDENCE: f32 = 0.75;
const STEP_CONFIDENCE: f32 = 0.1;
const MAX_CONFIDENCE: f32 = 0.95;

/// Immutable keyword lists, injected into the analyzer.
#[derive(Debug, Clone, Copy)]
pub struct Gazetteer {
    positive: &'static [&'static str],
    negative: &'static [&'static str],
    neutral: &'static [&'static str],
}

impl Gazetteer {
    #[must_use]
    pub const fn new(
        positive: &'static [&'static str],
        negative: &'static [&'static str],
        neutral: &'static [&'static str],
    ) -> Self {
        Self {
            positive,
            negative,
            neutral,
        }
    }

    /// The bundled Vietnamese lists.
    #[must_use]
    pub const fn vietnamese() -> Self {
        Self::new(POSITIVE, NEGATIVE, NEUTRAL)
    }

    /// Count matches in `text`, which is lowercased first.
    #[must_use]
    pub fn count(&self, text: &str) -> KeywordCounts {
        let lower = text.to_lowercase();
        let hits = |list: &[&str]| list.iter().filter(|w| lower.contains(**w)).count();
        KeywordCounts {
            positive: hits(self.positive),
            negative: hits(self.negative),
            neutral: hits(self.neutral),
        }
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::vietnamese()
    }
}

/// Per-polarity match counts for one sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeywordCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

/// A keyword-derived label with its confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub sentiment: Sentiment,
    pub confidence: f32,
}

impl KeywordCounts {
    /// The keyword candidate, if the counts point one way.
    #[must_use]
    pub fn candidate(&self) -> Option<Candidate> {
        if self.neutral > 0 && self.positive == 0 && self.negative == 0 {
            return Some(Candidate {
                sentiment: Sentiment::Neutral,
                confidence: NEUTRAL_CONFIDENCE,
            });
        }
        if self.positive > self.negative {
            return Some(Candidate {
                sentiment: Sentiment::Positive,
                confidence: scaled_confidence(self.positive),
            });
        }
        if self.negative > self.positive {
            return Some(Candidate {
                sentiment: Sentiment::Negative,
                confidence: scaled_confidence(self.negative),
            });
        }
        None
    }
}

#[allow(clippy::cast_precision_loss)]
fn scaled_confidence(matches: usize) -> f32 {
    STEP_CONFIDENCE
        .mul_add(matches as f32, BASE_CONFIDENCE)
        .min(MAX_CONFIDENCE)
}
