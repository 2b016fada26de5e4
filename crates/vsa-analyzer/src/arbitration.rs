//! Combines the model prediction with the keyword candidate.
//!
//! Rules are checked in order; the first that applies decides:
//!
//! 1. a candidate exists and the model is below 0.7 → the candidate, with its
//!    own confidence;
//! 2. the candidate is NEGATIVE with at least one negative match and the
//!    model is below 0.85 → NEGATIVE at the higher of the two confidences;
//! 3. the candidate is POSITIVE with at least two positive matches →
//!    POSITIVE at the higher of the two confidences;
//! 4. no candidate and the model is below 0.5 → NEUTRAL, model confidence;
//! 5. otherwise the model's label and confidence.

use vsa_core::enums::Sentiment;

use crate::keywords::KeywordCounts;

const UNCERTAIN_MODEL: f32 = 0.7;
const NEGATIVE_OVERRIDE: f32 = 0.85;
const MIN_POSITIVE_MATCHES: usize = 2;
const LOW_CONFIDENCE: f32 = 0.5;

/// Which rule produced a [`Verdict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    KeywordOverUncertainModel,
    NegativeKeywords,
    PositiveKeywords,
    LowConfidenceNeutral,
    Model,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub sentiment: Sentiment,
    pub confidence: f32,
    pub rule: Rule,
}

#[must_use]
pub fn arbitrate(counts: &KeywordCounts, model: Sentiment, model_confidence: f32) -> Verdict {
    let verdict = |sentiment, confidence, rule| Verdict {
        sentiment,
        confidence,
        rule,
    };

    let Some(candidate) = counts.candidate() else {
        if model_confidence < LOW_CONFIDENCE {
            return verdict(Sentiment::Neutral, model_confidence, Rule::LowConfidenceNeutral);
        }
        return verdict(model, model_confidence, Rule::Model);
    };

    if model_confidence < UNCERTAIN_MODEL {
        return verdict(
            candidate.sentiment,
            candidate.confidence,
            Rule::KeywordOverUncertainModel,
        );
    }
    if candidate.sentiment == Sentiment::Negative
        && counts.negative >= 1
        && model_confidence < NEGATIVE_OVERRIDE
    {
        return verdict(
            Sentiment::Negative,
            model_confidence.max(candidate.confidence),
            Rule::NegativeKeywords,
        );
    }
    if candidate.sentiment == Sentiment::Positive && counts.positive >= MIN_POSITIVE_MATCHES {
        return verdict(
            Sentiment::Positive,
            model_confidence.max(candidate.confidence),
            Rule::PositiveKeywords,
        );
    }
    verdict(model, model_confidence, Rule::Model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn counts(positive: usize, negative: usize, neutral: usize) -> KeywordCounts {
        KeywordCounts {
            positive,
            negative,
            neutral,
        }
    }

    #[rstest]
    // rule 1
    #[case(counts(1, 0, 0), Sentiment::Negative, 0.6, Sentiment::Positive, 0.85, Rule::KeywordOverUncertainModel)]
    #[case(counts(0, 0, 2), Sentiment::Positive, 0.69, Sentiment::Neutral, 0.70, Rule::KeywordOverUncertainModel)]
    #[case(counts(0, 1, 0), Sentiment::Positive, 0.2, Sentiment::Negative, 0.85, Rule::KeywordOverUncertainModel)]
    // rule 2
    #[case(counts(0, 1, 0), Sentiment::Positive, 0.8, Sentiment::Negative, 0.85, Rule::NegativeKeywords)]
    #[case(counts(0, 3, 0), Sentiment::Neutral, 0.84, Sentiment::Negative, 0.95, Rule::NegativeKeywords)]
    #[case(counts(1, 2, 0), Sentiment::Positive, 0.72, Sentiment::Negative, 0.95, Rule::NegativeKeywords)]
    // rule 3
    #[case(counts(2, 0, 0), Sentiment::Negative, 0.9, Sentiment::Positive, 0.95, Rule::PositiveKeywords)]
    #[case(counts(3, 1, 0), Sentiment::Positive, 0.99, Sentiment::Positive, 0.99, Rule::PositiveKeywords)]
    // rule 4
    #[case(counts(0, 0, 0), Sentiment::Positive, 0.4, Sentiment::Neutral, 0.4, Rule::LowConfidenceNeutral)]
    #[case(counts(1, 1, 0), Sentiment::Negative, 0.49, Sentiment::Neutral, 0.49, Rule::LowConfidenceNeutral)]
    // rule 5
    #[case(counts(0, 0, 0), Sentiment::Negative, 0.9, Sentiment::Negative, 0.9, Rule::Model)]
    #[case(counts(0, 0, 0), Sentiment::Positive, 0.5, Sentiment::Positive, 0.5, Rule::Model)]
    #[case(counts(1, 0, 0), Sentiment::Negative, 0.9, Sentiment::Negative, 0.9, Rule::Model)]
    #[case(counts(0, 1, 0), Sentiment::Positive, 0.85, Sentiment::Positive, 0.85, Rule::Model)]
    #[case(counts(0, 0, 1), Sentiment::Positive, 0.95, Sentiment::Positive, 0.95, Rule::Model)]
    fn applies_first_matching_rule(
        #[case] counts: KeywordCounts,
        #[case] model: Sentiment,
        #[case] model_confidence: f32,
        #[case] sentiment: Sentiment,
        #[case] confidence: f32,
        #[case] rule: Rule,
    ) {
        let v = arbitrate(&counts, model, model_confidence);
        assert_eq!(v.rule, rule);
        assert_eq!(v.sentiment, sentiment);
        assert!(
            (v.confidence - confidence).abs() < 1e-6,
            "confidence {} != {confidence}",
            v.confidence
        );
    }
}
