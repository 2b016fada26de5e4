//! The closed sentiment label set.
//!
//! Labels serialize as the uppercase strings `POSITIVE`, `NEGATIVE` and
//! `NEUTRAL`. The same strings are stored in the `sentiments.sentiment` column.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Sentiment class of a sentence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Every variant, in display order.
    pub const ALL: [Self; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    /// Return the string representation used in SQL storage and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
        }
    }

    /// Vietnamese display name.
    #[must_use]
    pub const fn label_vi(self) -> &'static str {
        match self {
            Self::Positive => "TÍCH CỰC",
            Self::Negative => "TIÊU CỰC",
            Self::Neutral => "TRUNG TÍNH",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Positive => "😊",
            Self::Negative => "😞",
            Self::Neutral => "😐",
        }
    }

    /// Chart colour used by the dashboard.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Positive => "#4CAF50",
            Self::Negative => "#F44336",
            Self::Neutral => "#9E9E9E",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = CoreError;

    /// Parse a label case-insensitively (`positive`, `POSITIVE`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sentiment| sentiment.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::Validation(format!("unknown sentiment '{s}'")))
    }
}
