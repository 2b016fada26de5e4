//! Repository methods on [`SentimentStore`](crate::SentimentStore), one
//! module per concern.

pub mod classification;
pub mod statistics;
