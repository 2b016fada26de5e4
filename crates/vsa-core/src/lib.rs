//! # vsa-core
//!
//! Core types and error types for the Vietnamese sentiment assistant.
//!
//! This crate provides the foundational types shared across all `vsa` crates:
//! - The closed [`Sentiment`](enums::Sentiment) label set
//! - Entity structs for stored classifications and ephemeral analysis results
//! - The [`SentimentBackend`](backend::SentimentBackend) seam implemented by model crates
//! - Aggregate statistics and hourly timeline buckets
//! - CSV / JSON export formats
//! - CLI and dashboard response types
//! - Cross-cutting error types

pub mod backend;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod export;
pub mod responses;
pub mod stats;
