pub mod analyze;
pub mod clear;
pub mod config;
pub mod dispatch;
pub mod export;
pub mod history;
pub mod interactive;
pub mod serve;
pub mod shared;
pub mod stats;
