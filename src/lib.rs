//! Eligibility matching and benefit analysis engine for Korean government
//! housing support programs.

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
