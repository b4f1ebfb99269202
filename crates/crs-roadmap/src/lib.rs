//! Comprehensive Ranking System (CRS) scoring engine and improvement roadmap estimator.
//!
//! The [`scoring`] module holds the pure calculators; [`config`], [`error`] and [`telemetry`]
//! provide the ambient plumbing shared with the HTTP/CLI service.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
