//! CRS scoring: the rule-table profile scorer and the improvement scenario estimator.
//!
//! Both calculators are pure functions over their inputs. [`ScoringService`] binds them to a
//! configured [`RuleSet`] and [`scoring_router`] exposes them over HTTP.

pub mod domain;
mod error;
pub mod profile;
pub mod router;
pub mod scenario;
mod service;

#[cfg(test)]
mod tests;

pub use domain::{ClbLevel, EducationLevel, LanguageScores, MaritalStatus, Profile};
pub use error::ScoringError;
pub use profile::{diff, score, ProfileDiff, RuleSet, RuleTable, ScoreBreakdown, ScoreComponents};
pub use router::scoring_router;
pub use scenario::{
    estimate_improvements, project, quick_estimate, Baseline, Effort, FrenchLevel,
    ImprovementKey, ImprovementOption, LanguageBenchmark, PointRange, SavedScenario, Selection,
    CRS_CEILING,
};
pub use service::ScoringService;
