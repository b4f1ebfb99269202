mod rules;
mod tables;

pub use tables::{EducationTable, LanguageTable, RuleSet, RuleTable, Step, StepCurve};

#[cfg(test)]
pub(crate) use rules::{NOTE_LANGUAGE_BELOW_COMPETITIVE, NOTE_NO_CANADIAN_EXPERIENCE};

use super::domain::Profile;
use serde::Serialize;

/// Points per core factor, kept separate so the total can be audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreComponents {
    pub age: u16,
    pub education: u16,
    pub first_language: u16,
    pub canadian_experience: u16,
}

impl ScoreComponents {
    pub fn sum(&self) -> u16 {
        self.age + self.education + self.first_language + self.canadian_experience
    }
}

/// Scorer output: the total, its components and advisory notes.
///
/// Notes never change the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub total: u16,
    pub components: ScoreComponents,
    pub notes: Vec<String>,
}

/// Comparison between two profiles scored with the same rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileDiff {
    pub from: u16,
    pub to: u16,
    pub delta: i32,
    pub breakdown_from: ScoreBreakdown,
    pub breakdown_to: ScoreBreakdown,
}

/// Score a profile against the core tables of `rule_set`.
///
/// Age and Canadian experience are clamped before lookup; the marital status picks the table
/// variant once and that variant serves every factor.
pub fn score(profile: &Profile, rule_set: &RuleSet) -> ScoreBreakdown {
    let table = rule_set.table(profile.marital_status);
    let inputs = rules::normalize(profile);
    let components = rules::score_components(table, profile, &inputs);
    let notes = rules::advisory_notes(&inputs, &profile.first_language);

    ScoreBreakdown {
        total: components.sum(),
        components,
        notes,
    }
}

pub fn diff(from: &Profile, to: &Profile, rule_set: &RuleSet) -> ProfileDiff {
    let breakdown_from = score(from, rule_set);
    let breakdown_to = score(to, rule_set);

    ProfileDiff {
        from: breakdown_from.total,
        to: breakdown_to.total,
        delta: i32::from(breakdown_to.total) - i32::from(breakdown_from.total),
        breakdown_from,
        breakdown_to,
    }
}
