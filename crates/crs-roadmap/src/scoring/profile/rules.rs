use super::super::domain::{ClbLevel, LanguageScores, Profile};
use super::tables::RuleTable;
use super::ScoreComponents;

pub(crate) const AGE_RANGE: (i32, i32) = (0, 99);
pub(crate) const CANADIAN_EXPERIENCE_RANGE: (i32, i32) = (0, 120);

/// Months of Canadian work below which the experience factor awards nothing.
const MIN_SCORED_EXPERIENCE_MONTHS: i32 = 12;

pub(crate) const NOTE_NO_CANADIAN_EXPERIENCE: &str =
    "Canadian experience under 12 months: CRS core gives 0 for CAN exp.";
pub(crate) const NOTE_LANGUAGE_BELOW_COMPETITIVE: &str =
    "CLB below 7 in any skill can reduce competitiveness; CLB 9 often unlocks big jumps.";

pub(crate) struct ScoringInputs {
    pub age: i32,
    pub canadian_experience_months: i32,
}

pub(crate) fn normalize(profile: &Profile) -> ScoringInputs {
    ScoringInputs {
        age: profile.age.clamp(AGE_RANGE.0, AGE_RANGE.1),
        canadian_experience_months: profile
            .canadian_experience_months
            .clamp(CANADIAN_EXPERIENCE_RANGE.0, CANADIAN_EXPERIENCE_RANGE.1),
    }
}

pub(crate) fn language_points(table: &RuleTable, scores: &LanguageScores) -> u16 {
    scores
        .skills()
        .iter()
        .map(|level| table.first_language_per_skill.points(*level))
        .sum()
}

pub(crate) fn score_components(
    table: &RuleTable,
    profile: &Profile,
    inputs: &ScoringInputs,
) -> ScoreComponents {
    ScoreComponents {
        age: table.age.points(inputs.age),
        education: table.education.points(profile.education),
        first_language: language_points(table, &profile.first_language),
        canadian_experience: table
            .canadian_experience
            .points(inputs.canadian_experience_months),
    }
}

pub(crate) fn advisory_notes(inputs: &ScoringInputs, scores: &LanguageScores) -> Vec<String> {
    let mut notes = Vec::new();

    if inputs.canadian_experience_months < MIN_SCORED_EXPERIENCE_MONTHS {
        notes.push(NOTE_NO_CANADIAN_EXPERIENCE.to_string());
    }

    if scores
        .skills()
        .iter()
        .any(|level| *level < ClbLevel::COMPETITIVE)
    {
        notes.push(NOTE_LANGUAGE_BELOW_COMPETITIVE.to_string());
    }

    notes
}
