use super::domain::{Baseline, FrenchLevel, LanguageBenchmark};
use super::CRS_CEILING;

const BASE_POINTS: i32 = 330;
const JOB_OFFER_POINTS: i32 = 50;
const NOMINATION_POINTS: i32 = 600;
const EXPERIENCE_CAP_MONTHS: i32 = 36;

/// Experience bonus thresholds, highest first.
const EXPERIENCE_STEPS: [(i32, i32); 5] = [(12, 55), (10, 42), (8, 34), (6, 26), (3, 14)];

/// Rough CRS for users who do not know their score yet.
///
/// This is an onboarding heuristic, not the official grid: it ignores `baseline.crs` and
/// rebuilds a total from the coarse baseline fields.
pub fn quick_estimate(baseline: &Baseline) -> u16 {
    let mut score = BASE_POINTS;

    score += match baseline.language_level {
        LanguageBenchmark::Clb7 => 40,
        LanguageBenchmark::Clb8 => 65,
        LanguageBenchmark::Clb9 => 95,
        LanguageBenchmark::Clb10 => 115,
    };

    let months = baseline
        .canadian_experience_months
        .clamp(0, EXPERIENCE_CAP_MONTHS);
    score += EXPERIENCE_STEPS
        .iter()
        .find(|(threshold, _)| months >= *threshold)
        .map(|(_, points)| *points)
        .unwrap_or(0);

    score += match baseline.french_level {
        FrenchLevel::None => 0,
        FrenchLevel::B1 => 15,
        FrenchLevel::B2 => 35,
    };

    if baseline.has_job_offer {
        score += JOB_OFFER_POINTS;
    }
    if baseline.has_provincial_nomination {
        score += NOMINATION_POINTS;
    }

    score.clamp(0, i32::from(CRS_CEILING)) as u16
}
