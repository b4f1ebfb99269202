use tracing::debug;

use super::domain::Profile;
use super::profile::{diff as diff_profiles, score as score_profile};
use super::profile::{ProfileDiff, RuleSet, ScoreBreakdown};
use super::scenario::{estimate_improvements, project as project_selection, quick_estimate};
use super::scenario::{Baseline, ImprovementOption, PointRange, Selection};
use crate::config::ScoringConfig;

/// Binds the calculators to one rule set and traces each call.
#[derive(Debug, Clone, Copy)]
pub struct ScoringService {
    rules: &'static RuleSet,
}

impl ScoringService {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            rules: config.rule_set,
        }
    }

    pub fn rules(&self) -> &'static RuleSet {
        self.rules
    }

    pub fn score(&self, profile: &Profile) -> ScoreBreakdown {
        let breakdown = score_profile(profile, self.rules);
        debug!(
            rule_set = self.rules.version,
            marital_status = profile.marital_status.as_str(),
            total = breakdown.total,
            notes = breakdown.notes.len(),
            "scored profile"
        );
        breakdown
    }

    pub fn diff(&self, from: &Profile, to: &Profile) -> ProfileDiff {
        let diff = diff_profiles(from, to, self.rules);
        debug!(from = diff.from, to = diff.to, delta = diff.delta, "compared profiles");
        diff
    }

    pub fn improvements(&self, baseline: &Baseline) -> Vec<ImprovementOption> {
        let options = estimate_improvements(baseline);
        debug!(
            crs = baseline.crs,
            top = options.first().map(|option| option.key.as_str()),
            "ranked improvements"
        );
        options
    }

    pub fn project(&self, baseline: &Baseline, selection: &Selection) -> PointRange {
        let range = project_selection(baseline, selection);
        debug!(
            crs = baseline.crs,
            selected = selection.selected().count(),
            min = range.min,
            max = range.max,
            "projected scenario"
        );
        range
    }

    pub fn quick_estimate(&self, baseline: &Baseline) -> u16 {
        let crs = quick_estimate(baseline);
        debug!(crs, "quick estimate");
        crs
    }
}

impl Default for ScoringService {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
