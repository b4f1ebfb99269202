mod catalog;
mod domain;
mod quick;
mod saved;

pub use domain::{
    Baseline, Effort, FrenchLevel, ImprovementKey, ImprovementOption, LanguageBenchmark,
    PointRange, Selection,
};
pub use quick::quick_estimate;
pub use saved::SavedScenario;

use std::cmp::Reverse;

/// Projections never leave `[0, CRS_CEILING]`.
pub const CRS_CEILING: u16 = 1200;

/// Evaluate every catalog improvement against `baseline`, best apparent return first.
///
/// Rows are ordered by descending midpoint, then by descending guaranteed minimum; rows that
/// tie on both keep catalog order.
pub fn estimate_improvements(baseline: &Baseline) -> Vec<ImprovementOption> {
    let mut options: Vec<ImprovementOption> = ImprovementKey::ALL
        .into_iter()
        .map(|key| {
            let estimate = catalog::estimate(baseline, key);
            ImprovementOption {
                key,
                label: key.label(),
                min: estimate.range.min,
                max: estimate.range.max,
                effort: estimate.effort,
                rationale: estimate.rationale,
            }
        })
        .collect();

    options.sort_by_key(|option| {
        let range = option.range();
        (Reverse(range.midpoint_x2()), Reverse(range.min))
    });
    options
}

/// Fold the selected improvement ranges into a projected total.
///
/// Ranges are summed independently; interactions between improvements are not re-derived.
pub fn project(baseline: &Baseline, selection: &Selection) -> PointRange {
    let (min, max) = selection
        .selected()
        .map(|key| catalog::estimate(baseline, key).range)
        .fold((baseline.crs, baseline.crs), |(min, max), range| {
            (
                min.saturating_add(i32::from(range.min)),
                max.saturating_add(i32::from(range.max)),
            )
        });

    bounded_range(min, max)
}

/// Clamp both ends into `[0, CRS_CEILING]` and order them.
pub(crate) fn bounded_range(min: i32, max: i32) -> PointRange {
    let ceiling = i32::from(CRS_CEILING);
    let min = min.clamp(0, ceiling) as u16;
    let max = max.clamp(0, ceiling) as u16;

    if max < min {
        PointRange::new(max, min)
    } else {
        PointRange::new(min, max)
    }
}
