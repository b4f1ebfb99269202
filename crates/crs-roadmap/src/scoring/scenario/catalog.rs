use super::domain::{Baseline, Effort, FrenchLevel, ImprovementKey, LanguageBenchmark, PointRange};

/// Months of Canadian experience the `cec_12m` improvement targets.
const CEC_TARGET_MONTHS: i32 = 12;

/// A nomination is a fixed award, not an estimate.
pub(crate) const PROVINCIAL_NOMINATION_POINTS: u16 = 600;

pub(crate) struct Estimate {
    pub range: PointRange,
    pub effort: Effort,
    pub rationale: &'static str,
}

/// Estimated gain of one improvement given where the baseline already stands.
pub(crate) fn estimate(baseline: &Baseline, key: ImprovementKey) -> Estimate {
    match key {
        ImprovementKey::LanguageClb9 => Estimate {
            range: match baseline.language_level {
                LanguageBenchmark::Clb9 | LanguageBenchmark::Clb10 => PointRange::new(0, 6),
                LanguageBenchmark::Clb8 => PointRange::new(25, 55),
                LanguageBenchmark::Clb7 => PointRange::new(35, 70),
            },
            effort: Effort::High,
            rationale: "CLB 9 often unlocks skill-transfer boosts.",
        },
        ImprovementKey::LanguageClb10 => Estimate {
            range: match baseline.language_level {
                LanguageBenchmark::Clb10 => PointRange::new(0, 4),
                LanguageBenchmark::Clb9 => PointRange::new(6, 18),
                LanguageBenchmark::Clb7 | LanguageBenchmark::Clb8 => PointRange::new(10, 25),
            },
            effort: Effort::High,
            rationale: "Incremental gains after CLB 9.",
        },
        ImprovementKey::FrenchB1 => Estimate {
            range: match baseline.french_level {
                FrenchLevel::None => PointRange::new(8, 25),
                FrenchLevel::B1 | FrenchLevel::B2 => PointRange::new(0, 6),
            },
            effort: Effort::High,
            rationale: "French can add bonus points (profile-dependent).",
        },
        ImprovementKey::FrenchB2 => Estimate {
            range: match baseline.french_level {
                FrenchLevel::B2 => PointRange::new(0, 6),
                FrenchLevel::B1 => PointRange::new(10, 35),
                FrenchLevel::None => PointRange::new(20, 62),
            },
            effort: Effort::High,
            rationale: "French at B2 can be a major lever for some profiles.",
        },
        ImprovementKey::CanadianExperience12Months => {
            let remaining = CEC_TARGET_MONTHS.saturating_sub(baseline.canadian_experience_months);
            Estimate {
                range: if remaining <= 0 {
                    PointRange::new(0, 8)
                } else if remaining <= 2 {
                    PointRange::new(10, 35)
                } else {
                    PointRange::new(4, 20)
                },
                effort: Effort::Medium,
                rationale: "CEC milestone can increase points (time-based).",
            }
        }
        ImprovementKey::JobOffer => Estimate {
            range: if baseline.has_job_offer {
                PointRange::new(0, 8)
            } else {
                PointRange::new(10, 50)
            },
            effort: Effort::High,
            rationale: "Job offers vary by conditions.",
        },
        ImprovementKey::ProvincialNomination => Estimate {
            range: if baseline.has_provincial_nomination {
                PointRange::new(0, 0)
            } else {
                PointRange::new(PROVINCIAL_NOMINATION_POINTS, PROVINCIAL_NOMINATION_POINTS)
            },
            effort: Effort::High,
            rationale: "PNP nomination adds 600 points.",
        },
    }
}
