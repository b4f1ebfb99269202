use super::common::*;
use crate::scoring::domain::{ClbLevel, EducationLevel, LanguageScores, MaritalStatus};
use crate::scoring::profile::{
    diff, score, NOTE_LANGUAGE_BELOW_COMPETITIVE, NOTE_NO_CANADIAN_EXPERIENCE,
};
use crate::scoring::ScoringError;

#[test]
fn reference_profile_scores_346() {
    let breakdown = score(&reference_profile(), rules());

    assert_eq!(breakdown.components.age, 110);
    assert_eq!(breakdown.components.education, 120);
    assert_eq!(breakdown.components.canadian_experience, 0);
    assert_eq!(breakdown.components.first_language, 4 * 29);
    assert_eq!(breakdown.total, 346);
    assert_eq!(breakdown.notes, vec![NOTE_NO_CANADIAN_EXPERIENCE.to_string()]);
}

#[test]
fn total_matches_component_sum_across_the_grid() {
    for marital_status in [MaritalStatus::Single, MaritalStatus::Married] {
        for education in EducationLevel::ALL {
            for clb in ClbLevel::ALL {
                for (age, months) in [(17, 0), (22, 12), (31, 30), (40, 61), (50, 200)] {
                    let mut candidate = profile(age, marital_status, clb);
                    candidate.education = education;
                    candidate.canadian_experience_months = months;

                    let breakdown = score(&candidate, rules());
                    let c = breakdown.components;
                    assert_eq!(
                        breakdown.total,
                        c.age + c.education + c.first_language + c.canadian_experience
                    );

                    let table = rules().table(marital_status);
                    assert!(c.age <= table.age.max_points());
                    assert!(c.education <= table.education.max_points());
                    assert!(c.canadian_experience <= table.canadian_experience.max_points());
                    assert!(c.first_language <= 4 * table.first_language_per_skill.max_points());
                }
            }
        }
    }
}

#[test]
fn out_of_range_ages_score_as_clamped_boundary() {
    let older = score(&profile(150, MaritalStatus::Single, ClbLevel::Clb9), rules());
    let ceiling = score(&profile(99, MaritalStatus::Single, ClbLevel::Clb9), rules());
    assert_eq!(older, ceiling);

    let negative = score(&profile(-3, MaritalStatus::Married, ClbLevel::Clb9), rules());
    let floor = score(&profile(0, MaritalStatus::Married, ClbLevel::Clb9), rules());
    assert_eq!(negative, floor);
    assert_eq!(negative.components.age, 0);
}

#[test]
fn canadian_experience_is_clamped_and_stepped() {
    let mut candidate = reference_profile();
    let mut points = |months: i32| {
        candidate.canadian_experience_months = months;
        score(&candidate, rules()).components.canadian_experience
    };

    assert_eq!(points(11), 0);
    assert_eq!(points(12), 40);
    assert_eq!(points(35), 53);
    assert_eq!(points(36), 64);
    assert_eq!(points(48), 72);
    assert_eq!(points(60), 80);
    assert_eq!(points(500), 80);
    assert_eq!(points(-12), 0);
}

#[test]
fn age_curve_plateaus_then_declines_to_zero() {
    let single = rules().table(MaritalStatus::Single);
    assert_eq!(single.age.points(17), 0);
    assert_eq!(single.age.points(18), 99);
    assert_eq!(single.age.points(19), 105);
    for age in 20..=29 {
        assert_eq!(single.age.points(age), 110);
    }
    assert_eq!(single.age.points(30), 105);
    assert_eq!(single.age.points(44), 6);
    assert_eq!(single.age.points(45), 0);

    let declining: Vec<u16> = (29..=45).map(|age| single.age.points(age)).collect();
    assert!(declining.windows(2).all(|pair| pair[0] >= pair[1]));

    let married = rules().table(MaritalStatus::Married);
    assert_eq!(married.age.points(25), 100);
    assert_eq!(married.age.points(41), 35);
}

#[test]
fn married_profiles_use_married_tables_for_every_factor() {
    let mut candidate = profile(25, MaritalStatus::Married, ClbLevel::Clb9);
    candidate.canadian_experience_months = 24;

    let breakdown = score(&candidate, rules());

    assert_eq!(breakdown.components.age, 100);
    assert_eq!(breakdown.components.education, 112);
    assert_eq!(breakdown.components.canadian_experience, 46);
    assert_eq!(breakdown.components.first_language, 4 * 26);
    assert_eq!(breakdown.total, 362);
    assert!(breakdown.notes.is_empty());
}

#[test]
fn education_cells_match_published_table() {
    let single = rules().table(MaritalStatus::Single);
    let married = rules().table(MaritalStatus::Married);
    let expected = [
        (EducationLevel::HighSchool, 30, 28),
        (EducationLevel::OneYearPostSecondary, 90, 84),
        (EducationLevel::TwoYearPostSecondary, 98, 91),
        (EducationLevel::Bachelors, 120, 112),
        (EducationLevel::TwoOrMoreCredentials, 128, 119),
        (EducationLevel::Masters, 135, 126),
        (EducationLevel::Phd, 150, 140),
    ];

    for (level, single_points, married_points) in expected {
        assert_eq!(single.education.points(level), single_points, "{level:?}");
        assert_eq!(married.education.points(level), married_points, "{level:?}");
    }
}

#[test]
fn language_is_summed_per_skill() {
    let mut candidate = reference_profile();
    candidate.first_language = LanguageScores {
        speaking: ClbLevel::Clb10,
        listening: ClbLevel::Clb8,
        reading: ClbLevel::Clb7,
        writing: ClbLevel::Clb4,
    };

    let breakdown = score(&candidate, rules());

    assert_eq!(breakdown.components.first_language, 32 + 22 + 16 + 6);
    assert!(breakdown
        .notes
        .contains(&NOTE_LANGUAGE_BELOW_COMPETITIVE.to_string()));
}

#[test]
fn notes_do_not_change_the_total() {
    let mut weak = reference_profile();
    weak.first_language.writing = ClbLevel::Clb6;
    weak.canadian_experience_months = 3;

    let breakdown = score(&weak, rules());

    assert_eq!(breakdown.notes.len(), 2);
    assert_eq!(breakdown.total, breakdown.components.sum());
}

#[test]
fn scoring_is_deterministic() {
    let candidate = reference_profile();
    assert_eq!(score(&candidate, rules()), score(&candidate, rules()));
}

#[test]
fn diff_reports_signed_delta() {
    let from = reference_profile();
    let mut to = from.clone();
    to.canadian_experience_months = 12;

    let result = diff(&from, &to, rules());
    assert_eq!(result.from, 346);
    assert_eq!(result.to, 386);
    assert_eq!(result.delta, 40);

    let back = diff(&to, &from, rules());
    assert_eq!(back.delta, -40);
}

#[test]
fn unscored_benchmarks_are_invalid_input() {
    for raw in [1u8, 2, 3, 11, 12] {
        match ClbLevel::try_from(raw) {
            Err(ScoringError::InvalidInput(message)) => assert!(message.contains("CLB")),
            other => panic!("expected invalid input for CLB {raw}, got {other:?}"),
        }
    }
    assert_eq!(ClbLevel::try_from(9u8), Ok(ClbLevel::Clb9));
    assert_eq!("clb10".parse::<ClbLevel>(), Ok(ClbLevel::Clb10));
}

#[test]
fn unknown_enum_strings_are_invalid_input() {
    assert!(matches!(
        "widowed".parse::<MaritalStatus>(),
        Err(ScoringError::InvalidInput(_))
    ));
    assert!(matches!(
        "bootcamp".parse::<EducationLevel>(),
        Err(ScoringError::InvalidInput(_))
    ));
    assert_eq!(
        "two-or-more-credentials".parse::<EducationLevel>(),
        Ok(EducationLevel::TwoOrMoreCredentials)
    );
}

#[test]
fn profile_json_rejects_out_of_domain_benchmarks() {
    let raw = serde_json::json!({
        "age": 30,
        "marital_status": "single",
        "education": "masters",
        "first_language": { "speaking": 9, "listening": 9, "reading": 3, "writing": 9 },
        "canadian_experience_months": 0
    });

    let err = serde_json::from_value::<crate::scoring::Profile>(raw).expect_err("CLB 3 rejected");
    assert!(err.to_string().contains("CLB 3"));
}
