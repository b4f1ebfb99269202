use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::scoring::domain::{ClbLevel, EducationLevel, LanguageScores, MaritalStatus, Profile};
use crate::scoring::profile::RuleSet;
use crate::scoring::scenario::{Baseline, FrenchLevel, LanguageBenchmark};
use crate::scoring::{scoring_router, ScoringService};

pub(super) fn rules() -> &'static RuleSet {
    RuleSet::current()
}

pub(super) fn profile(age: i32, marital_status: MaritalStatus, clb: ClbLevel) -> Profile {
    Profile {
        age,
        marital_status,
        education: EducationLevel::Bachelors,
        first_language: LanguageScores::uniform(clb),
        canadian_experience_months: 0,
    }
}

pub(super) fn reference_profile() -> Profile {
    profile(25, MaritalStatus::Single, ClbLevel::Clb9)
}

pub(super) fn baseline() -> Baseline {
    Baseline {
        crs: 472,
        language_level: LanguageBenchmark::Clb8,
        canadian_experience_months: 10,
        french_level: FrenchLevel::None,
        has_provincial_nomination: false,
        has_job_offer: false,
    }
}

pub(super) fn router() -> axum::Router {
    scoring_router(Arc::new(ScoringService::default()))
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

pub(super) async fn assert_bad_request(response: Response, needle: &str) {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    let message = body["error"].as_str().expect("error message");
    assert!(
        message.contains(needle),
        "expected '{needle}' in error '{message}'"
    );
}
