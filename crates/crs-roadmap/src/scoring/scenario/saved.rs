use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Baseline, PointRange, Selection};
use super::project;

/// A named baseline plus selection, as clients store it between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedScenario {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub baseline: Baseline,
    #[serde(default)]
    pub selection: Selection,
}

impl SavedScenario {
    pub fn new(name: impl Into<String>, baseline: Baseline, selection: Selection) -> Self {
        Self {
            name: name.into(),
            created_at: Utc::now(),
            baseline,
            selection,
        }
    }

    pub fn projection(&self) -> PointRange {
        project(&self.baseline, &self.selection)
    }
}
