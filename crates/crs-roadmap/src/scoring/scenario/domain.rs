use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::super::domain::saturating_i32;
use super::super::ScoringError;

/// French proficiency tiers the estimator distinguishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrenchLevel {
    #[default]
    None,
    B1,
    B2,
}

impl FromStr for FrenchLevel {
    type Err = ScoringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "b1" => Ok(Self::B1),
            "b2" => Ok(Self::B2),
            other => Err(ScoringError::invalid(format!("unknown French level '{other}'"))),
        }
    }
}

/// Coarse language benchmark used by scenario baselines (CLB 7 to 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LanguageBenchmark {
    Clb7,
    Clb8,
    Clb9,
    Clb10,
}

impl LanguageBenchmark {
    pub fn benchmark(self) -> u8 {
        match self {
            LanguageBenchmark::Clb7 => 7,
            LanguageBenchmark::Clb8 => 8,
            LanguageBenchmark::Clb9 => 9,
            LanguageBenchmark::Clb10 => 10,
        }
    }
}

impl TryFrom<u8> for LanguageBenchmark {
    type Error = ScoringError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            7 => Ok(Self::Clb7),
            8 => Ok(Self::Clb8),
            9 => Ok(Self::Clb9),
            10 => Ok(Self::Clb10),
            other => Err(ScoringError::invalid(format!(
                "baseline language level must be CLB 7-10, got {other}"
            ))),
        }
    }
}

impl From<LanguageBenchmark> for u8 {
    fn from(level: LanguageBenchmark) -> Self {
        level.benchmark()
    }
}

/// Simplified applicant state that scenarios are simulated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Baseline {
    #[serde(deserialize_with = "saturating_i32")]
    pub crs: i32,
    pub language_level: LanguageBenchmark,
    #[serde(default, deserialize_with = "saturating_i32")]
    pub canadian_experience_months: i32,
    #[serde(default)]
    pub french_level: FrenchLevel,
    #[serde(default)]
    pub has_provincial_nomination: bool,
    #[serde(default)]
    pub has_job_offer: bool,
}

/// Closed catalog of hypothetical improvements, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ImprovementKey {
    #[serde(rename = "clb9")]
    LanguageClb9,
    #[serde(rename = "clb10")]
    LanguageClb10,
    #[serde(rename = "french_b1")]
    FrenchB1,
    #[serde(rename = "french_b2")]
    FrenchB2,
    #[serde(rename = "cec_12m")]
    CanadianExperience12Months,
    #[serde(rename = "job_offer")]
    JobOffer,
    #[serde(rename = "pnp")]
    ProvincialNomination,
}

impl ImprovementKey {
    pub const ALL: [ImprovementKey; 7] = [
        ImprovementKey::LanguageClb9,
        ImprovementKey::LanguageClb10,
        ImprovementKey::FrenchB1,
        ImprovementKey::FrenchB2,
        ImprovementKey::CanadianExperience12Months,
        ImprovementKey::JobOffer,
        ImprovementKey::ProvincialNomination,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImprovementKey::LanguageClb9 => "clb9",
            ImprovementKey::LanguageClb10 => "clb10",
            ImprovementKey::FrenchB1 => "french_b1",
            ImprovementKey::FrenchB2 => "french_b2",
            ImprovementKey::CanadianExperience12Months => "cec_12m",
            ImprovementKey::JobOffer => "job_offer",
            ImprovementKey::ProvincialNomination => "pnp",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImprovementKey::LanguageClb9 => "IELTS → CLB 9",
            ImprovementKey::LanguageClb10 => "IELTS → CLB 10",
            ImprovementKey::FrenchB1 => "French → B1",
            ImprovementKey::FrenchB2 => "French → B2",
            ImprovementKey::CanadianExperience12Months => "Canadian experience → 12 months",
            ImprovementKey::JobOffer => "Valid job offer",
            ImprovementKey::ProvincialNomination => "PNP nomination",
        }
    }
}

impl FromStr for ImprovementKey {
    type Err = ScoringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| ScoringError::invalid(format!("unknown improvement key '{value}'")))
    }
}

impl fmt::Display for ImprovementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relative effort needed to realise an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effort {
    Low,
    Medium,
    High,
}

/// Inclusive point range. Estimates and projections both use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRange {
    pub min: u16,
    pub max: u16,
}

impl PointRange {
    pub const fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    pub(crate) fn midpoint_x2(&self) -> u32 {
        u32::from(self.min) + u32::from(self.max)
    }
}

/// One row of the improvement roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImprovementOption {
    pub key: ImprovementKey,
    pub label: &'static str,
    pub min: u16,
    pub max: u16,
    pub effort: Effort,
    pub rationale: &'static str,
}

impl ImprovementOption {
    pub fn range(&self) -> PointRange {
        PointRange::new(self.min, self.max)
    }
}

/// Which improvements a scenario switches on. Keys absent or mapped to `false` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeMap<ImprovementKey, bool>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: ImprovementKey) -> Self {
        self.0.insert(key, true);
        self
    }

    pub fn set(&mut self, key: ImprovementKey, selected: bool) {
        self.0.insert(key, selected);
    }

    pub fn toggle(&mut self, key: ImprovementKey) {
        let entry = self.0.entry(key).or_insert(false);
        *entry = !*entry;
    }

    pub fn is_selected(&self, key: ImprovementKey) -> bool {
        self.0.get(&key).copied().unwrap_or(false)
    }

    pub fn selected(&self) -> impl Iterator<Item = ImprovementKey> + '_ {
        self.0
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(key, _)| *key)
    }

    /// Build a selection from raw key names, rejecting anything outside the catalog.
    pub fn from_keys<I, S>(keys: I) -> Result<Self, ScoringError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter()
            .map(|raw| raw.as_ref().parse::<ImprovementKey>())
            .collect()
    }
}

impl FromIterator<ImprovementKey> for Selection {
    fn from_iter<T: IntoIterator<Item = ImprovementKey>>(iter: T) -> Self {
        Self(iter.into_iter().map(|key| (key, true)).collect())
    }
}
