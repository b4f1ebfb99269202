use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::ScoringError;

/// Selects which rule table variant applies to every lookup of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
}

impl MaritalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "single",
            MaritalStatus::Married => "married",
        }
    }
}

impl FromStr for MaritalStatus {
    type Err = ScoringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "married" => Ok(Self::Married),
            other => Err(ScoringError::invalid(format!(
                "unknown marital status '{other}'"
            ))),
        }
    }
}

/// Highest completed credential, ordered from high school to doctorate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    HighSchool,
    OneYearPostSecondary,
    TwoYearPostSecondary,
    Bachelors,
    TwoOrMoreCredentials,
    Masters,
    Phd,
}

impl EducationLevel {
    pub const COUNT: usize = 7;

    pub const ALL: [EducationLevel; Self::COUNT] = [
        EducationLevel::HighSchool,
        EducationLevel::OneYearPostSecondary,
        EducationLevel::TwoYearPostSecondary,
        EducationLevel::Bachelors,
        EducationLevel::TwoOrMoreCredentials,
        EducationLevel::Masters,
        EducationLevel::Phd,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "high_school",
            EducationLevel::OneYearPostSecondary => "one_year_post_secondary",
            EducationLevel::TwoYearPostSecondary => "two_year_post_secondary",
            EducationLevel::Bachelors => "bachelors",
            EducationLevel::TwoOrMoreCredentials => "two_or_more_credentials",
            EducationLevel::Masters => "masters",
            EducationLevel::Phd => "phd",
        }
    }
}

impl FromStr for EducationLevel {
    type Err = ScoringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| ScoringError::invalid(format!("unknown education level '{value}'")))
    }
}

/// Canadian Language Benchmark level for a single skill.
///
/// Only the benchmarks the point tables publish are representable; anything else is
/// rejected when converting from a raw number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ClbLevel {
    Clb0,
    Clb4,
    Clb5,
    Clb6,
    Clb7,
    Clb8,
    Clb9,
    Clb10,
}

impl ClbLevel {
    pub const COUNT: usize = 8;

    pub const ALL: [ClbLevel; Self::COUNT] = [
        ClbLevel::Clb0,
        ClbLevel::Clb4,
        ClbLevel::Clb5,
        ClbLevel::Clb6,
        ClbLevel::Clb7,
        ClbLevel::Clb8,
        ClbLevel::Clb9,
        ClbLevel::Clb10,
    ];

    /// Below this benchmark a skill hurts competitiveness.
    pub const COMPETITIVE: ClbLevel = ClbLevel::Clb7;

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn benchmark(self) -> u8 {
        match self {
            ClbLevel::Clb0 => 0,
            ClbLevel::Clb4 => 4,
            ClbLevel::Clb5 => 5,
            ClbLevel::Clb6 => 6,
            ClbLevel::Clb7 => 7,
            ClbLevel::Clb8 => 8,
            ClbLevel::Clb9 => 9,
            ClbLevel::Clb10 => 10,
        }
    }
}

impl TryFrom<u8> for ClbLevel {
    type Error = ScoringError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|level| level.benchmark() == value)
            .ok_or_else(|| {
                ScoringError::invalid(format!(
                    "CLB {value} is not a scored benchmark (expected 0 or 4-10)"
                ))
            })
    }
}

impl From<ClbLevel> for u8 {
    fn from(level: ClbLevel) -> Self {
        level.benchmark()
    }
}

impl FromStr for ClbLevel {
    type Err = ScoringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let digits = trimmed
            .strip_prefix("clb")
            .or_else(|| trimmed.strip_prefix("CLB"))
            .unwrap_or(trimmed)
            .trim();
        let raw = digits
            .parse::<u8>()
            .map_err(|_| ScoringError::invalid(format!("'{value}' is not a CLB level")))?;
        Self::try_from(raw)
    }
}

impl fmt::Display for ClbLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CLB {}", self.benchmark())
    }
}

/// First official language results, one benchmark per skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageScores {
    pub speaking: ClbLevel,
    pub listening: ClbLevel,
    pub reading: ClbLevel,
    pub writing: ClbLevel,
}

impl LanguageScores {
    pub fn uniform(level: ClbLevel) -> Self {
        Self {
            speaking: level,
            listening: level,
            reading: level,
            writing: level,
        }
    }

    pub fn skills(&self) -> [ClbLevel; 4] {
        [self.speaking, self.listening, self.reading, self.writing]
    }
}

/// Applicant snapshot scored against the core human-capital tables.
///
/// Numeric fields accept any JSON number; the scorer clamps them into the table domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(deserialize_with = "saturating_i32")]
    pub age: i32,
    pub marital_status: MaritalStatus,
    pub education: EducationLevel,
    pub first_language: LanguageScores,
    #[serde(default, deserialize_with = "saturating_i32")]
    pub canadian_experience_months: i32,
}

/// Decode any JSON number into `i32`, saturating at the bounds and truncating fractions.
pub(crate) fn saturating_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    struct SaturatingVisitor;

    impl Visitor<'_> for SaturatingVisitor {
        type Value = i32;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<i32, E> {
            Ok(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<i32, E> {
            Ok(i32::try_from(value).unwrap_or(i32::MAX))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<i32, E> {
            if value.is_nan() {
                return Err(E::invalid_value(de::Unexpected::Float(value), &self));
            }
            Ok(value as i32)
        }
    }

    deserializer.deserialize_any(SaturatingVisitor)
}
