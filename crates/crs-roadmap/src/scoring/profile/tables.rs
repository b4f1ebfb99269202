use super::super::domain::{ClbLevel, EducationLevel, MaritalStatus};

/// One breakpoint of a step function: `points` apply from `from` up to the next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub from: i32,
    pub points: u16,
}

const fn step(from: i32, points: u16) -> Step {
    Step { from, points }
}

/// Piecewise-constant lookup over an ascending list of breakpoints.
///
/// Values below the first breakpoint score zero.
#[derive(Debug, Clone, Copy)]
pub struct StepCurve {
    steps: &'static [Step],
}

impl StepCurve {
    pub const fn new(steps: &'static [Step]) -> Self {
        Self { steps }
    }

    pub fn points(&self, value: i32) -> u16 {
        self.steps
            .iter()
            .rev()
            .find(|step| value >= step.from)
            .map(|step| step.points)
            .unwrap_or(0)
    }

    pub fn steps(&self) -> &'static [Step] {
        self.steps
    }

    pub fn max_points(&self) -> u16 {
        self.steps.iter().map(|step| step.points).max().unwrap_or(0)
    }
}

/// Points per credential, indexed in [`EducationLevel::ALL`] order.
#[derive(Debug, Clone, Copy)]
pub struct EducationTable([u16; EducationLevel::COUNT]);

impl EducationTable {
    pub fn points(&self, level: EducationLevel) -> u16 {
        self.0[level.index()]
    }

    pub fn max_points(&self) -> u16 {
        self.0.iter().copied().max().unwrap_or(0)
    }
}

/// Points for a single language skill, indexed in [`ClbLevel::ALL`] order.
#[derive(Debug, Clone, Copy)]
pub struct LanguageTable([u16; ClbLevel::COUNT]);

impl LanguageTable {
    pub fn points(&self, level: ClbLevel) -> u16 {
        self.0[level.index()]
    }

    pub fn max_points(&self) -> u16 {
        self.0.iter().copied().max().unwrap_or(0)
    }
}

/// The complete set of core tables for one marital status.
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
    pub age: StepCurve,
    pub education: EducationTable,
    pub canadian_experience: StepCurve,
    pub first_language_per_skill: LanguageTable,
}

/// A published revision of the point tables.
#[derive(Debug)]
pub struct RuleSet {
    pub version: &'static str,
    pub single: RuleTable,
    pub married: RuleTable,
}

impl RuleSet {
    pub fn current() -> &'static RuleSet {
        &RULE_SETS[RULE_SETS.len() - 1]
    }

    pub fn by_version(version: &str) -> Option<&'static RuleSet> {
        RULE_SETS.iter().find(|set| set.version == version)
    }

    pub fn versions() -> Vec<&'static str> {
        RULE_SETS.iter().map(|set| set.version).collect()
    }

    pub fn table(&self, marital_status: MaritalStatus) -> &RuleTable {
        match marital_status {
            MaritalStatus::Single => &self.single,
            MaritalStatus::Married => &self.married,
        }
    }
}

const SINGLE_AGE: &[Step] = &[
    step(0, 0),
    step(18, 99),
    step(19, 105),
    step(20, 110),
    step(30, 105),
    step(31, 99),
    step(32, 94),
    step(33, 88),
    step(34, 83),
    step(35, 77),
    step(36, 72),
    step(37, 66),
    step(38, 61),
    step(39, 55),
    step(40, 50),
    step(41, 39),
    step(42, 28),
    step(43, 17),
    step(44, 6),
    step(45, 0),
];

const MARRIED_AGE: &[Step] = &[
    step(0, 0),
    step(18, 90),
    step(19, 95),
    step(20, 100),
    step(30, 95),
    step(31, 90),
    step(32, 85),
    step(33, 80),
    step(34, 75),
    step(35, 70),
    step(36, 65),
    step(37, 60),
    step(38, 55),
    step(39, 50),
    step(40, 45),
    step(41, 35),
    step(42, 25),
    step(43, 15),
    step(44, 5),
    step(45, 0),
];

const SINGLE_CANADIAN_EXPERIENCE: &[Step] = &[
    step(0, 0),
    step(12, 40),
    step(24, 53),
    step(36, 64),
    step(48, 72),
    step(60, 80),
];

const MARRIED_CANADIAN_EXPERIENCE: &[Step] = &[
    step(0, 0),
    step(12, 35),
    step(24, 46),
    step(36, 56),
    step(48, 63),
    step(60, 70),
];

// Approximation of the first-language grid; the spouse factors are not modelled yet.
static RULE_SETS: [RuleSet; 1] = [RuleSet {
    version: "core-2026.1",
    single: RuleTable {
        age: StepCurve::new(SINGLE_AGE),
        education: EducationTable([30, 90, 98, 120, 128, 135, 150]),
        canadian_experience: StepCurve::new(SINGLE_CANADIAN_EXPERIENCE),
        first_language_per_skill: LanguageTable([0, 6, 6, 8, 16, 22, 29, 32]),
    },
    married: RuleTable {
        age: StepCurve::new(MARRIED_AGE),
        education: EducationTable([28, 84, 91, 112, 119, 126, 140]),
        canadian_experience: StepCurve::new(MARRIED_CANADIAN_EXPERIENCE),
        first_language_per_skill: LanguageTable([0, 6, 6, 8, 14, 20, 26, 29]),
    },
}];
