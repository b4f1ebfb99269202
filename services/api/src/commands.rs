use crate::infra::{
    load_saved_scenarios, parse_language_benchmark, parse_saturating_i32, remove_saved_scenario,
    store_saved_scenario,
};
use clap::Args;
use crs_roadmap::config::AppConfig;
use crs_roadmap::error::AppError;
use crs_roadmap::scoring::{
    Baseline, ClbLevel, EducationLevel, FrenchLevel, ImprovementKey, ImprovementOption,
    LanguageBenchmark, LanguageScores, MaritalStatus, PointRange, Profile, SavedScenario,
    ScoreBreakdown, ScoringService, Selection,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Applicant age in years (clamped to 0-99)
    #[arg(long, allow_negative_numbers = true, value_parser = parse_saturating_i32)]
    pub(crate) age: i32,
    /// Marital status: single or married
    #[arg(long, default_value = "single")]
    pub(crate) marital_status: MaritalStatus,
    /// Highest credential, e.g. bachelors, masters, two_or_more_credentials
    #[arg(long)]
    pub(crate) education: EducationLevel,
    /// Speaking benchmark (CLB 0 or 4-10)
    #[arg(long)]
    pub(crate) speaking: ClbLevel,
    /// Listening benchmark (CLB 0 or 4-10)
    #[arg(long)]
    pub(crate) listening: ClbLevel,
    /// Reading benchmark (CLB 0 or 4-10)
    #[arg(long)]
    pub(crate) reading: ClbLevel,
    /// Writing benchmark (CLB 0 or 4-10)
    #[arg(long)]
    pub(crate) writing: ClbLevel,
    /// Months of skilled Canadian work experience (clamped to 0-120)
    #[arg(
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        value_parser = parse_saturating_i32
    )]
    pub(crate) canadian_experience_months: i32,
}

#[derive(Args, Debug)]
pub(crate) struct RoadmapArgs {
    /// Current CRS; estimated from the other fields when omitted
    #[arg(long, allow_negative_numbers = true, value_parser = parse_saturating_i32)]
    pub(crate) crs: Option<i32>,
    /// Current language benchmark (CLB 7-10)
    #[arg(long, value_parser = parse_language_benchmark)]
    pub(crate) language_level: LanguageBenchmark,
    /// Months of Canadian work experience
    #[arg(
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        value_parser = parse_saturating_i32
    )]
    pub(crate) canadian_experience_months: i32,
    /// Current French level: none, b1 or b2
    #[arg(long, default_value = "none")]
    pub(crate) french_level: FrenchLevel,
    /// The applicant already holds a valid job offer
    #[arg(long)]
    pub(crate) job_offer: bool,
    /// The applicant already holds a provincial nomination
    #[arg(long)]
    pub(crate) provincial_nomination: bool,
    /// Improvements to project (clb9, clb10, french_b1, french_b2, cec_12m, job_offer, pnp)
    #[arg(long = "select", value_delimiter = ',')]
    pub(crate) selected: Vec<ImprovementKey>,
    /// Append the scenario to this saved scenarios file
    #[arg(long)]
    pub(crate) save: Option<PathBuf>,
    /// Name for the saved scenario
    #[arg(long, requires = "save")]
    pub(crate) name: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ScenariosArgs {
    /// Saved scenarios file written by `roadmap --save`
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// Remove the scenario with this name, or at this 1-based position, instead of listing
    #[arg(long, value_name = "NAME|INDEX")]
    pub(crate) delete: Option<String>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = ScoringService::new(config.scoring);

    let profile = Profile {
        age: args.age,
        marital_status: args.marital_status,
        education: args.education,
        first_language: LanguageScores {
            speaking: args.speaking,
            listening: args.listening,
            reading: args.reading,
            writing: args.writing,
        },
        canadian_experience_months: args.canadian_experience_months,
    };

    let breakdown = service.score(&profile);
    render_breakdown(&profile, &breakdown, service.rules().version);
    Ok(())
}

pub(crate) fn run_roadmap(args: RoadmapArgs) -> Result<(), AppError> {
    let RoadmapArgs {
        crs,
        language_level,
        canadian_experience_months,
        french_level,
        job_offer,
        provincial_nomination,
        selected,
        save,
        name,
    } = args;

    let config = AppConfig::load()?;
    let service = ScoringService::new(config.scoring);
    let mut baseline = Baseline {
        crs: crs.unwrap_or_default(),
        language_level,
        canadian_experience_months,
        french_level,
        has_provincial_nomination: provincial_nomination,
        has_job_offer: job_offer,
    };
    let estimated = crs.is_none();
    if estimated {
        baseline.crs = i32::from(service.quick_estimate(&baseline));
    }

    let selection: Selection = selected.into_iter().collect();
    let options = service.improvements(&baseline);
    let projection = service.project(&baseline, &selection);

    render_roadmap(&baseline, estimated, &options, &selection, projection);

    if let Some(path) = save {
        let scenario_name = name.unwrap_or_else(|| format!("CRS {} roadmap", baseline.crs));
        let scenario = SavedScenario::new(scenario_name.clone(), baseline, selection);
        let stored = store_saved_scenario(&path, scenario)?;
        println!(
            "\nSaved '{}' to {} ({} scenario(s) stored)",
            scenario_name,
            path.display(),
            stored
        );
    }

    Ok(())
}

pub(crate) fn run_scenarios(args: ScenariosArgs) -> Result<(), AppError> {
    if let Some(target) = args.delete {
        match remove_saved_scenario(&args.file, &target)? {
            Some(removed) => println!("Removed '{}' from {}", removed.name, args.file.display()),
            None => println!("No saved scenario matches '{target}' in {}", args.file.display()),
        }
        return Ok(());
    }

    let scenarios = load_saved_scenarios(&args.file)?;
    if scenarios.is_empty() {
        println!("No saved scenarios in {}", args.file.display());
        return Ok(());
    }

    println!("Saved scenarios in {}", args.file.display());
    for (position, scenario) in scenarios.iter().enumerate() {
        let projection = scenario.projection();
        let keys: Vec<&str> = scenario
            .selection
            .selected()
            .map(|key| key.as_str())
            .collect();
        println!(
            "{}. {} (saved {}): CRS {} + [{}] -> {}",
            position + 1,
            scenario.name,
            scenario.created_at.format("%Y-%m-%d %H:%M UTC"),
            scenario.baseline.crs,
            if keys.is_empty() {
                "none".to_string()
            } else {
                keys.join(", ")
            },
            format_range(projection)
        );
    }

    Ok(())
}

fn format_range(range: PointRange) -> String {
    if range.min == range.max {
        range.min.to_string()
    } else {
        format!("{}-{}", range.min, range.max)
    }
}

fn render_breakdown(profile: &Profile, breakdown: &ScoreBreakdown, rule_set: &str) {
    println!("CRS core breakdown (rule set {rule_set})");
    println!(
        "Profile: age {}, {}, {}, Canadian experience {} month(s)",
        profile.age,
        profile.marital_status.as_str(),
        profile.education.as_str(),
        profile.canadian_experience_months
    );

    let components = &breakdown.components;
    println!("\nComponents");
    println!("- Age: {}", components.age);
    println!("- Education: {}", components.education);
    println!(
        "- First language: {} ({})",
        components.first_language,
        profile
            .first_language
            .skills()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" / ")
    );
    println!("- Canadian experience: {}", components.canadian_experience);
    println!("\nTotal: {}", breakdown.total);

    if !breakdown.notes.is_empty() {
        println!("\nNotes");
        for note in &breakdown.notes {
            println!("- {note}");
        }
    }
}

fn render_roadmap(
    baseline: &Baseline,
    estimated: bool,
    options: &[ImprovementOption],
    selection: &Selection,
    projection: PointRange,
) {
    if estimated {
        println!("Baseline CRS: {} (quick estimate)", baseline.crs);
    } else {
        println!("Baseline CRS: {}", baseline.crs);
    }

    println!("\nImprovements ranked by estimated gain");
    for option in options {
        let marker = if selection.is_selected(option.key) {
            "*"
        } else {
            " "
        };
        println!(
            "{} {:<32} +{:<9} {:?} effort | {}",
            marker,
            option.label,
            format_range(option.range()),
            option.effort,
            option.rationale
        );
    }

    if selection.selected().next().is_none() {
        println!("\nNo improvements selected; use --select to project a scenario.");
    } else {
        println!("\nProjected CRS: {}", format_range(projection));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_range_collapses_fixed_awards() {
        assert_eq!(format_range(PointRange::new(600, 600)), "600");
        assert_eq!(format_range(PointRange::new(25, 55)), "25-55");
    }
}
