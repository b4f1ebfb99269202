use crs_roadmap::error::AppError;
use crs_roadmap::scoring::{LanguageBenchmark, SavedScenario};
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_language_benchmark(raw: &str) -> Result<LanguageBenchmark, String> {
    let value = raw
        .trim()
        .parse::<u8>()
        .map_err(|err| format!("failed to parse '{raw}' as a CLB level ({err})"))?;
    LanguageBenchmark::try_from(value).map_err(|err| err.to_string())
}

/// Parse a whole number for the CLI, saturating at the `i32` bounds instead of rejecting it.
pub(crate) fn parse_saturating_i32(raw: &str) -> Result<i32, String> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value as i32),
        _ => Err(format!("failed to parse '{raw}' as a number")),
    }
}

/// Read a saved scenarios file. A missing or empty file holds no scenarios.
pub(crate) fn load_saved_scenarios(path: &Path) -> Result<Vec<SavedScenario>, AppError> {
    match fs::read(path) {
        Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(err) => Err(err.into()),
    }
}

/// Prepend `scenario` to the file (newest first) and return how many scenarios it now holds.
pub(crate) fn store_saved_scenario(path: &Path, scenario: SavedScenario) -> Result<usize, AppError> {
    let mut scenarios = load_saved_scenarios(path)?;
    scenarios.insert(0, scenario);
    let encoded = serde_json::to_vec_pretty(&scenarios)?;
    fs::write(path, encoded)?;
    Ok(scenarios.len())
}

/// Remove the scenario named `target`, or failing that the one at 1-based position `target`,
/// and rewrite the file. Returns the removed scenario, or `None` when nothing matched.
pub(crate) fn remove_saved_scenario(
    path: &Path,
    target: &str,
) -> Result<Option<SavedScenario>, AppError> {
    let mut scenarios = load_saved_scenarios(path)?;
    let position = scenarios
        .iter()
        .position(|scenario| scenario.name == target)
        .or_else(|| {
            target
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|index| (1..=scenarios.len()).contains(index))
                .map(|index| index - 1)
        });

    let Some(position) = position else {
        return Ok(None);
    };
    let removed = scenarios.remove(position);
    let encoded = serde_json::to_vec_pretty(&scenarios)?;
    fs::write(path, encoded)?;
    Ok(Some(removed))
}
