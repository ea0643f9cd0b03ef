//! Time estimation and completion-date projection.
//!
//! Per-module time is resource time plus derived practice time; the
//! aggregate gets a pacing buffer before being divided by the user's
//! weekly commitment. Internal arithmetic keeps full `f64` precision and
//! rounds exactly once, at the display boundary, so rounding error never
//! compounds across modules.
//!
//! Both ratios are named configuration, not literals in the algorithm, so
//! they can be tuned without touching it.

use chrono::{Days, NaiveDate};

use crate::error::{EngineError, InvalidInputError};
use crate::models::{OrderedModule, TimeProjection};

/// Practice time as a fraction of resource time.
pub const DEFAULT_PRACTICE_RATIO: f64 = 0.5;

/// Pacing buffer applied to the raw total.
pub const DEFAULT_BUFFER_RATIO: f64 = 0.10;

/// Tunable estimation ratios.
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    /// Practice time per hour of resource time.
    pub practice_ratio: f64,
    /// Overhead fraction added to the raw total.
    pub buffer_ratio: f64,
}

impl EstimatorConfig {
    /// Creates a config with the default ratios.
    pub fn new() -> Self {
        Self {
            practice_ratio: DEFAULT_PRACTICE_RATIO,
            buffer_ratio: DEFAULT_BUFFER_RATIO,
        }
    }

    /// Sets the practice ratio.
    pub fn with_practice_ratio(mut self, ratio: f64) -> Self {
        self.practice_ratio = ratio;
        self
    }

    /// Sets the buffer ratio.
    pub fn with_buffer_ratio(mut self, ratio: f64) -> Self {
        self.buffer_ratio = ratio;
        self
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Full time for one module: resource plus practice hours.
pub fn module_hours(module: &OrderedModule, config: &EstimatorConfig) -> f64 {
    module.resource_hours * (1.0 + config.practice_ratio)
}

/// Computes aggregate hours and the projected completion date.
///
/// Weeks to completion is `buffered_total / weekly_hours`; the projected
/// date is the generation date plus `ceil(weeks)` whole weeks. An empty
/// module list projects completion on the generation date itself.
///
/// # Errors
/// [`InvalidInputError::WeeklyHoursNotPositive`] if `weekly_hours` is
/// zero — the division is a caller contract, not something to saturate
/// through.
pub fn estimate(
    ordered: &[OrderedModule],
    weekly_hours: u32,
    generated_on: NaiveDate,
    config: &EstimatorConfig,
) -> Result<TimeProjection, EngineError> {
    if weekly_hours == 0 {
        return Err(InvalidInputError::WeeklyHoursNotPositive.into());
    }

    let raw_total_hours: f64 = ordered.iter().map(|m| module_hours(m, config)).sum();
    let buffered_total_hours = raw_total_hours * (1.0 + config.buffer_ratio);
    let weeks_to_completion = buffered_total_hours / f64::from(weekly_hours);
    let projected_completion_date = generated_on
        .checked_add_days(Days::new(weeks_to_completion.ceil() as u64 * 7))
        .unwrap_or(NaiveDate::MAX);

    Ok(TimeProjection {
        raw_total_hours,
        buffered_total_hours,
        total_hours: buffered_total_hours.round() as u32,
        weeks_to_completion,
        projected_completion_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ModuleStatus, Phase};

    fn make_module(skill_id: &str, resource_hours: f64) -> OrderedModule {
        OrderedModule {
            skill_id: skill_id.into(),
            slug: skill_id.into(),
            name: skill_id.to_uppercase(),
            phase: Phase::Core,
            position: 0,
            resource_hours,
            is_optional: false,
            status: ModuleStatus::Pending,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_projection_fixed_today() {
        // 10 + 20 + 30 resource hours at 10 h/week.
        let modules = vec![
            make_module("a", 10.0),
            make_module("b", 20.0),
            make_module("c", 30.0),
        ];
        let today = date(2025, 1, 6);

        let projection =
            estimate(&modules, 10, today, &EstimatorConfig::default()).unwrap();

        // Raw: 60 * 1.5 = 90. Buffered: 90 * 1.1 = 99.
        assert!((projection.raw_total_hours - 90.0).abs() < 1e-9);
        assert!((projection.buffered_total_hours - 99.0).abs() < 1e-9);
        assert_eq!(projection.total_hours, 99);
        // 99 / 10 = 9.9 weeks → ceil 10 → 70 days.
        assert!((projection.weeks_to_completion - 9.9).abs() < 1e-9);
        assert_eq!(projection.projected_completion_date, date(2025, 3, 17));
    }

    #[test]
    fn test_buffered_total_additivity() {
        let modules = vec![make_module("a", 7.0), make_module("b", 3.5)];
        let config = EstimatorConfig::default();

        let projection = estimate(&modules, 5, date(2025, 1, 1), &config).unwrap();

        let expected: f64 = modules
            .iter()
            .map(|m| module_hours(m, &config))
            .sum::<f64>()
            * 1.10;
        assert!((projection.buffered_total_hours - expected).abs() < 1e-9);
        assert_eq!(projection.total_hours, expected.round() as u32);
    }

    #[test]
    fn test_rounding_happens_once() {
        // Fractions survive aggregation; only total_hours is rounded.
        let modules = vec![
            make_module("a", 0.9),
            make_module("b", 0.9),
            make_module("c", 0.9),
        ];
        let projection =
            estimate(&modules, 4, date(2025, 1, 1), &EstimatorConfig::default()).unwrap();

        // Raw 4.05, buffered 4.455 → displays as 4, keeps 4.455 internally.
        assert!((projection.buffered_total_hours - 4.455).abs() < 1e-9);
        assert_eq!(projection.total_hours, 4);
    }

    #[test]
    fn test_zero_weekly_hours_rejected() {
        let err = estimate(&[], 0, date(2025, 1, 1), &EstimatorConfig::default()).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidInput(InvalidInputError::WeeklyHoursNotPositive)
        );
        assert!(!err.is_catalog_incident());
    }

    #[test]
    fn test_empty_modules_complete_immediately() {
        let today = date(2025, 5, 10);
        let projection = estimate(&[], 8, today, &EstimatorConfig::default()).unwrap();

        assert_eq!(projection.total_hours, 0);
        assert!((projection.weeks_to_completion - 0.0).abs() < 1e-12);
        assert_eq!(projection.projected_completion_date, today);
    }

    #[test]
    fn test_exact_week_boundary_not_overshot() {
        // Unbuffered 30 hours at 10 h/week = exactly 3 weeks → 21 days,
        // no extra week from the ceiling.
        let config = EstimatorConfig::new().with_buffer_ratio(0.0);
        let modules = vec![make_module("a", 20.0)];
        let projection = estimate(&modules, 10, date(2025, 1, 1), &config).unwrap();

        assert!((projection.weeks_to_completion - 3.0).abs() < 1e-12);
        assert_eq!(projection.projected_completion_date, date(2025, 1, 22));
    }

    #[test]
    fn test_custom_ratios() {
        let config = EstimatorConfig::new()
            .with_practice_ratio(1.0)
            .with_buffer_ratio(0.0);
        let modules = vec![make_module("a", 10.0)];

        let projection = estimate(&modules, 10, date(2025, 1, 1), &config).unwrap();
        assert!((projection.raw_total_hours - 20.0).abs() < 1e-9);
        assert!((projection.buffered_total_hours - 20.0).abs() < 1e-9);
        assert_eq!(projection.total_hours, 20);
    }
}
