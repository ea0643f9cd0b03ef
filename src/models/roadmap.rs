//! Roadmap (solution) model.
//!
//! A roadmap is the fully materialized output of one generation call: the
//! ordered module sequence, its phase grouping, and the time projection.
//! Roadmaps are immutable once produced — "recalculation" means a fresh
//! generation call with updated inputs, which keeps the pipeline pure and
//! directly testable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Phase;

/// Progress state of a module.
///
/// The engine emits `Pending` only; transitions are owned by the external
/// progress tracker. Previous statuses are read back during regeneration
/// to report which modules keep their progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModuleStatus {
    /// Not started.
    #[default]
    Pending,
    /// Started but not finished.
    InProgress,
    /// Finished.
    Completed,
}

impl ModuleStatus {
    /// Whether the user has begun or finished the module.
    pub fn is_started(self) -> bool {
        !matches!(self, ModuleStatus::Pending)
    }
}

/// A gap skill annotated with its place in the learning sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderedModule {
    /// Skill ID this module teaches.
    pub skill_id: String,
    /// URL-safe slug (denormalized from the catalog for display).
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Phase the module belongs to.
    pub phase: Phase,
    /// Zero-based position in the overall sequence.
    pub position: usize,
    /// Resource time in hours (practice time is added by the estimator).
    pub resource_hours: f64,
    /// Whether the underlying skill is optional for the role.
    pub is_optional: bool,
    /// Progress state (`Pending` at generation time).
    pub status: ModuleStatus,
}

/// A contiguous run of modules sharing one phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseGroup {
    /// The shared phase.
    pub phase: Phase,
    /// Modules in sequence order.
    pub modules: Vec<OrderedModule>,
}

impl PhaseGroup {
    /// Sum of resource hours across the group's modules.
    pub fn total_resource_hours(&self) -> f64 {
        self.modules.iter().map(|m| m.resource_hours).sum()
    }
}

/// Aggregate time figures for a roadmap.
///
/// Internal fields keep full `f64` precision; only `total_hours` is
/// rounded, once, for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeProjection {
    /// Sum of per-module time (resource + practice), unbuffered.
    pub raw_total_hours: f64,
    /// Raw total with the pacing buffer applied.
    pub buffered_total_hours: f64,
    /// Buffered total rounded to the nearest whole hour.
    pub total_hours: u32,
    /// Buffered total divided by the weekly commitment.
    pub weeks_to_completion: f64,
    /// Generation date plus `ceil(weeks) * 7` days.
    pub projected_completion_date: NaiveDate,
}

/// A generated learning roadmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    /// Role this roadmap leads to.
    pub target_role: String,
    /// All modules in learning order.
    pub modules: Vec<OrderedModule>,
    /// The same modules grouped by phase (denormalized for rendering).
    pub phases: Vec<PhaseGroup>,
    /// Buffered total hours, rounded for display.
    pub total_hours: u32,
    /// Weekly commitment the projection was computed against.
    pub weekly_hours: u32,
    /// Date the roadmap was generated.
    pub generated_on: NaiveDate,
    /// Full-precision time figures.
    pub projection: TimeProjection,
}

impl Roadmap {
    /// Number of modules.
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Whether the roadmap has no modules (gap already closed).
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Finds the module for a given skill.
    pub fn module_for_skill(&self, skill_id: &str) -> Option<&OrderedModule> {
        self.modules.iter().find(|m| m.skill_id == skill_id)
    }

    /// Resource hours summed per phase, in phase order.
    pub fn hours_by_phase(&self) -> BTreeMap<Phase, f64> {
        let mut hours = BTreeMap::new();
        for module in &self.modules {
            *hours.entry(module.phase).or_insert(0.0) += module.resource_hours;
        }
        hours
    }
}

/// Output of [`crate::generator::regenerate_roadmap`].
///
/// The fresh roadmap is all-`Pending`; `preserved` lists modules present
/// in both the old and new sequences whose previous status was
/// `InProgress` or `Completed`. Applying them is the caller's diff, not
/// engine logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegenerationResult {
    /// The freshly generated roadmap.
    pub roadmap: Roadmap,
    /// Statuses the caller can carry over, in the previous sequence order.
    pub preserved: Vec<PreservedStatus>,
}

/// A module status retained across regeneration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreservedStatus {
    /// Skill present in both old and new sequences.
    pub skill_id: String,
    /// Its status in the previous roadmap.
    pub status: ModuleStatus,
}
