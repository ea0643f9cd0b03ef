//! Generation request models.
//!
//! The engine is invoked with fully materialized inputs: the target role's
//! required skill set (resolved by the catalog collaborator), the user's
//! known skills (the onboarding skip list), the weekly time commitment,
//! and the generation date (the caller's clock). Nothing here is owned
//! beyond the call.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The materialized role → required-skills mapping for one target role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRequirements {
    /// Role identifier (e.g., "backend-engineer").
    pub role: String,
    /// Skill IDs the role requires.
    pub required_skill_ids: BTreeSet<String>,
}

impl RoleRequirements {
    /// Creates requirements for a role with no skills yet.
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            required_skill_ids: BTreeSet::new(),
        }
    }

    /// Adds a required skill.
    pub fn with_skill(mut self, skill_id: impl Into<String>) -> Self {
        self.required_skill_ids.insert(skill_id.into());
        self
    }

    /// Adds several required skills.
    pub fn with_skills<I, S>(mut self, skill_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_skill_ids
            .extend(skill_ids.into_iter().map(Into::into));
        self
    }
}

/// Input for one roadmap generation call.
///
/// Regeneration (weekly-hours change, skip-list change, progress update)
/// is a fresh call with an updated input — never an in-place mutation of a
/// previous roadmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationInput {
    /// Target role with its required skill set.
    pub role: RoleRequirements,
    /// Skills the user already has (explicit skip list).
    pub known_skill_ids: BTreeSet<String>,
    /// Weekly study commitment in hours (must be positive).
    pub weekly_hours: u32,
    /// Generation date supplied by the caller's clock.
    pub generated_on: NaiveDate,
}

impl GenerationInput {
    /// Creates an input with an empty skip list.
    pub fn new(role: RoleRequirements, weekly_hours: u32, generated_on: NaiveDate) -> Self {
        Self {
            role,
            known_skill_ids: BTreeSet::new(),
            weekly_hours,
            generated_on,
        }
    }

    /// Adds a known skill to the skip list.
    pub fn with_known_skill(mut self, skill_id: impl Into<String>) -> Self {
        self.known_skill_ids.insert(skill_id.into());
        self
    }

    /// Adds several known skills to the skip list.
    pub fn with_known_skills<I, S>(mut self, skill_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_skill_ids
            .extend(skill_ids.into_iter().map(Into::into));
        self
    }
}
