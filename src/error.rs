//! Engine error taxonomy.
//!
//! Two families of failure exist and must stay distinguishable:
//!
//! - **Catalog-structural errors** (`UnknownSkill`, `DuplicateSkill`,
//!   `CycleDetected`, `PhaseOrderingViolation`): the reference data is
//!   corrupt. These are operator-visible data-quality incidents; retrying
//!   the request cannot fix them.
//! - **Input errors** (`InvalidInput`): the caller supplied a bad request
//!   and can retry after correcting it.
//!
//! Every stage error aborts the whole generation call. The engine never
//! partially generates a roadmap and never guesses a recovery.

use thiserror::Error;

use crate::models::Phase;

/// Errors produced by the roadmap engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A catalog record references a skill ID that does not exist.
    #[error("unknown skill `{skill_id}` referenced by {referenced_by}")]
    UnknownSkill {
        /// The missing skill ID.
        skill_id: String,
        /// What referenced it (an edge endpoint, a role requirement).
        referenced_by: String,
    },

    /// Two catalog skills share the same ID.
    #[error("duplicate skill id `{skill_id}` in catalog")]
    DuplicateSkill {
        /// The ID that appears more than once.
        skill_id: String,
    },

    /// The prerequisite edges contain a cycle.
    #[error("prerequisite cycle detected: {}", .cycle.join(" -> "))]
    CycleDetected {
        /// Participating skill IDs in traversal order.
        cycle: Vec<String>,
    },

    /// A skill's prerequisite sits in a later phase than the skill itself.
    #[error(
        "phase ordering violation: `{skill_id}` ({skill_phase}) requires \
         `{prerequisite_id}` ({prerequisite_phase})"
    )]
    PhaseOrderingViolation {
        /// The dependent skill.
        skill_id: String,
        /// Its phase.
        skill_phase: Phase,
        /// The prerequisite assigned to a later phase.
        prerequisite_id: String,
        /// The prerequisite's phase.
        prerequisite_phase: Phase,
    },

    /// The caller's request violated the input contract.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

impl EngineError {
    /// Whether this error indicates corrupted catalog data.
    ///
    /// Catalog incidents should be logged at high severity and surfaced to
    /// operators; they are not fixable by the requesting user.
    pub fn is_catalog_incident(&self) -> bool {
        !matches!(self, EngineError::InvalidInput(_))
    }
}

/// Caller contract violations — fixable per request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// Weekly hours must be positive to project a completion date.
    #[error("weekly hours must be positive")]
    WeeklyHoursNotPositive,

    /// The catalog has no requirements for the requested role.
    #[error("unknown target role `{0}`")]
    UnknownRole(String),

    /// The skip list names a skill the catalog does not contain.
    #[error("skip list references unknown skill `{0}`")]
    UnknownSkillInProfile(String),
}
