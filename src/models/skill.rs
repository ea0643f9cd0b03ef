//! Skill (learning module) model.
//!
//! A skill is the smallest unit of learnable content. It belongs to a
//! phase, carries a time estimate, and may depend on other skills via
//! prerequisite edges (see [`super::graph`]).
//!
//! Skills are immutable reference data maintained by the content catalog;
//! the engine never mutates them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered learning phase a skill belongs to.
///
/// Phases partition a roadmap into stages. The derived `Ord` follows the
/// declaration order: `Foundation < Core < Advanced < Specialization`.
/// Sequencing must never place a module before any of its prerequisites,
/// and prerequisites must never sit in a later phase than their dependents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Phase {
    /// Entry-level groundwork.
    #[default]
    Foundation,
    /// The main body of role-specific material.
    Core,
    /// Deeper material building on the core.
    Advanced,
    /// Niche or role-differentiating topics.
    Specialization,
}

impl Phase {
    /// All phases in learning order.
    pub const ALL: [Phase; 4] = [
        Phase::Foundation,
        Phase::Core,
        Phase::Advanced,
        Phase::Specialization,
    ];

    /// Numeric rank used in sequencing tie-breaks (0 = earliest).
    pub fn order(self) -> u8 {
        match self {
            Phase::Foundation => 0,
            Phase::Core => 1,
            Phase::Advanced => 2,
            Phase::Specialization => 3,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Phase::Foundation => "Foundation",
            Phase::Core => "Core",
            Phase::Advanced => "Advanced",
            Phase::Specialization => "Specialization",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A skill (learning module) in the catalog.
///
/// `estimated_hours` is the resource time only — reading, watching,
/// following along. Practice time is derived by the estimator, not stored
/// here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    /// Unique skill identifier.
    pub id: String,
    /// URL-safe identifier.
    pub slug: String,
    /// Human-readable name.
    pub name: String,
    /// Short description of what the skill covers.
    pub description: String,
    /// Phase this skill belongs to.
    pub phase: Phase,
    /// Resource time estimate in hours (positive).
    pub estimated_hours: f64,
    /// Whether the skill is optional for its roles.
    pub is_optional: bool,
    /// Within-phase ordering hint, used only for deterministic tie-breaking.
    pub sequence_order: i32,
}

impl Skill {
    /// Creates a new skill with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: String::new(),
            name: String::new(),
            description: String::new(),
            phase: Phase::Foundation,
            estimated_hours: 0.0,
            is_optional: false,
            sequence_order: 0,
        }
    }

    /// Sets the URL-safe slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the phase.
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    /// Sets the resource time estimate in hours.
    pub fn with_estimated_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = hours;
        self
    }

    /// Marks the skill as optional.
    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    /// Sets the within-phase ordering hint.
    pub fn with_sequence_order(mut self, order: i32) -> Self {
        self.sequence_order = order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_builder() {
        let skill = Skill::new("rust-ownership")
            .with_slug("rust-ownership")
            .with_name("Ownership & Borrowing")
            .with_description("Move semantics, borrows, lifetimes")
            .with_phase(Phase::Core)
            .with_estimated_hours(12.5)
            .with_sequence_order(3);

        assert_eq!(skill.id, "rust-ownership");
        assert_eq!(skill.name, "Ownership & Borrowing");
        assert_eq!(skill.phase, Phase::Core);
        assert!((skill.estimated_hours - 12.5).abs() < 1e-10);
        assert!(!skill.is_optional);
        assert_eq!(skill.sequence_order, 3);
    }

    #[test]
    fn test_skill_optional() {
        let skill = Skill::new("extra").optional();
        assert!(skill.is_optional);
    }

    #[test]
    fn test_phase_ordering() {
        assert!(Phase::Foundation < Phase::Core);
        assert!(Phase::Core < Phase::Advanced);
        assert!(Phase::Advanced < Phase::Specialization);
    }

    #[test]
    fn test_phase_order_ranks() {
        let ranks: Vec<u8> = Phase::ALL.iter().map(|p| p.order()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Foundation.to_string(), "Foundation");
        assert_eq!(Phase::Specialization.to_string(), "Specialization");
    }
}
