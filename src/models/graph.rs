//! Skill graph model.
//!
//! The skill graph holds the full catalog of skills plus their prerequisite
//! edges, exposed as forward (dependents) and reverse (prerequisites)
//! adjacency views. The edge set must form a DAG; that invariant is
//! enforced at construction time by [`crate::loader::load_graph`], which is
//! the only way to obtain a `SkillGraph`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Skill;

/// A directed prerequisite relationship between two skills.
///
/// `(skill_id, prerequisite_id)` reads as "`skill_id` requires
/// `prerequisite_id` first".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PrerequisiteEdge {
    /// The dependent skill.
    pub skill_id: String,
    /// The skill that must be learned before it.
    pub prerequisite_id: String,
}

impl PrerequisiteEdge {
    /// Creates an edge stating that `skill_id` requires `prerequisite_id`.
    pub fn new(skill_id: impl Into<String>, prerequisite_id: impl Into<String>) -> Self {
        Self {
            skill_id: skill_id.into(),
            prerequisite_id: prerequisite_id.into(),
        }
    }
}

/// The validated skill catalog graph.
///
/// Holds skills keyed by ID plus both adjacency directions. Instances are
/// acyclic by construction: [`crate::loader::load_graph`] rejects cycles,
/// dangling edge endpoints, and duplicate skill IDs before one is built,
/// so downstream stages never re-check those invariants.
#[derive(Debug, Clone, Default)]
pub struct SkillGraph {
    skills: BTreeMap<String, Skill>,
    /// prerequisite → skills that depend on it.
    dependents: BTreeMap<String, Vec<String>>,
    /// skill → its direct prerequisites.
    prerequisites: BTreeMap<String, Vec<String>>,
    edge_count: usize,
}

impl SkillGraph {
    /// Assembles a graph from pre-validated parts. Loader use only.
    pub(crate) fn from_parts(
        skills: BTreeMap<String, Skill>,
        dependents: BTreeMap<String, Vec<String>>,
        prerequisites: BTreeMap<String, Vec<String>>,
        edge_count: usize,
    ) -> Self {
        Self {
            skills,
            dependents,
            prerequisites,
            edge_count,
        }
    }

    /// Whether a skill with this ID exists.
    pub fn contains(&self, skill_id: &str) -> bool {
        self.skills.contains_key(skill_id)
    }

    /// Looks up a skill by ID.
    pub fn skill(&self, skill_id: &str) -> Option<&Skill> {
        self.skills.get(skill_id)
    }

    /// Iterates over all skills in ID order.
    pub fn skills(&self) -> impl Iterator<Item = &Skill> {
        self.skills.values()
    }

    /// Iterates over all skill IDs in sorted order.
    pub fn skill_ids(&self) -> impl Iterator<Item = &str> {
        self.skills.keys().map(|s| s.as_str())
    }

    /// Direct prerequisites of a skill (sorted by ID).
    pub fn prerequisites_of(&self, skill_id: &str) -> &[String] {
        self.prerequisites
            .get(skill_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Skills that directly depend on the given skill (sorted by ID).
    pub fn dependents_of(&self, skill_id: &str) -> &[String] {
        self.dependents
            .get(skill_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Skills with no prerequisites (roadmap entry points), in ID order.
    pub fn entry_skills(&self) -> Vec<&Skill> {
        self.skills
            .values()
            .filter(|s| self.prerequisites_of(&s.id).is_empty())
            .collect()
    }

    /// Number of skills.
    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    /// Number of distinct prerequisite edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no skills.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
