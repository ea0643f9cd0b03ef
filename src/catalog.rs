//! Catalog collaborator seam.
//!
//! The engine consumes three things from the content catalog: the skill
//! list, the prerequisite edges, and the role → required-skills mapping.
//! [`CatalogProvider`] is that contract; [`InMemoryCatalog`] is the
//! explicit cache object a caller materializes before invoking the
//! engine. No implicit global catalog state exists — tests and callers
//! pass the object in.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{EngineError, InvalidInputError};
use crate::loader::load_graph;
use crate::models::{PrerequisiteEdge, RoleRequirements, Skill, SkillGraph};

/// Read-only access to catalog reference data.
pub trait CatalogProvider {
    /// All skills in the catalog.
    fn skills(&self) -> &[Skill];

    /// All prerequisite edges.
    fn prerequisite_edges(&self) -> &[PrerequisiteEdge];

    /// Required skill IDs for a role, if the role exists.
    fn required_skills_for_role(&self, role: &str) -> Option<&BTreeSet<String>>;
}

/// A fully materialized catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    skills: Vec<Skill>,
    edges: Vec<PrerequisiteEdge>,
    roles: BTreeMap<String, BTreeSet<String>>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a skill.
    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    /// Adds a prerequisite edge.
    pub fn with_edge(mut self, edge: PrerequisiteEdge) -> Self {
        self.edges.push(edge);
        self
    }

    /// Registers a role and its required skill IDs.
    pub fn with_role<I, S>(mut self, role: impl Into<String>, skill_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles.insert(
            role.into(),
            skill_ids.into_iter().map(Into::into).collect(),
        );
        self
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn skills(&self) -> &[Skill] {
        &self.skills
    }

    fn prerequisite_edges(&self) -> &[PrerequisiteEdge] {
        &self.edges
    }

    fn required_skills_for_role(&self, role: &str) -> Option<&BTreeSet<String>> {
        self.roles.get(role)
    }
}

/// Loads and validates the skill graph from a provider.
pub fn load_graph_from(provider: &impl CatalogProvider) -> Result<SkillGraph, EngineError> {
    load_graph(
        provider.skills().to_vec(),
        provider.prerequisite_edges().to_vec(),
    )
}

/// Resolves a role name into materialized requirements.
///
/// # Errors
/// [`InvalidInputError::UnknownRole`] if the catalog has no entry for the
/// role — a per-request condition the caller can correct.
pub fn resolve_role(
    provider: &impl CatalogProvider,
    role: &str,
) -> Result<RoleRequirements, EngineError> {
    match provider.required_skills_for_role(role) {
        Some(skill_ids) => Ok(RoleRequirements {
            role: role.to_string(),
            required_skill_ids: skill_ids.clone(),
        }),
        None => Err(InvalidInputError::UnknownRole(role.to_string()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Phase;

    fn sample_catalog() -> InMemoryCatalog {
        InMemoryCatalog::new()
            .with_skill(
                Skill::new("sql")
                    .with_phase(Phase::Foundation)
                    .with_estimated_hours(6.0),
            )
            .with_skill(
                Skill::new("indexing")
                    .with_phase(Phase::Core)
                    .with_estimated_hours(4.0),
            )
            .with_edge(PrerequisiteEdge::new("indexing", "sql"))
            .with_role("data-engineer", ["sql", "indexing"])
    }

    #[test]
    fn test_load_graph_from_catalog() {
        let catalog = sample_catalog();
        let graph = load_graph_from(&catalog).unwrap();
        assert_eq!(graph.skill_count(), 2);
        assert_eq!(graph.prerequisites_of("indexing"), ["sql"]);
    }

    #[test]
    fn test_resolve_known_role() {
        let catalog = sample_catalog();
        let role = resolve_role(&catalog, "data-engineer").unwrap();
        assert_eq!(role.role, "data-engineer");
        assert_eq!(role.required_skill_ids.len(), 2);
    }

    #[test]
    fn test_resolve_unknown_role() {
        let catalog = sample_catalog();
        let err = resolve_role(&catalog, "astronaut").unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidInput(InvalidInputError::UnknownRole("astronaut".into()))
        );
        assert!(!err.is_catalog_incident());
    }

    #[test]
    fn test_catalog_load_rejects_corrupt_edges() {
        let catalog = sample_catalog().with_edge(PrerequisiteEdge::new("sql", "indexing"));
        let err = load_graph_from(&catalog).unwrap_err();
        assert!(matches!(err, EngineError::CycleDetected { .. }));
    }
}
