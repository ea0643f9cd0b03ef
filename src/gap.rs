//! Skill gap analysis.
//!
//! Subtracts the user's known skills from the target role's required set,
//! then closes the result over prerequisites: every transitive
//! prerequisite of a gap member joins the gap unless the user already
//! knows it. The sequencer can therefore rely on never encountering a
//! missing dependency.
//!
//! Output is a set — ordering is the sequencer's job.

use std::collections::{BTreeSet, VecDeque};

use crate::error::EngineError;
use crate::models::{RoleRequirements, SkillGraph};

/// The set of skills a user must still learn for a target role.
///
/// Prerequisite-complete by construction: for every member, each of its
/// prerequisites is either also a member or already known to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapSet {
    skills: BTreeSet<String>,
}

impl GapSet {
    /// Whether a skill is part of the gap.
    pub fn contains(&self, skill_id: &str) -> bool {
        self.skills.contains(skill_id)
    }

    /// Number of skills in the gap.
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Whether the gap is already closed.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Iterates over gap skill IDs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(|s| s.as_str())
    }
}

/// Computes the gap between a user's known skills and a role's requirements.
///
/// A required skill the user already knows is removed outright, and the
/// closure does not continue past it: known skills satisfy their whole
/// subtree as far as this roadmap is concerned. A prerequisite of a gap
/// member joins the gap even when the role does not list it directly.
///
/// # Errors
/// [`EngineError::UnknownSkill`] if the role requires a skill the catalog
/// does not contain — a catalog defect, not a user mistake.
pub fn analyze_gap(
    graph: &SkillGraph,
    role: &RoleRequirements,
    known_skill_ids: &BTreeSet<String>,
) -> Result<GapSet, EngineError> {
    let mut queue: VecDeque<&str> = VecDeque::new();
    for required in &role.required_skill_ids {
        if !graph.contains(required) {
            return Err(EngineError::UnknownSkill {
                skill_id: required.clone(),
                referenced_by: format!("requirements of role `{}`", role.role),
            });
        }
        if !known_skill_ids.contains(required) {
            queue.push_back(required);
        }
    }

    let mut skills: BTreeSet<String> = BTreeSet::new();
    while let Some(id) = queue.pop_front() {
        if !skills.insert(id.to_string()) {
            continue;
        }
        for prerequisite in graph.prerequisites_of(id) {
            if !known_skill_ids.contains(prerequisite) && !skills.contains(prerequisite) {
                queue.push_back(prerequisite);
            }
        }
    }

    Ok(GapSet { skills })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_graph;
    use crate::models::{Phase, PrerequisiteEdge, Skill};

    fn make_skill(id: &str, phase: Phase) -> Skill {
        Skill::new(id).with_phase(phase).with_estimated_hours(4.0)
    }

    /// C requires B requires A; E requires D; F standalone.
    fn sample_graph() -> SkillGraph {
        load_graph(
            vec![
                make_skill("A", Phase::Foundation),
                make_skill("B", Phase::Core),
                make_skill("C", Phase::Advanced),
                make_skill("D", Phase::Foundation),
                make_skill("E", Phase::Core),
                make_skill("F", Phase::Foundation),
            ],
            vec![
                PrerequisiteEdge::new("B", "A"),
                PrerequisiteEdge::new("C", "B"),
                PrerequisiteEdge::new("E", "D"),
            ],
        )
        .unwrap()
    }

    fn role(ids: &[&str]) -> RoleRequirements {
        RoleRequirements::new("sample-role").with_skills(ids.iter().copied())
    }

    fn known(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_gap_with_nothing_known() {
        let graph = sample_graph();
        let gap = analyze_gap(&graph, &role(&["A", "B", "C"]), &known(&[])).unwrap();
        let ids: Vec<&str> = gap.iter().collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_known_skills_removed() {
        let graph = sample_graph();
        let gap = analyze_gap(&graph, &role(&["A", "B", "C"]), &known(&["A"])).unwrap();
        let ids: Vec<&str> = gap.iter().collect();
        assert_eq!(ids, vec!["B", "C"]);
    }

    #[test]
    fn test_prerequisite_pulled_in_even_if_not_required() {
        // Role requires only C; A and B join via the prerequisite closure.
        let graph = sample_graph();
        let gap = analyze_gap(&graph, &role(&["C"]), &known(&[])).unwrap();
        let ids: Vec<&str> = gap.iter().collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_closure_stops_at_known_skill() {
        // B known: C still needs learning, but neither B nor A enters the gap.
        let graph = sample_graph();
        let gap = analyze_gap(&graph, &role(&["C"]), &known(&["B"])).unwrap();
        let ids: Vec<&str> = gap.iter().collect();
        assert_eq!(ids, vec!["C"]);
    }

    #[test]
    fn test_prerequisite_completeness() {
        let graph = sample_graph();
        let gap = analyze_gap(&graph, &role(&["C", "E"]), &known(&["D"])).unwrap();
        for id in gap.iter() {
            for prerequisite in graph.prerequisites_of(id) {
                assert!(
                    gap.contains(prerequisite) || prerequisite == "D",
                    "prerequisite `{prerequisite}` of `{id}` missing from gap"
                );
            }
        }
    }

    #[test]
    fn test_everything_known_yields_empty_gap() {
        let graph = sample_graph();
        let gap = analyze_gap(&graph, &role(&["A", "B", "C"]), &known(&["A", "B", "C"])).unwrap();
        assert!(gap.is_empty());
        assert_eq!(gap.len(), 0);
    }

    #[test]
    fn test_unknown_required_skill_is_catalog_error() {
        let graph = sample_graph();
        let err = analyze_gap(&graph, &role(&["MISSING"]), &known(&[])).unwrap_err();
        assert!(err.is_catalog_incident());
        assert!(matches!(
            err,
            EngineError::UnknownSkill { ref skill_id, .. } if skill_id == "MISSING"
        ));
    }

    #[test]
    fn test_diamond_closure_visits_shared_prerequisite_once() {
        // D requires B and C; both require A.
        let graph = load_graph(
            vec![
                make_skill("A", Phase::Foundation),
                make_skill("B", Phase::Core),
                make_skill("C", Phase::Core),
                make_skill("D", Phase::Advanced),
            ],
            vec![
                PrerequisiteEdge::new("B", "A"),
                PrerequisiteEdge::new("C", "A"),
                PrerequisiteEdge::new("D", "B"),
                PrerequisiteEdge::new("D", "C"),
            ],
        )
        .unwrap();

        let gap = analyze_gap(&graph, &role(&["D"]), &known(&[])).unwrap();
        let ids: Vec<&str> = gap.iter().collect();
        assert_eq!(ids, vec!["A", "B", "C", "D"]);
    }
}
