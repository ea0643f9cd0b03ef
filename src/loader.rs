//! Skill graph loading and integrity validation.
//!
//! Turns the catalog's flat skill list and prerequisite edge list into a
//! validated [`SkillGraph`]. Detects:
//! - Duplicate skill IDs
//! - Edges referencing nonexistent skills
//! - Circular prerequisite dependencies (DAG validation)
//!
//! Duplicate *edges* are not an error — inserting the same edge twice is
//! idempotent. A cycle, however, is fatal: a corrupt catalog must never
//! proceed to produce a bogus roadmap, so the cycle check runs on every
//! load rather than being trusted to upstream tooling.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (DFS,
//! back-edge cycle detection)

use std::collections::{BTreeMap, BTreeSet};

use crate::error::EngineError;
use crate::models::{PrerequisiteEdge, Skill, SkillGraph};

/// Builds a validated skill graph from catalog data.
///
/// # Errors
/// - [`EngineError::DuplicateSkill`] if two skills share an ID.
/// - [`EngineError::UnknownSkill`] if an edge endpoint does not exist.
/// - [`EngineError::CycleDetected`] if the prerequisite edges contain a
///   cycle; the error names the participating skill IDs in traversal
///   order.
pub fn load_graph(
    skills: Vec<Skill>,
    edges: Vec<PrerequisiteEdge>,
) -> Result<SkillGraph, EngineError> {
    let mut by_id: BTreeMap<String, Skill> = BTreeMap::new();
    for skill in skills {
        let id = skill.id.clone();
        if by_id.insert(id.clone(), skill).is_some() {
            return Err(EngineError::DuplicateSkill { skill_id: id });
        }
    }

    // Deduplicate edges as (prerequisite, dependent) pairs.
    let mut unique_edges: BTreeSet<(String, String)> = BTreeSet::new();
    for edge in &edges {
        if !by_id.contains_key(&edge.skill_id) {
            return Err(unknown_endpoint(&edge.skill_id, edge));
        }
        if !by_id.contains_key(&edge.prerequisite_id) {
            return Err(unknown_endpoint(&edge.prerequisite_id, edge));
        }
        unique_edges.insert((edge.prerequisite_id.clone(), edge.skill_id.clone()));
    }

    let mut dependents: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut prerequisites: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let edge_count = unique_edges.len();
    for (prerequisite, dependent) in unique_edges {
        dependents
            .entry(prerequisite.clone())
            .or_default()
            .push(dependent.clone());
        prerequisites.entry(dependent).or_default().push(prerequisite);
    }

    if let Some(cycle) = find_cycle(&by_id, &dependents) {
        return Err(EngineError::CycleDetected { cycle });
    }

    Ok(SkillGraph::from_parts(
        by_id,
        dependents,
        prerequisites,
        edge_count,
    ))
}

fn unknown_endpoint(skill_id: &str, edge: &PrerequisiteEdge) -> EngineError {
    EngineError::UnknownSkill {
        skill_id: skill_id.to_string(),
        referenced_by: format!(
            "prerequisite edge `{} -> {}`",
            edge.skill_id, edge.prerequisite_id
        ),
    }
}

/// Searches the whole graph for a prerequisite cycle.
///
/// DFS with an in-stack marker: a back edge to a node still on the
/// recursion stack closes a cycle, which is returned as the stack slice
/// from that node onward. Roots iterate in sorted ID order so the same
/// corrupt catalog always reports the same cycle.
fn find_cycle(
    skills: &BTreeMap<String, Skill>,
    dependents: &BTreeMap<String, Vec<String>>,
) -> Option<Vec<String>> {
    let mut visited: BTreeSet<&str> = BTreeSet::new();
    let mut in_stack: BTreeSet<&str> = BTreeSet::new();
    let mut path: Vec<&str> = Vec::new();

    for id in skills.keys() {
        if !visited.contains(id.as_str()) {
            if let Some(cycle) =
                cycle_dfs(id, dependents, &mut visited, &mut in_stack, &mut path)
            {
                return Some(cycle);
            }
        }
    }
    None
}

fn cycle_dfs<'a>(
    node: &'a str,
    dependents: &'a BTreeMap<String, Vec<String>>,
    visited: &mut BTreeSet<&'a str>,
    in_stack: &mut BTreeSet<&'a str>,
    path: &mut Vec<&'a str>,
) -> Option<Vec<String>> {
    visited.insert(node);
    in_stack.insert(node);
    path.push(node);

    if let Some(nexts) = dependents.get(node) {
        for next in nexts {
            if in_stack.contains(next.as_str()) {
                // Back edge: the cycle is the path from `next` to here.
                let start = path.iter().position(|p| *p == next.as_str()).unwrap_or(0);
                return Some(path[start..].iter().map(|s| s.to_string()).collect());
            }
            if !visited.contains(next.as_str()) {
                if let Some(cycle) =
                    cycle_dfs(next, dependents, visited, in_stack, path)
                {
                    return Some(cycle);
                }
            }
        }
    }

    in_stack.remove(node);
    path.pop();
    None
}
