//! Topological sequencing of the skill gap.
//!
//! Orders gap members so every module appears after all of its
//! prerequisites, using Kahn's indegree-based algorithm restricted to the
//! subgraph induced by the gap.
//!
//! # Tie-breaking
//!
//! Among all zero-indegree candidates at a given step, the one with the
//! lowest `(phase order, sequence_order, skill id)` tuple is selected.
//! Roadmaps are regenerated and diffed, so the output must be a single
//! reproducible sequence for a given input — an unstable ordering (e.g.,
//! hash-map iteration) would break progress preservation downstream.
//!
//! # Reference
//! Kahn (1962), "Topological sorting of large networks"

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::error::EngineError;
use crate::gap::GapSet;
use crate::models::{ModuleStatus, OrderedModule, Skill, SkillGraph};

/// Selection key for the ready set. Derived `Ord` compares fields in
/// declaration order: phase first, then catalog sequence hint, then ID.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct ReadyKey {
    phase_order: u8,
    sequence_order: i32,
    skill_id: String,
}

impl ReadyKey {
    fn for_skill(skill: &Skill) -> Self {
        Self {
            phase_order: skill.phase.order(),
            sequence_order: skill.sequence_order,
            skill_id: skill.id.clone(),
        }
    }
}

/// Orders the gap into a learning sequence.
///
/// # Errors
/// - [`EngineError::UnknownSkill`] if a gap member is missing from the
///   graph (mismatched inputs).
/// - [`EngineError::CycleDetected`] if gap members still hold nonzero
///   indegree after processing. Load-time validation should make this
///   unreachable, but gap membership is computed per request, so the
///   check is kept rather than assumed away.
pub fn sequence(graph: &SkillGraph, gap: &GapSet) -> Result<Vec<OrderedModule>, EngineError> {
    // Indegree restricted to the induced subgraph over gap members.
    let mut indegree: BTreeMap<&str, usize> = BTreeMap::new();
    for id in gap.iter() {
        let degree = graph
            .prerequisites_of(id)
            .iter()
            .filter(|p| gap.contains(p))
            .count();
        indegree.insert(id, degree);
    }

    let mut ready: BinaryHeap<Reverse<ReadyKey>> = BinaryHeap::new();
    for (&id, &degree) in &indegree {
        if degree == 0 {
            let skill = lookup(graph, id)?;
            ready.push(Reverse(ReadyKey::for_skill(skill)));
        }
    }

    let mut ordered: Vec<OrderedModule> = Vec::with_capacity(gap.len());
    while let Some(Reverse(key)) = ready.pop() {
        let skill = lookup(graph, &key.skill_id)?;
        ordered.push(OrderedModule {
            skill_id: skill.id.clone(),
            slug: skill.slug.clone(),
            name: skill.name.clone(),
            phase: skill.phase,
            position: ordered.len(),
            resource_hours: skill.estimated_hours,
            is_optional: skill.is_optional,
            status: ModuleStatus::Pending,
        });

        for dependent in graph.dependents_of(&key.skill_id) {
            if let Some(degree) = indegree.get_mut(dependent.as_str()) {
                *degree -= 1;
                if *degree == 0 {
                    let skill = lookup(graph, dependent)?;
                    ready.push(Reverse(ReadyKey::for_skill(skill)));
                }
            }
        }
    }

    if ordered.len() < gap.len() {
        let stuck: Vec<String> = gap
            .iter()
            .filter(|id| ordered.iter().all(|m| m.skill_id != *id))
            .map(|id| id.to_string())
            .collect();
        return Err(EngineError::CycleDetected { cycle: stuck });
    }

    Ok(ordered)
}

fn lookup<'a>(graph: &'a SkillGraph, skill_id: &str) -> Result<&'a Skill, EngineError> {
    graph.skill(skill_id).ok_or_else(|| EngineError::UnknownSkill {
        skill_id: skill_id.to_string(),
        referenced_by: "gap set".to_string(),
    })
}
