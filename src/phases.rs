//! Phase validation and grouping.
//!
//! Each skill already carries its phase; this stage verifies that the
//! catalog's phase assignments are consistent with the dependency
//! structure, then groups the sorted sequence into contiguous phase runs.
//!
//! The invariant: no module may depend on a prerequisite assigned to a
//! later phase. A violation is a catalog authoring error — operators must
//! see it, so it is reported rather than silently reordered around.

use std::collections::BTreeMap;

use crate::error::EngineError;
use crate::models::{OrderedModule, PhaseGroup, SkillGraph};

/// Validates phase consistency and groups the sequence by phase.
///
/// # Errors
/// [`EngineError::PhaseOrderingViolation`] naming both the dependent
/// skill and its later-phase prerequisite. This is a data-quality
/// incident in the catalog, not a per-request condition.
pub fn assign_phases(
    graph: &SkillGraph,
    ordered: &[OrderedModule],
) -> Result<Vec<PhaseGroup>, EngineError> {
    let by_id: BTreeMap<&str, &OrderedModule> = ordered
        .iter()
        .map(|m| (m.skill_id.as_str(), m))
        .collect();

    for module in ordered {
        for prerequisite_id in graph.prerequisites_of(&module.skill_id) {
            if let Some(prerequisite) = by_id.get(prerequisite_id.as_str()) {
                if prerequisite.phase > module.phase {
                    return Err(EngineError::PhaseOrderingViolation {
                        skill_id: module.skill_id.clone(),
                        skill_phase: module.phase,
                        prerequisite_id: prerequisite_id.clone(),
                        prerequisite_phase: prerequisite.phase,
                    });
                }
            }
        }
    }

    // With the per-edge check passed, the phase-first tie-break makes the
    // sorted sequence monotonic in phase; verify the derived property.
    debug_assert!(
        ordered.windows(2).all(|w| w[0].phase <= w[1].phase),
        "sequence not monotonic in phase despite consistent catalog"
    );

    let mut groups: Vec<PhaseGroup> = Vec::new();
    for module in ordered {
        match groups.last_mut() {
            Some(group) if group.phase == module.phase => group.modules.push(module.clone()),
            _ => groups.push(PhaseGroup {
                phase: module.phase,
                modules: vec![module.clone()],
            }),
        }
    }

    Ok(groups)
}
