//! Roadmap generation pipeline.
//!
//! Runs the stages in a strictly linear order — gap analysis,
//! topological sequencing, phase validation, time estimation — and
//! assembles the final [`Roadmap`]. Any stage error aborts the whole
//! call; there are no retries and no partial roadmaps.
//!
//! Every call is an independent pure computation over caller-supplied
//! immutable inputs: no shared state, no I/O, no clock reads. Identical
//! inputs therefore produce byte-identical output, which regeneration
//! diffing relies on.

use tracing::{debug, info};

use crate::error::{EngineError, InvalidInputError};
use crate::estimator::{estimate, EstimatorConfig};
use crate::gap::analyze_gap;
use crate::models::{
    GenerationInput, PreservedStatus, RegenerationResult, Roadmap, SkillGraph,
};
use crate::phases::assign_phases;
use crate::sequencer::sequence;

/// Generates a roadmap with the default estimator ratios.
///
/// # Example
/// ```
/// use roadmap_engine::catalog::{load_graph_from, resolve_role, InMemoryCatalog};
/// use roadmap_engine::generator::generate_roadmap;
/// use roadmap_engine::models::{GenerationInput, Phase, PrerequisiteEdge, Skill};
///
/// let catalog = InMemoryCatalog::new()
///     .with_skill(Skill::new("http").with_phase(Phase::Foundation).with_estimated_hours(4.0))
///     .with_skill(Skill::new("rest").with_phase(Phase::Core).with_estimated_hours(6.0))
///     .with_edge(PrerequisiteEdge::new("rest", "http"))
///     .with_role("backend", ["rest"]);
///
/// let graph = load_graph_from(&catalog).unwrap();
/// let role = resolve_role(&catalog, "backend").unwrap();
/// let today = chrono::NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
///
/// let roadmap = generate_roadmap(&graph, &GenerationInput::new(role, 5, today)).unwrap();
/// assert_eq!(roadmap.module_count(), 2);
/// assert_eq!(roadmap.modules[0].skill_id, "http");
/// ```
pub fn generate_roadmap(
    graph: &SkillGraph,
    input: &GenerationInput,
) -> Result<Roadmap, EngineError> {
    generate_roadmap_with(graph, input, &EstimatorConfig::default())
}

/// Generates a roadmap with explicit estimator configuration.
pub fn generate_roadmap_with(
    graph: &SkillGraph,
    input: &GenerationInput,
    config: &EstimatorConfig,
) -> Result<Roadmap, EngineError> {
    validate_input(graph, input)?;

    let gap = analyze_gap(graph, &input.role, &input.known_skill_ids)?;
    debug!(
        role = %input.role.role,
        required = input.role.required_skill_ids.len(),
        known = input.known_skill_ids.len(),
        gap = gap.len(),
        "gap analyzed"
    );

    let ordered = sequence(graph, &gap)?;
    let phases = assign_phases(graph, &ordered)?;
    let projection = estimate(&ordered, input.weekly_hours, input.generated_on, config)?;
    info!(
        role = %input.role.role,
        modules = ordered.len(),
        total_hours = projection.total_hours,
        completion = %projection.projected_completion_date,
        "roadmap generated"
    );

    Ok(Roadmap {
        target_role: input.role.role.clone(),
        total_hours: projection.total_hours,
        weekly_hours: input.weekly_hours,
        generated_on: input.generated_on,
        modules: ordered,
        phases,
        projection,
    })
}

/// Regenerates a roadmap and reports which module statuses carry over.
///
/// The fresh roadmap is all-`Pending`. `preserved` lists modules present
/// in both the previous and new sequences whose previous status was
/// started; applying them to the stored roadmap is the caller's diff.
pub fn regenerate_roadmap(
    previous: &Roadmap,
    graph: &SkillGraph,
    input: &GenerationInput,
) -> Result<RegenerationResult, EngineError> {
    regenerate_roadmap_with(previous, graph, input, &EstimatorConfig::default())
}

/// Regeneration with explicit estimator configuration.
pub fn regenerate_roadmap_with(
    previous: &Roadmap,
    graph: &SkillGraph,
    input: &GenerationInput,
    config: &EstimatorConfig,
) -> Result<RegenerationResult, EngineError> {
    let roadmap = generate_roadmap_with(graph, input, config)?;

    let preserved: Vec<PreservedStatus> = previous
        .modules
        .iter()
        .filter(|m| m.status.is_started() && roadmap.module_for_skill(&m.skill_id).is_some())
        .map(|m| PreservedStatus {
            skill_id: m.skill_id.clone(),
            status: m.status,
        })
        .collect();
    debug!(
        previous = previous.module_count(),
        current = roadmap.module_count(),
        preserved = preserved.len(),
        "regeneration diff computed"
    );

    Ok(RegenerationResult { roadmap, preserved })
}

fn validate_input(graph: &SkillGraph, input: &GenerationInput) -> Result<(), EngineError> {
    if input.weekly_hours == 0 {
        return Err(InvalidInputError::WeeklyHoursNotPositive.into());
    }
    for skill_id in &input.known_skill_ids {
        if !graph.contains(skill_id) {
            return Err(InvalidInputError::UnknownSkillInProfile(skill_id.clone()).into());
        }
    }
    Ok(())
}
