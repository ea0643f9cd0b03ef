//! Roadmap domain models.
//!
//! Provides the core data types for roadmap generation: catalog reference
//! data (skills, prerequisite edges, the validated graph), per-request
//! input (role requirements, the user's skip list), and the generated
//! output (ordered modules, phase groups, time projections).
//!
//! Reference data is read-only to the engine; output types are built
//! fresh on every generation call and never mutated afterwards.

mod graph;
mod profile;
mod roadmap;
mod skill;

pub use graph::{PrerequisiteEdge, SkillGraph};
pub use profile::{GenerationInput, RoleRequirements};
pub use roadmap::{
    ModuleStatus, OrderedModule, PhaseGroup, PreservedStatus, RegenerationResult, Roadmap,
    TimeProjection,
};
pub use skill::{Phase, Skill};
