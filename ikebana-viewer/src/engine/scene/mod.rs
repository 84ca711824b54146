//! Scene graph: the export group with its branch pivots, plus the permanent
//! members (lights, vase) that never leave the scene.

/// Branch registry, marker components and the branch edit event.
pub mod branches;

/// Builds branch hierarchies from loaded models and clears the export group.
pub mod composer;

pub mod lighting;

/// Optional vase, loaded once at startup.
pub mod vase;
