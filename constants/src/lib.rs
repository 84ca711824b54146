//! Fixed arrangement data shared by the viewer and any tooling around it.
//!
//! Everything here is read-only and known at compile time: the closed set of
//! branch slots, the flower-type catalog, vase presets, control ranges and
//! the optimizer endpoint paths.

/// Optimizer HTTP endpoint paths and server defaults.
pub mod endpoints;

/// Flower types with their model asset and ordered colour choices.
pub mod flowers;

/// Per-slot angle slider ranges, horizontal offsets and default colours.
pub mod slot_layout;

/// Branch slot enumeration and the slots filled by the base phase.
pub mod slots;

/// Vase presets keyed by display name.
pub mod vases;

pub use flowers::{COLORABLE_PART_NAME, FLOWER_TYPES, FlowerTypeInfo, NamedColor};
pub use slots::{AngleAxis, BranchSlot};
