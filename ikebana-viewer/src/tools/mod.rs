//! Operator-facing tools.

/// Angle and colour controls bound to the branch registry.
pub mod control_panel;
