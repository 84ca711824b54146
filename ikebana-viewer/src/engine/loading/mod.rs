//! Asynchronous model loading groups and the loading indicator.

/// Concurrent join (base phase) and strict sequence (extension phase) of
/// model loads, polled once per frame.
pub mod load_batch;

/// Loading indicator state, toggled by the optimization run.
pub mod overlay;
