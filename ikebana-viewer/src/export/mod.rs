//! Point-cloud export of the export group.
//!
//! Triggered by `ExportRequested` once the base composition is in place.
//! Uploads are fire-and-forget: failures are logged and never retried.

/// ASCII PLY serialization.
pub mod ply;

/// Export-space vertex collection from branch meshes.
pub mod point_cloud;

/// Upload systems and the in-flight upload list.
pub mod upload;
