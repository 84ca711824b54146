//! Two-phase remote optimization client.
//!
//! ## Run sequence
//!
//! ```text
//! StartOptimization
//!   └─> GET /optimize                 (RequestingBase)
//!   └─> clear group + panel, load 4   (LoadingBase, concurrent join)
//!   └─> attach, rebuild controls, ExportRequested
//!   └─> POST /optimize_extend         (RequestingExtension)
//!   └─> load middle3, then middle4    (LoadingExtension, sequential)
//!   └─> RunFinished
//! ```
//!
//! Any failure ends the run, logs it, and dismisses the loading indicator.
//! Only one run is in flight at a time; later start requests are refused.

/// `ureq` transport for the optimizer HTTP endpoints.
pub mod http;

/// Wire types for base, extension and upload payloads.
pub mod protocol;

/// Run state machine and its events.
pub mod run;

/// Transport trait and the `Optimizer` resource spawning calls on the IO pool.
pub mod transport;
