//! Domain types for the simulated review pipeline.
//!
//! Status enums (`CycleStatus`, `ReviewStatus`, `DraftStatus`) share one
//! shape: a finite forward-only chain exposed through `next()`, with the
//! owning type's `advance_status` erroring past the terminal value.

pub mod cycle;
pub mod draft;
pub mod employee;
pub mod feedback;
pub mod integration;
pub mod metrics;
pub mod signal;

pub use cycle::{CycleSettings, CycleStatus, ReviewCycle};
pub use draft::{DataSource, DraftStatus, ReviewDraft, ReviewSection};
pub use employee::{Employee, ReviewStatus};
pub use feedback::{PeerFeedback, Sentiment};
pub use integration::{ConnectionState, Platform, ToolIntegration};
pub use metrics::HrMetrics;
pub use signal::{SignalKind, WorkSignal};
