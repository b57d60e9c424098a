//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the
//! application: one startup callback, one callback per input event, one per
//! frame.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, InputCtx, StartupCtx, WindowCtx};
