//! View model for the peek image viewer.
//!
//! This crate owns the pan/zoom state and the pointer state machine. It has no
//! windowing or GPU dependencies; the engine drives it with translated input
//! events and reads back a transform each frame.
//!
//! - [`coords`]: `Vec2` and the column-major `Mat3`
//! - [`view`]: `ViewState` and `ViewGeometry` (viewport size + image aspect)
//! - [`interaction`]: view events, the `reduce` transition function and
//!   `InteractionController`
//! - [`present`]: the `QuadTarget` seam a renderer implements

pub mod coords;
pub mod interaction;
pub mod present;
pub mod view;
