//! Pointer interaction: pan by left-drag, zoom toward the cursor with the wheel.
//!
//! The state machine has two phases, Idle and Dragging. [`reduce`] is the
//! whole transition function; [`InteractionController`] just holds its state.

mod controller;
mod event;
mod reducer;

pub use controller::InteractionController;
pub use event::{EventResponse, PointerButton, ViewEvent};
pub use reducer::{reduce, DragPhase, DragSession, InteractionState};
