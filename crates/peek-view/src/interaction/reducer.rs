use crate::coords::Vec2;
use crate::view::{ViewGeometry, ViewState};

use super::event::{EventResponse, PointerButton, ViewEvent};

/// Pointer position and view center captured when a drag starts.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragSession {
    pub anchor_pointer: Vec2,
    pub anchor_center: Vec2,
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragPhase {
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragPhase::Dragging(_))
    }

    /// Moves the drag anchor to `pointer` / `center`.
    ///
    /// Idle carries no anchor, so this only has an effect mid-drag.
    fn reanchor(&mut self, pointer: Vec2, center: Vec2) {
        if let DragPhase::Dragging(session) = self {
            *session = DragSession { anchor_pointer: pointer, anchor_center: center };
        }
    }
}

/// Everything the interaction state machine owns.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct InteractionState {
    pub view: ViewState,
    /// Last pointer position in view space.
    pub pointer: Vec2,
    pub phase: DragPhase,
}

impl InteractionState {
    pub fn with_view(view: ViewState) -> Self {
        Self { view, ..Self::default() }
    }
}

/// Applies one event to `state`.
///
/// Pure: the same inputs always produce the same output, and no event can
/// fail. Non-left buttons and zero wheel deltas are reported as unhandled
/// and leave the state untouched.
pub fn reduce(
    mut state: InteractionState,
    event: ViewEvent,
    geometry: &ViewGeometry,
) -> (InteractionState, EventResponse) {
    let response = match event {
        ViewEvent::PointerMoved { x, y } => {
            state.pointer = geometry.normalize_pointer(x, y);
            if let DragPhase::Dragging(session) = state.phase {
                let scale = state.view.compute_scale(geometry);
                let center = session.anchor_center + (session.anchor_pointer - state.pointer) / scale;
                // At the far end of zoom-out the pan offset can overflow f32.
                if center.is_finite() {
                    state.view.center = center;
                }
            }
            EventResponse::Handled
        }

        ViewEvent::ButtonDown(PointerButton::Left) => {
            state.phase = DragPhase::Dragging(DragSession {
                anchor_pointer: state.pointer,
                anchor_center: state.view.center,
            });
            EventResponse::Handled
        }

        ViewEvent::ButtonUp(PointerButton::Left) => {
            if state.phase.is_dragging() {
                state.phase = DragPhase::Idle;
                EventResponse::Handled
            } else {
                EventResponse::Unhandled
            }
        }

        ViewEvent::ButtonDown(_) | ViewEvent::ButtonUp(_) => EventResponse::Unhandled,

        ViewEvent::Wheel { delta } => {
            if delta == 0.0 || delta.is_nan() {
                return (state, EventResponse::Unhandled);
            }
            if !zoom_at_pointer(&mut state, if delta > 0.0 { 1 } else { -1 }, geometry) {
                return (state, EventResponse::Unhandled);
            }
            state.phase.reanchor(state.pointer, state.view.center);
            EventResponse::Handled
        }
    };

    (state, response)
}

/// Changes the zoom level by `step` while keeping the image point under the
/// pointer fixed on screen.
///
/// Returns `false` and leaves the view untouched when the step would push the
/// scale or the center outside finite, non-zero `f32` range.
fn zoom_at_pointer(state: &mut InteractionState, step: i32, geometry: &ViewGeometry) -> bool {
    let world = state.view.world_at(state.pointer, geometry);
    let next = ViewState {
        zoom_level: state.view.zoom_level.saturating_add(step),
        ..state.view
    };
    let scale_after = next.compute_scale(geometry);
    if !(scale_after.is_finite() && scale_after.x > 0.0 && scale_after.y > 0.0) {
        return false;
    }

    let center = world - state.pointer / scale_after;
    if !center.is_finite() {
        return false;
    }

    state.view = ViewState { center, ..next };
    true
}
