use crate::view::{ViewGeometry, ViewState};

use super::event::{EventResponse, ViewEvent};
use super::reducer::{reduce, DragPhase, InteractionState};

/// Owns the interaction state for one window and feeds events through
/// [`reduce`].
#[derive(Debug, Default)]
pub struct InteractionController {
    state: InteractionState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view(view: ViewState) -> Self {
        Self { state: InteractionState::with_view(view) }
    }

    pub fn handle(&mut self, event: ViewEvent, geometry: &ViewGeometry) -> EventResponse {
        let before = self.state;
        let (next, response) = reduce(before, event, geometry);

        if next.view.zoom_level != before.view.zoom_level {
            log::debug!(
                "zoom level {} -> {} (x{:.3})",
                before.view.zoom_level,
                next.view.zoom_level,
                next.view.zoom_factor()
            );
        }
        match (before.phase, next.phase) {
            (DragPhase::Idle, DragPhase::Dragging(_)) => log::trace!("drag start at {:?}", next.pointer),
            (DragPhase::Dragging(_), DragPhase::Idle) => log::trace!("drag end, center {:?}", next.view.center),
            _ => {}
        }

        self.state = next;
        response
    }

    #[inline]
    pub fn view(&self) -> &ViewState {
        &self.state.view
    }

    #[inline]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.state.phase.is_dragging()
    }
}
