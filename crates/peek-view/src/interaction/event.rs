/// Pointer button as seen by the view model.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    Other,
}

/// Input events consumed by the interaction state machine.
///
/// Positions are raw pixels (top-left origin, +Y down); normalization against
/// the viewport happens inside the reducer. Button and wheel events act at the
/// last known pointer position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewEvent {
    PointerMoved { x: f32, y: f32 },
    ButtonDown(PointerButton),
    ButtonUp(PointerButton),
    /// Vertical wheel delta; only its sign is used.
    Wheel { delta: f32 },
}

/// Whether an event changed or was relevant to the view.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EventResponse {
    Handled,
    Unhandled,
}

impl EventResponse {
    #[inline]
    pub fn is_handled(self) -> bool {
        self == EventResponse::Handled
    }
}
