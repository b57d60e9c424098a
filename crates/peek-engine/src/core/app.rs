use anyhow::Result;

use crate::input::InputEvent;

use super::ctx::{FrameCtx, InputCtx, StartupCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// Callbacks arrive on the event-loop thread in order: `on_startup` once,
/// before the first frame, then any interleaving of `on_input` and `on_frame`.
pub trait App {
    /// Called once the window and GPU exist. Create GPU resources here.
    ///
    /// An error aborts the runtime; [`crate::window::Runtime::run`] returns it.
    fn on_startup(&mut self, ctx: &mut StartupCtx<'_, '_>) -> Result<()> {
        let _ = ctx;
        Ok(())
    }

    /// Called for each translated input event.
    fn on_input(&mut self, ctx: &mut InputCtx<'_>, event: &InputEvent) -> AppControl {
        let _ = (ctx, event);
        AppControl::Continue
    }

    /// Called once per redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
