//! Glue between the engine runtime and the view model.

use anyhow::{Context, Result};
use peek_engine::coords::{ColorRgba, Viewport};
use peek_engine::core::{App, AppControl, FrameCtx, InputCtx, StartupCtx};
use peek_engine::input::{
    InputEvent, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};
use peek_engine::render::{ImageRenderer, RenderCtx, RenderTarget, TextureImage};
use peek_view::coords::Mat3;
use peek_view::interaction::{InteractionController, PointerButton, ViewEvent};
use peek_view::present::{present, QuadTarget};
use peek_view::view::ViewGeometry;

use crate::decode::DecodedImage;

#[derive(Debug, Copy, Clone)]
pub struct ViewerConfig {
    pub clear_color: ColorRgba,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self { clear_color: ColorRgba::black() }
    }
}

pub struct ViewerApp {
    config: ViewerConfig,
    /// Held until uploaded in `on_startup`.
    pending: Option<DecodedImage>,
    image_size: (u32, u32),
    controller: InteractionController,
    renderer: ImageRenderer,
}

impl ViewerApp {
    pub fn new(config: ViewerConfig, image: DecodedImage) -> Self {
        Self {
            config,
            image_size: (image.width, image.height),
            pending: Some(image),
            controller: InteractionController::new(),
            renderer: ImageRenderer::new(),
        }
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    fn geometry(&self, viewport: Viewport) -> ViewGeometry {
        let (w, h) = self.image_size;
        ViewGeometry::for_image(viewport.width, viewport.height, w, h)
    }

    /// Feeds one event to the controller. Returns whether the view moved.
    fn apply(&mut self, event: ViewEvent, viewport: Viewport) -> bool {
        let geometry = self.geometry(viewport);
        let before = *self.controller.view();
        self.controller.handle(event, &geometry);
        *self.controller.view() != before
    }
}

impl App for ViewerApp {
    fn on_startup(&mut self, ctx: &mut StartupCtx<'_, '_>) -> Result<()> {
        let image = self.pending.take().context("image already uploaded")?;
        let rgba = image.to_rgba8();

        self.renderer
            .upload(&ctx.render_ctx(), TextureImage::new(image.width, image.height, &rgba))
            .context("failed to upload image texture")?;

        log::info!(
            "uploaded {}x{} {} texture; surface {:?}",
            image.width,
            image.height,
            image.layout,
            ctx.gpu.surface_format()
        );
        Ok(())
    }

    fn on_input(&mut self, ctx: &mut InputCtx<'_>, event: &InputEvent) -> AppControl {
        if is_quit_key(event) {
            log::debug!("quit key pressed");
            return AppControl::Exit;
        }

        let Some(view_event) = to_view_event(event) else {
            return AppControl::Continue;
        };

        if self.apply(view_event, ctx.window.viewport()) {
            ctx.runtime.request_redraw();
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let geometry = self.geometry(ctx.window.viewport());
        let view = *self.controller.view();
        let renderer = &mut self.renderer;

        ctx.render(self.config.clear_color, |rctx, target| {
            let mut quad = GpuQuad { renderer, ctx: rctx, target };
            present(&view, &geometry, &mut quad);
        })
    }
}

/// [`QuadTarget`] backed by the GPU renderer for one frame.
struct GpuQuad<'a, 'c, 't> {
    renderer: &'a mut ImageRenderer,
    ctx: &'a RenderCtx<'c>,
    target: &'a mut RenderTarget<'t>,
}

impl QuadTarget for GpuQuad<'_, '_, '_> {
    fn set_transform(&mut self, transform: Mat3) {
        self.renderer.set_transform(transform.to_cols_array());
    }

    fn draw(&mut self) {
        self.renderer.render(self.ctx, self.target);
    }
}

fn is_quit_key(event: &InputEvent) -> bool {
    matches!(
        event,
        InputEvent::Key {
            key: Key::Escape | Key::Q,
            state: KeyState::Pressed,
            repeat: false,
            ..
        }
    )
}

/// Maps engine input to view-model events. Positions pass through in
/// physical pixels.
pub fn to_view_event(event: &InputEvent) -> Option<ViewEvent> {
    match *event {
        InputEvent::PointerMoved(PointerMoveEvent { x, y }) => Some(ViewEvent::PointerMoved { x, y }),

        InputEvent::PointerButton(PointerButtonEvent { button, state, .. }) => {
            let button = match button {
                MouseButton::Left => PointerButton::Left,
                MouseButton::Right => PointerButton::Right,
                MouseButton::Middle => PointerButton::Middle,
                MouseButton::Back | MouseButton::Forward | MouseButton::Other(_) => {
                    PointerButton::Other
                }
            };
            Some(match state {
                MouseButtonState::Pressed => ViewEvent::ButtonDown(button),
                MouseButtonState::Released => ViewEvent::ButtonUp(button),
            })
        }

        InputEvent::MouseWheel { delta, .. } => Some(ViewEvent::Wheel { delta: delta.vertical() }),

        _ => None,
    }
}
