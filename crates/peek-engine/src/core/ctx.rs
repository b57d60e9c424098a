use winit::window::Window;

use crate::coords::{ColorRgba, Viewport};
use crate::device::{Gpu, SurfaceErrorAction};
use crate::render::{RenderCtx, RenderTarget};
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Borrowed window handle.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Drawable size in physical pixels, never smaller than 1×1.
    pub fn viewport(&self) -> Viewport {
        Viewport::from(self.window.inner_size())
    }
}

/// Context for [`App::on_startup`](super::App::on_startup).
pub struct StartupCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a Gpu<'w>,
}

impl<'a, 'w> StartupCtx<'a, 'w> {
    /// Renderer context for creating GPU resources.
    pub fn render_ctx(&self) -> RenderCtx<'_> {
        RenderCtx::new(self.gpu.device(), self.gpu.queue(), self.gpu.surface_format())
    }
}

/// Context for [`App::on_input`](super::App::on_input).
pub struct InputCtx<'a> {
    pub window: WindowCtx<'a>,
    pub runtime: &'a mut RuntimeCtx,
}

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Acquires a frame, clears it to `clear`, calls `draw`, then presents.
    ///
    /// Surface errors are handled here: lost/outdated surfaces are
    /// reconfigured and the frame is skipped; fatal errors return
    /// [`AppControl::Exit`].
    pub fn render<F>(&mut self, clear: ColorRgba, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let action = self.gpu.handle_surface_error(&err);
                return skip_frame(action, err, self.runtime);
            }
        };

        // Clear pass, dropped before the draw callback records its own pass.
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("peek clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        let rctx = RenderCtx::new(self.gpu.device(), self.gpu.queue(), self.gpu.surface_format());

        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}

/// Decides what follows a frame that could not be acquired.
///
/// A fatal surface error becomes a runtime failure so the process does not
/// report a clean exit.
fn skip_frame(action: SurfaceErrorAction, err: wgpu::SurfaceError, runtime: &mut RuntimeCtx) -> AppControl {
    match action {
        SurfaceErrorAction::Fatal => {
            runtime.fail(anyhow::Error::new(err).context("unrecoverable surface error"));
            AppControl::Exit
        }
        SurfaceErrorAction::Reconfigured => {
            runtime.request_redraw();
            AppControl::Continue
        }
        SurfaceErrorAction::SkipFrame => AppControl::Continue,
    }
}
