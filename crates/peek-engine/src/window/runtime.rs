use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, InputCtx, StartupCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::translate_window_event;
use crate::input::InputState;

/// How the window is placed on screen.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum WindowMode {
    #[default]
    Windowed,
    /// Borderless fullscreen on the current monitor.
    Fullscreen,
}

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub mode: WindowMode,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "peek".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            mode: WindowMode::Windowed,
        }
    }
}

/// Runtime context passed to the application.
///
/// Commands are buffered and applied after the current callback returns.
#[derive(Default)]
pub struct RuntimeCtx {
    commands: Vec<Command>,
}

impl RuntimeCtx {
    /// Schedules a redraw. Frames are only produced on request.
    pub fn request_redraw(&mut self) {
        self.commands.push(Command::RequestRedraw);
    }

    /// Requests a normal shutdown.
    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }

    /// Shuts down and makes [`Runtime::run`] return `err`.
    pub fn fail(&mut self, err: anyhow::Error) {
        self.commands.push(Command::Fail(err));
    }

    /// Folds the buffered commands into one outcome. The first failure wins.
    pub(crate) fn take_pending(&mut self) -> Pending {
        let mut pending = Pending::default();
        for cmd in self.commands.drain(..) {
            match cmd {
                Command::RequestRedraw => pending.redraw = true,
                Command::Exit => pending.exit = true,
                Command::Fail(err) => {
                    pending.exit = true;
                    pending.fatal.get_or_insert(err);
                }
            }
        }
        pending
    }
}

#[derive(Debug)]
enum Command {
    RequestRedraw,
    Exit,
    Fail(anyhow::Error),
}

/// Net effect of one callback's commands.
#[derive(Debug, Default)]
pub(crate) struct Pending {
    pub redraw: bool,
    pub exit: bool,
    pub fatal: Option<anyhow::Error>,
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, then runs the event loop until the app exits or the
    /// window is closed.
    ///
    /// Returns the error from window/GPU creation or
    /// [`App::on_startup`](crate::core::App::on_startup), if any.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<WindowEntry>,
    started: bool,
    exit_requested: bool,
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            window: None,
            started: false,
            exit_requested: false,
            fatal: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::debug!("runtime aborting");
        self.fatal = Some(err);
        self.shutdown(event_loop);
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        // Drops the GPU before the window it borrows.
        self.window = None;
        event_loop.exit();
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let mut attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        if self.config.mode == WindowMode::Fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            input_state: InputState::default(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init)).context("GPU initialization failed")
            },
        }
        .try_build()
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let entry = self.create_window_entry(event_loop)?;

        let app = &mut self.app;
        entry.with(|fields| {
            let mut ctx = StartupCtx {
                window: WindowCtx { window: fields.window },
                gpu: fields.gpu,
            };
            app.on_startup(&mut ctx)
        })?;

        entry.with_window(|w| w.request_redraw());
        self.window = Some(entry);
        Ok(())
    }

    fn apply_commands(&mut self, event_loop: &ActiveEventLoop, mut ctx: RuntimeCtx) {
        let pending = ctx.take_pending();

        if let Some(err) = pending.fatal {
            self.fail(event_loop, err);
            return;
        }

        if pending.exit || self.exit_requested {
            self.shutdown(event_loop);
            return;
        }

        if pending.redraw {
            if let Some(entry) = self.window.as_ref() {
                entry.with_window(|w| w.request_redraw());
            }
        }
    }

    fn dispatch_input(&mut self, event: &WindowEvent) -> RuntimeCtx {
        let mut runtime_ctx = RuntimeCtx::default();

        let (app, window) = (&mut self.app, &mut self.window);
        let Some(entry) = window.as_mut() else {
            return runtime_ctx;
        };

        entry.with_mut(|fields| {
            let Some(ev) = translate_window_event(fields.input_state, event) else {
                return;
            };
            fields.input_state.apply_event(&ev);

            let mut ctx = InputCtx {
                window: WindowCtx { window: fields.window },
                runtime: &mut runtime_ctx,
            };
            if app.on_input(&mut ctx, &ev) == AppControl::Exit {
                runtime_ctx.exit();
            }
        });

        runtime_ctx
    }

    fn draw_frame(&mut self) -> RuntimeCtx {
        let mut runtime_ctx = RuntimeCtx::default();

        let (app, window) = (&mut self.app, &mut self.window);
        let Some(entry) = window.as_mut() else {
            return runtime_ctx;
        };

        entry.with_mut(|fields| {
            let mut ctx = FrameCtx {
                window: WindowCtx { window: fields.window },
                gpu: fields.gpu,
                runtime: &mut runtime_ctx,
            };
            if app.on_frame(&mut ctx) == AppControl::Exit {
                runtime_ctx.exit();
            }
        });

        runtime_ctx
    }

    fn resize_to_window(&mut self) {
        if let Some(entry) = self.window.as_mut() {
            entry.with_mut(|fields| {
                fields.gpu.resize(fields.window.inner_size());
                fields.window.request_redraw();
            });
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.started || self.exit_requested {
            return;
        }
        self.started = true;

        if let Err(e) = self.start(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let runtime_ctx = self.dispatch_input(&event);
        self.apply_commands(event_loop, runtime_ctx);
        if self.exit_requested {
            return;
        }

        // Runtime-managed window lifecycle / resize / redraw handling.
        match event {
            WindowEvent::CloseRequested => {
                log::debug!("window close requested");
                self.shutdown(event_loop);
            }

            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                self.resize_to_window();
            }

            WindowEvent::RedrawRequested => {
                let runtime_ctx = self.draw_frame();
                self.apply_commands(event_loop, runtime_ctx);
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_windowed_720p() {
        let c = RuntimeConfig::default();
        assert_eq!(c.mode, WindowMode::Windowed);
        assert_eq!(c.initial_size, LogicalSize::new(1280.0, 720.0));
    }

    #[test]
    fn runtime_ctx_folds_commands() {
        let mut ctx = RuntimeCtx::default();
        ctx.request_redraw();
        ctx.exit();
        let pending = ctx.take_pending();
        assert!(pending.redraw && pending.exit);
        assert!(pending.fatal.is_none());
        assert!(ctx.commands.is_empty());
    }

    #[test]
    fn failure_exits_and_keeps_the_first_error() {
        let mut ctx = RuntimeCtx::default();
        ctx.fail(anyhow::anyhow!("first"));
        ctx.fail(anyhow::anyhow!("second"));
        let pending = ctx.take_pending();
        assert!(pending.exit);
        assert_eq!(pending.fatal.map(|e| e.to_string()).as_deref(), Some("first"));
    }
}
