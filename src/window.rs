use std::sync::Arc;

use anyhow::Context;
use glam::UVec2;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    animation::{AnimationLoop, StopHandle},
    context::SceneContext,
    rendering::renderer::WgpuRenderer,
};

struct App {
    renderer: Option<WgpuRenderer>,
    context: SceneContext,
    animation: AnimationLoop,
    stop: StopHandle,
    max_ticks: Option<u64>,
}

impl App {
    fn new(context: SceneContext, animation: AnimationLoop, max_ticks: Option<u64>) -> Self {
        Self {
            renderer: None,
            stop: animation.stop_handle(),
            context,
            animation,
            max_ticks,
        }
    }

    fn create_renderer(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window_attributes = Window::default_attributes().with_title("plotgine");
        let window = event_loop
            .create_window(window_attributes)
            .context("Failed to create window")?;

        let renderer = pollster::block_on(WgpuRenderer::new(Arc::new(window)))?;
        let size = renderer.size;
        self.context
            .queue_resize(UVec2::new(size.width, size.height));
        renderer.window.request_redraw();
        self.renderer = Some(renderer);

        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        match self.animation.tick(&mut self.context, renderer) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.resize(renderer.size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory");
                self.stop.stop();
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Timeout");
            }
            Err(other) => {
                log::error!("Unexpected error: {:?}", other);
            }
        }

        if self
            .max_ticks
            .is_some_and(|max| self.animation.ticks() >= max)
        {
            log::info!("Reached {} frames, stopping", self.animation.ticks());
            self.stop.stop();
        }

        if self.stop.is_stopped() {
            event_loop.exit();
        } else {
            renderer.window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }

        if let Err(err) = self.create_renderer(event_loop) {
            log::error!("Failed to initialize renderer: {err:#}");
            self.stop.stop();
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.stop.stop();
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(new_size);
                }
                self.context
                    .queue_resize(UVec2::new(new_size.width, new_size.height));
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => (),
        }
    }
}

pub async fn run(
    context: SceneContext,
    animation: AnimationLoop,
    max_ticks: Option<u64>,
) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(context, animation, max_ticks);
    event_loop.run_app(&mut app)?;

    Ok(())
}
