//! Duo Pong entry point
//!
//! Opens the window and runs the frame loop: input, simulation step, render.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use duo_pong::consts::*;
use duo_pong::platform::FrameClock;
use duo_pong::renderer::{RenderState, ShaderSources};
use duo_pong::sim::{GameState, draw_list, tick};
use duo_pong::{AssetError, KeyboardState, sample_input};

struct Game {
    window: Option<Arc<Window>>,
    renderer: Option<RenderState>,
    state: GameState,
    keys: KeyboardState,
    clock: FrameClock,
    /// Fatal startup failure, reported after the loop exits
    failure: Option<AssetError>,
}

impl Game {
    fn new() -> Self {
        Self {
            window: None,
            renderer: None,
            state: GameState::new(),
            keys: KeyboardState::new(),
            clock: FrameClock::new(),
            failure: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AssetError> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .expect("Failed to create window"),
        );

        let (vertex_path, fragment_path) = ShaderSources::default_paths();
        let shaders = ShaderSources::load(&vertex_path, &fragment_path)?;
        let renderer = pollster::block_on(RenderState::new(Arc::clone(&window), &shaders))?;

        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    /// One pass of the frame loop
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.clock.delta();
        let input = sample_input(&self.keys, &self.state);
        tick(&mut self.state, &input, dt);

        if let Some(renderer) = &mut self.renderer {
            match renderer.render(&draw_list(&self.state)) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    renderer.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                    self.state.quit();
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        if !self.state.running {
            log::info!(
                "Game over after {} frames ({:?})",
                self.state.frames,
                self.state.end_reason
            );
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for Game {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.init(event_loop) {
            self.failure = Some(err);
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
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                log::info!("Close requested");
                self.state.quit();
            }
            WindowEvent::KeyboardInput { event, .. } => self.keys.handle_event(&event),
            WindowEvent::Focused(false) => self.keys.clear(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Quit arrived with this batch of events, don't start another frame
        if !self.state.running {
            event_loop.exit();
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Duo Pong starting...");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut game = Game::new();
    event_loop.run_app(&mut game).expect("Failed to run game");

    if let Some(err) = game.failure {
        log::error!("{err}");
        std::process::exit(1);
    }
    log::info!("Duo Pong exited");
}
