//! Application driver and main loop
//!
//! Owns the window, the renderer, and the single `GameState` instance.
//! Pointer and wheel events mutate camera state between frames
//! (last-write-wins); each redraw ticks the cycle and draws one frame.

use std::sync::Arc;

use anyhow::{Context, Result};
use glam::Vec2;
use instant::Instant;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

use crate::config::GameConfig;
use crate::render::{scene, FrameBuffer, Renderer, TileAtlas};
use crate::state::GameState;

/// Tracks pointer state for drag-panning.
#[derive(Default)]
pub struct InputState {
    pub dragging: bool,
    pub cursor: Option<Vec2>,
}

pub struct App {
    window: Arc<Window>,
    renderer: Renderer,
    frame: FrameBuffer,
    atlas: TileAtlas,
    state: GameState,
    input: InputState,
    rng: Xoshiro256PlusPlus,
    zoom_in_step: f32,
    zoom_out_step: f32,
}

impl App {
    pub async fn new(config: &GameConfig, seed: Option<u64>) -> Result<(Self, EventLoop<()>)> {
        let event_loop = EventLoop::new().context("Failed to create event loop")?;

        let window_attrs = WindowAttributes::default()
            .with_title("Thronglets")
            .with_inner_size(LogicalSize::new(config.window.width, config.window.height));

        // Use deprecated create_window to avoid async complexity
        #[allow(deprecated)]
        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .context("Failed to create window")?,
        );

        // The frame buffer is sized once, from the window's inner size at
        // startup. Later resizes stretch it (see Renderer::resize).
        let inner = window.inner_size();
        let (frame_width, frame_height) = if inner.width > 0 && inner.height > 0 {
            (inner.width, inner.height)
        } else {
            (config.window.width, config.window.height)
        };

        let mut rng = match seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_os_rng(),
        };

        let state = GameState::new(config, &mut rng, Instant::now())?;

        let atlas = match &config.tileset {
            Some(path) => TileAtlas::load(path)?,
            None => TileAtlas::flat_colors(),
        };

        let renderer = Renderer::new(window.clone(), frame_width, frame_height).await?;

        log::info!(
            "App ready: {}x{} frame, {}x{} world",
            frame_width,
            frame_height,
            state.grid.width(),
            state.grid.height()
        );

        let app = Self {
            window,
            renderer,
            frame: FrameBuffer::new(frame_width, frame_height),
            atlas,
            state,
            input: InputState::default(),
            rng,
            zoom_in_step: config.camera.zoom_in_step,
            zoom_out_step: config.camera.zoom_out_step,
        };

        Ok((app, event_loop))
    }

    pub fn run(event_loop: EventLoop<()>, mut app: Self) -> Result<()> {
        event_loop.run_app(&mut app)?;
        Ok(())
    }

    /// Update phase, then render phase reading the state immutably.
    fn handle_redraw(&mut self) {
        self.state.cycle.tick(Instant::now(), &mut self.rng);

        scene::draw_scene(&mut self.frame, &self.state, &self.atlas, &mut self.rng);

        if let Err(e) = self.renderer.present(&self.frame) {
            log::error!("Render error: {e}");
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {
        // Window and renderer are created in `new`
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.renderer.resize(size.width, size.height);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    self.input.dragging = state == ElementState::Pressed;
                    log::debug!(
                        "Drag: {}",
                        if self.input.dragging { "start" } else { "end" }
                    );
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let pos = Vec2::new(position.x as f32, position.y as f32);
                if self.input.dragging {
                    if let Some(last) = self.input.cursor {
                        self.state.camera.pan_by_screen_delta(pos - last);
                        log::trace!("Pan: {:?}", self.state.camera.pan);
                    }
                }
                self.input.cursor = Some(pos);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => (pos.y / 50.0) as f32,
                };
                if scroll > 0.0 {
                    self.state.camera.zoom_by(self.zoom_in_step);
                } else if scroll < 0.0 {
                    self.state.camera.zoom_by(self.zoom_out_step);
                }
            }
            WindowEvent::RedrawRequested => {
                self.handle_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.window.request_redraw();
    }
}
