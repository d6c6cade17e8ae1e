//! Castle Blast Demo
//!
//! Run with: `cargo run --bin castle-blast`
//!
//! A brick castle stands until you blow it up, watches its pieces
//! bounce, then reassembles itself for another go.
//!
//! Controls:
//! - Space or left-click: Detonate
//! - Mouse right-drag: Orbit the camera
//! - Scroll: Zoom in/out
//! - R: Reset camera
//! - F: Toggle fullscreen
//! - ESC: Exit

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowAttributes, WindowId};

use castle_blast_engine::audio::Sfx;
use castle_blast_engine::camera::OrbitCamera;
use castle_blast_engine::castle::{Castle, PLUNGER_TRAVEL};
use castle_blast_engine::input::{keyboard, DragMouseState, KeyboardState};
use castle_blast_engine::render::{CastleScene, GpuContext, GpuContextConfig};
use castle_blast_engine::settings::DemoSettings;
use castle_blast_engine::sim::director::PAUSE_SECS;
use castle_blast_engine::sim::CollapseDirector;

const DRAG_SENSITIVITY: f32 = 0.005;
const ZOOM_STEP: f32 = 1.5;

struct AppState {
    window: Arc<Window>,
    gpu: GpuContext,
    scene: CastleScene,

    castle: Castle,
    director: CollapseDirector,
    plunger_rest_y: f32,

    camera: OrbitCamera,
    keys: KeyboardState,
    mouse: DragMouseState,
    last_cursor: Option<(f64, f64)>,

    sfx: Option<Sfx>,
    sound_enabled: bool,

    start_time: Instant,
    last_frame: Instant,
}

impl AppState {
    fn new(window: Arc<Window>, settings: &DemoSettings) -> Self {
        let gpu = GpuContext::new(
            Arc::clone(&window),
            GpuContextConfig {
                vsync: settings.vsync,
                high_performance: true,
            },
        );
        let scene = CastleScene::new(&gpu);

        let castle = Castle::generate();
        log::info!(
            "castle generated: {} blocks, {} props",
            castle.blocks.len(),
            castle.props.len()
        );
        let plunger_rest_y = castle.props[castle.plunger_handle].position.y;

        let sfx = if settings.sound {
            match Sfx::new() {
                Ok(sfx) => Some(sfx),
                Err(err) => {
                    log::warn!("audio unavailable, running silent: {}", err);
                    None
                }
            }
        } else {
            None
        };

        let now = Instant::now();
        Self {
            window,
            gpu,
            scene,
            castle,
            director: CollapseDirector::new(),
            plunger_rest_y,
            camera: OrbitCamera::new(),
            keys: KeyboardState::new(),
            mouse: DragMouseState::new(),
            last_cursor: None,
            sfx,
            sound_enabled: settings.sound,
            start_time: now,
            last_frame: now,
        }
    }

    fn now(&self) -> f32 {
        self.start_time.elapsed().as_secs_f32()
    }

    fn detonate(&mut self) {
        let now = self.now();
        self.director.trigger(now);
        log::info!("detonation triggered, charges fire in {}s", PAUSE_SECS);
    }

    fn update(&mut self) {
        let now = self.now();
        let dt = self.last_frame.elapsed().as_secs_f32();
        self.last_frame = Instant::now();

        if self.keys.just_pressed(keyboard::KeyCode::Space) || self.mouse.consume_click() {
            self.detonate();
        }
        if self.keys.just_pressed(keyboard::KeyCode::R) {
            self.camera.reset();
        }
        if self.keys.just_pressed(keyboard::KeyCode::F) {
            self.toggle_fullscreen();
        }
        self.keys.end_frame();

        let (drag_x, drag_y) = self.mouse.consume_drag();
        if drag_x != 0.0 || drag_y != 0.0 {
            self.camera
                .rotate(drag_x * DRAG_SENSITIVITY, drag_y * DRAG_SENSITIVITY);
        }
        let scroll = self.mouse.consume_scroll();
        if scroll != 0.0 {
            self.camera.zoom(scroll * ZOOM_STEP);
        }

        let fired = self.director.update(now, dt, &mut self.castle.blocks);
        if fired {
            log::info!("charges fired");
            if self.sound_enabled {
                if let Some(sfx) = &self.sfx {
                    sfx.play_boom();
                }
            }
        }

        // Plunger rides down while a collapse is pending, back up after.
        let handle = &mut self.castle.props[self.castle.plunger_handle];
        handle.position.y = match self.director.elapsed(now) {
            Some(elapsed) if elapsed < PAUSE_SECS => self.plunger_rest_y - PLUNGER_TRAVEL,
            _ => self.plunger_rest_y,
        };

        self.scene.sync_instances(
            &self.gpu,
            &self.castle.blocks,
            &self.castle.visuals,
            &self.castle.props,
        );
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.scene.render(&self.gpu, &self.camera, self.now())
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.gpu.resize(size.width, size.height);
    }

    fn toggle_fullscreen(&self) {
        if self.window.fullscreen().is_some() {
            self.window.set_fullscreen(None);
        } else {
            self.window
                .set_fullscreen(Some(Fullscreen::Borderless(None)));
        }
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        let mapped = match key {
            KeyCode::Space => Some(keyboard::KeyCode::Space),
            KeyCode::KeyF => Some(keyboard::KeyCode::F),
            KeyCode::KeyR => Some(keyboard::KeyCode::R),
            KeyCode::Escape => Some(keyboard::KeyCode::Escape),
            _ => None,
        };
        if let Some(mapped) = mapped {
            self.keys.handle_key(mapped, pressed);
        }
    }

    fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Right => self.mouse.set_dragging(pressed),
            MouseButton::Left if pressed => self.mouse.record_click(),
            _ => {}
        }
    }

    fn handle_mouse_move(&mut self, x: f64, y: f64) {
        if let Some((last_x, last_y)) = self.last_cursor {
            self.mouse
                .accumulate_motion((x - last_x) as f32, (y - last_y) as f32);
        }
        self.last_cursor = Some((x, y));
    }

    fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 40.0,
        };
        self.mouse.accumulate_scroll(lines);
    }
}

struct App {
    settings: DemoSettings,
    state: Option<AppState>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let mut window_attrs = WindowAttributes::default()
            .with_title("Castle Blast - Space or click to detonate")
            .with_inner_size(PhysicalSize::new(self.settings.width, self.settings.height));
        if self.settings.fullscreen {
            window_attrs = window_attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );
        self.state = Some(AppState::new(window, &self.settings));

        log::info!("ready - Space/click detonates, right-drag orbits, scroll zooms");
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                state.resize(new_size);
            }
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;

                if key == KeyCode::Escape && pressed {
                    event_loop.exit();
                    return;
                }

                state.handle_key(key, pressed);
            }
            WindowEvent::MouseInput {
                button,
                state: btn_state,
                ..
            } => {
                state.handle_mouse_button(button, btn_state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                state.handle_mouse_move(position.x, position.y);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                state.handle_scroll(delta);
            }
            WindowEvent::RedrawRequested => {
                state.update();

                match state.render() {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.window.inner_size();
                        state.resize(size);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("out of GPU memory, exiting");
                        event_loop.exit();
                    }
                    Err(e) => log::warn!("render error: {:?}", e),
                }

                state.window.request_redraw();
            }
            _ => {}
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = DemoSettings::load();
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        settings,
        state: None,
    };
    event_loop.run_app(&mut app).expect("Event loop error");
}
