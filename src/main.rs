use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use freelook::camera::{Camera, LookMode};
use freelook::cli::Cli;
use freelook::config::CameraConfig;
use freelook::core::clock::Clock;
use freelook::core::controller::Controller;
use freelook::core::input_adapter::WinitController;

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;
const STATUS_INTERVAL: f32 = 1.0;

struct App {
    window: Option<Window>,
    camera: Camera,
    controller: WinitController,
    clock: Clock,
    status_timer: f32,
    /// Right button held: look updates preview until release commits them.
    dragging: bool,
}

impl App {
    fn new(config: CameraConfig) -> Self {
        Self {
            window: None,
            camera: Camera::new(config),
            controller: WinitController::new(),
            clock: Clock::new(),
            status_timer: 0.0,
            dragging: false,
        }
    }

    fn handle_key(&mut self, event: &KeyEvent, event_loop: &ActiveEventLoop) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        match event.physical_key {
            PhysicalKey::Code(KeyCode::Escape) => {
                if self.dragging {
                    // Cancel the in-progress free-look instead of quitting.
                    self.camera.apply_look(0.0, 0.0, LookMode::Revert);
                    self.dragging = false;
                } else {
                    event_loop.exit();
                }
            }
            PhysicalKey::Code(KeyCode::KeyR) => self.camera.restore_initial(),
            PhysicalKey::Code(KeyCode::KeyL) => {
                self.camera.look_enabled = !self.camera.look_enabled;
                println!(
                    "look {}",
                    if self.camera.look_enabled { "enabled" } else { "disabled" }
                );
            }
            _ => {}
        }
    }

    fn update(&mut self) {
        let delta = self.clock.tick();

        let (dx, dy) = self.controller.take_mouse_delta();
        if self.dragging {
            // Window y grows downward; flip so moving the mouse up looks up.
            self.camera.apply_look(dx, -dy, LookMode::Preview);
        }

        let scroll = self.controller.take_scroll_delta();
        if scroll != 0.0 {
            self.camera.apply_zoom(scroll);
        }

        for button in self.controller.down_buttons() {
            if let Some(direction) = button.move_direction() {
                self.camera.apply_movement(direction, delta);
            }
        }

        self.status_timer += delta;
        if self.status_timer >= STATUS_INTERVAL {
            let pose = self.camera.pose();
            println!(
                "pos {:?}  yaw {:.1}  pitch {:.1}  fov {:.1}",
                self.camera.position(),
                pose.yaw,
                pose.pitch,
                self.camera.zoom()
            );
            self.status_timer = 0.0;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attributes = Window::default_attributes()
                .with_title("freelook")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                ));
            match event_loop.create_window(attributes) {
                Ok(window) => {
                    self.window = Some(window);
                    self.clock.reset();
                }
                Err(e) => {
                    eprintln!("Failed to create window: {}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.controller.process_event(&event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(&event, event_loop),
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Right {
                    match state {
                        ElementState::Pressed => {
                            // Deltas accumulated before the drag started
                            // must not leak into the first look update.
                            let _ = self.controller.take_mouse_delta();
                            self.dragging = true;
                        }
                        ElementState::Released => {
                            if self.dragging {
                                self.camera.apply_look(0.0, 0.0, LookMode::Commit);
                                self.dragging = false;
                            }
                        }
                    }
                }
            }
            WindowEvent::RedrawRequested => self.update(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = match &cli.preset {
        Some(path) => CameraConfig::from_file(path)?,
        None => CameraConfig::default(),
    };
    if let Some(speed) = cli.speed {
        config.movement_speed = speed;
    }
    if let Some(sensitivity) = cli.sensitivity {
        config.look_sensitivity = sensitivity;
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    println!("freelook - WASD/Space move, right-drag look (Esc cancels), R reset, L toggle look, scroll zoom");
    event_loop.run_app(&mut app)?;

    Ok(())
}
