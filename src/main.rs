use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Context as _;
use clap::Parser;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use sector25d::camera::Camera;
use sector25d::color::BLACK;
use sector25d::config::Config;
use sector25d::hud::Hud;
use sector25d::input::{Action, Binding, InputQuery, InputSystem};
use sector25d::level;
use sector25d::player::Movement;
use sector25d::renderer::SectorRenderer;
use sector25d::scaler::{ScaleLut, blit_letterboxed, build_scale_lut};
use sector25d::world::World;

const MAX_DT: Duration = Duration::from_millis(100);

struct App {
    config: Config,
    window: Option<Rc<Window>>,
    surface: Option<softbuffer::Surface<Rc<Window>, Rc<Window>>>,
    world: World,
    camera: Camera,
    renderer: SectorRenderer,
    hud: Hud,

    // Internal fixed-size framebuffer
    fb_small: Vec<u32>,
    fb_w: usize,
    fb_h: usize,

    scale_lut: ScaleLut,

    // Input and movement
    input: InputSystem,
    movement: Movement,
    last_tick: Instant,
    dt: f32,
}

impl App {
    fn new(config: Config, world: World) -> Self {
        let fb_w = config.render_width as usize;
        let fb_h = config.render_height as usize;
        let camera = level::spawn_camera();
        debug!(
            x = camera.pos[0],
            y = camera.pos[1],
            z = camera.pos[2],
            yaw = camera.yaw,
            "spawned camera"
        );

        Self {
            renderer: SectorRenderer::new(config.render_options()),
            config,
            window: None,
            surface: None,
            world,
            camera,
            hud: Hud::new(Instant::now()),

            fb_small: vec![0; fb_w * fb_h],
            fb_w,
            fb_h,

            scale_lut: ScaleLut::empty(),

            input: InputSystem::default(),
            movement: Movement::default(),
            last_tick: Instant::now(),
            dt: 0.0,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = match event_loop.create_window(attributes) {
            Ok(w) => Rc::new(w),
            Err(e) => {
                error!(error = %e, "failed to create window");
                event_loop.exit();
                return;
            }
        };

        let surface = softbuffer::Context::new(window.clone())
            .and_then(|context| softbuffer::Surface::new(&context, window.clone()));
        let surface = match surface {
            Ok(s) => s,
            Err(e) => {
                error!(error = %e, "failed to create softbuffer surface");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.scale_lut =
            build_scale_lut(size.width as usize, size.height as usize, self.fb_w, self.fb_h);
        info!(
            window_w = size.width,
            window_h = size.height,
            fb_w = self.fb_w,
            fb_h = self.fb_h,
            "window created"
        );

        window.request_redraw();
        self.surface = Some(surface);
        self.window = Some(window);
        self.last_tick = Instant::now();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("close requested, shutting down");
                event_loop.exit();
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => self.input.set(Binding::Key(code), state),

            WindowEvent::MouseInput { state, button, .. } => {
                self.input.set(Binding::Mouse(button), state)
            }

            WindowEvent::Focused(false) => self.input.release_all(),

            WindowEvent::RedrawRequested => {
                self.tick();
                if self.input.is_pressed(Action::Menu) {
                    info!("menu pressed, shutting down");
                    event_loop.exit();
                    return;
                }

                let (window, surface) = match (&self.window, &mut self.surface) {
                    (Some(w), Some(s)) if w.id() == id => (w, s),
                    _ => return,
                };

                let size = window.inner_size();
                let (Some(nw), Some(nh)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                else {
                    return; // Minimized window, skip drawing
                };
                let (dw, dh) = (size.width as usize, size.height as usize);

                // Set softbuffer to window size
                if let Err(e) = surface.resize(nw, nh) {
                    warn!(error = %e, "surface resize failed, dropping frame");
                    return;
                }

                let frame = self.renderer.render_frame(
                    &mut self.fb_small,
                    self.fb_w,
                    self.fb_h,
                    &self.world,
                    &self.camera,
                    self.dt,
                    &mut self.hud,
                );
                if let Err(e) = frame {
                    error!(error = %e, "frame failed to render");
                    event_loop.exit();
                    return;
                }

                let mut buf = match surface.buffer_mut() {
                    Ok(b) => b,
                    Err(e) => {
                        warn!(error = %e, "no surface buffer, dropping frame");
                        self.hud.discard();
                        return;
                    }
                };
                blit_letterboxed(&mut buf, dw, &self.fb_small, self.fb_w, &self.scale_lut, BLACK);
                self.hud.paint(&mut buf, dw, dh);

                if let Err(e) = buf.present() {
                    warn!(error = %e, "present failed");
                }

                if let Some(fps) = self.hud.fps.tick(Instant::now()) {
                    debug!(fps, "frame rate");
                }

                window.request_redraw();
            }

            WindowEvent::Resized(new_size) => {
                self.scale_lut = build_scale_lut(
                    new_size.width as usize,
                    new_size.height as usize,
                    self.fb_w,
                    self.fb_h,
                );
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl App {
    fn tick(&mut self) {
        // Compute dt with cap to avoid huge jumps if the app was paused
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick).min(MAX_DT);
        self.last_tick = now;
        self.dt = dt.as_secs_f32();

        self.input.update();
        self.movement.update(&mut self.camera, &self.input, self.dt);
    }
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let world = level::test_level().context("building the test level")?;
    info!(
        walls = world.walls().len(),
        sectors = world.sectors().len(),
        "level loaded"
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, world);
    event_loop.run_app(&mut app)?;
    info!("shut down");
    Ok(())
}
