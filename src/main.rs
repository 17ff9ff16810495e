//! Multiball Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use multiball_pong::platform::{CancelToken, FrameLoop};
    use multiball_pong::renderer::{Frame, RenderState};
    use multiball_pong::sim::{Field, Game, KeyState};
    use multiball_pong::{Settings, StartupError};

    /// Everything one animation frame touches
    struct App {
        game: Game,
        frame_loop: FrameLoop,
        render_state: RenderState,
        show_fps: bool,
    }

    impl App {
        /// Update, draw and present one frame. False once the loop is cancelled.
        fn frame(&mut self, time: f64) -> bool {
            let viewport = Vec2::new(self.game.field.width, self.game.field.height);
            let Some(list) = self.frame_loop.step(&mut self.game, time) else {
                return false;
            };

            let frame = Frame::from_draw_list(list, viewport);
            match self.render_state.render(&frame) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    self.render_state.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }

            if self.show_fps {
                update_fps_hud(self.frame_loop.stats().fps());
            }
            true
        }
    }

    fn update_fps_hud(fps: u32) {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("hud-fps"))
        {
            el.set_text_content(Some(&fps.to_string()));
        }
    }

    pub async fn run() -> Result<(), StartupError> {
        console_error_panic_hook::set_once();
        let settings = Settings::load();
        console_log::init_with_level(settings.log_level())
            .map_err(|e| StartupError::Logger(e.to_string()))?;

        log::info!("Multiball Pong starting...");

        let window = web_sys::window().ok_or(StartupError::NoWindow)?;
        let document = window.document().ok_or(StartupError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(&settings.canvas_id)
            .ok_or_else(|| StartupError::CanvasNotFound {
                id: settings.canvas_id.clone(),
            })?
            .dyn_into()
            .map_err(|_| StartupError::NotACanvas {
                id: settings.canvas_id.clone(),
            })?;

        // The canvas' own width/height attributes define the play field
        let field = Field::from_canvas(canvas.width(), canvas.height());
        let (width, height) = (field.width as u32, field.height as u32);
        canvas.set_width(width);
        canvas.set_height(height);
        log::info!("Play field {}x{}", width, height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| StartupError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: settings.power_preference.as_wgpu(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| StartupError::Adapter(e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state =
            RenderState::new(surface, &adapter, width, height, (field.width, field.height))
                .await?;

        let token = CancelToken::new();
        let app = Rc::new(RefCell::new(App {
            game: Game::new(field),
            frame_loop: FrameLoop::new(token.clone()),
            render_state,
            show_fps: settings.show_fps,
        }));

        handle_input(&window, app.clone());
        setup_shutdown(&window, token);

        request_animation_frame(app);

        log::info!("Multiball Pong running!");
        Ok(())
    }

    /// Key listeners only flip flags; the frame loop reads them on its next update
    fn handle_input(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if KeyState::is_control_key(&key) {
                    event.prevent_default();
                }
                app.borrow_mut().game.keys.press(&key);
            });
            if let Err(e) =
                window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            {
                log::error!("Failed to register keydown: {:?}", e);
            }
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.keys.release(&event.key());
            });
            if let Err(e) =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())
            {
                log::error!("Failed to register keyup: {:?}", e);
            }
            closure.forget();
        }
    }

    /// Stop scheduling frames when the page goes away
    fn setup_shutdown(window: &web_sys::Window, token: CancelToken) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            log::info!("Page hidden, stopping frame loop");
            token.cancel();
        });
        if let Err(e) =
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())
        {
            log::error!("Failed to register pagehide: {:?}", e);
        }
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, frame loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let running = app.borrow_mut().frame(time);
        if running {
            request_animation_frame(app);
        } else {
            log::info!("Frame loop stopped");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await.map_err(|e| {
        log::error!("Startup failed: {}", e);
        JsValue::from_str(&e.to_string())
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use multiball_pong::Game;
    use multiball_pong::platform::{CancelToken, run_headless};

    env_logger::init();
    log::info!("Multiball Pong (native) starting...");
    log::info!(
        "Native mode runs the simulation headless - serve the wasm build for the playable game"
    );

    // Ten seconds at 60 Hz
    let mut game = Game::default();
    let frames = run_headless(&mut game, 600, CancelToken::new());

    log::info!("Ran {} frames", frames);
    for (i, ball) in game.balls.iter().enumerate() {
        log::info!(
            "ball {}: pos ({:.1}, {:.1}) vel ({}, {})",
            i,
            ball.pos.x,
            ball.pos.y,
            ball.vel.x,
            ball.vel.y
        );
    }
    log::info!(
        "paddles: left y={:.1}, right y={:.1}",
        game.left.pos.y,
        game.right.pos.y
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
