//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use brick_breaker::persistence::LocalStore;
    use brick_breaker::platform::KeyCommand;
    use brick_breaker::renderer::{RenderState, Scene};
    use brick_breaker::sim::{GameEvent, GamePhase};
    use brick_breaker::{GameLoop, Tuning};

    /// Game instance holding all state
    struct Game {
        game_loop: GameLoop<LocalStore>,
        render_state: Option<RenderState>,
        // Last phase shown in the DOM, so overlays are only touched on change
        shown_phase: Option<GamePhase>,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                game_loop: GameLoop::new(Tuning::load(), seed, LocalStore::default()),
                render_state: None,
                shown_phase: None,
            }
        }

        /// Update, draw, then refresh the HUD
        fn frame(&mut self, time: f64) {
            let events = match self.render_state.as_mut() {
                Some(render_state) => self.game_loop.run_frame(time, render_state),
                None => self.game_loop.frame(time),
            };
            for event in &events {
                match event {
                    GameEvent::NewHighScore { score } => {
                        log::info!("New high score: {}", score)
                    }
                    GameEvent::GameOver { won, score } => {
                        log::info!("Game over (won: {}), score {}", won, score)
                    }
                    _ => {}
                }
            }
            let scene = self.game_loop.scene();
            self.update_hud(&scene);
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self, scene: &Scene) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            set_text(&document, "hud-score", &scene.score.to_string());
            set_text(&document, "hud-high-score", &scene.high_score.to_string());

            if self.shown_phase == Some(scene.phase) {
                return;
            }
            self.shown_phase = Some(scene.phase);

            if let Some(el) = document.get_element_by_id("status") {
                match scene.status_text() {
                    Some(text) => {
                        el.set_text_content(Some(&text));
                        let class = if scene.won() { "won" } else { "" };
                        let _ = el.set_attribute("class", class);
                    }
                    None => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Canvas backing store matches the playfield; CSS handles scaling
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        let playfield = game.borrow().game_loop.state().tuning.playfield;
        let (width, height) = (playfield.x as u32, playfield.y as u32);
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&format!("Failed to create surface: {}", e)))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to get adapter: {}", e)))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, (playfield.x, playfield.y))
            .await
            .map_err(|e| JsValue::from_str(&format!("Renderer setup failed: {}", e)))?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone())?;

        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        // Start game loop
        request_animation_frame(game);

        log::info!("Brick Breaker running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Key down: steer or start
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let command = game.borrow_mut().game_loop.key_down(&event.key());
                if let Some(command) = command {
                    // Keep arrows and space from scrolling the page
                    event.prevent_default();
                    if command == KeyCommand::Start {
                        log::debug!("Start requested");
                    }
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up: stop steering
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().game_loop.key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Blur: key-ups are never delivered while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().game_loop.blur();
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless autopilot session: the paddle chases the ball until the round ends
#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use brick_breaker::persistence::MemoryStore;
    use brick_breaker::sim::{GameEvent, GamePhase};
    use brick_breaker::{GameLoop, StepMode, Tuning};

    const MAX_FRAMES: u32 = 60 * 60 * 5;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    pub fn run() {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let mut game =
            GameLoop::new(Tuning::default(), seed, MemoryStore::new()).with_mode(StepMode::fixed());

        game.key_down(" ");
        let mut held: Option<&str> = None;

        for frame in 0..MAX_FRAMES {
            let key = steer_toward_ball(&game);
            if key != held {
                if let Some(old) = held {
                    game.key_up(old);
                }
                if let Some(new) = key {
                    game.key_down(new);
                }
                held = key;
            }

            for event in game.frame(frame as f64 * FRAME_MS) {
                match event {
                    GameEvent::GameOver { won, score } => {
                        println!(
                            "Round over after {} frames: {} with {} / {} bricks",
                            frame,
                            if won { "cleared" } else { "ball lost" },
                            score,
                            game.state().total_bricks()
                        );
                    }
                    GameEvent::BrickBroken { row, col } => {
                        log::debug!("Frame {}: broke brick ({}, {})", frame, row, col)
                    }
                    _ => {}
                }
            }

            if matches!(game.state().phase, GamePhase::GameOver { .. }) {
                return;
            }
        }

        println!(
            "Stopped after {} frames with score {}",
            MAX_FRAMES,
            game.state().score
        );
    }

    fn steer_toward_ball<S: brick_breaker::persistence::HighScoreStore>(
        game: &GameLoop<S>,
    ) -> Option<&'static str> {
        let state = game.state();
        let offset = state.ball.rect.center().x - state.paddle.rect.center().x;
        if offset < -state.paddle.rect.width() / 4.0 {
            Some("ArrowLeft")
        } else if offset > state.paddle.rect.width() / 4.0 {
            Some("ArrowRight")
        } else {
            None
        }
    }
}
