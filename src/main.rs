//! Balloon Pop entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{MouseEvent, TouchEvent};

    use balloon_pop::audio::web::HtmlMediaTrack;
    use balloon_pop::audio::{AudioError, AudioGate};
    use balloon_pop::consts::SPAWN_INTERVAL_MS;
    use balloon_pop::effects::ConfettiBurst;
    use balloon_pop::input::PointerInput;
    use balloon_pop::platform::{self, MessageOverlay};
    use balloon_pop::renderer::{FrameBatch, RenderState};
    use balloon_pop::{Scene, Settings};

    const CANVAS_ID: &str = "canvas";
    const MESSAGE_ID: &str = "message";
    const AMBIENT_ID: &str = "bgMusic";
    const POP_ID: &str = "popSound";

    type WebScene = Scene<Option<HtmlMediaTrack>, ConfettiBurst>;

    /// Everything the callbacks share
    struct App {
        scene: WebScene,
        render_state: Option<RenderState>,
        batch: FrameBatch,
        overlay: MessageOverlay,
    }

    impl App {
        /// Advance one animation frame and present it
        fn frame(&mut self, time: f64) {
            let App {
                scene,
                render_state,
                batch,
                overlay,
            } = self;

            scene.frame(batch, time);
            overlay.sync(&scene.banner);

            if let Some(render_state) = render_state {
                match render_state.render(batch.vertices()) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                        render_state.resize(render_state.size, render_state.logical_size);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Balloon Pop starting...");

        if let Err(e) = start().await {
            log::error!("Startup failed: {:?}", e);
        }
    }

    async fn start() -> Result<(), JsValue> {
        let window = platform::window()?;
        let document = platform::document(&window)?;
        let canvas = platform::canvas_by_id(&document, CANVAS_ID)?;

        let settings = Settings::load();
        let (size, viewport) = platform::fit_canvas_to_window(&window, &canvas);

        let audio = AudioGate::new(
            HtmlMediaTrack::from_id(&document, AMBIENT_ID),
            HtmlMediaTrack::from_id(&document, POP_ID),
            settings.ambient_volume,
            settings.pop_volume,
        );
        let seed = js_sys::Date::now() as u64;
        let scene = Scene::new(&settings, viewport, audio, ConfettiBurst, seed);
        log::info!(
            "Scene ready: {}x{} seed {}",
            viewport.width,
            viewport.height,
            seed
        );

        let app = Rc::new(RefCell::new(App {
            scene,
            render_state: None,
            batch: FrameBatch::new(),
            overlay: MessageOverlay::from_id(&document, MESSAGE_ID),
        }));

        setup_audio(&window, &document, app.clone());
        setup_input_handlers(&window, &canvas, app.clone());

        // Population timer
        {
            let app = app.clone();
            platform::every(&window, SPAWN_INTERVAL_MS, move || {
                if let Ok(mut a) = app.try_borrow_mut() {
                    a.scene.spawn_tick();
                }
            });
        }

        // Frame loop runs even before (or without) a GPU surface
        {
            let app = app.clone();
            platform::start_animation_loop(&window, move |time| {
                if let Ok(mut a) = app.try_borrow_mut() {
                    a.frame(time);
                }
            });
        }

        match init_renderer(&canvas, size, (viewport.width, viewport.height)).await {
            Ok(render_state) => {
                app.borrow_mut().render_state = Some(render_state);
                log::info!("Balloon Pop running!");
            }
            Err(e) => log::error!("Renderer unavailable: {}", e),
        }

        Ok(())
    }

    async fn init_renderer(
        canvas: &web_sys::HtmlCanvasElement,
        size: (u32, u32),
        logical_size: (f32, f32),
    ) -> Result<RenderState, String> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| format!("surface: {}", e))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| format!("adapter: {}", e))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, size, logical_size)
            .await
            .map_err(|e| format!("device: {}", e))
    }

    fn setup_audio(window: &web_sys::Window, document: &web_sys::Document, app: Rc<RefCell<App>>) {
        // Autoplay attempt; a blocked start shows the variant's hint
        {
            let app_hint = app.clone();
            let window = window.clone();
            app.borrow()
                .scene
                .audio
                .attempt_ambient_autoplay(move |e| {
                    if !matches!(e, AudioError::Rejected(_)) {
                        return;
                    }
                    if let Ok(mut a) = app_hint.try_borrow_mut() {
                        let now = platform::now_ms(&window);
                        a.scene.show_autoplay_hint(now);
                    }
                });
        }

        // First pointer-down or touch anywhere unlocks the ambient loop
        platform::listen_once_any(document, &["pointerdown", "touchstart"], move || {
            if let Ok(mut a) = app.try_borrow_mut() {
                if a.scene.first_interaction() {
                    log::info!("Audio unlocked by first interaction");
                }
            }
        });
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        canvas: &web_sys::HtmlCanvasElement,
        app: Rc<RefCell<App>>,
    ) {
        // Click
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let window = window.clone();
            platform::listen(canvas, "click", move |event: MouseEvent| {
                let origin = platform::surface_origin(&canvas_clone);
                let now = platform::now_ms(&window);
                let input = PointerInput::click(event.client_x() as f32, event.client_y() as f32);
                if let Ok(mut a) = app.try_borrow_mut() {
                    a.scene.handle_pointer(input, origin, now);
                }
            });
        }

        // Touch start: first touch point; only a pop cancels native scrolling
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let window = window.clone();
            platform::listen(canvas, "touchstart", move |event: TouchEvent| {
                let Some(touch) = event.touches().get(0) else {
                    return;
                };
                let origin = platform::surface_origin(&canvas_clone);
                let now = platform::now_ms(&window);
                let input = PointerInput::touch(touch.client_x() as f32, touch.client_y() as f32);
                let outcome = match app.try_borrow_mut() {
                    Ok(mut a) => a.scene.handle_pointer(input, origin, now),
                    Err(_) => return,
                };
                if outcome.suppress_default {
                    event.prevent_default();
                }
            });
        }

        // Resize: refit canvas and surface; content is simply redrawn next frame
        {
            let canvas_clone = canvas.clone();
            let window_clone = window.clone();
            platform::listen(window, "resize", move |_event: web_sys::Event| {
                let (size, viewport) = platform::fit_canvas_to_window(&window_clone, &canvas_clone);
                if let Ok(mut a) = app.try_borrow_mut() {
                    a.scene.resize(viewport);
                    if let Some(render_state) = a.render_state.as_mut() {
                        render_state.resize(size, (viewport.width, viewport.height));
                    }
                }
            });
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Balloon Pop (native) starting...");
    log::info!("Native mode runs a headless session - run with `trunk serve` for the web version");

    run_headless();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the scene for a few simulated seconds and pop the newest balloon
#[cfg(not(target_arch = "wasm32"))]
fn run_headless() {
    use balloon_pop::audio::{AudioGate, SilentTrack};
    use balloon_pop::consts::SPAWN_INTERVAL_MS;
    use balloon_pop::effects::NoBurst;
    use balloon_pop::input::PointerInput;
    use balloon_pop::renderer::FrameBatch;
    use balloon_pop::sim::Viewport;
    use balloon_pop::{Scene, Settings};
    use glam::Vec2;

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const FRAMES: u32 = 300;

    let settings = Settings::load();
    let audio = AudioGate::new(
        SilentTrack,
        SilentTrack,
        settings.ambient_volume,
        settings.pop_volume,
    );
    let mut scene = Scene::new(&settings, Viewport::new(800.0, 600.0), audio, NoBurst, 42);
    scene
        .audio
        .attempt_ambient_autoplay(|e| log::warn!("Ambient blocked: {}", e));
    scene.first_interaction();

    let mut batch = FrameBatch::new();
    let mut next_spawn = 0.0;
    let mut now = 0.0;
    for frame in 0..FRAMES {
        now = frame as f64 * FRAME_MS;
        while now >= next_spawn {
            scene.spawn_tick();
            next_spawn += SPAWN_INTERVAL_MS as f64;
        }
        scene.frame(&mut batch, now);
    }
    log::info!(
        "{} frames, {} balloons, {} vertices in last frame",
        scene.frame_count(),
        scene.field.len(),
        batch.vertices().len()
    );

    let Some(target) = scene.field.spheres().last().map(|s| s.pos) else {
        println!("No balloons to pop");
        return;
    };
    let outcome = scene.handle_pointer(PointerInput::click(target.x, target.y), Vec2::ZERO, now);
    println!(
        "Popped: {} ({} balloons left)",
        outcome.popped,
        scene.field.len()
    );
    if let Some(text) = scene.banner.text() {
        println!("{}", text);
    }
}
