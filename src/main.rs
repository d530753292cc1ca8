//! Slime Ring entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use slime_ring::renderer::DrawList;
    use slime_ring::{AppContext, Settings};

    /// Browser-side state around the application context
    struct Game {
        app: AppContext,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
    }

    impl Game {
        /// Match the canvas to the window and refit the play-field
        fn resize(&mut self) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);

            self.canvas.set_width(width as u32);
            self.canvas.set_height(height as u32);
            // Origin at the middle of the viewport
            let _ = self
                .ctx
                .set_transform(1.0, 0.0, 0.0, 1.0, (width / 2.0).floor(), (height / 2.0).floor());

            self.app.resize(width as f32, height as f32);
        }

        /// Convert client coordinates to canvas-centered device pixels
        fn to_device(&self, event: &MouseEvent) -> Vec2 {
            let rect = self.canvas.get_bounding_client_rect();
            Vec2::new(
                (event.client_x() as f64 - rect.left() - rect.width() / 2.0) as f32,
                (event.client_y() as f64 - rect.top() - rect.height() / 2.0) as f32,
            )
        }

        fn draw(&self) {
            let Some(list) = self.app.draw_list() else {
                log::debug!("Draw skipped: screen params not ready");
                return;
            };
            let Some(screen) = self.app.screen() else {
                return;
            };
            paint(&self.ctx, screen.device_width as f64, screen.device_height as f64, &list);
        }
    }

    fn paint(ctx: &CanvasRenderingContext2d, width: f64, height: f64, list: &DrawList) {
        use std::f64::consts::TAU;

        ctx.set_fill_style_str("black");
        ctx.fill_rect(-width / 2.0, -height / 2.0, width, height);
        ctx.set_fill_style_str("white");
        let field = list.play_field;
        ctx.fill_rect(
            field.origin.x as f64,
            field.origin.y as f64,
            field.size.x as f64,
            field.size.y as f64,
        );

        // Body outline
        if let Some((first, rest)) = list.outline.split_first() {
            ctx.begin_path();
            ctx.move_to(first.x as f64, first.y as f64);
            for p in rest {
                ctx.line_to(p.x as f64, p.y as f64);
            }
            ctx.close_path();
            ctx.set_fill_style_str("green");
            ctx.fill();
        }

        for circle in &list.circles {
            ctx.begin_path();
            let _ = ctx.arc(
                circle.center.x as f64,
                circle.center.y as f64,
                circle.radius as f64,
                0.0,
                TAU,
            );
            ctx.fill();
        }

        ctx.begin_path();
        let _ = ctx.arc(list.center.x as f64, list.center.y as f64, 5.0, 0.0, TAU);
        ctx.set_fill_style_str("red");
        ctx.fill();

        if let Some(arrow) = list.arrow {
            ctx.set_stroke_style_str("yellow");
            ctx.set_line_width(2.0);
            ctx.begin_path();
            ctx.move_to(arrow.tail.x as f64, arrow.tail.y as f64);
            ctx.line_to(arrow.tip.x as f64, arrow.tip.y as f64);
            for end in arrow.head {
                ctx.move_to(arrow.tip.x as f64, arrow.tip.y as f64);
                ctx.line_to(end.x as f64, end.y as f64);
            }
            ctx.stroke();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Slime Ring starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let Some(element) = document.get_element_by_id("main-canvas") else {
            log::error!("Unable to locate `main-canvas`.");
            return;
        };
        let canvas: HtmlCanvasElement = match element.dyn_into() {
            Ok(canvas) => canvas,
            Err(_) => {
                log::error!("`main-canvas` is not a canvas element.");
                return;
            }
        };
        let ctx: CanvasRenderingContext2d = match canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into().ok())
        {
            Some(ctx) => ctx,
            None => {
                log::error!("Unable to initialize canvas context. Your browser may not support it.");
                return;
            }
        };

        let game = Rc::new(RefCell::new(Game {
            app: AppContext::new(Settings::default()),
            canvas,
            ctx,
        }));
        game.borrow_mut().resize();

        setup_input_handlers(game.clone());

        let now = window.performance().map(|p| p.now()).unwrap_or(0.0);
        game.borrow_mut().app.start(now);
        request_animation_frame(game);

        log::info!("Slime Ring running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Resize
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut g = game.borrow_mut();
                g.resize();
                g.draw();
            });
            let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Drag to jump
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let pos = g.to_device(&event);
                g.app.pointer_down(pos);
            });
            let _ = window.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let pos = g.to_device(&event);
                g.app.pointer_move(pos);
            });
            let _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let pos = g.to_device(&event);
                g.app.pointer_up(pos);
            });
            let _ = window.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().app.key_down(&event.key());
            });
            let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().app.key_up(&event.key());
            });
            let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().app.focus_lost();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
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
        {
            let mut g = game.borrow_mut();
            g.app.frame(time);
            g.draw();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use slime_ring::consts::{NATIVE_HEIGHT, NATIVE_WIDTH};
    use slime_ring::{AppContext, Settings};

    /// Headless run length: five seconds at 60 Hz
    const FRAMES: u32 = 300;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    env_logger::init();
    log::info!("Slime Ring (native) starting...");
    log::info!("Native mode runs the simulation headless - build for wasm32 to play in a browser");

    let settings = match std::env::args().nth(1) {
        Some(path) => {
            let loaded = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|json| Settings::from_json(&json).map_err(|e| e.to_string()));
            match loaded {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path);
                    settings
                }
                Err(e) => {
                    log::error!("Failed to load settings from {}: {}", path, e);
                    std::process::exit(1);
                }
            }
        }
        None => Settings::default(),
    };

    let mut app = AppContext::new(settings);
    app.resize(NATIVE_WIDTH, NATIVE_HEIGHT);
    app.start(0.0);

    for frame in 1..=FRAMES {
        // Fling the creature once it has landed
        if frame == 180 {
            app.pointer_down(glam::Vec2::ZERO);
            app.pointer_up(glam::Vec2::new(-150.0, 600.0));
        }
        app.frame(frame as f64 * FRAME_MS);

        if frame % 30 == 0 {
            let center = app.body().center_position();
            println!("frame {:>3}: center = ({:>8.2}, {:>8.2})", frame, center.x, center.y);
        }
    }

    log::info!("Simulated {} frames", FRAMES);
}
