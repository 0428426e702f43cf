//! Browser bindings for the rover simulation.
//!
//! The JS host owns the window, the canvas and asset loading. It calls
//! `game_init` once, forwards keyboard and resize events, calls `game_tick`
//! once per animation frame and reads the shared frame buffer afterwards.

pub mod runner;

pub use runner::GameRunner;

use std::cell::RefCell;

use rover_engine::{GameConfig, InputEvent};
use wasm_bindgen::prelude::*;

thread_local! {
    static CONFIG: RefCell<GameConfig> = RefCell::new(GameConfig::default());
    static RUNNER: RefCell<Option<GameRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut GameRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
        f(runner)
    })
}

/// Supply startup configuration as JSON. Call before `game_init`.
/// Invalid JSON is logged and the defaults are kept.
#[wasm_bindgen]
pub fn game_configure(json: &str) {
    match GameConfig::from_json(json) {
        Ok(config) => CONFIG.with(|cell| *cell.borrow_mut() = config),
        Err(err) => log::warn!("rover: ignoring invalid config: {}", err),
    }
}

#[wasm_bindgen]
pub fn game_init() {
    console_error_panic_hook::set_once();
    // Jump diagnostics log at debug level and only while debug mode is on.
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = CONFIG.with(|cell| cell.borrow().clone());
    let mut runner = GameRunner::new(config);
    runner.init();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("rover: initialized");
}

/// Advance one display refresh. `display_rate` is the host refresh rate in Hz.
#[wasm_bindgen]
pub fn game_tick(display_rate: u32) {
    with_runner(|r| r.tick(display_rate));
}

#[wasm_bindgen]
pub fn game_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn game_key_up(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
}

#[wasm_bindgen]
pub fn game_resize(width: u32, height: u32) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
}

#[wasm_bindgen]
pub fn game_blur() {
    with_runner(|r| r.push_input(InputEvent::Blur));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    with_runner(|r| r.frame_ptr())
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.buffer_total_floats())
}

#[wasm_bindgen]
pub fn get_instance_data_offset() -> u32 {
    with_runner(|r| r.instance_data_offset())
}

#[wasm_bindgen]
pub fn get_event_data_offset() -> u32 {
    with_runner(|r| r.event_data_offset())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_event_count() -> u32 {
    with_runner(|r| r.event_count())
}

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    with_runner(|r| r.world_width())
}

#[wasm_bindgen]
pub fn get_world_height() -> f32 {
    with_runner(|r| r.world_height())
}

#[wasm_bindgen]
pub fn get_simulation_rate() -> u32 {
    with_runner(|r| r.simulation_rate())
}

#[wasm_bindgen]
pub fn get_debug_text() -> String {
    with_runner(|r| r.debug_text())
}
