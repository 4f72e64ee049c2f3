mod utils;

pub mod animation;
pub mod color;
pub mod config;
pub mod dom_helpers;
pub mod field;
pub mod particle;
pub mod pointer;
pub mod renderer;

use wasm_bindgen::prelude::*;
use web_sys::console;

pub use animation::ParticleBackground;
pub use color::Color;
pub use config::FieldConfig;
pub use field::Field;
pub use particle::Particle;
pub use pointer::Pointer;
pub use renderer::{CanvasRenderer, Renderer};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

// Freeing the returned handle stops the animation and detaches its listeners
#[wasm_bindgen]
pub fn start_background(canvas_id: &str) -> Result<ParticleBackground, JsValue> {
    initialize();
    let background = ParticleBackground::new(canvas_id)?;
    background.start()?;
    Ok(background)
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
