// Helper functions for finding the canvas and reading the viewport size

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| String::from("No global `window` exists"))
}

pub fn document(window: &Window) -> Result<Document, String> {
    window
        .document()
        .ok_or_else(|| String::from("Window has no document"))
}

pub fn canvas_by_id(document: &Document, id: &str) -> Result<HtmlCanvasElement, String> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| format!("No element with id `{}`", id))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| format!("Element `{}` is not a canvas", id))
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, String> {
    canvas
        .get_context("2d")
        .map_err(|_| String::from("Failed to request 2d context"))?
        .ok_or_else(|| String::from("Canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| String::from("Context is not a CanvasRenderingContext2d"))
}

// innerWidth / innerHeight in CSS pixels
pub fn viewport_size(window: &Window) -> Result<(f64, f64), String> {
    let width = window
        .inner_width()
        .map_err(|_| String::from("Unable to read window.innerWidth"))?
        .as_f64()
        .ok_or_else(|| String::from("window.innerWidth is not a number"))?;
    let height = window
        .inner_height()
        .map_err(|_| String::from("Unable to read window.innerHeight"))?
        .as_f64()
        .ok_or_else(|| String::from("window.innerHeight is not a number"))?;
    Ok((width, height))
}

// Canvas dimensions are whole pixels; negative or NaN sizes collapse to 0.
pub fn fit_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) -> (f64, f64) {
    let width = width.max(0.0) as u32;
    let height = height.max(0.0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    (width as f64, height as f64)
}
