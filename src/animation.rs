// Drives a particle field on a full-window canvas with requestAnimationFrame.
// The window's mousemove and resize events feed the pointer and surface size.
// Everything runs on the page's single thread, so each callback borrows the
// shared scene for its whole run.

use crate::config::FieldConfig;
use crate::dom_helpers;
use crate::field::Field;
use crate::renderer::CanvasRenderer;
use crate::Timer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Event, HtmlCanvasElement, MouseEvent, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct Scene {
    field: Field,
    renderer: CanvasRenderer,
    canvas: HtmlCanvasElement,
    running: bool,
    frame_id: Option<i32>,
    profiling: bool,
}

impl Scene {
    fn render_frame(&mut self) {
        let _timer = if self.profiling {
            Some(Timer::new("ParticleBackground::frame"))
        } else {
            None
        };
        if let Err(err) = self.field.frame(&mut self.renderer) {
            console::error_2(&"particle frame failed:".into(), &err);
        }
    }

    fn resize(&mut self, width: f64, height: f64) {
        let (width, height) = dom_helpers::fit_canvas(&self.canvas, width, height);
        self.field.resize(width, height);
    }
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window.request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>())
}

#[wasm_bindgen]
pub struct ParticleBackground {
    scene: Rc<RefCell<Scene>>,
    window: Window,
    frame_callback: FrameCallback,
    on_mouse_move: Closure<dyn FnMut(MouseEvent)>,
    on_resize: Closure<dyn FnMut(Event)>,
}

#[wasm_bindgen]
impl ParticleBackground {
    // Frames only start once `start` is called
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<ParticleBackground, JsValue> {
        ParticleBackground::with_config(canvas_id, FieldConfig::default())
    }

    #[wasm_bindgen(js_name = withParticleCount)]
    pub fn with_particle_count(
        canvas_id: &str,
        particle_count: usize,
    ) -> Result<ParticleBackground, JsValue> {
        ParticleBackground::with_config(
            canvas_id,
            FieldConfig::default().with_particle_count(particle_count),
        )
    }

    pub fn start(&self) -> Result<(), JsValue> {
        if self.scene.borrow().running {
            return Ok(());
        }

        let scene = Rc::clone(&self.scene);
        let window = self.window.clone();
        let callback = Rc::clone(&self.frame_callback);
        *self.frame_callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let mut scene = scene.borrow_mut();
            scene.frame_id = None;
            if !scene.running {
                return;
            }
            scene.render_frame();
            if let Some(next) = callback.borrow().as_ref() {
                match request_frame(&window, next) {
                    Ok(id) => scene.frame_id = Some(id),
                    Err(err) => {
                        console::error_2(&"failed to schedule particle frame:".into(), &err);
                        scene.running = false;
                    }
                }
            }
        }) as Box<dyn FnMut()>));

        let id = match self.frame_callback.borrow().as_ref() {
            Some(callback) => request_frame(&self.window, callback)?,
            None => return Err(JsValue::from_str("frame callback missing")),
        };
        let mut scene = self.scene.borrow_mut();
        scene.running = true;
        scene.frame_id = Some(id);
        Ok(())
    }

    // The canvas keeps its last drawing
    pub fn stop(&self) -> Result<(), JsValue> {
        let mut scene = self.scene.borrow_mut();
        scene.running = false;
        if let Some(id) = scene.frame_id.take() {
            self.window.cancel_animation_frame(id)?;
        }
        Ok(())
    }

    // For hosts that drive their own loop
    pub fn frame(&self) {
        self.scene.borrow_mut().render_frame();
    }

    pub fn is_running(&self) -> bool {
        self.scene.borrow().running
    }

    pub fn set_profiling(&self, enabled: bool) {
        self.scene.borrow_mut().profiling = enabled;
    }

    pub fn particle_count(&self) -> usize {
        self.scene.borrow().field.particles().len()
    }
}

impl ParticleBackground {
    pub fn with_config(
        canvas_id: &str,
        config: FieldConfig,
    ) -> Result<ParticleBackground, JsValue> {
        let window = dom_helpers::window()?;
        let document = dom_helpers::document(&window)?;
        let canvas = dom_helpers::canvas_by_id(&document, canvas_id)?;
        let context = dom_helpers::context_2d(&canvas)?;
        let (width, height) = dom_helpers::viewport_size(&window)?;
        let (width, height) = dom_helpers::fit_canvas(&canvas, width, height);

        let scene = Rc::new(RefCell::new(Scene {
            field: Field::new(width, height, config)?,
            renderer: CanvasRenderer::new(context),
            canvas,
            running: false,
            frame_id: None,
            profiling: false,
        }));

        let on_mouse_move = {
            let scene = Rc::clone(&scene);
            Closure::wrap(Box::new(move |event: MouseEvent| {
                scene
                    .borrow_mut()
                    .field
                    .pointer_moved(event.client_x() as f64, event.client_y() as f64);
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        window.add_event_listener_with_callback(
            "mousemove",
            on_mouse_move.as_ref().unchecked_ref(),
        )?;

        let on_resize = {
            let scene = Rc::clone(&scene);
            let window = window.clone();
            Closure::wrap(Box::new(move |_event: Event| {
                match dom_helpers::viewport_size(&window) {
                    Ok((width, height)) => scene.borrow_mut().resize(width, height),
                    Err(err) => console::error_1(&err.into()),
                }
            }) as Box<dyn FnMut(Event)>)
        };
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        console::log_1(
            &format!(
                "particle field ready: {} particles on {}x{}",
                config.particle_count, width, height
            )
            .into(),
        );

        Ok(ParticleBackground {
            scene,
            window,
            frame_callback: Rc::new(RefCell::new(None)),
            on_mouse_move,
            on_resize,
        })
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            console::error_2(&"failed to cancel particle frame:".into(), &err);
        }
        if let Err(err) = self.window.remove_event_listener_with_callback(
            "mousemove",
            self.on_mouse_move.as_ref().unchecked_ref(),
        ) {
            console::error_2(&"failed to remove mousemove listener:".into(), &err);
        }
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
        {
            console::error_2(&"failed to remove resize listener:".into(), &err);
        }
        // the frame closure holds a handle to its own slot
        self.frame_callback.borrow_mut().take();
    }
}
