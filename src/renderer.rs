// Drawing surface the particle field renders into. The browser build draws on
// a 2D canvas context; tests plug in a renderer that records the calls.

use crate::color::Color;
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait Renderer {
    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue>;

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), JsValue>;

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        alpha: f64,
        width: f64,
    ) -> Result<(), JsValue>;
}

pub struct CanvasRenderer {
    pub context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        CanvasRenderer { context }
    }
}

impl Renderer for CanvasRenderer {
    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.context.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), JsValue> {
        #[allow(deprecated)]
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_css(alpha)));
        self.context.begin_path();
        self.context
            .arc(center[0], center[1], radius, 0.0, PI * 2.0)?;
        self.context.fill();
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        alpha: f64,
        width: f64,
    ) -> Result<(), JsValue> {
        #[allow(deprecated)]
        self.context
            .set_stroke_style(&JsValue::from_str(&color.to_css(alpha)));
        self.context.set_line_width(width);
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
        Ok(())
    }
}

#[cfg(test)]
pub mod recording {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub enum DrawCall {
        Clear {
            width: f64,
            height: f64,
        },
        Circle {
            center: Vector2<f64>,
            radius: f64,
            color: Color,
            alpha: f64,
        },
        Line {
            from: Vector2<f64>,
            to: Vector2<f64>,
            color: Color,
            alpha: f64,
            width: f64,
        },
    }

    #[derive(Default)]
    pub struct RecordingRenderer {
        pub calls: Vec<DrawCall>,
    }

    impl RecordingRenderer {
        pub fn lines(&self) -> Vec<&DrawCall> {
            self.calls
                .iter()
                .filter(|call| matches!(call, DrawCall::Line { .. }))
                .collect()
        }

        pub fn circles(&self) -> Vec<&DrawCall> {
            self.calls
                .iter()
                .filter(|call| matches!(call, DrawCall::Circle { .. }))
                .collect()
        }
    }

    impl Renderer for RecordingRenderer {
        fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
            self.calls.push(DrawCall::Clear { width, height });
            Ok(())
        }

        fn fill_circle(
            &mut self,
            center: Vector2<f64>,
            radius: f64,
            color: Color,
            alpha: f64,
        ) -> Result<(), JsValue> {
            self.calls.push(DrawCall::Circle {
                center,
                radius,
                color,
                alpha,
            });
            Ok(())
        }

        fn stroke_line(
            &mut self,
            from: Vector2<f64>,
            to: Vector2<f64>,
            color: Color,
            alpha: f64,
            width: f64,
        ) -> Result<(), JsValue> {
            self.calls.push(DrawCall::Line {
                from,
                to,
                color,
                alpha,
                width,
            });
            Ok(())
        }
    }
}
