use ambient_core::color::Rgba;
use ambient_core::surface::{Canvas2d, LineJoin};
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A canvas element and its 2D context.
pub struct WebCanvas {
    pub element: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
}

impl WebCanvas {
    /// `None` when the element cannot hand out a 2D context.
    pub fn from_element(element: web::HtmlCanvasElement) -> Option<Self> {
        let ctx = element
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { element, ctx })
    }

    /// A detached canvas used as an off-screen layer.
    pub fn offscreen(document: &web::Document) -> Option<Self> {
        let element = document
            .create_element("canvas")
            .ok()?
            .dyn_into::<web::HtmlCanvasElement>()
            .ok()?;
        Self::from_element(element)
    }

    /// Resize the backing store and map drawing coordinates back to CSS
    /// pixels. Setting the size resets the context, so the transform is
    /// applied afterwards.
    pub fn apply_backing(&self, width_px: u32, height_px: u32, dpr: f64) {
        self.element.set_width(width_px);
        self.element.set_height(height_px);
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }
}

impl Canvas2d for WebCanvas {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }
    fn save(&mut self) {
        self.ctx.save();
    }
    fn restore(&mut self) {
        self.ctx.restore();
    }
    fn translate(&mut self, offset: DVec2) {
        _ = self.ctx.translate(offset.x, offset.y);
    }
    fn scale(&mut self, factor: f64) {
        _ = self.ctx.scale(factor, factor);
    }
    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }
    fn move_to(&mut self, p: DVec2) {
        self.ctx.move_to(p.x, p.y);
    }
    fn line_to(&mut self, p: DVec2) {
        self.ctx.line_to(p.x, p.y);
    }
    fn bezier_curve_to(&mut self, c1: DVec2, c2: DVec2, to: DVec2) {
        self.ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y);
    }
    fn circle(&mut self, center: DVec2, radius: f64) {
        // negative radii throw in the browser
        _ = self.ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU);
    }
    fn close_path(&mut self) {
        self.ctx.close_path();
    }
    fn set_fill(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
    }
    fn set_stroke(&mut self, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.to_string());
    }
    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }
    fn set_line_join(&mut self, join: LineJoin) {
        self.ctx.set_line_join(match join {
            LineJoin::Round => "round",
        });
    }
    fn set_shadow(&mut self, color: Rgba, blur: f64) {
        self.ctx.set_shadow_color(&color.to_string());
        self.ctx.set_shadow_blur(blur);
    }
    fn fill(&mut self) {
        self.ctx.fill();
    }
    fn stroke(&mut self) {
        self.ctx.stroke();
    }
    fn draw_layer(&mut self, layer: &Self, width: f64, height: f64, blur_px: Option<f64>, alpha: f64) {
        self.ctx.save();
        if let Some(px) = blur_px {
            self.ctx.set_filter(&format!("blur({px}px)"));
        }
        self.ctx.set_global_alpha(alpha);
        _ = self
            .ctx
            .draw_image_with_html_canvas_element_and_dw_and_dh(&layer.element, 0.0, 0.0, width, height);
        self.ctx.restore();
    }
}
