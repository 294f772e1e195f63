use ambient_core::viewport::{backing_size, effective_dpr, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::canvas::WebCanvas;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, element_id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", element_id, e)))
}

/// CSS size of the canvas as laid out right now.
#[inline]
pub fn css_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    let rect = canvas.get_bounding_client_rect();
    Viewport::new(rect.width(), rect.height())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    effective_dpr(web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0))
}

/// Match every surface's backing store to the visible canvas size times the
/// device pixel ratio, keeping drawing coordinates in CSS pixels.
pub fn sync_canvas_backing_size(visible: &WebCanvas, layers: &[&WebCanvas]) {
    let dpr = device_pixel_ratio();
    let css = css_viewport(&visible.element);
    let (w_px, h_px) = backing_size(css, dpr);
    visible.apply_backing(w_px, h_px, dpr);
    for layer in layers {
        layer.apply_backing(w_px, h_px, dpr);
    }
    log::debug!(
        "[resize] css={:.0}x{:.0} dpr={:.2} backing={}x{}",
        css.width,
        css.height,
        dpr,
        w_px,
        h_px
    );
}
