#![cfg(target_arch = "wasm32")]
use ambient_core::{AmbientConfig, ConstellationSummary, LoopState};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod clock;
mod constants;
mod dom;
mod driver;
mod stats;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-web starting");
    Ok(())
}

fn js_error(message: String) -> JsValue {
    js_sys::Error::new(&message).into()
}

fn parse_config(config_json: Option<String>) -> Result<AmbientConfig, JsValue> {
    match config_json {
        Some(json) if !json.trim().is_empty() => {
            AmbientConfig::from_json(&json).map_err(|e| js_error(e.to_string()))
        }
        _ => Ok(AmbientConfig::default()),
    }
}

/// Handle for one animated canvas. Independent of any other instance on the
/// page; `stop()` (or freeing the handle) ends its loop for good.
#[wasm_bindgen]
pub struct AmbientCanvas {
    mounted: Option<driver::Mounted>,
}

impl AmbientCanvas {
    fn mount(canvas: web::HtmlCanvasElement, config: AmbientConfig) -> Self {
        match driver::Mounted::start(canvas, config) {
            Ok(m) => Self { mounted: Some(m) },
            Err(e) => {
                log::warn!("[mount] surface unavailable, not rendering: {:?}", e);
                Self { mounted: None }
            }
        }
    }
}

#[wasm_bindgen]
impl AmbientCanvas {
    /// Mount on the canvas with id `canvas_id` (default `ambient-canvas`).
    ///
    /// Rejects malformed config. A missing canvas or 2D context is not an
    /// error: the handle is returned inert and nothing is drawn.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: Option<String>, config_json: Option<String>) -> Result<AmbientCanvas, JsValue> {
        let config = parse_config(config_json)?;
        let id = canvas_id.unwrap_or_else(|| constants::DEFAULT_CANVAS_ID.to_string());
        let canvas = dom::window_document()
            .ok_or_else(|| anyhow::anyhow!("no document"))
            .and_then(|doc| dom::canvas_by_id(&doc, &id));
        Ok(match canvas {
            Ok(canvas) => Self::mount(canvas, config),
            Err(e) => {
                log::warn!("[mount] #{} unavailable, not rendering: {:?}", id, e);
                Self { mounted: None }
            }
        })
    }

    /// Mount on a canvas element the host already holds.
    #[wasm_bindgen(js_name = fromElement)]
    pub fn from_element(
        canvas: web::HtmlCanvasElement,
        config_json: Option<String>,
    ) -> Result<AmbientCanvas, JsValue> {
        let config = parse_config(config_json)?;
        Ok(Self::mount(canvas, config))
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.mounted
            .as_ref()
            .is_some_and(|m| m.state() == LoopState::Running)
    }

    /// Replace the live summary (JSON) shown by the `live` variant.
    #[wasm_bindgen(js_name = setSummary)]
    pub fn set_summary(&self, summary_json: &str) -> Result<(), JsValue> {
        let summary = ConstellationSummary::from_json(summary_json).map_err(|e| js_error(e.to_string()))?;
        if let Some(m) = &self.mounted {
            m.set_summary(summary);
        }
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(m) = &mut self.mounted {
            m.stop();
        }
    }
}
