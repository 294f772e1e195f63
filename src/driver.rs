use crate::canvas::WebCanvas;
use crate::clock::FrameClock;
use crate::dom;
use crate::stats::FrameStats;
use ambient_core::{AmbientConfig, AmbientScene, ConstellationSummary, FrameInput, Lifecycle, LoopState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-instance frame state: surfaces, scene and clocks.
pub struct FrameContext {
    pub lifecycle: Lifecycle,
    pub main: WebCanvas,
    pub glow: Option<WebCanvas>,
    pub scene: AmbientScene,
    pub clock: FrameClock,
    pub stats: FrameStats,
    pub raf_id: Option<i32>,
}

impl FrameContext {
    pub fn frame(&mut self, timestamp_ms: f64) {
        let time = self.clock.tick(timestamp_ms);
        let viewport = dom::css_viewport(&self.main.element);

        self.scene
            .render(FrameInput { time, viewport }, &mut self.main, self.glow.as_mut());

        if let Some(fps) = self.stats.record(Instant::now()) {
            log::debug!(
                "[frame] variant={} fps={:.1} embers={} t={:.1}s",
                self.scene.variant().as_str(),
                fps,
                self.scene.embers().len(),
                time
            );
        }
    }

    pub fn resize(&self) {
        let layers: Vec<&WebCanvas> = self.glow.iter().collect();
        dom::sync_canvas_backing_size(&self.main, &layers);
    }
}

type TickClosure = Closure<dyn FnMut(f64)>;

/// A mounted, animating surface. Dropping it stops the loop.
pub struct Mounted {
    frame_ctx: Rc<RefCell<FrameContext>>,
    tick: Rc<RefCell<Option<TickClosure>>>,
    resize: Option<Closure<dyn FnMut()>>,
}

impl Mounted {
    /// Idle -> Running: grab the 2D context(s), size the backing stores,
    /// listen for resizes and schedule the first frame.
    pub fn start(canvas: web::HtmlCanvasElement, config: AmbientConfig) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let main = WebCanvas::from_element(canvas).ok_or_else(|| anyhow::anyhow!("no 2d context"))?;
        let glow = if config.variant.uses_glow() {
            let document = window
                .document()
                .ok_or_else(|| anyhow::anyhow!("no document"))?;
            Some(WebCanvas::offscreen(&document).ok_or_else(|| anyhow::anyhow!("no 2d context for glow layer"))?)
        } else {
            None
        };

        let variant = config.variant;
        let frame_ctx = Rc::new(RefCell::new(FrameContext {
            lifecycle: Lifecycle::new(),
            main,
            glow,
            scene: AmbientScene::new(config),
            clock: FrameClock::new(),
            stats: FrameStats::new(),
            raf_id: None,
        }));
        {
            let mut ctx = frame_ctx.borrow_mut();
            ctx.lifecycle.start().map_err(|e| anyhow::anyhow!("{e}"))?;
            ctx.resize();
        }

        let resize = wire_resize(&window, frame_ctx.clone());
        let tick = start_loop(&window, frame_ctx.clone());
        log::info!("[mount] variant={} running", variant.as_str());

        Ok(Self {
            frame_ctx,
            tick,
            resize: Some(resize),
        })
    }

    pub fn state(&self) -> LoopState {
        self.frame_ctx.borrow().lifecycle.state()
    }

    pub fn set_summary(&self, summary: ConstellationSummary) {
        self.frame_ctx.borrow_mut().scene.set_summary(summary);
    }

    /// Running -> Stopped: cancel the pending frame and drop the resize
    /// listener. Safe to call more than once.
    pub fn stop(&mut self) {
        let (changed, raf_id) = {
            let mut ctx = self.frame_ctx.borrow_mut();
            (ctx.lifecycle.stop(), ctx.raf_id.take())
        };
        let resize = self.resize.take();
        if let Some(window) = web::window() {
            if let Some(id) = raf_id {
                _ = window.cancel_animation_frame(id);
            }
            if let Some(resize) = &resize {
                _ = window.remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
            }
        }
        // breaks the closure's reference to itself
        self.tick.borrow_mut().take();
        if changed {
            log::info!("[mount] stopped");
        }
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.stop();
    }
}

fn wire_resize(window: &web::Window, frame_ctx: Rc<RefCell<FrameContext>>) -> Closure<dyn FnMut()> {
    let resize_closure = Closure::wrap(Box::new(move || {
        frame_ctx.borrow().resize();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    resize_closure
}

fn start_loop(window: &web::Window, frame_ctx: Rc<RefCell<FrameContext>>) -> Rc<RefCell<Option<TickClosure>>> {
    let tick: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        let mut ctx = frame_ctx_tick.borrow_mut();
        if !ctx.lifecycle.is_running() {
            return;
        }
        ctx.frame(timestamp_ms);
        let next = tick_clone.borrow().as_ref().and_then(request_frame);
        if next.is_none() {
            log::warn!("[frame] could not schedule next frame, stopping");
        }
        ctx.raf_id = ctx.lifecycle.track_frame(next);
    }) as Box<dyn FnMut(f64)>));

    let first = tick
        .borrow()
        .as_ref()
        .and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    if first.is_none() {
        log::warn!("[mount] could not schedule first frame, stopping");
    }
    let mut ctx = frame_ctx.borrow_mut();
    ctx.raf_id = ctx.lifecycle.track_frame(first);
    drop(ctx);
    tick
}

fn request_frame(cb: &TickClosure) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}
