//! Procedural ambient animation: noise-driven fire along the viewport edges,
//! embers, a heartbeat glyph and a recursive pentagon constellation.
//!
//! Nothing here touches a platform API. Renderers draw through
//! [`surface::Canvas2d`]; the web front-end supplies the real canvas.

pub mod color;
pub mod config;
pub mod constants;
pub mod constellation;
pub mod embers;
pub mod error;
pub mod flame;
pub mod geometry;
pub mod heartbeat;
pub mod lifecycle;
pub mod live;
pub mod noise;
pub mod scene;
pub mod surface;
pub mod viewport;
pub mod waveform;

pub use config::{AmbientConfig, Variant};
pub use error::{ConfigError, LifecycleError, SummaryError};
pub use lifecycle::{Lifecycle, LoopState};
pub use live::ConstellationSummary;
pub use scene::{AmbientScene, FrameInput};
pub use surface::Canvas2d;
pub use viewport::Viewport;
