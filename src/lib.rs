//! Real-time freehand ink engine.
//!
//! A host feeds the engine one pointer event at a time: a stroke begin, a
//! stream of move events (each carrying a primary sample and, optionally,
//! coalesced sub-samples and forward-predicted samples), and an end or
//! cancel. Every move event rebuilds the live frame from the committed
//! drawing plus the event's real segments, optionally overlays predicted
//! segments for low-latency preview, and publishes exactly one frame to the
//! host's [`engine::DisplaySink`]. Predicted content is speculative by
//! construction and never reaches the committed surface.
//!
//! Stylus samples carry force, altitude and azimuth. Perpendicular-ish
//! styluses draw with pressure-scaled width; tilting below the configured
//! threshold switches to shading, where width follows the angle between the
//! stroke and the pencil heading and opacity follows force. Finger contact
//! erases by painting the background fill.

pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod geometry;
pub mod logging;
pub mod raster;
pub mod sample;
pub mod surface;

pub use config::{EngineConfig, EngineSettings, StrokeTuning};
pub use engine::{DisplaySink, InkEngine, StrokePhase};
pub use error::ConfigError;
pub use geometry::{CapStyle, StrokePaints, StrokeSegment};
pub use sample::{PointerEvent, PointerKind, PointerSample, Vec2};
pub use surface::{Paint, PatternTile, Rgba, Surface};
