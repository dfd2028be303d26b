//! Stroke compositor: owns the committed and live surfaces, drives the
//! `Idle`/`Stroking` state machine, and publishes one frame per processed
//! event. The live frame is always rebuilt from the committed surface plus
//! this event's real segments; predicted segments are only ever layered on a
//! throwaway copy, so they can never reach the committed drawing.

use crate::batch::batch;
use crate::config::{EngineConfig, StrokeTuning};
use crate::error::ConfigError;
use crate::geometry::{evaluate, StrokePaints};
use crate::raster;
use crate::sample::{PointerEvent, PointerKind};
use crate::surface::Surface;

/// Number of frames published by an animated clear, final frame included.
const CLEAR_FADE_FRAMES: u32 = 4;

/// Where published frames go. Called exactly once per processed move event,
/// once per stroke end or cancel, and once per clear frame.
pub trait DisplaySink {
    fn present(&mut self, frame: &Surface);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokePhase {
    Idle,
    Stroking,
}

/// Bounded history of recent stylus widths, reset at every stroke begin.
/// Averaging over it smooths width jitter from noisy force readings.
#[derive(Debug, Clone, Default)]
struct WidthHistory {
    samples: [f32; Self::CAPACITY],
    len: usize,
    head: usize,
}

impl WidthHistory {
    const CAPACITY: usize = 8;

    fn clear(&mut self) {
        self.len = 0;
        self.head = 0;
    }

    fn push(&mut self, width: f32) {
        self.samples[self.head] = width;
        self.head = (self.head + 1) % Self::CAPACITY;
        self.len = (self.len + 1).min(Self::CAPACITY);
    }

    fn average_over(&self, window: usize) -> Option<f32> {
        let take = window.min(self.len);
        if take == 0 {
            return None;
        }
        let mut sum = 0.0;
        for back in 1..=take {
            let idx = (self.head + Self::CAPACITY - back) % Self::CAPACITY;
            sum += self.samples[idx];
        }
        Some(sum / take as f32)
    }
}

pub struct InkEngine {
    config: EngineConfig,
    tuning: StrokeTuning,
    paints: StrokePaints,
    committed: Surface,
    live: Surface,
    phase: StrokePhase,
    width_history: WidthHistory,
}

impl InkEngine {
    /// Validates the tuning before any event is accepted and allocates both
    /// surfaces filled with the background.
    pub fn new(
        width: u32,
        height: u32,
        config: EngineConfig,
        tuning: StrokeTuning,
        paints: StrokePaints,
    ) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let background = Surface::new(width, height, paints.background);
        Ok(Self {
            config,
            tuning,
            paints,
            committed: background.clone(),
            live: background,
            phase: StrokePhase::Idle,
            width_history: WidthHistory::default(),
        })
    }

    pub fn phase(&self) -> StrokePhase {
        self.phase
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Hosts must only call this between events.
    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
    }

    pub fn tuning(&self) -> &StrokeTuning {
        &self.tuning
    }

    /// The authoritative drawing. Never contains predicted content and is
    /// only rewritten when a stroke ends or the surface is cleared.
    pub fn committed(&self) -> &Surface {
        &self.committed
    }

    /// The frame most recently derived from real samples.
    pub fn live(&self) -> &Surface {
        &self.live
    }

    pub fn begin_stroke(&mut self) {
        tracing::debug!("stroke begin");
        self.width_history.clear();
        self.phase = StrokePhase::Stroking;
    }

    /// Processes one move event. A move without a primary sample is a no-op:
    /// nothing is rasterized and nothing is published. Otherwise the live
    /// frame is rebuilt from the committed surface plus this event's real
    /// segments, and exactly one frame is published: with the prediction
    /// overlay when previewing is on and predictions exist, bare otherwise.
    pub fn handle_move<S: DisplaySink>(&mut self, event: &PointerEvent, sink: &mut S) {
        if self.phase == StrokePhase::Idle {
            tracing::debug!("move event while idle, beginning stroke implicitly");
            self.begin_stroke();
        }

        if event.primary.is_none() {
            tracing::debug!("move event without primary sample, skipping");
            return;
        }

        let samples = batch(event, &self.config);

        // Scratch context seeded from the committed truth; dropped with the
        // handler whatever path is taken below.
        let mut scratch = self.committed.clone();
        for sample in &samples.real {
            let mut segment = evaluate(sample, &self.tuning, &self.paints, false);
            if sample.kind == PointerKind::Stylus && self.tuning.smoothing_window > 0 {
                self.width_history.push(segment.width);
                if let Some(average) =
                    self.width_history.average_over(self.tuning.smoothing_window)
                {
                    segment.width = average.max(self.tuning.min_line_width);
                }
            }
            raster::stroke(&mut scratch, &segment);
        }

        if !samples.predicted.is_empty() && self.config.preview_predicted_enabled {
            self.live = scratch.clone();
            for sample in &samples.predicted {
                let segment = evaluate(sample, &self.tuning, &self.paints, true);
                raster::stroke(&mut scratch, &segment);
            }
            sink.present(&scratch);
        } else {
            self.live = scratch;
            sink.present(&self.live);
        }
    }

    /// Commits the prediction-free live frame as the new committed surface.
    /// The only place the committed surface is written during interaction.
    pub fn end_stroke<S: DisplaySink>(&mut self, sink: &mut S) {
        self.finish_stroke(sink, "end");
    }

    /// A canceled gesture keeps whatever the move events already produced,
    /// exactly like a regular end: the live frame is already free of
    /// speculative content.
    pub fn cancel_stroke<S: DisplaySink>(&mut self, sink: &mut S) {
        self.finish_stroke(sink, "cancel");
    }

    fn finish_stroke<S: DisplaySink>(&mut self, sink: &mut S, reason: &'static str) {
        if self.phase == StrokePhase::Idle {
            tracing::debug!(reason, "stroke finish while idle, ignoring");
            return;
        }
        tracing::debug!(reason, "stroke finish");
        self.committed = self.live.clone();
        sink.present(&self.live);
        self.phase = StrokePhase::Idle;
    }

    /// Discards the drawing. Both surfaces are replaced with fresh
    /// background buffers before anything is published, so the reset holds
    /// even if the fade is never observed. An animated clear publishes a
    /// short fade from the previous frame to the cleared one; a plain clear
    /// publishes the cleared frame once.
    pub fn clear<S: DisplaySink>(&mut self, animated: bool, sink: &mut S) {
        tracing::info!(animated, "clearing surface");
        let background = Surface::new(
            self.committed.width(),
            self.committed.height(),
            self.paints.background,
        );
        let previous = std::mem::replace(&mut self.live, background.clone());
        self.committed = background;
        self.phase = StrokePhase::Idle;

        if animated {
            for step in 1..CLEAR_FADE_FRAMES {
                let t = step as f32 / CLEAR_FADE_FRAMES as f32;
                sink.present(&previous.faded_toward(self.paints.background, t));
            }
        }
        sink.present(&self.live);
    }
}
