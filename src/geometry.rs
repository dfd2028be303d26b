//! Per-sample stroke geometry: maps one pointer sample to the width, cap,
//! opacity and paint of the line segment it contributes.

use std::f32::consts::{FRAC_PI_2, PI};

use crate::config::StrokeTuning;
use crate::sample::{PointerKind, PointerSample, Vec2};
use crate::surface::{Paint, PatternTile, Rgba};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapStyle {
    Round,
    Square,
}

/// One renderable segment, derived from a single sample and consumed
/// immediately by the rasterizer.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeSegment<'a> {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub cap: CapStyle,
    pub opacity: f32,
    pub paint: &'a Paint,
}

/// Paints the evaluator hands out. The background paint doubles as the
/// eraser: finger strokes repaint the background fill over existing ink.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePaints {
    pub stroke: Paint,
    pub preview: Paint,
    pub background: Rgba,
    eraser: Paint,
}

impl StrokePaints {
    pub fn new(stroke: Paint, preview: Paint, background: Rgba) -> Self {
        Self {
            stroke,
            preview,
            background,
            eraser: Paint::Solid(background),
        }
    }

    pub fn eraser(&self) -> &Paint {
        &self.eraser
    }
}

impl Default for StrokePaints {
    fn default() -> Self {
        Self::new(
            Paint::Pattern(PatternTile::graphite()),
            Paint::Solid(Rgba::BLUE),
            Rgba::WHITE,
        )
    }
}

/// Evaluates one sample into a segment. Pure and total over finite inputs:
/// out-of-range angles and forces are clamped, never rejected.
///
/// `previewing_prediction` selects the preview paint; it is set only when a
/// predicted sample is being overlaid on the live frame.
pub fn evaluate<'a>(
    sample: &PointerSample,
    tuning: &StrokeTuning,
    paints: &'a StrokePaints,
    previewing_prediction: bool,
) -> StrokeSegment<'a> {
    match sample.kind {
        PointerKind::Touch => StrokeSegment {
            from: sample.previous_position,
            to: sample.position,
            width: (sample.contact_radius / 2.0).max(tuning.min_line_width),
            cap: CapStyle::Round,
            opacity: 1.0,
            paint: paints.eraser(),
        },
        PointerKind::Stylus => {
            let paint = if previewing_prediction {
                &paints.preview
            } else {
                &paints.stroke
            };
            let (width, opacity) = if sample.altitude_angle < tuning.tilt_threshold {
                shading_width_and_opacity(sample, tuning)
            } else {
                (drawing_width(sample, tuning), 1.0)
            };
            StrokeSegment {
                from: sample.previous_position,
                to: sample.position,
                width: width.max(tuning.min_line_width),
                cap: CapStyle::Round,
                opacity,
                paint,
            }
        }
    }
}

fn drawing_width(sample: &PointerSample, tuning: &StrokeTuning) -> f32 {
    if sample.force > 0.0 {
        sample.force * tuning.force_sensitivity
    } else {
        tuning.default_line_width
    }
}

fn shading_width_and_opacity(sample: &PointerSample, tuning: &StrokeTuning) -> (f32, f32) {
    let angle = stroke_azimuth_deviation(sample.stroke_direction(), sample.azimuth);
    let normalized_angle = angle / FRAC_PI_2;
    let raw_width = tuning.max_shading_width * normalized_angle;

    let altitude = sample.altitude_angle.max(tuning.min_altitude_angle);
    let normalized_altitude = 1.0
        - (altitude - tuning.min_altitude_angle)
            / (tuning.tilt_threshold - tuning.min_altitude_angle);

    let width = raw_width * normalized_altitude + tuning.min_line_width;
    let opacity = ((sample.force - tuning.min_force) / (tuning.max_force - tuning.min_force))
        .clamp(0.0, 1.0);
    (width, opacity)
}

/// Unsigned deviation between the stroke heading and the pencil azimuth,
/// folded into `[0, π/2]`. Only the deviation matters: a mark beyond a
/// right angle mirrors back by symmetry, so dragging along the azimuth
/// gives the narrowest mark and dragging perpendicular the widest.
fn stroke_azimuth_deviation(stroke: Vec2, azimuth: Vec2) -> f32 {
    let mut angle = (stroke.angle() - azimuth.angle()).abs();
    if angle > PI {
        angle = 2.0 * PI - angle;
    }
    if angle > FRAC_PI_2 {
        angle = PI - angle;
    }
    angle
}
