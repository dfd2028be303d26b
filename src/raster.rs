//! Stroke rasterizer: one straight segment per sample pair, no curve
//! fitting. Visual smoothness comes from sample density, not interpolation.

use crate::geometry::{CapStyle, StrokeSegment};
use crate::sample::Vec2;
use crate::surface::Surface;

/// Strokes `segment` into `surface` in place. The segment is rasterized as
/// a capsule (round caps) or an extended box (square caps), so every covered
/// pixel is blended exactly once and the segment's opacity lands uniformly
/// even for translucent shading marks. Cannot fail; off-surface coverage is
/// clipped.
pub fn stroke(surface: &mut Surface, segment: &StrokeSegment<'_>) {
    let radius = (segment.width / 2.0).max(0.5);
    let (min, max) = coverage_bounds(segment.from, segment.to, radius);

    let x0 = (min.x.floor() as i32).max(0);
    let y0 = (min.y.floor() as i32).max(0);
    let x1 = (max.x.ceil() as i32).min(surface.width() as i32 - 1);
    let y1 = (max.y.ceil() as i32).min(surface.height() as i32 - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if !covers(segment.from, segment.to, radius, segment.cap, center) {
                continue;
            }
            let top = segment
                .paint
                .color_at_with_opacity(x, y, segment.opacity.clamp(0.0, 1.0));
            surface.blend_at(x, y, top);
        }
    }
}

fn coverage_bounds(from: Vec2, to: Vec2, radius: f32) -> (Vec2, Vec2) {
    let pad = radius + 1.0;
    (
        Vec2::new(from.x.min(to.x) - pad, from.y.min(to.y) - pad),
        Vec2::new(from.x.max(to.x) + pad, from.y.max(to.y) + pad),
    )
}

fn covers(from: Vec2, to: Vec2, radius: f32, cap: CapStyle, p: Vec2) -> bool {
    let axis = to - from;
    let len_sq = axis.x * axis.x + axis.y * axis.y;

    if len_sq <= f32::EPSILON {
        // Degenerate segment: a dot.
        let d = p - from;
        return match cap {
            CapStyle::Round => d.length() <= radius,
            CapStyle::Square => d.x.abs() <= radius && d.y.abs() <= radius,
        };
    }

    let rel = p - from;
    let t = (rel.x * axis.x + rel.y * axis.y) / len_sq;

    match cap {
        CapStyle::Round => {
            let clamped = t.clamp(0.0, 1.0);
            let nearest = Vec2::new(from.x + axis.x * clamped, from.y + axis.y * clamped);
            (p - nearest).length() <= radius
        }
        CapStyle::Square => {
            let len = len_sq.sqrt();
            let along = t * len;
            if along < -radius || along > len + radius {
                return false;
            }
            let perp = (rel.x * axis.y - rel.y * axis.x).abs() / len;
            perp <= radius
        }
    }
}
