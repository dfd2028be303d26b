/// Raster surface and paint types. Pixels are straight-alpha RGBA8, row
/// major, origin at the top-left.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    pub const BLUE: Self = Self::rgba(0, 0, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    fn with_alpha_scaled(self, factor: f32) -> Self {
        let a = (self.a as f32 * factor.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    fn lerp_toward(self, target: Rgba, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |from: u8, to: u8| -> u8 {
            (from as f32 + (to as f32 - from as f32) * t).round() as u8
        };
        Self {
            r: mix(self.r, target.r),
            g: mix(self.g, target.g),
            b: mix(self.b, target.b),
            a: mix(self.a, target.a),
        }
    }
}

/// Source-over blend of `top` onto `bottom`.
pub fn blend_pixel(bottom: Rgba, top: Rgba) -> Rgba {
    let sa = top.a as f32 / 255.0;
    let da = bottom.a as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    if out_a <= f32::EPSILON {
        return Rgba::TRANSPARENT;
    }

    let blend = |s: u8, d: u8| -> u8 {
        (((s as f32 * sa) + (d as f32 * da * (1.0 - sa))) / out_a)
            .round()
            .clamp(0.0, 255.0) as u8
    };

    Rgba {
        r: blend(top.r, bottom.r),
        g: blend(top.g, bottom.g),
        b: blend(top.b, bottom.b),
        a: (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    }
}

/// Fixed-size pixel buffer. The engine owns two of these: the committed
/// drawing and the live frame rebuilt every event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    pub fn new(width: u32, height: u32, fill: Rgba) -> Self {
        let mut pixels = vec![0u8; (width as usize) * (height as usize) * 4];
        for px in pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[fill.r, fill.g, fill.b, fill.a]);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let idx = ((y * self.width + x) * 4) as usize;
        Rgba {
            r: self.pixels[idx],
            g: self.pixels[idx + 1],
            b: self.pixels[idx + 2],
            a: self.pixels[idx + 3],
        }
    }

    /// Blends `top` over the pixel at `(x, y)`. Out-of-bounds coordinates
    /// are ignored.
    pub fn blend_at(&mut self, x: i32, y: i32, top: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        let bottom = Rgba {
            r: self.pixels[idx],
            g: self.pixels[idx + 1],
            b: self.pixels[idx + 2],
            a: self.pixels[idx + 3],
        };
        let out = blend_pixel(bottom, top);
        self.pixels[idx..idx + 4].copy_from_slice(&[out.r, out.g, out.b, out.a]);
    }

    /// Frame interpolated toward a uniform `background` by `t ∈ [0, 1]`.
    /// Used for the animated-clear fade; `t = 1` is fully cleared.
    pub fn faded_toward(&self, background: Rgba, t: f32) -> Surface {
        let mut out = self.clone();
        for px in out.pixels.chunks_exact_mut(4) {
            let faded = Rgba::rgba(px[0], px[1], px[2], px[3]).lerp_toward(background, t);
            px.copy_from_slice(&[faded.r, faded.g, faded.b, faded.a]);
        }
        out
    }
}

/// Small repeating tile sampled in surface coordinates, standing in for a
/// texture asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTile {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PatternTile {
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        assert_eq!(pixels.len(), (width as usize) * (height as usize) * 4);
        assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Deterministic graphite-like tile: dark gray with hash-noise alpha,
    /// so dense strokes read as pencil grain rather than flat ink.
    pub fn graphite() -> Self {
        const SIZE: u32 = 16;
        let mut pixels = Vec::with_capacity((SIZE * SIZE * 4) as usize);
        for y in 0..SIZE {
            for x in 0..SIZE {
                let mut h = x.wrapping_mul(0x9e37_79b9) ^ y.wrapping_mul(0x85eb_ca6b);
                h ^= h >> 13;
                h = h.wrapping_mul(0xc2b2_ae35);
                h ^= h >> 16;
                let alpha = 140 + (h % 96) as u8;
                pixels.extend_from_slice(&[60, 60, 66, alpha]);
            }
        }
        Self::from_pixels(SIZE, SIZE, pixels)
    }

    pub fn sample(&self, x: i32, y: i32) -> Rgba {
        let tx = (x.rem_euclid(self.width as i32)) as u32;
        let ty = (y.rem_euclid(self.height as i32)) as u32;
        let idx = ((ty * self.width + tx) * 4) as usize;
        Rgba {
            r: self.pixels[idx],
            g: self.pixels[idx + 1],
            b: self.pixels[idx + 2],
            a: self.pixels[idx + 3],
        }
    }
}

/// What a segment is stroked with: one color, or a wrapping pattern tile.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Pattern(PatternTile),
}

impl Paint {
    /// Paint color at a surface coordinate.
    pub fn color_at(&self, x: i32, y: i32) -> Rgba {
        match self {
            Paint::Solid(color) => *color,
            Paint::Pattern(tile) => tile.sample(x, y),
        }
    }

    /// Same paint with its alpha scaled by `opacity ∈ [0, 1]`.
    pub fn color_at_with_opacity(&self, x: i32, y: i32, opacity: f32) -> Rgba {
        self.color_at(x, y).with_alpha_scaled(opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_over_opaque_background_matches_expected_pixel() {
        let out = blend_pixel(Rgba::rgba(100, 100, 100, 255), Rgba::rgba(200, 0, 0, 128));
        assert_eq!(out, Rgba::rgba(150, 50, 50, 255));
    }

    #[test]
    fn blend_fully_transparent_top_is_identity() {
        let bottom = Rgba::rgba(10, 20, 30, 255);
        assert_eq!(blend_pixel(bottom, Rgba::TRANSPARENT), bottom);
    }

    #[test]
    fn blend_at_ignores_out_of_bounds() {
        let mut surface = Surface::new(2, 2, Rgba::WHITE);
        let before = surface.clone();
        surface.blend_at(-1, 0, Rgba::BLUE);
        surface.blend_at(0, 2, Rgba::BLUE);
        assert_eq!(surface, before);
    }

    #[test]
    fn fade_reaches_background_at_one() {
        let surface = Surface::new(1, 1, Rgba::rgba(200, 10, 10, 255));
        let faded = surface.faded_toward(Rgba::WHITE, 1.0);
        assert_eq!(faded.pixel(0, 0), Rgba::WHITE);
    }

    #[test]
    fn pattern_sampling_wraps_in_both_directions() {
        let tile = PatternTile::graphite();
        assert_eq!(tile.sample(0, 0), tile.sample(16, 16));
        assert_eq!(tile.sample(-1, -1), tile.sample(15, 15));
    }

    #[test]
    fn opacity_scales_paint_alpha() {
        let paint = Paint::Solid(Rgba::rgba(0, 0, 0, 200));
        assert_eq!(paint.color_at_with_opacity(0, 0, 0.5).a, 100);
        assert_eq!(paint.color_at_with_opacity(0, 0, 0.0).a, 0);
    }
}
