use std::ops::Sub;

/// Point or direction in surface coordinates. Origin is the top-left corner,
/// `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector with the same heading. The zero vector maps to itself.
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len <= f32::EPSILON {
            return self;
        }
        Self::new(self.x / len, self.y / len)
    }

    /// Heading angle in radians, as reported by `atan2`.
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Stylus,
    Touch,
}

/// One device-reported sample. Created per report, consumed synchronously,
/// never retained across events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub previous_position: Vec2,
    pub position: Vec2,
    pub kind: PointerKind,
    /// Contact force; 0 for contacts that do not report force.
    pub force: f32,
    /// Tilt from the surface plane in radians; `π/2` is perpendicular.
    pub altitude_angle: f32,
    /// Device heading projected onto the surface, unit length.
    pub azimuth: Vec2,
    /// Finger contact radius; meaningful only for `Touch`.
    pub contact_radius: f32,
}

impl PointerSample {
    pub fn stylus(
        previous_position: Vec2,
        position: Vec2,
        force: f32,
        altitude_angle: f32,
        azimuth: Vec2,
    ) -> Self {
        Self {
            previous_position,
            position,
            kind: PointerKind::Stylus,
            force,
            altitude_angle,
            azimuth: azimuth.normalized(),
            contact_radius: 0.0,
        }
    }

    pub fn touch(previous_position: Vec2, position: Vec2, contact_radius: f32) -> Self {
        Self {
            previous_position,
            position,
            kind: PointerKind::Touch,
            force: 0.0,
            altitude_angle: 0.0,
            azimuth: Vec2::default(),
            contact_radius,
        }
    }

    /// Reported stroke direction for this sample.
    pub fn stroke_direction(&self) -> Vec2 {
        self.position - self.previous_position
    }
}

/// One host input event: the primary sample plus whatever higher-rate
/// coalesced sub-samples and speculative predicted samples the input source
/// delivered alongside it. Both vectors are in chronological order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointerEvent {
    pub primary: Option<PointerSample>,
    pub coalesced: Vec<PointerSample>,
    pub predicted: Vec<PointerSample>,
}

impl PointerEvent {
    pub fn single(sample: PointerSample) -> Self {
        Self {
            primary: Some(sample),
            coalesced: Vec::new(),
            predicted: Vec::new(),
        }
    }

    pub fn with_coalesced(mut self, samples: Vec<PointerSample>) -> Self {
        self.coalesced = samples;
        self
    }

    pub fn with_predicted(mut self, samples: Vec<PointerSample>) -> Self {
        self.predicted = samples;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_preserves_heading_and_unit_length() {
        let v = Vec2::new(3.0, 4.0).normalized();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v.x - 0.6).abs() < 1e-6);
        assert!((v.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn normalized_zero_vector_stays_zero() {
        assert_eq!(Vec2::default().normalized(), Vec2::default());
    }

    #[test]
    fn stroke_direction_is_position_delta() {
        let sample = PointerSample::touch(Vec2::new(2.0, 3.0), Vec2::new(5.0, 7.0), 10.0);
        assert_eq!(sample.stroke_direction(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn stylus_constructor_normalizes_azimuth() {
        let sample = PointerSample::stylus(
            Vec2::default(),
            Vec2::new(1.0, 0.0),
            1.0,
            0.5,
            Vec2::new(0.0, 10.0),
        );
        assert_eq!(sample.azimuth, Vec2::new(0.0, 1.0));
    }
}
