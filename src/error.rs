use thiserror::Error;

/// Invalid tuning detected while constructing an engine. Fatal at startup:
/// every normalization range the geometry evaluator divides by must be
/// non-degenerate before any event is accepted.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("tilt threshold {threshold} must exceed minimum altitude angle {min_altitude}")]
    EmptyAltitudeRange { threshold: f32, min_altitude: f32 },
    #[error("maximum force {max} must exceed minimum force {min}")]
    EmptyForceRange { min: f32, max: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositiveParameter { name: &'static str, value: f32 },
}
