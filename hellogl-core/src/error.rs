use thiserror::Error;

use crate::geometry::ShapeKind;

/// Rejected shape parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("circle radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("a circle needs at least 3 segments, got {0}")]
    TooFewSegments(u32),
    #[error("{0} is not a polygon")]
    NotAPolygon(ShapeKind),
    #[error("{0} has no radius")]
    NotACircle(ShapeKind),
}
