//! The GL-free state of a drawable shape.
//!
//! A [`Drawable`] owns exactly one [`Transform`], one [`Geometry`] and the [`ShapeKind`] tag it
//! was created with. The client wraps it with the GPU resources needed to render it.

use glam::{Mat4, Vec3};

use crate::{
    error::GeometryError,
    geometry::{DEFAULT_CIRCLE_SEGMENTS, Geometry, ShapeKind},
    transform::Transform,
};

/// A shape with its pose, color and local-space geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    kind: ShapeKind,
    radius: Option<f32>,
    segments: u32,
    geometry: Geometry,
    transform: Transform,
    geometry_dirty: bool,
}

impl Drawable {
    fn with_geometry(kind: ShapeKind, geometry: Geometry) -> Self {
        Self {
            kind,
            radius: None,
            segments: 0,
            geometry,
            transform: Transform::new(),
            geometry_dirty: true,
        }
    }

    pub fn triangle() -> Self {
        Self::with_geometry(ShapeKind::Triangle, Geometry::triangle())
    }

    pub fn square() -> Self {
        Self::with_geometry(ShapeKind::Square, Geometry::square())
    }

    pub fn rectangle() -> Self {
        Self::with_geometry(ShapeKind::Rectangle, Geometry::rectangle())
    }

    /// A triangle drawn as a plain, non-indexed triangle list.
    pub fn lone_triangle() -> Self {
        Self::with_geometry(ShapeKind::Triangle, Geometry::lone_triangle())
    }

    /// Creates a polygon of the given kind. Fails for [`ShapeKind::Circle`].
    pub fn polygon(kind: ShapeKind) -> Result<Self, GeometryError> {
        Ok(Self::with_geometry(kind, Geometry::polygon(kind)?))
    }

    /// Creates a circle with [`DEFAULT_CIRCLE_SEGMENTS`] segments.
    pub fn circle(radius: f32) -> Result<Self, GeometryError> {
        Self::circle_with_segments(radius, DEFAULT_CIRCLE_SEGMENTS)
    }

    pub fn circle_with_segments(radius: f32, segments: u32) -> Result<Self, GeometryError> {
        let geometry = Geometry::circle(radius, segments)?;
        let mut drawable = Self::with_geometry(ShapeKind::Circle, geometry);
        drawable.radius = Some(radius);
        drawable.segments = segments;
        Ok(drawable)
    }

    pub fn id(&self) -> &str {
        self.transform.id()
    }

    /// Sets the label of the drawable. Uniqueness is not enforced.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.transform.set_id(id);
    }

    /// The shape kind assigned at construction. It never changes.
    pub fn shape(&self) -> ShapeKind {
        self.kind
    }

    pub fn translation(&self) -> Vec3 {
        self.transform.translation()
    }

    pub fn set_translation(&mut self, x: f32, y: f32, z: f32) {
        self.transform.set_translation(x, y, z);
    }

    pub fn rotation(&self) -> f32 {
        self.transform.rotation()
    }

    pub fn set_rotation(&mut self, angle: f32) {
        self.transform.set_rotation(angle);
    }

    pub fn scale(&self) -> f32 {
        self.transform.scale()
    }

    pub fn set_scale(&mut self, factor: f32) {
        self.transform.set_scale(factor);
    }

    pub fn color(&self) -> Vec3 {
        self.transform.color()
    }

    pub fn set_color(&mut self, r: f32, g: f32, b: f32) {
        self.transform.set_color(r, g, b);
    }

    /// Radius of a circle, `None` for polygons.
    pub fn radius(&self) -> Option<f32> {
        self.radius
    }

    /// Regenerates the fan of a circle with a new radius, keeping its segment count.
    pub fn set_radius(&mut self, radius: f32) -> Result<(), GeometryError> {
        if self.kind != ShapeKind::Circle {
            return Err(GeometryError::NotACircle(self.kind));
        }
        self.geometry = Geometry::circle(radius, self.segments)?;
        log::debug!("Regenerated {} fan with radius {}", self.id(), radius);
        self.radius = Some(radius);
        self.geometry_dirty = true;
        Ok(())
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Returns whether the geometry changed since the last call, and clears the flag.
    pub fn take_geometry_dirty(&mut self) -> bool {
        std::mem::take(&mut self.geometry_dirty)
    }

    /// Applies the pose defaults used when GPU buffers are first set up: origin, no rotation and
    /// black.
    pub fn reset_pose(&mut self) {
        self.transform.set_translation(0.0, 0.0, 0.0);
        self.transform.set_rotation(0.0);
        self.transform.set_color(0.0, 0.0, 0.0);
    }

    pub fn update_matrix(&mut self) {
        self.transform.update_matrix();
    }

    pub fn model(&self) -> Mat4 {
        self.transform.model()
    }

    pub fn mvp(&self) -> Mat4 {
        self.transform.mvp()
    }
}
