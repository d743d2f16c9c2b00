//! Local-space geometry for every supported shape kind.
//!
//! Geometry is generated once when a shape kind is assigned. Polygons are indexed triangle
//! lists, circles are non-indexed triangle fans.

use std::f64::consts::PI;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Segment count used for circles when none is given.
pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 20;

/// The tag selecting which geometry rule a drawable uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Triangle,
    Square,
    Rectangle,
    Circle,
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ShapeKind::Triangle => "triangle",
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
        };
        f.write_str(name)
    }
}

/// How the vertex (and index) data is meant to be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Indexed triangle list.
    IndexedTriangles,
    /// Non-indexed triangle fan around the first vertex.
    TriangleFan,
    /// Non-indexed triangle list.
    Triangles,
}

/// Vertex positions and optional indices of a shape, in local space.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
    primitive: Primitive,
}

impl Geometry {
    /// Generates the geometry of a polygon kind.
    ///
    /// Returns [`GeometryError::NotAPolygon`] for [`ShapeKind::Circle`], which needs a radius.
    pub fn polygon(kind: ShapeKind) -> Result<Self, GeometryError> {
        match kind {
            ShapeKind::Triangle => Ok(Self::triangle()),
            ShapeKind::Square => Ok(Self::square()),
            ShapeKind::Rectangle => Ok(Self::rectangle()),
            ShapeKind::Circle => Err(GeometryError::NotAPolygon(kind)),
        }
    }

    pub fn triangle() -> Self {
        Self::indexed(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.5, 1.0, 0.0),
            ],
            vec![0, 1, 2],
        )
    }

    /// Unit square with its bottom-left corner at the origin.
    pub fn square() -> Self {
        Self::indexed(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
        )
    }

    /// 2x1 rectangle with its bottom-left corner at the origin.
    pub fn rectangle() -> Self {
        Self::indexed(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(2.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
        )
    }

    fn indexed(vertices: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self {
            vertices,
            indices,
            primitive: Primitive::IndexedTriangles,
        }
    }

    /// The single triangle used before indexed drawing existed: three vertices drawn as a plain
    /// triangle list.
    pub fn lone_triangle() -> Self {
        Self {
            vertices: vec![
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            indices: Vec::new(),
            primitive: Primitive::Triangles,
        }
    }

    /// Generates a triangle fan approximating a circle of the given radius.
    ///
    /// The fan starts at `(0, radius)` and the perimeter is sampled around that same point, so
    /// the fan pivot is the top of the circle's bounding box rather than its center. There are
    /// `segments + 2` vertices: the pivot, then `segments + 1` perimeter points with the first
    /// one repeated at the end to close the fan.
    pub fn circle(radius: f32, segments: u32) -> Result<Self, GeometryError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }
        if segments < 3 {
            return Err(GeometryError::TooFewSegments(segments));
        }

        let pivot = Vec3::new(0.0, radius, 0.0);
        let mut vertices = Vec::with_capacity(segments as usize + 2);
        vertices.push(pivot);
        for segment in 0..=segments {
            let angle = segment as f64 * 2.0 * PI / segments as f64;
            let x = pivot.x + radius * angle.cos() as f32;
            let y = pivot.y + radius * angle.sin() as f32;
            vertices.push(Vec3::new(x, y, 0.0));
        }

        Ok(Self {
            vertices,
            indices: Vec::new(),
            primitive: Primitive::TriangleFan,
        })
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Triangle indices into [`Geometry::vertices`]. Empty for non-indexed primitives.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn primitive(&self) -> Primitive {
        self.primitive
    }

    /// Number of elements a draw call consumes: indices when indexed, vertices otherwise.
    pub fn element_count(&self) -> usize {
        match self.primitive {
            Primitive::IndexedTriangles => self.indices.len(),
            Primitive::TriangleFan | Primitive::Triangles => self.vertices.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_indices_in_range(geometry: &Geometry) {
        let count = geometry.vertices().len() as u32;
        assert!(geometry.indices().iter().all(|&i| i < count));
    }

    #[test]
    fn square_is_constant() {
        let square = Geometry::polygon(ShapeKind::Square).unwrap();
        assert_eq!(
            square.vertices(),
            &[
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ]
        );
        assert_eq!(square.indices(), &[0, 1, 2, 0, 2, 3]);
        assert_eq!(square.primitive(), Primitive::IndexedTriangles);
        assert_eq!(square.element_count(), 6);
    }

    #[test]
    fn rectangle_is_two_by_one() {
        let rect = Geometry::polygon(ShapeKind::Rectangle).unwrap();
        assert_eq!(rect.vertices().len(), 4);
        assert_eq!(rect.vertices()[2], Vec3::new(2.0, 1.0, 0.0));
        assert_eq!(rect.indices(), &[0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn triangle_has_three_indices() {
        let triangle = Geometry::polygon(ShapeKind::Triangle).unwrap();
        assert_eq!(triangle.vertices().len(), 3);
        assert_eq!(triangle.vertices()[2], Vec3::new(0.5, 1.0, 0.0));
        assert_eq!(triangle.indices(), &[0, 1, 2]);
    }

    #[test]
    fn polygon_rejects_circle() {
        assert_eq!(
            Geometry::polygon(ShapeKind::Circle),
            Err(GeometryError::NotAPolygon(ShapeKind::Circle))
        );
    }

    #[test]
    fn all_indices_in_range() {
        for kind in [ShapeKind::Triangle, ShapeKind::Square, ShapeKind::Rectangle] {
            assert_indices_in_range(&Geometry::polygon(kind).unwrap());
        }
        assert_indices_in_range(&Geometry::circle(2.0, 7).unwrap());
        assert_indices_in_range(&Geometry::lone_triangle());
    }

    #[test]
    fn lone_triangle_is_plain_list() {
        let triangle = Geometry::lone_triangle();
        assert_eq!(triangle.primitive(), Primitive::Triangles);
        assert!(triangle.indices().is_empty());
        assert_eq!(triangle.element_count(), 3);
    }

    #[test]
    fn unit_circle_fan() {
        let circle = Geometry::circle(1.0, 20).unwrap();
        let vertices = circle.vertices();
        assert_eq!(vertices.len(), 22);
        assert_eq!(vertices[0], Vec3::new(0.0, 1.0, 0.0));
        for (k, vertex) in vertices.iter().enumerate().skip(1) {
            let angle = 2.0 * std::f32::consts::PI * (k - 1) as f32 / 20.0;
            let expected = Vec3::new(angle.cos(), 1.0 + angle.sin(), 0.0);
            assert!(
                vertex.abs_diff_eq(expected, 1e-5),
                "vertex {k}: {vertex} != {expected}"
            );
        }
        assert_eq!(circle.primitive(), Primitive::TriangleFan);
        assert!(circle.indices().is_empty());
        assert_eq!(circle.element_count(), 22);
    }

    #[test]
    fn circle_closes_the_fan() {
        let circle = Geometry::circle(0.5, 12).unwrap();
        let vertices = circle.vertices();
        assert!(vertices[1].abs_diff_eq(vertices[vertices.len() - 1], 1e-6));
    }

    #[test]
    fn circle_rejects_bad_parameters() {
        assert_eq!(
            Geometry::circle(0.0, 20),
            Err(GeometryError::InvalidRadius(0.0))
        );
        assert_eq!(
            Geometry::circle(-1.0, 20),
            Err(GeometryError::InvalidRadius(-1.0))
        );
        assert!(matches!(
            Geometry::circle(f32::NAN, 20),
            Err(GeometryError::InvalidRadius(_))
        ));
        assert_eq!(
            Geometry::circle(1.0, 2),
            Err(GeometryError::TooFewSegments(2))
        );
    }
}
