//! The core of hellogl. This crate holds everything about a shape that does not need a GL
//! context: its pose and matrices, its local-space geometry, and the demo animation.

pub mod animation;
pub mod drawable;
pub mod error;
pub mod geometry;
pub mod transform;

pub use animation::Bounce;
pub use drawable::Drawable;
pub use error::GeometryError;
pub use geometry::{DEFAULT_CIRCLE_SEGMENTS, Geometry, Primitive, ShapeKind};
pub use transform::Transform;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heterogeneous_drawables_share_one_surface() {
        let mut shapes = vec![
            Drawable::triangle(),
            Drawable::square(),
            Drawable::circle(0.5).unwrap(),
        ];
        for (i, shape) in shapes.iter_mut().enumerate() {
            shape.set_id(format!("shape{i}"));
            shape.set_scale(3.0);
            shape.update_matrix();
        }

        let kinds: Vec<_> = shapes.iter().map(Drawable::shape).collect();
        assert_eq!(
            kinds,
            [ShapeKind::Triangle, ShapeKind::Square, ShapeKind::Circle]
        );
        assert_eq!(shapes[2].id(), "shape2");
        assert_eq!(shapes[2].geometry().primitive(), Primitive::TriangleFan);
    }
}
