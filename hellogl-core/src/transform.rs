//! Pose and color of a single shape.
//!
//! The [`Transform`] stores a translation, a rotation around the Z axis, a uniform scale and a
//! flat color, and derives the matrices used to place local-space geometry into clip space.

use glam::{Mat4, Vec3};

/// Half-extent of the fixed orthographic world rectangle on both axes.
pub const WORLD_EXTENT: f32 = 10.0;

/// The fixed orthographic projection shared by every transform.
pub fn projection() -> Mat4 {
    Mat4::orthographic_rh_gl(
        -WORLD_EXTENT,
        WORLD_EXTENT,
        -WORLD_EXTENT,
        WORLD_EXTENT,
        -1.0,
        1.0,
    )
}

/// Position, rotation, scale and color of a drawable, along with the matrices derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    id: String,
    translation: Vec3,
    rotation: f32,
    scale: f32,
    color: Vec3,

    projection: Mat4,
    view: Mat4,
    model: Mat4,
    mvp: Mat4,
}

impl Default for Transform {
    fn default() -> Self {
        let mut transform = Self {
            id: "randomID".to_string(),
            translation: Vec3::ZERO,
            rotation: 0.0,
            scale: 1.0,
            color: Vec3::ZERO,
            projection: projection(),
            // Eye and target share X/Y, so this never moves anything. It does not enter the MVP.
            view: Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y),
            model: Mat4::IDENTITY,
            mvp: Mat4::IDENTITY,
        };
        transform.update_matrix();
        transform
    }
}

impl Transform {
    /// Creates a transform at the origin with no rotation, unit scale and a black color.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Sets the offset of the shape. Only X and Y take part in the model matrix.
    pub fn set_translation(&mut self, x: f32, y: f32, z: f32) {
        self.translation = Vec3::new(x, y, z);
    }

    /// Rotation around the Z axis, in radians.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, angle: f32) {
        self.rotation = angle;
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Sets the uniform scale applied to X and Y.
    pub fn set_scale(&mut self, factor: f32) {
        self.scale = factor;
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    /// Sets the flat RGB tint. Components are expected in `0.0..=1.0` but are not clamped.
    pub fn set_color(&mut self, r: f32, g: f32, b: f32) {
        self.color = Vec3::new(r, g, b);
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    /// The model matrix as of the last [`Transform::update_matrix`] call.
    pub fn model(&self) -> Mat4 {
        self.model
    }

    /// The projection-model matrix as of the last [`Transform::update_matrix`] call.
    pub fn mvp(&self) -> Mat4 {
        self.mvp
    }

    /// Recomputes the model and MVP matrices from the current pose.
    ///
    /// `model = I * Rz(angle) * T(x, y, 0) * S(scale, scale, 0)` and `mvp = projection * model`.
    pub fn update_matrix(&mut self) {
        self.model = Mat4::IDENTITY
            * Mat4::from_rotation_z(self.rotation)
            * Mat4::from_translation(Vec3::new(self.translation.x, self.translation.y, 0.0))
            * Mat4::from_scale(Vec3::new(self.scale, self.scale, 0.0));
        self.mvp = self.projection * self.model;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let transform = Transform::new();
        assert_eq!(transform.id(), "randomID");
        assert_eq!(transform.translation(), Vec3::ZERO);
        assert_eq!(transform.rotation(), 0.0);
        assert_eq!(transform.scale(), 1.0);
        assert_eq!(transform.color(), Vec3::ZERO);
    }

    #[test]
    fn setters_do_not_cross_mutate() {
        let mut transform = Transform::new();
        transform.set_translation(5.0, 0.0, 0.0);
        transform.set_scale(2.0);
        assert_eq!(transform.translation(), Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(transform.scale(), 2.0);
        assert_eq!(transform.rotation(), 0.0);

        transform.set_color(0.2, 1.5, -1.0);
        assert_eq!(transform.color(), Vec3::new(0.2, 1.5, -1.0));
        assert_eq!(transform.translation(), Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn update_matrix_is_idempotent() {
        let mut transform = Transform::new();
        for angle in [0.0, 0.3, 1.0, std::f32::consts::PI, -2.5] {
            transform.set_translation(1.5, -3.0, 7.0);
            transform.set_rotation(angle);
            transform.set_scale(2.5);
            transform.update_matrix();
            let (model, mvp) = (transform.model(), transform.mvp());
            transform.update_matrix();
            assert_eq!(transform.model(), model);
            assert_eq!(transform.mvp(), mvp);
        }
    }

    #[test]
    fn model_without_rotation_is_translate_then_scale() {
        let mut transform = Transform::new();
        transform.set_scale(3.0);
        transform.set_translation(-5.0, 0.0, 0.0);
        transform.set_rotation(0.0);
        transform.update_matrix();

        let expected = Mat4::from_translation(Vec3::new(-5.0, 0.0, 0.0))
            * Mat4::from_scale(Vec3::new(3.0, 3.0, 0.0));
        assert_eq!(transform.model(), expected);
        assert_eq!(transform.mvp(), projection() * expected);
    }

    #[test]
    fn z_translation_is_ignored() {
        let mut a = Transform::new();
        let mut b = Transform::new();
        a.set_translation(1.0, 2.0, 0.0);
        b.set_translation(1.0, 2.0, 42.0);
        a.update_matrix();
        b.update_matrix();
        assert_eq!(a.model(), b.model());
    }

    #[test]
    fn rotation_is_applied_outside_translation() {
        let mut transform = Transform::new();
        transform.set_translation(1.0, 0.0, 0.0);
        transform.set_rotation(std::f32::consts::FRAC_PI_2);
        transform.update_matrix();

        // The local origin is translated to (1, 0) and then rotated a quarter turn to (0, 1).
        let origin = transform.model().transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(0.0, 1.0, 0.0), 1e-6));
    }

    #[test]
    fn projection_maps_world_corners_to_clip_corners() {
        let projection = projection();
        let corner = projection.transform_point3(Vec3::new(10.0, -10.0, 0.0));
        assert!(corner.abs_diff_eq(Vec3::new(1.0, -1.0, 0.0), 1e-6));
    }
}
