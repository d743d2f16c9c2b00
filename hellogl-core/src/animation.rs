//! Up-and-down bounce used by the demo scene.

use crate::drawable::Drawable;

/// Moves two drawables vertically in opposite directions, reversing once they near the edge of
/// the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounce {
    offset: f32,
    direction: f32,
    /// Distance travelled per step.
    pub speed: f32,
    /// Offset past which the direction flips.
    pub limit: f32,
    /// Fixed X positions of the rising and falling drawables.
    pub columns: (f32, f32),
}

impl Default for Bounce {
    fn default() -> Self {
        Self {
            offset: 0.0,
            direction: 1.0,
            speed: 0.2,
            limit: 9.5,
            columns: (-5.0, 5.0),
        }
    }
}

impl Bounce {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    /// Advances the offset by one step, flipping direction once it passes the limit.
    pub fn step(&mut self) -> f32 {
        self.offset += self.speed * self.direction;
        if self.offset > self.limit || self.offset < -self.limit {
            self.direction = -self.direction;
            log::trace!("Bounce reversed at offset {}", self.offset);
        }
        self.offset
    }

    /// Steps and moves `rising` to `(columns.0, offset)` and `falling` to `(columns.1, -offset)`.
    pub fn apply(&mut self, rising: &mut Drawable, falling: &mut Drawable) {
        let offset = self.step();
        rising.set_translation(self.columns.0, offset, 0.0);
        falling.set_translation(self.columns.1, -offset, 0.0);
    }
}
