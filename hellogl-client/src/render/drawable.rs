//! Drawables with their GPU resources.

use std::{
    ops::{Deref, DerefMut},
    rc::Rc,
    sync::Arc,
};

use hellogl_core::{Drawable, Primitive};

use super::{COLOR_UNIFORM, MVP_UNIFORM};
use crate::{
    abs::{Mesh, ShaderProgram},
    error::InitError,
};

/// The GL draw mode for a primitive topology.
fn draw_mode(primitive: Primitive) -> u32 {
    match primitive {
        Primitive::IndexedTriangles | Primitive::Triangles => glow::TRIANGLES,
        Primitive::TriangleFan => glow::TRIANGLE_FAN,
    }
}

/// A [`Drawable`] together with its uploaded geometry and the shader program that renders it.
///
/// Dereferences to the inner [`Drawable`], so pose and color are changed the same way for every
/// shape kind. GPU objects are released when this is dropped; the shader program is released
/// once the last drawable using it is gone.
pub struct RenderDrawable {
    drawable: Drawable,
    mesh: Mesh,
    program: Rc<ShaderProgram>,
    mvp_uniform: Option<glow::UniformLocation>,
    color_uniform: Option<glow::UniformLocation>,
}

impl RenderDrawable {
    /// Uploads the geometry of `drawable`, resolves the uniforms of `program` and resets the
    /// pose to the origin with no rotation and a black color.
    pub fn init_buffers(
        gl: &Arc<glow::Context>,
        mut drawable: Drawable,
        program: Rc<ShaderProgram>,
    ) -> Result<Self, InitError> {
        let geometry = drawable.geometry();
        let mesh = Mesh::new(
            gl,
            geometry.vertices(),
            geometry.indices(),
            draw_mode(geometry.primitive()),
        )
        .map_err(InitError::Gl)?;
        drawable.take_geometry_dirty();

        let mvp_uniform = program.uniform_location(MVP_UNIFORM);
        let color_uniform = program.uniform_location(COLOR_UNIFORM);
        if mvp_uniform.is_none() {
            log::warn!("Shape shader has no active {MVP_UNIFORM} uniform");
        }
        if color_uniform.is_none() {
            log::warn!("Shape shader has no active {COLOR_UNIFORM} uniform");
        }

        drawable.reset_pose();

        log::debug!(
            "Initialised {} {} with {} elements",
            drawable.shape(),
            drawable.id(),
            mesh.count()
        );

        Ok(Self {
            drawable,
            mesh,
            program,
            mvp_uniform,
            color_uniform,
        })
    }

    /// Uploads the current geometry to the GPU.
    pub fn bind_buffers(&mut self) {
        let geometry = self.drawable.geometry();
        self.mesh.update(geometry.vertices(), geometry.indices());
    }

    /// Renders the drawable with its current pose and color.
    ///
    /// Leaves no program or vertex array bound.
    pub fn draw(&mut self) {
        self.drawable.update_matrix();
        if self.drawable.take_geometry_dirty() {
            self.bind_buffers();
        }

        self.program.use_program();
        if let Some(location) = &self.mvp_uniform {
            self.program.set_uniform(location, self.drawable.mvp());
        }
        if let Some(location) = &self.color_uniform {
            self.program.set_uniform(location, self.drawable.color());
        }

        self.mesh.draw();
        self.program.unuse();
    }
}

impl Deref for RenderDrawable {
    type Target = Drawable;

    fn deref(&self) -> &Self::Target {
        &self.drawable
    }
}

impl DerefMut for RenderDrawable {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.drawable
    }
}
