//! Module for anything related to rendering.
//!
//! This module contains the GPU side of drawables and the shape shader they all use.

use std::sync::Arc;

use crate::{abs::ShaderProgram, error::InitError, settings::ShaderPaths};

pub mod drawable;

/// Name of the projection-model matrix uniform in the shape shader.
pub const MVP_UNIFORM: &str = "MVP";
/// Name of the flat color uniform in the shape shader.
pub const COLOR_UNIFORM: &str = "ColorVector";

const SHAPE_VERT: &str = include_str!("shaders/shape/vert.glsl");
const SHAPE_FRAG: &str = include_str!("shaders/shape/frag.glsl");

fn read_source(path: &std::path::Path) -> Result<String, InitError> {
    std::fs::read_to_string(path).map_err(|source| InitError::ShaderRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds the shape shader program, from the given files if any, otherwise from the built-in
/// sources.
pub fn shape_program(
    gl: &Arc<glow::Context>,
    paths: Option<&ShaderPaths>,
) -> Result<ShaderProgram, InitError> {
    match paths {
        Some(paths) => {
            log::info!(
                "Loading shape shaders from {} and {}",
                paths.vertex.display(),
                paths.fragment.display()
            );
            let vert = read_source(&paths.vertex)?;
            let frag = read_source(&paths.fragment)?;
            ShaderProgram::from_sources(gl, &vert, &frag)
        }
        None => ShaderProgram::from_sources(gl, SHAPE_VERT, SHAPE_FRAG),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_shaders_declare_uniforms() {
        assert!(SHAPE_VERT.contains(&format!("uniform mat4 {MVP_UNIFORM};")));
        assert!(SHAPE_FRAG.contains(&format!("uniform vec3 {COLOR_UNIFORM};")));
    }

    #[test]
    fn missing_shader_file_is_reported() {
        let path = std::env::temp_dir().join("hellogl-missing-shader.vs");
        match read_source(&path) {
            Err(InitError::ShaderRead { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
