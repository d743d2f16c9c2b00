//! This module contains the thin wrappers around SDL2 and OpenGL objects: application setup,
//! shader management and mesh handling.

pub mod app;
pub mod mesh;
pub mod shader;

pub use app::*;
pub use mesh::*;
pub use shader::*;
