//! Errors that can stop the client before the first frame is drawn.

use std::path::PathBuf;

use hellogl_core::GeometryError;
use thiserror::Error;

/// Anything that can go wrong while setting up the window, shaders, settings or drawables.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to read shader source {path:?}")]
    ShaderRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to compile {stage} shader: {log}")]
    ShaderCompile { stage: &'static str, log: String },
    #[error("failed to link shader program: {0}")]
    ShaderLink(String),
    #[error("invalid shape: {0}")]
    Geometry(#[from] GeometryError),
    #[error("OpenGL error: {0}")]
    Gl(String),
    #[error("window setup failed: {0}")]
    Window(String),
    #[error("failed to read settings {path:?}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings {path:?}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
