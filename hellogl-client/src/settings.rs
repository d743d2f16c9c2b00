//! User settings.
//!
//! Settings are read from a JSON file. Every field has a default, so a partial file (or no file
//! at all) is valid. The default scene is a blue triangle, a red square and a green circle.

use std::path::{Path, PathBuf};

use hellogl_core::{DEFAULT_CIRCLE_SEGMENTS, Drawable, GeometryError, ShapeKind};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::InitError;

/// Window title, size and mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Hello GL".to_string(),
            width: 400,
            height: 400,
            fullscreen: false,
        }
    }
}

/// Paths of shader sources to use instead of the built-in ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

/// One shape of the scene and its initial pose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeSettings {
    pub id: String,
    pub kind: ShapeKind,
    /// Only used by circles.
    pub radius: f32,
    /// Only used by circles.
    pub segments: u32,
    /// Triangles only: `false` draws a plain, non-indexed triangle list.
    pub indexed: bool,
    pub translation: [f32; 3],
    pub rotation: f32,
    pub scale: f32,
    pub color: [f32; 3],
}

impl Default for ShapeSettings {
    fn default() -> Self {
        Self {
            id: "randomID".to_string(),
            kind: ShapeKind::Square,
            radius: 1.0,
            segments: DEFAULT_CIRCLE_SEGMENTS,
            indexed: true,
            translation: [0.0; 3],
            rotation: 0.0,
            scale: 1.0,
            color: [0.0; 3],
        }
    }
}

impl ShapeSettings {
    /// Generates the drawable for this shape, without its pose.
    pub fn build(&self) -> Result<Drawable, GeometryError> {
        let mut drawable = match self.kind {
            ShapeKind::Circle => Drawable::circle_with_segments(self.radius, self.segments)?,
            ShapeKind::Triangle if !self.indexed => Drawable::lone_triangle(),
            kind => Drawable::polygon(kind)?,
        };
        drawable.set_id(self.id.clone());
        Ok(drawable)
    }

    /// Applies the translation, rotation, scale and color to a drawable.
    pub fn apply(&self, drawable: &mut Drawable) {
        let [x, y, z] = self.translation;
        let [r, g, b] = self.color;
        drawable.set_translation(x, y, z);
        drawable.set_rotation(self.rotation);
        drawable.set_scale(self.scale);
        drawable.set_color(r, g, b);
    }
}

/// Everything the client can be configured with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub clear_color: [f32; 4],
    pub log_level: LevelFilter,
    /// Whether the bounce animation starts enabled. Space toggles it at runtime.
    pub animate: bool,
    pub shaders: Option<ShaderPaths>,
    pub shapes: Vec<ShapeSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            clear_color: [1.0, 1.0, 1.0, 0.0],
            log_level: LevelFilter::Info,
            animate: false,
            shaders: None,
            shapes: vec![
                ShapeSettings {
                    id: "blueTriangle".to_string(),
                    kind: ShapeKind::Triangle,
                    translation: [-7.0, 0.0, 0.0],
                    scale: 3.0,
                    color: [0.0, 0.2, 1.0],
                    ..Default::default()
                },
                ShapeSettings {
                    id: "redSquare".to_string(),
                    kind: ShapeKind::Square,
                    translation: [5.0, 0.0, 0.0],
                    scale: 3.0,
                    color: [1.0, 0.2, 0.2],
                    ..Default::default()
                },
                ShapeSettings {
                    id: "greenCircle".to_string(),
                    kind: ShapeKind::Circle,
                    radius: 0.5,
                    scale: 3.0,
                    color: [0.2, 1.0, 0.2],
                    ..Default::default()
                },
            ],
        }
    }
}

impl Settings {
    /// The default settings location, `<config dir>/hellogl/settings.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hellogl").join("settings.json"))
    }

    /// Loads settings from `path`, or from [`Settings::default_path`] when `path` is `None`.
    ///
    /// A missing file yields the defaults. An unreadable or malformed file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, InitError> {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            log::info!("No config directory, using default settings");
            return Ok(Self::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let settings = Self::parse(&contents).map_err(|source| {
                    InitError::SettingsParse {
                        path: path.clone(),
                        source,
                    }
                })?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("{} not found, using default settings", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(InitError::SettingsRead { path, source }),
        }
    }

    pub fn parse(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use hellogl_core::Primitive;

    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Settings::parse("{}").unwrap(), Settings::default());
    }

    #[test]
    fn default_scene_matches_demo() {
        let settings = Settings::default();
        let kinds: Vec<_> = settings.shapes.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            [ShapeKind::Triangle, ShapeKind::Square, ShapeKind::Circle]
        );
        assert_eq!(settings.shapes[2].radius, 0.5);
        assert_eq!(settings.window.width, 400);
    }

    #[test]
    fn partial_settings() {
        let settings = Settings::parse(
            r#"{
                "window": { "title": "shapes" },
                "log_level": "debug",
                "animate": true,
                "shapes": [
                    { "id": "c", "kind": "circle", "radius": 2.0, "color": [1.0, 0.0, 0.0] },
                    { "kind": "rectangle", "translation": [1.0, 2.0, 0.0] }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(settings.window.title, "shapes");
        assert_eq!(settings.window.height, 400);
        assert_eq!(settings.log_level, LevelFilter::Debug);
        assert!(settings.animate);
        assert_eq!(settings.shapes.len(), 2);
        assert_eq!(settings.shapes[0].segments, DEFAULT_CIRCLE_SEGMENTS);
        assert_eq!(settings.shapes[1].id, "randomID");
        assert_eq!(settings.shapes[1].scale, 1.0);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(Settings::parse(r#"{ "shapes": [{ "kind": "hexagon" }] }"#).is_err());
    }

    #[test]
    fn build_and_apply() {
        let shape = ShapeSettings {
            id: "circle".to_string(),
            kind: ShapeKind::Circle,
            radius: 0.5,
            translation: [1.0, -2.0, 0.0],
            rotation: 0.25,
            scale: 3.0,
            color: [0.2, 1.0, 0.2],
            ..Default::default()
        };
        let mut drawable = shape.build().unwrap();
        assert_eq!(drawable.shape(), ShapeKind::Circle);
        assert_eq!(drawable.id(), "circle");
        assert_eq!(drawable.geometry().vertices().len(), 22);

        shape.apply(&mut drawable);
        assert_eq!(drawable.translation(), glam::Vec3::new(1.0, -2.0, 0.0));
        assert_eq!(drawable.rotation(), 0.25);
        assert_eq!(drawable.scale(), 3.0);
        assert_eq!(drawable.color(), glam::Vec3::new(0.2, 1.0, 0.2));
    }

    #[test]
    fn non_indexed_triangle_builds_plain_list() {
        let settings =
            Settings::parse(r#"{ "shapes": [{ "kind": "triangle", "indexed": false }] }"#)
                .unwrap();
        let drawable = settings.shapes[0].build().unwrap();
        assert_eq!(drawable.shape(), ShapeKind::Triangle);
        assert_eq!(drawable.geometry().primitive(), Primitive::Triangles);
        assert!(drawable.geometry().indices().is_empty());

        let indexed = ShapeSettings {
            kind: ShapeKind::Triangle,
            ..Default::default()
        };
        assert_eq!(
            indexed.build().unwrap().geometry().primitive(),
            Primitive::IndexedTriangles
        );
    }

    #[test]
    fn indexed_flag_only_affects_triangles() {
        let square = ShapeSettings {
            kind: ShapeKind::Square,
            indexed: false,
            ..Default::default()
        };
        assert_eq!(
            square.build().unwrap().geometry().primitive(),
            Primitive::IndexedTriangles
        );
    }

    #[test]
    fn build_rejects_bad_circle() {
        let shape = ShapeSettings {
            kind: ShapeKind::Circle,
            radius: 0.0,
            ..Default::default()
        };
        assert_eq!(shape.build(), Err(GeometryError::InvalidRadius(0.0)));
    }

    #[test]
    fn missing_file_is_default() {
        let path = std::env::temp_dir().join("hellogl-settings-that-does-not-exist.json");
        assert_eq!(Settings::load(Some(&path)).unwrap(), Settings::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "hellogl-malformed-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ not json").unwrap();
        let result = Settings::load(Some(&path));
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(InitError::SettingsParse { .. })));
    }
}
