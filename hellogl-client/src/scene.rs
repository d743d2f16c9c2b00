//! The scene driver.
//!
//! A [`Scene`] owns every drawable on screen and the bounce animation that moves the first two.

use std::{rc::Rc, sync::Arc};

use glow::HasContext;
use hellogl_core::Bounce;
use sdl2::keyboard::Keycode;

use crate::{
    abs::ShaderProgram, error::InitError, other::KeyboardState, render::drawable::RenderDrawable,
    settings::ShapeSettings,
};

/// The drawables of the running program and their animation state.
pub struct Scene {
    drawables: Vec<RenderDrawable>,
    bounce: Bounce,
    animating: bool,
    clear_color: [f32; 4],
}

impl Scene {
    /// Creates and initialises one drawable per entry of `shapes`, all sharing `program`.
    pub fn new(
        gl: &Arc<glow::Context>,
        program: Rc<ShaderProgram>,
        shapes: &[ShapeSettings],
        animating: bool,
        clear_color: [f32; 4],
    ) -> Result<Self, InitError> {
        let mut drawables = Vec::with_capacity(shapes.len());
        for shape in shapes {
            let mut drawable = RenderDrawable::init_buffers(gl, shape.build()?, Rc::clone(&program))?;
            shape.apply(&mut drawable);
            drawables.push(drawable);
        }

        if animating && drawables.len() < 2 {
            log::warn!("The bounce animation needs at least two shapes");
        }
        log::info!("Scene has {} drawables", drawables.len());

        Ok(Self {
            drawables,
            bounce: Bounce::default(),
            animating,
            clear_color,
        })
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Handles input and advances the animation by one frame.
    pub fn update(&mut self, keyboard: &KeyboardState) {
        if keyboard.pressed.contains(&Keycode::Space) {
            self.animating = !self.animating;
            log::info!(
                "Animation {}",
                if self.animating { "resumed" } else { "paused" }
            );
        }

        if !self.animating {
            return;
        }
        if let [rising, falling, ..] = self.drawables.as_mut_slice() {
            self.bounce.apply(rising, falling);
        }
    }

    /// Clears the screen and draws every drawable.
    pub fn render(&mut self, gl: &glow::Context) {
        let [r, g, b, a] = self.clear_color;
        unsafe {
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }

        for drawable in &mut self.drawables {
            drawable.draw();
        }
    }
}
