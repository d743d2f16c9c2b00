use std::{path::PathBuf, process::ExitCode, rc::Rc};

use glow::HasContext;

use crate::{abs::*, error::InitError, scene::Scene, settings::Settings};

mod abs;
mod error;
mod logging;
mod other;
mod render;
mod scene;
mod settings;

fn run() -> Result<(), InitError> {
    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load(settings_path.as_deref())?;
    logging::set_level(settings.log_level);

    let mut app = App::new(&settings.window)?;

    let program = Rc::new(render::shape_program(
        &app.gl,
        settings.shaders.as_ref(),
    )?);
    let mut scene = Scene::new(
        &app.gl,
        program,
        &settings.shapes,
        settings.animate,
        settings.clear_color,
    )?;

    let mut keyboard_state = other::KeyboardState::default();

    'running: loop {
        keyboard_state.begin_frame();

        for event in app.event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. }
                | sdl2::event::Event::KeyDown {
                    keycode: Some(sdl2::keyboard::Keycode::Escape),
                    ..
                } => break 'running,
                sdl2::event::Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(width, height),
                    ..
                } => unsafe {
                    app.gl.viewport(0, 0, width, height);
                },
                sdl2::event::Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => keyboard_state.key_down(keycode),
                sdl2::event::Event::KeyUp {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => keyboard_state.key_up(keycode),
                _ => {}
            }
        }

        scene.update(&keyboard_state);
        scene.render(&app.gl);
        app.window.gl_swap_window();
    }

    log::info!(
        "Shutting down, animation was {}",
        if scene.is_animating() { "running" } else { "paused" }
    );
    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = logging::setup() {
        eprintln!("{e}");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let mut message = e.to_string();
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                message.push_str(&format!(": {cause}"));
                source = cause.source();
            }
            log::error!("{message}");
            ExitCode::FAILURE
        }
    }
}
