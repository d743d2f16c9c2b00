//! Logger setup.

use log::LevelFilter;

/// Installs a [`fern`] logger writing timestamped lines to stderr.
///
/// The dispatch accepts every level; [`set_level`] narrows it once settings are known.
pub fn setup() -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(LevelFilter::Trace)
        .chain(std::io::stderr())
        .apply()?;
    log::set_max_level(LevelFilter::Info);
    Ok(())
}

/// Changes the most verbose level that gets logged.
pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
    log::debug!("Log level set to {level}");
}
