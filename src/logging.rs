//! Global logging setup.
//!
//! The library itself only emits through the `log` facade; embedding
//! applications that want those records on stderr can call [`init`] once
//! at startup instead of wiring their own backend.

use anyhow::Result;
use chrono::Local;
use log::LevelFilter;
use once_cell::sync::OnceCell;

static INIT: OnceCell<()> = OnceCell::new();

/// Installs a stderr logger for the whole process.
///
/// Safe to call more than once: only the first call installs anything,
/// later calls are no-ops. `verbose` lowers the threshold from `Info`
/// to `Debug`.
///
/// # Errors
///
/// Returns an error if another logger was already installed outside of
/// this function.
pub fn init(verbose: bool) -> Result<()> {
    INIT.get_or_try_init(|| {
        let level = if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            .chain(std::io::stderr())
            .apply()
            .map_err(anyhow::Error::from)
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        assert!(init(false).is_ok());
        assert!(init(true).is_ok());
        assert!(init(false).is_ok());
    }
}
