use crate::error::Result;
use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Mutex;
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

/// Builds the run's logger: stdout by default, or appended to `log_file`.
///
/// With `debug` every level down to DEBUG is kept, otherwise `RUST_LOG`
/// applies and falls back to INFO. The returned dispatcher is installed by the
/// caller for the duration of the run; nothing is set globally.
pub fn dispatch(log_file: Option<&Path>, debug: bool) -> Result<Dispatch> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let dispatch = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Dispatch::new(
                builder
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .finish(),
            )
        }
        None => Dispatch::new(
            builder
                .with_ansi(std::io::stdout().is_terminal())
                .with_writer(std::io::stdout)
                .finish(),
        ),
    };
    Ok(dispatch)
}
