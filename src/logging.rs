//! Logging init: file under the local data dir, or graceful fallback to stderr.
//!
//! The TUI owns the terminal, so log lines go to a file by default.

use color_eyre::Result;
use std::fs;
use std::io;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::state::platform::paths::AppPaths;

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info,subdash=debug";

/// Writer that is either the log file or stderr (used when the file handle cannot be cloned).
enum FileOrStderr {
    File(fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::File(f) => f.write(buf),
            Self::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::File(f) => f.flush(),
            Self::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileMakeWriter(fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize structured logging to `<data_local_dir>/subdash/subdash.log`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened, so the caller can
/// fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = AppPaths::new().log_file()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(FileMakeWriter(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("{e}"))?;

    tracing::info!("subdash logging initialized at {}", path.display());
    Ok(())
}

/// Initialize logging to stderr only. Used when [`init_logging`] fails.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
