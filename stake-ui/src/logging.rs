//! Tracing setup for the calculator.
//!
//! Records go to stderr, leaving stdout to the panels, and once
//! [`enable_file_logging`] has been called, to a log file. The level filter
//! can be swapped at runtime with [`set_log_level`].

use anyhow::Result;
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_DIRECTIVE: &str = "warn";

// --- Formatter ---

/// `<local timestamp> <LEVEL> <file:line> <fields>`, coloured when the
/// writer supports ANSI escapes.
struct LocalTimeFormat;

impl<S, N> FormatEvent<S, N> for LocalTimeFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");

        if ansi {
            write!(writer, "\x1b[2m{timestamp}\x1b[0m ")?;
        } else {
            write!(writer, "{timestamp} ")?;
        }

        let colour = match (ansi, *meta.level()) {
            (false, _) => "",
            (true, Level::ERROR) => "\x1b[1;31m",
            (true, Level::WARN) => "\x1b[1;33m",
            (true, Level::INFO) => "\x1b[1;32m",
            (true, Level::DEBUG) => "\x1b[1;34m",
            (true, Level::TRACE) => "\x1b[1;35m",
        };
        let reset = if ansi { "\x1b[0m" } else { "" };
        write!(writer, "{colour}{:>5}{reset} ", meta.level())?;

        if let (Some(file), Some(line)) = (meta.file().map(short_source_path), meta.line()) {
            if ansi {
                write!(writer, "\x1b[36m{file}:{line}\x1b[0m ")?;
            } else {
                write!(writer, "{file}:{line} ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Drops everything up to and including the first `src/` segment, so
/// `stake-ui/src/state.rs` prints as `state.rs`.
fn short_source_path(path: &str) -> &str {
    ["src/", "src\\"]
        .iter()
        .filter_map(|marker| path.find(marker).map(|i| &path[i + marker.len()..]))
        .next()
        .unwrap_or(path)
}

// --- Late-bound file writer ---

type FileHandle = Arc<Mutex<Option<File>>>;

/// A MakeWriter that discards output until a file is attached.
#[derive(Clone)]
struct FileSlot(FileHandle);

struct SlotWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for SlotWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match &mut *self.0 {
            Some(f) => f.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut *self.0 {
            Some(f) => f.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileSlot {
    type Writer = SlotWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SlotWriter(lock_slot(&self.0))
    }
}

fn lock_slot(slot: &FileHandle) -> MutexGuard<'_, Option<File>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

// --- Statics ---

type SetLevelFn = Box<dyn Fn(&str) -> Result<()> + Send + Sync>;

static SET_LOG_LEVEL: OnceLock<SetLevelFn> = OnceLock::new();
static FILE_SLOT: OnceLock<FileHandle> = OnceLock::new();

fn parse_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive)
        .map_err(|e| anyhow::anyhow!("invalid log level '{directive}': {e}"))
}

fn store_level_handle<S>(handle: reload::Handle<EnvFilter, S>)
where
    S: Subscriber + Send + Sync + 'static,
{
    let _ = SET_LOG_LEVEL.set(Box::new(move |directive: &str| {
        handle
            .reload(parse_filter(directive)?)
            .map_err(|e| anyhow::anyhow!("filter reload failed: {e}"))
    }));
}

// --- Public API ---

/// Initializes logging. Call once at startup; later calls are no-ops.
///
/// - Stderr: coloured when attached to a terminal, plain when piped.
/// - File: inactive until [`enable_file_logging`] is called.
/// - Level: `RUST_LOG` if set, otherwise `warn`.
pub fn init_logging() {
    let file_inner: FileHandle = Arc::new(Mutex::new(None));
    let _ = FILE_SLOT.set(file_inner.clone());

    let initial = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let (level_filter, level_handle) = reload::Layer::new(initial);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalTimeFormat)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalTimeFormat)
        .with_ansi(false)
        .with_writer(FileSlot(file_inner));

    if tracing_subscriber::registry()
        .with(level_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        store_level_handle(level_handle);
    }
}

/// Changes the active log filter at runtime.
///
/// Accepts a bare level ("error", "warn", "info", "debug", "trace")
/// or any full `EnvFilter` directive.
pub fn set_log_level(directive: &str) -> Result<()> {
    match SET_LOG_LEVEL.get() {
        Some(f) => f(directive),
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Starts appending log output to `path`, replacing any open log file.
/// The directory must already exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow::anyhow!("cannot open log file '{}': {e}", path.display()))?;

    match FILE_SLOT.get() {
        Some(slot) => {
            *lock_slot(slot) = Some(file);
            Ok(())
        }
        None => anyhow::bail!("logging not yet initialized"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_source_path_strips_crate_prefix() {
        assert_eq!(short_source_path("stake-ui/src/state.rs"), "state.rs");
        assert_eq!(short_source_path("src/views/mod.rs"), "views/mod.rs");
        assert_eq!(short_source_path("stake-core\\src\\lib.rs"), "lib.rs");
        assert_eq!(short_source_path("main.rs"), "main.rs");
    }

    #[test]
    fn parse_filter_accepts_levels_and_directives() {
        assert!(parse_filter("debug").is_ok());
        assert!(parse_filter("info,stake_core=trace").is_ok());
    }

    #[test]
    fn parse_filter_rejects_garbage() {
        assert!(parse_filter("stake_ui=loud").is_err());
    }
}
