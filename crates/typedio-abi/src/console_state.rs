//! The process console behind the exported symbols.
//!
//! One [`Console`] serves every call. It is created on first use, bound to
//! the host stdin/stdout with the configured flavor, and guarded by a
//! `parking_lot::Mutex` so each call reads or writes a whole value. An
//! `atexit` hook flushes pending output when the program returns from
//! `main` or calls `exit`.

use std::io::{self, BufRead, BufReader, Write};
use std::sync::Once;

use parking_lot::Mutex;
use typedio_core::{Console, Flavor, runtime_config};

/// Console type used by the process-wide state.
pub type ProcessConsole = Console<Box<dyn BufRead + Send>, Box<dyn Write + Send>>;

static CONSOLE: Mutex<Option<ProcessConsole>> = Mutex::new(None);
static EXIT_FLUSH: Once = Once::new();

fn host_console() -> ProcessConsole {
    Console::with_flavor(
        Box::new(BufReader::new(io::stdin())),
        Box::new(io::stdout()),
        runtime_config().flavor,
    )
}

/// Run `f` against the process console, creating it on first use.
pub(crate) fn with_console<T>(f: impl FnOnce(&mut ProcessConsole) -> T) -> T {
    let mut guard = CONSOLE.lock();
    let console = guard.get_or_insert_with(|| {
        register_exit_flush();
        host_console()
    });
    f(console)
}

/// Replace the process console with `reader`/`writer`.
///
/// Returns the previous console, if one had been created. Pending output of
/// the previous console is not flushed.
pub fn install_console<R, W>(reader: R, writer: W, flavor: Flavor) -> Option<ProcessConsole>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    let console: ProcessConsole = Console::with_flavor(Box::new(reader), Box::new(writer), flavor);
    register_exit_flush();
    CONSOLE.lock().replace(console)
}

/// Drop the installed console; the next call binds the host streams again.
pub fn reset_console() -> Option<ProcessConsole> {
    CONSOLE.lock().take()
}

fn register_exit_flush() {
    EXIT_FLUSH.call_once(|| {
        // SAFETY: `flush_at_exit` is a plain extern "C" fn with no captured
        // state. A failed registration only loses the final flush.
        unsafe {
            libc::atexit(flush_at_exit);
        }
    });
}

extern "C" fn flush_at_exit() {
    // `exit` can run while another thread holds the lock; skip rather than
    // deadlock the exiting thread.
    if let Some(mut guard) = CONSOLE.try_lock() {
        if let Some(console) = guard.as_mut() {
            let _ = console.flush();
        }
    }
}
