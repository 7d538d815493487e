//! Logging utilities for tests.
//!
//! Provides test-safe logging initialisation that avoids reading from the
//! environment, and a subscriber that captures formatted output so tests can
//! assert on the events the parser emits.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt};

/// Send `debug` and above to the test output capture.
///
/// Only the first call in a process installs a subscriber; later calls are
/// ignored so every test may call it.
pub fn init_for_tests() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("ini_reader=debug"))
        .with_test_writer()
        .try_init();
}

/// Shared buffer receiving formatted log lines.
#[derive(Clone, Debug, Default)]
pub struct CapturedLogs {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    /// Create an empty capture buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a subscriber writing into this buffer with the given filter.
    ///
    /// Use it with [`tracing::subscriber::with_default`] to scope the
    /// capture to one test.
    #[must_use]
    pub fn subscriber(&self, filter: &str) -> impl Subscriber + Send + Sync + use<> {
        fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(self.clone())
            .with_ansi(false)
            .finish()
    }

    /// Everything captured so far, decoded lossily.
    #[must_use]
    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter {
            buf: Arc::clone(&self.buf),
        }
    }
}

/// Writer handed out by [`CapturedLogs`].
#[derive(Debug)]
pub struct CapturedWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
