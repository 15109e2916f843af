use crate::domain::ports::UpdateSink;
use std::io::{Stdout, Write};
use std::sync::Mutex;

pub const UPDATE_LINE: &str = "update";

/// Writes the fixed `update` line after every successful write.
#[derive(Debug)]
pub struct LineSink<W: Write + Send> {
    out: Mutex<W>,
}

impl LineSink<Stdout> {
    pub fn stdout() -> Self {
        Self::with_writer(std::io::stdout())
    }
}

impl<W: Write + Send> LineSink<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl<W: Write + Send> UpdateSink for LineSink<W> {
    fn updated(&self, tick: u64, bytes: usize) {
        if let Ok(mut out) = self.out.lock() {
            // A closed stdout must not take the poller down with it.
            let _ = writeln!(out, "{}", UPDATE_LINE).and_then(|_| out.flush());
        }
        tracing::debug!(tick, bytes, "output artifact refreshed");
    }
}
