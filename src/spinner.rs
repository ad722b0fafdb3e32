use crate::writer::LineWriter;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Predefined glyph sequences for the pending animation.
pub const SPINNERS: [&str; 2] = ["⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏", "┤┘┴└├┌┬┐"];

/// Which sequence is active. A static configuration choice, not negotiated
/// at runtime.
pub const SELECTED_SPINNER: usize = 1;

pub(crate) const TICK: Duration = Duration::from_millis(80);

/// The terminal line shared between the reporter and the spinner thread.
/// The epoch is bumped on every start/stop; a tick thread only renders
/// while its captured epoch is current, so once `stop()` has returned no
/// stale frame can overwrite a just-written line.
pub(crate) struct Shared {
    pub(crate) writer: Box<dyn LineWriter>,
    epoch: u64,
}

impl Shared {
    pub(crate) fn new(writer: Box<dyn LineWriter>) -> Self {
        Self { writer, epoch: 0 }
    }
}

/// Drives the pending-line animation. At most one spinner is live per
/// reporter; starting a new one always supersedes the previous.
pub(crate) struct Spinner {
    shared: Arc<Mutex<Shared>>,
}

impl Spinner {
    pub(crate) fn new(shared: Arc<Mutex<Shared>>) -> Self {
        Self { shared }
    }

    /// Starts ticking through `frames`, one every ~80ms, clearing and
    /// rewriting the current line each time. The frame index restarts at 0
    /// and wraps modulo the frame count.
    pub(crate) fn start(&self, frames: Vec<String>) {
        if frames.is_empty() {
            return;
        }

        let epoch = {
            let mut shared = self.shared.lock().expect("poisoned lock");
            shared.epoch += 1;
            shared.epoch
        };

        let shared = Arc::clone(&self.shared);
        thread::spawn(move || {
            let mut index = 0;
            loop {
                thread::sleep(TICK);
                let mut s = shared.lock().expect("poisoned lock");
                if s.epoch != epoch {
                    break;
                }
                s.writer.clear_line();
                s.writer.write_str(&frames[index]);
                index = (index + 1) % frames.len();
            }
        });
    }

    /// Cancels the animation. Safe to call when already idle.
    pub(crate) fn stop(&self) {
        self.shared.lock().expect("poisoned lock").epoch += 1;
    }
}
