use crossterm::{cursor, terminal};
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Serializes formatted strings to an output. `clear_line` erases the
/// current terminal line and moves the cursor back to column 0 so the next
/// write replaces it.
pub trait LineWriter: Send {
    fn write_str(&mut self, s: &str);
    fn clear_line(&mut self);
}

/// Writes to STDOUT. Terminal faults are swallowed; rendering is
/// best-effort and must never take the host process down.
pub struct TermWriter {
    max_len: usize,
}

impl TermWriter {
    pub fn new() -> Self {
        let columns = term_size::dimensions().map(|(w, _)| w).unwrap_or(80);
        Self {
            max_len: columns.saturating_sub(10),
        }
    }
}

impl LineWriter for TermWriter {
    fn write_str(&mut self, s: &str) {
        if crate::utils::visible_len(s) > self.max_len {
            // TODO: cap the line at max_len. Slicing styled text naively
            // cuts escape sequences in half and corrupts the next rewrite,
            // so overlong lines currently pass through unmodified.
        }

        let mut stdout = std::io::stdout();
        stdout.write_all(s.as_bytes()).ok();
        stdout.flush().ok();
    }

    fn clear_line(&mut self) {
        let mut stdout = std::io::stdout();
        crossterm::execute!(
            stdout,
            terminal::Clear(terminal::ClearType::CurrentLine),
            cursor::MoveToColumn(0)
        )
        .ok();
    }
}

/// Cloneable capture writer for tests. Models the terminal line contract:
/// `clear_line` erases everything after the last newline.
#[derive(Clone, Default)]
pub struct StringWriter(Arc<Mutex<String>>);

impl StringWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineWriter for StringWriter {
    fn write_str(&mut self, s: &str) {
        self.0.lock().expect("poisoned lock").push_str(s);
    }

    fn clear_line(&mut self) {
        let mut buf = self.0.lock().expect("poisoned lock");
        let keep = buf.rfind('\n').map(|i| i + 1).unwrap_or(0);
        buf.truncate(keep);
    }
}

impl std::fmt::Display for StringWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.0.lock().expect("poisoned lock");
        write!(f, "{}", &s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k9::assert_equal;

    #[test]
    fn clear_line_erases_back_to_last_newline() {
        let mut w = StringWriter::new();
        w.write_str("done\n");
        w.write_str("spinning...");
        w.clear_line();
        assert_equal!(w.to_string(), "done\n".to_string());

        w.clear_line();
        assert_equal!(w.to_string(), "done\n".to_string());

        w.write_str("next");
        assert_equal!(w.to_string(), "done\nnext".to_string());
    }
}
