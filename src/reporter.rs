use crate::data::{Report, Task};
use crate::format::{self, INDENT};
use crate::spinner::{Shared, Spinner, SELECTED_SPINNER, SPINNERS};
use crate::style::{Ansi, Paint, Role};
use crate::suite::SuiteLookup;
use crate::writer::{LineWriter, TermWriter};
use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Lifecycle events emitted by the runner, in emission order.
#[derive(Debug, Clone)]
pub enum Event {
    /// The run starts; payload is the list of suite identifiers.
    Begin(Vec<String>),
    /// A suite starts; payload is its resource reference.
    Start(String),
    /// A task entered the pending state.
    Pending(Task),
    /// A non-fatal error observed while the current task runs.
    Error(Value),
    Pass(Task),
    Fail(Task, Option<Value>),
    /// The whole run is done; payload is the final report.
    Finish(Report),
}

/// Event-driven console reporter. Owns the terminal line, the pending
/// spinner and the per-task error accumulator. Constructed once and fed
/// every runner event for the lifetime of the attachment.
///
/// `handle` never fails and never panics; rendering is best-effort and a
/// reporter-internal fault (like an unreadable suite file) only degrades
/// the output.
pub struct Reporter {
    out: Arc<Mutex<Shared>>,
    spinner: Spinner,
    paint: Arc<dyn Paint>,
    suites: Box<dyn SuiteLookup>,
    current_errors: Vec<Value>,
}

impl Reporter {
    pub fn new(
        writer: Box<dyn LineWriter>,
        paint: Arc<dyn Paint>,
        suites: Box<dyn SuiteLookup>,
    ) -> Self {
        let out = Arc::new(Mutex::new(Shared::new(writer)));
        let spinner = Spinner::new(Arc::clone(&out));
        Self {
            out,
            spinner,
            paint,
            suites,
            current_errors: Vec::new(),
        }
    }

    /// Reporter for a real terminal: STDOUT writer, ANSI palette.
    pub fn stdout(suites: Box<dyn SuiteLookup>) -> Self {
        Self::new(Box::new(TermWriter::new()), Arc::new(Ansi), suites)
    }

    /// Feeds one runner event.
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Begin(suites) => self.on_begin(&suites),
            Event::Start(suite_ref) => self.on_start(&suite_ref),
            Event::Pending(task) => self.on_pending(&task),
            Event::Error(error) => self.on_error(error),
            Event::Pass(task) => self.on_pass(&task),
            Event::Fail(task, error) => self.on_fail(&task, error.as_ref()),
            Event::Finish(report) => self.on_finish(&report),
        }
    }

    fn on_begin(&mut self, suites: &[String]) {
        self.spinner.stop();

        let paint = self.paint.as_ref();
        let header = format::begin_header(suites, paint);
        self.write(&format!("{}\n", paint.paint(Role::Info, &header)));
    }

    fn on_start(&mut self, suite_ref: &str) {
        // A missing or invalid suite file only drops the detail lines.
        let def = self.suites.load(suite_ref).ok();

        let paint = self.paint.as_ref();
        let header = format::start_header(suite_ref, def.as_ref(), paint);

        self.spinner.stop();
        self.clear_line();
        self.write(&format!("{}\n", paint.paint(Role::Info, &header)));
    }

    fn on_pending(&mut self, task: &Task) {
        let paint = self.paint.as_ref();
        let line = format::build_line(task, paint);

        let frames = SPINNERS[SELECTED_SPINNER]
            .chars()
            .map(|glyph| {
                let marker = paint.paint(Role::Strong, &format!(" [ {} ] ", glyph));
                format!(
                    "{}{}",
                    INDENT,
                    paint.paint(Role::Pending, &format!("{}{}", marker, line))
                )
            })
            .collect();

        self.spinner.start(frames);
    }

    fn on_error(&mut self, error: Value) {
        self.current_errors.push(error);
    }

    fn on_pass(&mut self, task: &Task) {
        self.spinner.stop();
        self.clear_line();

        let paint = self.paint.as_ref();
        let line = format::build_line(task, paint);

        if self.current_errors.is_empty() {
            let marker = paint.paint(Role::Strong, " [ √ ] ");
            let body = paint.paint(Role::Success, &format!("{}{}", marker, line));
            self.write(&format!("{}{}\n", INDENT, body));
        } else {
            let marker = paint.paint(Role::Strong, " [ ! ] ");
            let body = paint.paint(Role::Warn, &format!("{}{}", marker, line));
            let badge = paint.paint(
                Role::ErrorBadge,
                &format!(" {} error(s) ", self.current_errors.len()),
            );
            self.write(&format!("{}{}{}\n", INDENT, body, badge));
        }

        self.current_errors.clear();
    }

    fn on_fail(&mut self, task: &Task, error: Option<&Value>) {
        self.spinner.stop();
        self.clear_line();

        let paint = self.paint.as_ref();

        let mut st = paint.paint(Role::Strong, " [ x ] ");
        st.push_str(&format::build_line(task, paint));
        st.push(' ');

        if let Some(error) = error {
            let badge = format!(" {} ", format::display_value(error));
            st.push_str(&paint.paint(Role::ErrorBadge, &badge));
            st.push(' ');
        }

        let body = paint.paint(Role::Error, &st);
        self.write(&format!("{}{}\n", INDENT, body));

        self.current_errors.clear();
    }

    fn on_finish(&mut self, report: &Report) {
        self.spinner.stop();

        let paint = self.paint.as_ref();

        let title = paint.paint(Role::Strong, "\n Report ");
        self.write(&format!("{}\n", paint.paint(Role::Info, &title)));

        let total = paint.paint(Role::Strong, &format!("{} ", format::seconds(report.timing.total)));
        self.write(&format!(
            "{}\n",
            paint.paint(Role::Info, &format!("- Ran for : {}", total))
        ));

        if let Some(slowest) = &report.timing.slowest {
            let name = slowest.test.it.as_deref().unwrap_or("");
            let duration = paint.paint(
                Role::Alert,
                &format!("{} ", format::seconds(slowest.test.duration.unwrap_or(0))),
            );
            let emphasized = paint.paint(Role::Strong, &format!("{} {}", name, duration));
            self.write(&format!(
                "{}\n",
                paint.paint(Role::Info, &format!("- Slowest : {}", emphasized))
            ));
        }

        if !report.timing.above.is_empty() {
            self.write(&format!("{}\n", paint.paint(Role::Info, "- Above median : ")));
            for entry in &report.timing.above {
                let name = entry.test.it.as_deref().unwrap_or("");
                self.write(&format!(
                    "{}\n",
                    paint.paint(Role::Info, &format!("    - {} ", name))
                ));
            }
        }

        if report.errors.by_error.is_empty() {
            return;
        }

        self.write(&format!("\n{}\n", paint.paint(Role::Error, "- Errors : ")));
        for (key, group) in &report.errors.by_error {
            let header = format!(
                "    - [{}] {} : ",
                paint.paint(Role::Strong, &group.error.kind),
                key
            );
            self.write(&format!(
                "{}\n",
                paint.paint(Role::Warn, &paint.paint(Role::Alert, &header))
            ));

            for affected in &group.tests {
                let name = affected.test.it.as_deref().unwrap_or("");
                self.write(&format!(
                    "{}\n",
                    paint.paint(Role::Info, &format!("        - {} ", name))
                ));
            }

            self.write(&format!(
                "{}\n\n",
                paint.paint(Role::Dim, &pretty_details(&group.error.details))
            ));
        }
    }

    fn write(&self, s: &str) {
        self.out.lock().expect("poisoned lock").writer.write_str(s);
    }

    fn clear_line(&self) {
        self.out.lock().expect("poisoned lock").writer.clear_line();
    }
}

/// Pretty-prints error details with tab indentation.
fn pretty_details(details: &Value) -> String {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    if details.serialize(&mut ser).is_err() {
        return details.to_string();
    }
    String::from_utf8(buf).unwrap_or_default()
}
