/*!
# tattler

**tattler** is a console reporter for test runners. It subscribes to the
lifecycle events a runner emits (`begin`, `start`, `pending`, `error`,
`pass`, `fail`, `finish`) and renders color-coded progress to the terminal:
suite headers, an animated spinner for the task currently in flight,
pass/fail markers with per-task error counts, and a final timing/error
report.

The reporter is a passive renderer. It never retries, never recovers and
never fails back into the runner; a rendering problem degrades output,
nothing else.

Example

```no_run
use tattler::{Event, FsSuiteLookup, Reporter, Task};

let mut reporter = Reporter::stdout(Box::new(FsSuiteLookup));
reporter.handle(Event::Begin(vec!["checkout.json".to_string()]));
reporter.handle(Event::Pending(Task::step("get").param("url", "/cart")));
reporter.handle(Event::Pass(Task::step("get").param("url", "/cart").took(1234)));
```
 */
#![allow(clippy::new_without_default)]

pub mod data;
pub mod format;
pub mod reporter;
pub mod spinner;
pub mod style;
pub mod suite;
pub mod utils;
pub mod writer;

#[cfg(test)]
mod tests;

pub use data::{ErrorDetail, ErrorGroup, ErrorSummary, Report, SuiteDef, Task, TestRef, Timing};
pub use format::build_line;
pub use reporter::{Event, Reporter};
pub use style::{Ansi, NoStyle, Paint, Role};
pub use suite::{FsSuiteLookup, StaticSuiteLookup, SuiteLookup};
pub use utils::strip_ansi;
pub use writer::{LineWriter, StringWriter, TermWriter};
