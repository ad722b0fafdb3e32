use colored::Colorize;

/// Semantic styling roles. Every piece of rendered text is painted through
/// one of these so the formatting logic stays independent of the concrete
/// terminal-styling library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Neutral banner (headers, report lines).
    Info,
    /// The animated pending line.
    Pending,
    Success,
    /// Passed, but with accumulated errors.
    Warn,
    Error,
    /// Suite names.
    Name,
    /// Plain values and descriptions.
    Plain,
    /// Param keys.
    Key,
    /// Bold emphasis (task types, markers, separators).
    Strong,
    Duration,
    /// Background block around a task's params.
    Block,
    /// Background block around a duration suffix.
    DurationBlock,
    /// Task-count annotation in a suite header.
    Count,
    /// Inline error-count / fail-reason badge.
    ErrorBadge,
    Alert,
    /// De-emphasized detail dumps.
    Dim,
}

/// Applies a visual style to text for one semantic role.
pub trait Paint: Send + Sync {
    fn paint(&self, role: Role, text: &str) -> String;
}

/// The default ANSI palette.
pub struct Ansi;

impl Paint for Ansi {
    fn paint(&self, role: Role, text: &str) -> String {
        match role {
            Role::Info => text.black().on_white(),
            Role::Pending => text.white().on_cyan(),
            Role::Success => text.white().on_green(),
            Role::Warn => text.white().on_yellow(),
            Role::Error => text.white().on_red(),
            Role::Name => text.blue(),
            Role::Plain => text.black(),
            Role::Key => text.blue().bold(),
            Role::Strong => text.bold(),
            Role::Duration => text.magenta().bold(),
            Role::Block => text.on_white(),
            Role::DurationBlock => text.bold().on_white(),
            Role::Count => text.red().bold(),
            Role::ErrorBadge => text.red().on_yellow(),
            Role::Alert => text.red(),
            Role::Dim => text.dimmed(),
        }
        .to_string()
    }
}

/// Identity palette. Used by tests and anywhere ANSI output is unwanted.
pub struct NoStyle;

impl Paint for NoStyle {
    fn paint(&self, _role: Role, text: &str) -> String {
        text.to_string()
    }
}
