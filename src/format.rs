use crate::data::{SuiteDef, Task};
use crate::style::{Paint, Role};
use serde_json::Value;

/// The longest a rendered param value can be.
const MAX_PARAM_LEN: usize = 20;

/// Indent for task lines under a suite header.
pub(crate) const INDENT: &str = "    ";

/// Formats one task descriptor into a styled line. Pure: same task, same
/// palette, same output.
///
/// Navigation tasks (`it` set) render as a name inside a background block;
/// everything else renders its type followed by `key : value` pairs in
/// param insertion order. A resolved duration is appended either way.
pub fn build_line(task: &Task, paint: &dyn Paint) -> String {
    let duration = duration_suffix(task.duration, paint);

    if let Some(it) = &task.it {
        let mut st = String::from(" ");
        st.push_str(&paint.paint(Role::Plain, it));
        st.push(' ');
        return format!(
            "{} {}",
            paint.paint(Role::Block, &st),
            paint.paint(Role::DurationBlock, &duration)
        );
    }

    let mut st = String::from(" ");
    for (key, value) in &task.params {
        let mut param = display_value(value);
        if param.chars().count() > MAX_PARAM_LEN {
            param = param.chars().take(MAX_PARAM_LEN - 4).collect::<String>() + "...";
        }

        st.push_str(&paint.paint(Role::Key, key));
        st.push_str(&paint.paint(Role::Strong, " : "));
        st.push_str(&paint.paint(Role::Plain, &param));
        st.push(' ');
    }

    format!(
        "{} {} {}",
        paint.paint(Role::Strong, task.kind.as_deref().unwrap_or("")),
        paint.paint(Role::Block, &st),
        paint.paint(Role::DurationBlock, &duration)
    )
}

/// Header line for `begin`: suite count plus a comma-joined name list with
/// " and " before the last name when there's more than one.
pub fn begin_header(suites: &[String], paint: &dyn Paint) -> String {
    let mut names: Vec<&str> = suites.iter().map(|s| s.as_str()).collect();
    let last = if names.len() > 1 { names.pop() } else { None };

    let mut st = String::from("\n begin");
    st.push_str(&format!(" {} suite", suites.len()));
    if suites.len() > 1 {
        st.push('s');
    }
    st.push_str(" : ");
    st.push_str(&paint.paint(Role::Name, &names.join(", ")));
    if let Some(last) = last {
        st.push_str(&paint.paint(Role::Name, &format!(" and {}", last)));
    }
    st.push(' ');
    st
}

/// Suite header for `start`. With a loaded definition this appends the
/// description, the task count and a configuration pseudo-task line; with
/// none, only the suite name renders.
pub fn start_header(suite_ref: &str, def: Option<&SuiteDef>, paint: &dyn Paint) -> String {
    let mut st = String::from("\n    ");
    st.push_str(&paint.paint(Role::Name, basename(suite_ref)));

    if let Some(def) = def {
        if let Some(describe) = def.config.get("describe").and_then(Value::as_str) {
            st.push_str(&paint.paint(Role::Key, ": "));
            st.push_str(&paint.paint(Role::Plain, describe));
        }

        // The navigation entry counts as a task.
        let n_tasks = def.tasks.len() + 1;
        let mut count = format!(" ({} task", n_tasks);
        if n_tasks > 1 {
            count.push('s');
        }
        count.push_str(") ");
        st.push_str(&paint.paint(Role::Count, &count));

        // One pseudo-task line for the config. `url` is already on the
        // first task and `describe` was just written, so both are omitted.
        let mut config = Task::step("   - configuration");
        for (key, value) in &def.config {
            if key == "url" || key == "describe" {
                continue;
            }
            config.params.insert(key.clone(), value.clone());
        }
        st.push_str("\n ");
        st.push_str(&build_line(&config, paint));
    }

    st.push(' ');
    st
}

/// `X.XXs`, from milliseconds.
pub(crate) fn seconds(ms: u64) -> String {
    format!("{:.2}s", ms as f64 / 1000.0)
}

/// How an opaque runner value shows up in a line: strings bare, everything
/// else as compact JSON.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn duration_suffix(duration: Option<u64>, paint: &dyn Paint) -> String {
    match duration {
        Some(ms) if ms > 0 => paint.paint(Role::Duration, &format!(" [{}] ", seconds(ms))),
        _ => String::new(),
    }
}

fn basename(suite_ref: &str) -> &str {
    let name = suite_ref.rsplit('/').next().unwrap_or(suite_ref);
    name.strip_suffix(".json").unwrap_or(name)
}
