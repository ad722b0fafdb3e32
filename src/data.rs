use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A single unit of work reported by the runner. One struct covers both
/// shapes the runner emits: parameterized steps (`kind` + `params`) and
/// navigation/summary entries (`it`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub it: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Rendered in insertion order.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub params: Map<String, Value>,
    /// Milliseconds. Set by the runner once the task resolves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

impl Task {
    pub fn step(kind: &str) -> Self {
        Self {
            kind: Some(kind.to_string()),
            ..Self::default()
        }
    }

    pub fn nav(it: &str) -> Self {
        Self {
            it: Some(it.to_string()),
            ..Self::default()
        }
    }

    pub fn param<V: Into<Value>>(mut self, key: &str, value: V) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn took(mut self, ms: u64) -> Self {
        self.duration = Some(ms);
        self
    }
}

/// A suite definition as served by the suite lookup: free-form config plus
/// the ordered task list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuiteDef {
    #[serde(default)]
    pub config: Map<String, Value>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// The final report the runner emits exactly once, at `finish`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub timing: Timing,
    #[serde(default)]
    pub errors: ErrorSummary,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timing {
    /// Total run time in milliseconds.
    #[serde(default)]
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slowest: Option<TestRef>,
    /// Tests that ran above the median duration.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub above: Vec<TestRef>,
}

/// Wrapper the runner puts around tasks referenced from the report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestRef {
    pub test: Task,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorSummary {
    /// Failed tests grouped by error category.
    #[serde(default, rename = "byError")]
    pub by_error: BTreeMap<String, ErrorGroup>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorGroup {
    pub error: ErrorDetail,
    #[serde(default)]
    pub tests: Vec<TestRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Opaque payload, pretty-printed in the final report.
    #[serde(default)]
    pub details: Value,
}
