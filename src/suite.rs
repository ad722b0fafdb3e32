use crate::data::SuiteDef;
use anyhow::{Context, Result};
use std::collections::BTreeMap;

/// Resolves a suite reference to its definition. Injected into the
/// reporter so rendering logic never touches the filesystem directly.
///
/// Resolution may fail (missing or invalid resource); the reporter treats
/// that as "no detail available", never as a fatal error.
pub trait SuiteLookup: Send + Sync {
    fn load(&self, suite_ref: &str) -> Result<SuiteDef>;
}

/// Reads suite definitions from JSON files on disk.
pub struct FsSuiteLookup;

impl SuiteLookup for FsSuiteLookup {
    fn load(&self, suite_ref: &str) -> Result<SuiteDef> {
        let contents = std::fs::read_to_string(suite_ref)
            .with_context(|| format!("can't read suite {}", suite_ref))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("suite {} is not valid JSON", suite_ref))
    }
}

/// Serves definitions from an in-memory map. Used by tests and demos.
#[derive(Default)]
pub struct StaticSuiteLookup {
    suites: BTreeMap<String, SuiteDef>,
}

impl StaticSuiteLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<S: Into<String>>(&mut self, suite_ref: S, def: SuiteDef) {
        self.suites.insert(suite_ref.into(), def);
    }
}

impl SuiteLookup for StaticSuiteLookup {
    fn load(&self, suite_ref: &str) -> Result<SuiteDef> {
        self.suites
            .get(suite_ref)
            .cloned()
            .context("suite must be present")
    }
}
