use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    scenarios: HashMap<String, ScenarioEntry>,
    #[serde(default)]
    configs: HashMap<String, String>,
}

/// A bare path, or a path with a note printed when the scenario fails.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScenarioEntry {
    Path(String),
    Described { path: String, description: String },
}

impl ScenarioEntry {
    fn path(&self) -> &str {
        match self {
            ScenarioEntry::Path(path) => path,
            ScenarioEntry::Described { path, .. } => path,
        }
    }
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Scripted command sequences with expected end states.
pub mod scenarios {
    use super::*;

    pub fn keys() -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST.scenarios.keys().cloned().collect();
        keys.sort();
        keys
    }

    fn entry(name: &str) -> Result<&'static ScenarioEntry> {
        lookup(&MANIFEST.scenarios, "scenario", name)
    }

    pub fn json(name: &str) -> Result<String> {
        read_to_string(entry(name)?.path())
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        super::load_json(entry(name)?.path())
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        Ok(resolve_path(entry(name)?.path()))
    }

    /// Manifest note for `name`, if it has one.
    pub fn description(name: &str) -> Result<Option<&'static str>> {
        Ok(match entry(name)? {
            ScenarioEntry::Path(_) => None,
            ScenarioEntry::Described { description, .. } => Some(description.as_str()),
        })
    }
}

/// Player configs as a host would pass them.
pub mod configs {
    use super::*;

    pub fn keys() -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST.configs.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn json(name: &str) -> Result<String> {
        read_to_string(lookup(&MANIFEST.configs, "config", name)?)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        super::load_json(lookup(&MANIFEST.configs, "config", name)?)
    }
}
