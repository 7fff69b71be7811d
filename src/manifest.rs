use crate::prelude::*;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// One entry of the islets manifest.
///
/// Only the download identifier matters here; every other field is kept as opaque JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct Islet {
    #[serde(default)]
    pub bitcrafter: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Islet {
    pub fn label(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    islets: Vec<Islet>,
}

impl Manifest {
    pub fn load(path: &Path) -> Fallible<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;
        Manifest::parse(&content)
            .with_context(|| format!("failed to parse manifest {}", path.display()))
    }

    pub fn parse(content: &str) -> Fallible<Self> {
        Ok(json5::from_str(content)?)
    }

    pub fn islets(&self) -> &[Islet] {
        &self.islets
    }

    /// Download identifiers in manifest order, skipping islets without one.
    pub fn downloads(&self) -> impl Iterator<Item = &str> {
        self.islets
            .iter()
            .filter_map(|islet| islet.bitcrafter.as_deref())
    }
}

pub fn game_resource(game_dir: &str, identifier: &str) -> String {
    format!("{}/{}", game_dir, identifier)
}
