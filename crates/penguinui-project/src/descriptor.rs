use std::path::{Component, Path};

use anyhow::{anyhow, bail};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A package descriptor as stored on disk: `{ "name": ..., "styles": { ... } }`.
///
/// `styles` keeps insertion order; it decides the order declarations are
/// injected in and therefore which one wins the cascade.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    pub name: String,
    pub styles: IndexMap<String, String>,
}

impl PackageDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            styles: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, property: &str, value: &str) -> Self {
        self.styles.insert(property.to_string(), value.to_string());
        self
    }

    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Whether `name` can be used as a descriptor file stem: a single plain path
/// component with no separators.
pub fn is_valid_name(name: &str) -> bool {
    if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
        return false;
    }

    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Accepts any record with a string `name` and an object `styles`.
///
/// Used when loading installed packages: a file that doesn't fit is skipped,
/// and style entries whose value isn't a string are dropped.
pub fn parse_lenient(raw: &str) -> Option<PackageDescriptor> {
    let value: Value = serde_json::from_str(raw).ok()?;
    let name = value.get("name")?.as_str()?;
    let styles = value.get("styles")?.as_object()?;

    let styles = styles
        .iter()
        .filter_map(|(prop, value)| value.as_str().map(|v| (prop.clone(), v.to_string())))
        .collect();

    Some(PackageDescriptor {
        name: name.to_string(),
        styles,
    })
}

/// Strict validation for descriptors coming from outside (downloads).
pub fn validate(raw: &str) -> anyhow::Result<PackageDescriptor> {
    let value: Value = serde_json::from_str(raw).map_err(|_| anyhow!("Invalid JSON"))?;
    let Some(obj) = value.as_object() else {
        bail!("Not an object");
    };

    let name = match obj.get("name").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => name,
        _ => bail!("Missing name"),
    };
    if !is_valid_name(name) {
        bail!("Invalid name");
    }

    let Some(styles) = obj.get("styles").and_then(Value::as_object) else {
        bail!("styles must be object");
    };

    let mut ordered = IndexMap::with_capacity(styles.len());
    for (prop, value) in styles {
        let Some(value) = value.as_str() else {
            bail!("Style value for {prop} must be string");
        };
        ordered.insert(prop.clone(), value.to_string());
    }

    Ok(PackageDescriptor {
        name: name.to_string(),
        styles: ordered,
    })
}
