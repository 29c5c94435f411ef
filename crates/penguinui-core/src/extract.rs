use std::sync::OnceLock;

use indexmap::{IndexMap, IndexSet};
use penguinui_css::Stylesheet;
use penguinui_project::PackageDescriptor;
use regex::Regex;

fn class_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\.([_a-zA-Z0-9-]+)")
            .unwrap_or_else(|e| panic!("class selector pattern failed to compile: {e}"))
    })
}

/// Class names referenced by a selector list, deduplicated, first-seen order.
///
/// Pseudo-classes, attribute selectors and combinators are ignored.
pub fn class_names(selector: &str) -> Vec<String> {
    let mut names = IndexSet::new();

    for branch in selector.split(',').map(str::trim).filter(|b| !b.is_empty()) {
        for captures in class_pattern().captures_iter(branch) {
            if let Some(name) = captures.get(1) {
                names.insert(name.as_str().to_string());
            }
        }
    }

    names.into_iter().collect()
}

/// Derives one package per CSS class from the style rules of `sheet`.
///
/// Rules are visited in document order; a class seen in several rules
/// accumulates their declarations, later values overwriting earlier ones.
/// Packages come out in the order their class was first seen.
pub fn extract(sheet: &Stylesheet) -> Vec<PackageDescriptor> {
    let mut classes: IndexMap<String, IndexMap<String, String>> = IndexMap::new();

    for rule in sheet.walk_rules() {
        let Some(selector) = sheet.selector(rule) else {
            continue;
        };
        if !selector.contains('.') {
            continue;
        }

        let names = class_names(selector);
        if names.is_empty() {
            continue;
        }

        let mut declarations: IndexMap<String, String> = IndexMap::new();
        for (property, value) in sheet.declarations(rule) {
            declarations.insert(property.to_string(), value.to_string());
        }
        if declarations.is_empty() {
            continue;
        }

        for name in names {
            let styles = classes.entry(name).or_default();
            for (property, value) in &declarations {
                styles.insert(property.clone(), value.clone());
            }
        }
    }

    classes
        .into_iter()
        .map(|(name, styles)| PackageDescriptor { name, styles })
        .collect()
}
