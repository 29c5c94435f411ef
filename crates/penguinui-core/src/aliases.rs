use std::collections::HashMap;

/// Outcome of binding an alias to a package name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Added,
    /// The alias already pointed at the same package.
    Unchanged,
    /// The alias points at another package, which is kept.
    Conflict { existing: String },
}

/// Alias → package name bindings for one stylesheet.
///
/// The first binding of an alias is final for the run.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, alias: &str, package: &str) -> Registration {
        match self.aliases.get(alias) {
            Some(existing) if existing == package => Registration::Unchanged,
            Some(existing) => Registration::Conflict {
                existing: existing.clone(),
            },
            None => {
                self.aliases.insert(alias.to_string(), package.to_string());
                Registration::Added
            }
        }
    }

    #[must_use]
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// The package a `@use` token refers to: its alias target, or the token
    /// itself when no alias matches.
    #[must_use]
    pub fn resolve<'a>(&'a self, token: &'a str) -> &'a str {
        self.get(token).unwrap_or(token)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
