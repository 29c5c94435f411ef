use std::path::{Path, PathBuf};

use penguinui_constants::{PACKAGE_DIRECTIVE, PACKAGES_DIR, USE_DIRECTIVE};
use penguinui_css::Stylesheet;

use crate::aliases::AliasTable;
use crate::diagnostics::{Diagnostic, Diagnostics, Severity};
use crate::directives::{UsedRules, expand, register};
use crate::packages::{PackageTable, load_packages};

#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Directory the package descriptors are loaded from.
    pub packages_dir: PathBuf,
    /// Reserved for upcoming directives; currently has no effect.
    pub enable_experimental: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            packages_dir: PathBuf::from(PACKAGES_DIR),
            enable_experimental: false,
        }
    }
}

impl TransformOptions {
    pub fn for_project(project_dir: &Path) -> Self {
        Self {
            packages_dir: penguinui_project::packages_dir(project_dir),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransformReport {
    pub diagnostics: Vec<Diagnostic>,
    pub packages_loaded: usize,
    pub aliases_registered: usize,
    pub rules_expanded: usize,
}

impl TransformReport {
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

/// Loads the packages fresh from disk, then expands `sheet` in place.
pub fn run(sheet: &mut Stylesheet, options: &TransformOptions) -> TransformReport {
    let packages = load_packages(&options.packages_dir);
    run_with_packages(sheet, &packages)
}

/// Expands every `@package` and `@use` directive of `sheet`.
///
/// All `@package` directives are registered before any `@use` is expanded,
/// so an alias may be declared anywhere in the document. Never fails: the
/// output holds no directives and problems are reported as diagnostics.
pub fn run_with_packages(sheet: &mut Stylesheet, packages: &PackageTable) -> TransformReport {
    let mut aliases = AliasTable::new();
    let mut used = UsedRules::new();
    let mut diagnostics = Diagnostics::new();

    for directive in sheet.walk_at_rules(PACKAGE_DIRECTIVE) {
        // Gone with an enclosing directive that was removed earlier.
        if !sheet.is_attached(directive) {
            continue;
        }
        register(sheet, directive, packages, &mut aliases, &mut diagnostics);
    }

    let mut rules_expanded = 0;
    for directive in sheet.walk_at_rules(USE_DIRECTIVE) {
        if !sheet.is_attached(directive) {
            continue;
        }
        let injected = expand(
            sheet,
            directive,
            packages,
            &aliases,
            &mut used,
            &mut diagnostics,
        );
        if injected {
            rules_expanded += 1;
        }
    }

    TransformReport {
        diagnostics: diagnostics.into_vec(),
        packages_loaded: packages.len(),
        aliases_registered: aliases.len(),
        rules_expanded,
    }
}

/// Parses, expands and prints `css` in one go.
pub fn transform_css(css: &str, options: &TransformOptions) -> (String, TransformReport) {
    let mut sheet = Stylesheet::parse(css);
    let report = run(&mut sheet, options);
    (sheet.to_css(), report)
}
