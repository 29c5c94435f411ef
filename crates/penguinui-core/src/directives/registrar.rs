use penguinui_constants::ALIAS_KEYWORD;
use penguinui_css::{NodeId, Stylesheet};

use super::{annotate, tokens};
use crate::aliases::{AliasTable, Registration};
use crate::diagnostics::Diagnostics;
use crate::packages::PackageTable;

/// Handles `@package <name> as <alias>;`.
///
/// Any other shape is dropped without a diagnostic.
pub fn register(
    sheet: &mut Stylesheet,
    directive: NodeId,
    packages: &PackageTable,
    aliases: &mut AliasTable,
    diagnostics: &mut Diagnostics,
) {
    let parts = tokens(sheet, directive);
    let [name, keyword, alias] = parts.as_slice() else {
        sheet.remove(directive);
        return;
    };
    if !keyword.eq_ignore_ascii_case(ALIAS_KEYWORD) {
        sheet.remove(directive);
        return;
    }

    if !packages.contains(name) {
        annotate(sheet, directive, &format!("unknown package '{name}'"));
        diagnostics.error(format!("Unknown package in @package: '{name}'."));
        sheet.remove(directive);
        return;
    }

    if let Registration::Conflict { existing } = aliases.register(alias, name) {
        annotate(
            sheet,
            directive,
            &format!("alias '{alias}' already mapped to '{existing}' (ignored '{name}')"),
        );
        diagnostics.warn(format!(
            "Alias '{alias}' already mapped to '{existing}' (ignored '{name}')."
        ));
    }

    sheet.remove(directive);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use penguinui_project::PackageDescriptor;

    fn packages() -> PackageTable {
        [
            PackageDescriptor::new("example").with_style("opacity", "0.5"),
            PackageDescriptor::new("other").with_style("margin", "1rem"),
        ]
        .into_iter()
        .collect()
    }

    fn register_all(css: &str) -> (Stylesheet, AliasTable, Diagnostics) {
        let mut sheet = Stylesheet::parse(css);
        let packages = packages();
        let mut aliases = AliasTable::new();
        let mut diagnostics = Diagnostics::new();

        for directive in sheet.walk_at_rules("package") {
            register(&mut sheet, directive, &packages, &mut aliases, &mut diagnostics);
        }
        (sheet, aliases, diagnostics)
    }

    #[test]
    fn registers_alias_and_removes_directive() {
        let (sheet, aliases, diagnostics) = register_all("@package example as btn;");

        assert_eq!(aliases.get("btn"), Some("example"));
        assert!(diagnostics.entries().is_empty());
        assert_eq!(sheet.to_css(), "");
    }

    #[test]
    fn keyword_is_case_insensitive() {
        let (_, aliases, _) = register_all("@package example AS btn;");
        assert_eq!(aliases.get("btn"), Some("example"));
    }

    #[test]
    fn malformed_shapes_vanish_silently() {
        let (sheet, aliases, diagnostics) = register_all(
            "@package;\n@package example;\n@package example btn;\n@package example to btn;\n@package a as b c;",
        );

        assert!(aliases.is_empty());
        assert!(diagnostics.entries().is_empty());
        assert_eq!(sheet.to_css(), "");
    }

    #[test]
    fn unknown_package_leaves_comment_and_error() {
        let (sheet, aliases, diagnostics) = register_all("@package missing as ghost;");

        assert!(aliases.is_empty());
        assert_eq!(sheet.to_css(), "/* penguinui: unknown package 'missing' */");
        assert_eq!(diagnostics.entries().len(), 1);
        assert_eq!(diagnostics.entries()[0].severity, Severity::Error);
        assert_eq!(
            diagnostics.entries()[0].message,
            "Unknown package in @package: 'missing'."
        );
    }

    #[test]
    fn same_binding_twice_is_quiet() {
        let (sheet, aliases, diagnostics) =
            register_all("@package example as btn;\n@package example as btn;");

        assert_eq!(aliases.get("btn"), Some("example"));
        assert!(diagnostics.entries().is_empty());
        assert_eq!(sheet.to_css(), "");
    }

    #[test]
    fn conflicting_binding_keeps_the_first() {
        let (sheet, aliases, diagnostics) =
            register_all("@package example as x;\n@package other as x;");

        assert_eq!(aliases.get("x"), Some("example"));
        assert_eq!(
            sheet.to_css(),
            "/* penguinui: alias 'x' already mapped to 'example' (ignored 'other') */"
        );
        assert_eq!(diagnostics.entries().len(), 1);
        assert_eq!(diagnostics.entries()[0].severity, Severity::Warning);
    }
}
