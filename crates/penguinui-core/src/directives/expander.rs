use std::collections::HashSet;

use penguinui_css::{NodeId, Stylesheet};

use super::{annotate, tokens};
use crate::aliases::AliasTable;
use crate::diagnostics::Diagnostics;
use crate::packages::PackageTable;

/// Style rules that already consumed a `@use` in the current run.
pub type UsedRules = HashSet<NodeId>;

/// Handles `@use <token> [<token> ...];` inside a style rule.
///
/// Only the first `@use` of a rule injects anything. Tokens resolve through
/// `aliases` first and are otherwise taken as package names; unknown ones are
/// reported and skipped. Returns whether any package was injected.
pub fn expand(
    sheet: &mut Stylesheet,
    directive: NodeId,
    packages: &PackageTable,
    aliases: &AliasTable,
    used: &mut UsedRules,
    diagnostics: &mut Diagnostics,
) -> bool {
    let tokens = tokens(sheet, directive);

    let Some(rule) = sheet.parent(directive).filter(|&p| sheet.is_rule(p)) else {
        sheet.remove(directive);
        return false;
    };

    if !used.insert(rule) {
        let ignored = tokens.join(" ");
        annotate(
            sheet,
            directive,
            &format!("multiple @use not allowed in same rule (ignored '{ignored}')"),
        );
        diagnostics.warn(format!(
            "Multiple @use not allowed in same rule: ignored '{ignored}'."
        ));
        sheet.remove(directive);
        return false;
    }

    let mut injected = false;
    for token in &tokens {
        let name = aliases.resolve(token);
        let Some(package) = packages.get(name) else {
            annotate(sheet, directive, &format!("unknown package '{name}' in @use"));
            diagnostics.error(format!("Unknown package in @use: '{name}'."));
            continue;
        };

        for (property, value) in &package.styles {
            sheet.append_declaration(rule, property, value);
        }
        injected = true;
    }

    sheet.remove(directive);
    injected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use penguinui_project::PackageDescriptor;

    fn packages() -> PackageTable {
        [
            PackageDescriptor::new("example").with_style("opacity", "0.5"),
            PackageDescriptor::new("other")
                .with_style("margin", "1rem")
                .with_style("color", "blue"),
            PackageDescriptor::new("red").with_style("color", "red"),
        ]
        .into_iter()
        .collect()
    }

    fn expand_all(css: &str, aliases: &AliasTable) -> (Stylesheet, Diagnostics) {
        let mut sheet = Stylesheet::parse(css);
        let packages = packages();
        let mut used = UsedRules::new();
        let mut diagnostics = Diagnostics::new();

        for directive in sheet.walk_at_rules("use") {
            expand(
                &mut sheet,
                directive,
                &packages,
                aliases,
                &mut used,
                &mut diagnostics,
            );
        }
        (sheet, diagnostics)
    }

    fn btn_box() -> AliasTable {
        let mut aliases = AliasTable::new();
        aliases.register("btn", "example");
        aliases.register("box", "other");
        aliases
    }

    #[test]
    fn reports_whether_anything_was_injected() {
        let mut sheet = Stylesheet::parse(".a { @use nope; } .b { @use nope example; }");
        let packages = packages();
        let mut used = UsedRules::new();
        let mut diagnostics = Diagnostics::new();

        let injected: Vec<bool> = sheet
            .walk_at_rules("use")
            .into_iter()
            .map(|directive| {
                expand(
                    &mut sheet,
                    directive,
                    &packages,
                    &AliasTable::new(),
                    &mut used,
                    &mut diagnostics,
                )
            })
            .collect();

        assert_eq!(injected, [false, true]);
    }

    #[test]
    fn injects_in_token_order() {
        let (sheet, diagnostics) = expand_all(".mix { @use btn box; }", &btn_box());

        let rule = sheet.walk_rules()[0];
        assert_eq!(
            sheet.declarations(rule),
            [("opacity", "0.5"), ("margin", "1rem"), ("color", "blue")]
        );
        assert!(diagnostics.entries().is_empty());
        assert!(sheet.walk_at_rules("use").is_empty());
    }

    #[test]
    fn tokens_fall_back_to_package_names() {
        let (sheet, diagnostics) = expand_all(".a { @use example; }", &AliasTable::new());

        let rule = sheet.walk_rules()[0];
        assert_eq!(sheet.declarations(rule), [("opacity", "0.5")]);
        assert!(diagnostics.entries().is_empty());
    }

    #[test]
    fn unknown_token_is_reported_and_skipped() {
        let (sheet, diagnostics) = expand_all(".mix { @use btn nope box; }", &btn_box());

        let rule = sheet.walk_rules()[0];
        assert_eq!(
            sheet.declarations(rule),
            [("opacity", "0.5"), ("margin", "1rem"), ("color", "blue")]
        );
        assert_eq!(diagnostics.entries().len(), 1);
        assert_eq!(diagnostics.entries()[0].severity, Severity::Error);
        assert_eq!(
            diagnostics.entries()[0].message,
            "Unknown package in @use: 'nope'."
        );
        assert!(sheet.to_css().contains("/* penguinui: unknown package 'nope' in @use */"));
    }

    #[test]
    fn unknown_alias_target_is_named_by_package() {
        let mut aliases = AliasTable::new();
        aliases.register("ghost", "missing");
        let (sheet, _) = expand_all(".g { @use ghost; }", &aliases);

        assert!(sheet.to_css().contains("unknown package 'missing' in @use"));
    }

    #[test]
    fn second_use_in_a_rule_is_ignored() {
        let (sheet, diagnostics) = expand_all(".multi { @use btn; @use box; }", &btn_box());

        let rule = sheet.walk_rules()[0];
        assert_eq!(sheet.declarations(rule), [("opacity", "0.5")]);
        assert_eq!(diagnostics.entries().len(), 1);
        assert_eq!(diagnostics.entries()[0].severity, Severity::Warning);
        assert_eq!(
            sheet.to_css(),
            ".multi {\n    /* penguinui: multiple @use not allowed in same rule (ignored 'box') */\n    opacity: 0.5;\n}"
        );
    }

    #[test]
    fn later_declarations_stay_after_earlier_ones() {
        let (sheet, _) = expand_all(".a { color: green; @use red box; }", &btn_box());

        let rule = sheet.walk_rules()[0];
        assert_eq!(
            sheet.declarations(rule),
            [
                ("color", "green"),
                ("color", "red"),
                ("margin", "1rem"),
                ("color", "blue"),
            ]
        );
    }

    #[test]
    fn use_outside_a_rule_is_dropped_silently() {
        let (sheet, diagnostics) = expand_all(
            "@use btn;\n@media print { @use btn; }",
            &btn_box(),
        );

        assert!(diagnostics.entries().is_empty());
        assert_eq!(sheet.to_css(), "@media print {}");
    }

    #[test]
    fn empty_use_claims_the_rule() {
        let (sheet, diagnostics) = expand_all(".a { @use; @use btn; }", &btn_box());

        let rule = sheet.walk_rules()[0];
        assert!(sheet.declarations(rule).is_empty());
        assert_eq!(diagnostics.entries().len(), 1);
        assert_eq!(diagnostics.entries()[0].severity, Severity::Warning);
    }
}
