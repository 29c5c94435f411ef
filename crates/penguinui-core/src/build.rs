use std::fs;
use std::io::{self, Write};
use std::path::Path;

use penguinui_error::{PenguinError, Result};

use crate::diagnostics::Severity;
use crate::transform::{TransformOptions, TransformReport, transform_css};

pub struct BuildManager {
    options: TransformOptions,
}

impl BuildManager {
    pub const fn new(options: TransformOptions) -> Self {
        Self { options }
    }

    /// Reads `input`, expands its directives and returns the resulting CSS.
    pub fn build_file(&self, input: &Path, debug: bool) -> Result<(String, TransformReport)> {
        let css = fs::read_to_string(input).map_err(|e| {
            PenguinError::StylesheetError(input.display().to_string(), e.to_string())
        })?;

        penguinui_logger::debug(
            &format!(
                "Loading packages from {}",
                self.options.packages_dir.display()
            ),
            debug,
        );
        if self.options.enable_experimental {
            penguinui_logger::debug("Experimental directives enabled", debug);
        }

        Ok(transform_css(&css, &self.options))
    }

    /// Builds `input` and writes the result to `out`, or stdout when `out` is `None`.
    pub fn build(&self, input: &Path, out: Option<&Path>, debug: bool) -> Result<TransformReport> {
        let (css, report) = self.build_file(input, debug)?;

        match out {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, format!("{css}\n"))?;
            }
            None => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{css}")?;
                stdout.flush()?;
            }
        }

        Self::log_summary(input, out, &report);
        Ok(report)
    }

    fn log_summary(input: &Path, out: Option<&Path>, report: &TransformReport) {
        let warnings = report.count(Severity::Warning);
        let errors = report.count(Severity::Error);
        let target = out.map_or_else(|| "stdout".to_string(), |p| p.display().to_string());

        let message = format!(
            "Built {} -> {target} ({} rules expanded, {warnings} warnings, {errors} errors)",
            input.display(),
            report.rules_expanded,
        );

        if warnings + errors == 0 {
            penguinui_logger::finish(&message);
        } else {
            penguinui_logger::warn(&message);
        }
    }
}
