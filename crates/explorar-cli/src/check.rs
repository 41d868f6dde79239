//! Script validation without execution
//!
//! `explorador check` parses every effective line of a movements script
//! and reports per-line diagnostics. No rover moves and no grid cell is
//! marked; a script that checks clean can still fail at run time only if
//! the file changes in between.

use explorar::{effective_lines, parse_line, GridBounds};
use serde::{Deserialize, Serialize};

/// Diagnostic for one effective script line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiagnostic {
    /// 1-based line number in the script
    pub line_number: usize,
    /// The line as written
    pub line: String,
    /// Whether the line parsed cleanly
    pub valid: bool,
    /// Parser rejection, when invalid
    pub error: Option<String>,
    /// The command text contains a turn pair that cancels itself out
    pub redundant_rotation: bool,
}

/// Validation results for a whole script
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// One entry per effective line
    pub diagnostics: Vec<LineDiagnostic>,
}

impl CheckReport {
    /// Number of lines that parsed cleanly
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.valid).count()
    }

    /// Number of rejected lines
    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.diagnostics.len() - self.valid_count()
    }

    /// True when every effective line parsed cleanly
    #[must_use]
    pub fn all_valid(&self) -> bool {
        self.invalid_count() == 0
    }
}

/// Validate every effective line of a script against the given bounds
#[must_use]
pub fn check_script(text: &str, bounds: GridBounds) -> CheckReport {
    let mut report = CheckReport::default();
    for (line_number, line) in effective_lines(text) {
        let diagnostic = match parse_line(line, bounds) {
            Ok(parsed) => LineDiagnostic {
                line_number,
                line: line.to_string(),
                valid: true,
                error: None,
                redundant_rotation: parsed.redundant_rotation,
            },
            Err(err) => LineDiagnostic {
                line_number,
                line: line.to_string(),
                valid: false,
                error: Some(err.to_string()),
                redundant_rotation: false,
            },
        };
        report.diagnostics.push(diagnostic);
    }
    report
}

/// Render a check report as human-readable text
#[must_use]
pub fn render_check_report(report: &CheckReport) -> String {
    let mut output = String::new();

    if report.diagnostics.is_empty() {
        output.push_str("no effective lines\n");
        return output;
    }

    for diagnostic in &report.diagnostics {
        if diagnostic.valid {
            output.push_str(&format!(
                "✓ line {}: {}\n",
                diagnostic.line_number, diagnostic.line
            ));
            if diagnostic.redundant_rotation {
                output.push_str("  ⚠ adjacent opposite turns cancel out\n");
            }
        } else {
            output.push_str(&format!(
                "✗ line {}: {}\n",
                diagnostic.line_number, diagnostic.line
            ));
            if let Some(error) = &diagnostic.error {
                output.push_str(&format!("    {error}\n"));
            }
        }
    }

    output.push_str(&format!(
        "\n{} line(s) checked, {} invalid\n",
        report.diagnostics.len(),
        report.invalid_count()
    ));

    output
}

/// Render a check report as pretty-printed JSON
pub fn render_check_json(report: &CheckReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn bounds() -> GridBounds {
        GridBounds::default()
    }

    #[test]
    fn test_check_clean_script() {
        let report = check_script("0 0 N|M\n1 1 E|MM\n", bounds());
        assert_eq!(report.diagnostics.len(), 2);
        assert!(report.all_valid());
        assert_eq!(report.invalid_count(), 0);
    }

    #[test]
    fn test_check_skips_blank_and_comment_lines() {
        let report = check_script("# mission\n\n0 0 N|M\n", bounds());
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].line_number, 3);
    }

    #[test]
    fn test_check_records_rejections_with_errors() {
        let report = check_script("0 0 N|M\nBAD LINE\n", bounds());
        assert_eq!(report.diagnostics.len(), 2);
        assert!(!report.all_valid());
        assert_eq!(report.invalid_count(), 1);

        let bad = &report.diagnostics[1];
        assert!(!bad.valid);
        assert!(bad.error.as_ref().unwrap().contains("separator"));
    }

    #[test]
    fn test_check_flags_redundant_rotation() {
        let report = check_script("2 2 N|LRM\n", bounds());
        assert!(report.all_valid());
        assert!(report.diagnostics[0].redundant_rotation);
    }

    #[test]
    fn test_check_does_not_stop_at_first_rejection() {
        let report = check_script("BAD\n9 9 N|M\n0 0 N|M\n", bounds());
        assert_eq!(report.diagnostics.len(), 3);
        assert_eq!(report.invalid_count(), 2);
        assert!(report.diagnostics[2].valid);
    }

    #[test]
    fn test_render_human_report_lists_every_line() {
        let report = check_script("0 0 N|M\nBAD LINE\n", bounds());
        let rendered = render_check_report(&report);
        assert!(rendered.contains("✓ line 1: 0 0 N|M"));
        assert!(rendered.contains("✗ line 2: BAD LINE"));
        assert!(rendered.contains("2 line(s) checked, 1 invalid"));
    }

    #[test]
    fn test_render_human_report_empty_script() {
        let report = check_script("# only comments\n\n", bounds());
        let rendered = render_check_report(&report);
        assert!(rendered.contains("no effective lines"));
    }

    #[test]
    fn test_render_json_report() {
        let report = check_script("0 0 N|M\n", bounds());
        let json = render_check_json(&report).unwrap();
        assert!(json.contains("\"line_number\": 1"));
        assert!(json.contains("\"valid\": true"));
    }

    #[test]
    fn test_json_round_trip() {
        let report = check_script("0 0 N|M\nBAD\n", bounds());
        let json = render_check_json(&report).unwrap();
        let back: CheckReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
