// src/utils/marker_debug.rs
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::extractors::rules::ExtractionRule;
use crate::utils::error::AppError;

/// Byte offsets and 1-based line numbers of every occurrence of `marker`.
pub fn locate_marker(source: &str, marker: &str) -> Vec<(usize, usize)> {
    source
        .match_indices(marker)
        .map(|(offset, _)| (offset, source[..offset].matches('\n').count() + 1))
        .collect()
}

/// Builds a plain-text report of where each rule's markers occur in the source.
pub fn marker_report(source: &str, rules: &[ExtractionRule]) -> String {
    let mut report = String::new();

    for rule in rules {
        let _ = writeln!(report, "[{}] -> {}", rule.name, rule.path);

        let markers = rule.markers();
        if markers.is_empty() {
            let _ = writeln!(report, "  (literal body, no markers)");
        }

        for marker in markers {
            let hits = locate_marker(source, marker);
            if hits.is_empty() {
                let _ = writeln!(report, "  {:?}: not found", marker);
                continue;
            }
            for (offset, line) in hits {
                let _ = writeln!(report, "  {:?}: line {}, byte {}", marker, line, offset);
            }
        }
    }

    report
}

/// Saves the marker report to `filename`, creating its directory if needed.
pub fn save_marker_report(
    source: &str,
    rules: &[ExtractionRule],
    filename: &Path,
) -> Result<(), AppError> {
    if let Some(parent) = filename.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(filename, marker_report(source, rules))?;

    tracing::info!("Saved marker report to {}", filename.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::rules::RULES;

    #[test]
    fn test_locate_marker_lines() {
        let css = "a {}\nbody {\n}\nmain body {\n}";
        assert_eq!(locate_marker(css, "body {"), vec![(5, 2), (19, 4)]);
        assert!(locate_marker(css, "footer").is_empty());
    }

    #[test]
    fn test_report_marks_missing_markers() {
        let css = ":root {\n  --c: red;\n}\nbody {\n}";
        let report = marker_report(css, RULES);

        assert!(report.contains("[variables] -> base/_variables.css"));
        assert!(report.contains("\":root {\": line 1, byte 0"));
        assert!(report.contains("(literal body, no markers)"));
        assert!(report.contains("\"body {\": line 4, byte 22"));
        assert!(report.contains("\"/* Animated background */\": not found"));
    }
}
