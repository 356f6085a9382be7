// src/extractors/rules.rs

// --- Imports ---
use crate::extractors::block::{extract_block, extract_blocks};
use crate::extractors::span::extract_span;
use crate::utils::error::ExtractError;

// --- Constants ---
const RESET_STYLES: &str = "* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}";

/// The fixed migration rules, applied in this order.
pub const RULES: &[ExtractionRule] = &[
    ExtractionRule {
        name: "variables",
        path: "base/_variables.css",
        header: "CSS Custom Properties (Variables)",
        strategy: Strategy::Block { marker: ":root {" },
    },
    ExtractionRule {
        name: "reset styles",
        path: "base/_reset.css",
        header: "CSS Reset and Base Styles",
        strategy: Strategy::Literal(RESET_STYLES),
    },
    ExtractionRule {
        name: "typography",
        path: "base/_typography.css",
        header: "Typography and Base Text Styles",
        strategy: Strategy::Span {
            start: "body {",
            end: "/* Animated background */",
        },
    },
];

// --- Data Structures ---

/// How a rule obtains its fragment body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// First brace-balanced block starting at a line containing the marker.
    Block { marker: &'static str },
    /// Every independent balanced block for the marker, separated by a blank line.
    #[allow(dead_code)] // no fixed rule uses it yet
    Blocks { marker: &'static str },
    /// Trimmed text from the start marker up to the end marker.
    Span { start: &'static str, end: &'static str },
    /// A fixed body, independent of the source.
    Literal(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionRule {
    pub name: &'static str,   // Used in progress messages, e.g. "typography"
    pub path: &'static str,   // Relative to the output root
    pub header: &'static str, // Written as `/* <header> */`
    pub strategy: Strategy,
}

/// One output file: where it goes, its header description and its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub rule: &'static str,
    pub path: &'static str,
    pub header: &'static str,
    pub body: String,
}

impl ExtractionRule {
    /// Runs the rule's strategy against the source document.
    pub fn apply(&self, source: &str) -> Result<Fragment, ExtractError> {
        let body = match self.strategy {
            Strategy::Block { marker } => extract_block(source, marker)?.text.to_string(),
            Strategy::Blocks { marker } => extract_blocks(source, marker)?
                .iter()
                .map(|block| block.text)
                .collect::<Vec<_>>()
                .join("\n\n"),
            Strategy::Span { start, end } => extract_span(source, start, end)?.to_string(),
            Strategy::Literal(body) => body.to_string(),
        };

        tracing::debug!("Rule '{}' produced {} bytes", self.name, body.len());
        Ok(self.fragment(body))
    }

    /// Builds this rule's fragment around an arbitrary body.
    pub fn fragment(&self, body: String) -> Fragment {
        Fragment {
            rule: self.name,
            path: self.path,
            header: self.header,
            body,
        }
    }

    /// The source markers this rule looks for (none for literal rules).
    pub fn markers(&self) -> Vec<&'static str> {
        match self.strategy {
            Strategy::Block { marker } | Strategy::Blocks { marker } => vec![marker],
            Strategy::Span { start, end } => vec![start, end],
            Strategy::Literal(_) => Vec::new(),
        }
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str =
        ":root {\n  --c: red;\n}\nbody {\n  color: red;\n}\n/* Animated background */\nfoo{}";

    #[test]
    fn test_rule_table_order_and_targets() {
        let targets: Vec<(&str, &str)> = RULES.iter().map(|r| (r.path, r.header)).collect();
        assert_eq!(
            targets,
            vec![
                ("base/_variables.css", "CSS Custom Properties (Variables)"),
                ("base/_reset.css", "CSS Reset and Base Styles"),
                ("base/_typography.css", "Typography and Base Text Styles"),
            ]
        );
    }

    #[test]
    fn test_rules_applied_to_sample() {
        let bodies: Vec<String> = RULES
            .iter()
            .map(|rule| rule.apply(SAMPLE).unwrap().body)
            .collect();
        assert_eq!(bodies[0], ":root {\n  --c: red;\n}");
        assert_eq!(bodies[1], RESET_STYLES);
        assert_eq!(bodies[2], "body {\n  color: red;\n}");
    }

    #[test]
    fn test_literal_rule_ignores_source() {
        let reset = &RULES[1];
        let fragment = reset.apply("").unwrap();
        assert!(fragment.body.starts_with("* {\n    margin: 0;"));
        assert!(reset.markers().is_empty());
    }

    #[test]
    fn test_blocks_strategy_joins_with_blank_line() {
        let rule = ExtractionRule {
            name: "media queries",
            path: "layout/_media.css",
            header: "Media Queries",
            strategy: Strategy::Blocks { marker: "@media" },
        };
        let css = "@media print {\n  a {}\n}\nb {}\n@media screen {\n}";
        let fragment = rule.apply(css).unwrap();
        assert_eq!(fragment.body, "@media print {\n  a {}\n}\n\n@media screen {\n}");
        assert_eq!(fragment.path, "layout/_media.css");
    }

    #[test]
    fn test_missing_marker_surfaces_from_rule() {
        let err = RULES[0].apply("body { margin: 0; }").unwrap_err();
        assert!(matches!(err, ExtractError::MarkerNotFound { .. }));
    }

    #[test]
    fn test_span_rule_markers() {
        assert_eq!(RULES[2].markers(), vec!["body {", "/* Animated background */"]);
    }
}
