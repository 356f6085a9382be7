// src/pipeline.rs
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::extractors::rules::{ExtractionRule, Fragment, RULES};
use crate::storage::FragmentWriter;
use crate::utils::error::{AppError, ExtractError};
use crate::utils::marker_debug;

/// What a completed run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub fragments: Vec<Fragment>,
    pub written: Vec<PathBuf>,
}

/// Splits the configured source stylesheet using the fixed rule table.
pub fn run(config: &Config) -> Result<RunSummary, AppError> {
    run_rules(config, RULES)
}

/// Applies `rules` in order. The first failure ends the run; fragments
/// already written stay on disk.
pub fn run_rules(config: &Config, rules: &[ExtractionRule]) -> Result<RunSummary, AppError> {
    config.validate()?;

    let source = fs::read_to_string(&config.source).map_err(|e| AppError::SourceRead {
        path: config.source.clone(),
        source: e,
    })?;
    tracing::debug!("Read {} bytes from {}", source.len(), config.source.display());

    let writer = FragmentWriter::new(&config.output_dir)?;

    if config.debug {
        let report_path = writer.base_dir().join("debug").join("markers.txt");
        if let Err(e) = marker_debug::save_marker_report(&source, rules, &report_path) {
            tracing::warn!("Failed to save marker report: {}", e);
        }
    }

    let mut fragments = Vec::with_capacity(rules.len());
    let mut written = Vec::with_capacity(rules.len());

    for rule in rules {
        tracing::info!("Extracting {}...", rule.name);

        let fragment = match rule.apply(&source) {
            Ok(fragment) => fragment,
            Err(e @ ExtractError::MarkerNotFound { .. }) if config.allow_missing => {
                tracing::warn!("{} for '{}', writing an empty fragment", e, rule.name);
                rule.fragment(String::new())
            }
            Err(e) => {
                return Err(AppError::Extraction {
                    rule: rule.name.to_string(),
                    source: e,
                })
            }
        };

        written.push(writer.write_fragment(fragment.path, &fragment.body, fragment.header)?);
        fragments.push(fragment);
    }

    if config.manifest {
        writer.save_manifest(&config.source, &fragments)?;
    }

    tracing::info!("Extraction complete! {} fragments written.", fragments.len());

    Ok(RunSummary { fragments, written })
}
