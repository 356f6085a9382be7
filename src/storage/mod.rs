// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::extractors::rules::Fragment;
use crate::utils::error::StorageError;

const MANIFEST_FILE: &str = "manifest.json";

/// Writes fragment files beneath a fixed output root.
pub struct FragmentWriter {
    base_dir: PathBuf,
}

/// Per-fragment entry of the run manifest.
#[derive(Debug, Serialize)]
pub struct ManifestEntry<'a> {
    pub rule: &'a str,
    pub path: &'a str,
    pub header: &'a str,
    pub content_length: usize,
}

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    source: String,
    generated_at: String,
    fragments: Vec<ManifestEntry<'a>>,
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError {
    let path = path.to_path_buf();
    move |source| StorageError::Io { path, source }
}

/// Renders the file contents: the header comment, one blank line, then the body as-is.
pub fn render_fragment(header: &str, body: &str) -> String {
    format!("/* {} */\n\n{}", header, body)
}

impl FragmentWriter {
    /// Creates a new FragmentWriter, creating the output root if it doesn't exist
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(io_error(&base_path))?;
        }

        Ok(Self { base_dir: base_path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Writes `/* <header> */`, a blank line and `body` to `relative_path`,
    /// replacing any existing file. Parent directories are created as needed.
    pub fn write_fragment(
        &self,
        relative_path: &str,
        body: &str,
        header: &str,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }

        fs::write(&file_path, render_fragment(header, body)).map_err(io_error(&file_path))?;

        tracing::info!("Created: {}", relative_path);
        tracing::debug!("Wrote {} body bytes to {}", body.len(), file_path.display());

        Ok(file_path)
    }

    /// Writes `manifest.json` at the output root describing the fragments of this run.
    pub fn save_manifest(
        &self,
        source: &Path,
        fragments: &[Fragment],
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(MANIFEST_FILE);

        let manifest = Manifest {
            source: source.display().to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            fragments: fragments
                .iter()
                .map(|fragment| ManifestEntry {
                    rule: fragment.rule,
                    path: fragment.path,
                    header: fragment.header,
                    content_length: fragment.body.len(),
                })
                .collect(),
        };

        let manifest_str = serde_json::to_string_pretty(&manifest)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        fs::write(&file_path, manifest_str).map_err(io_error(&file_path))?;

        tracing::info!("Saved manifest to {}", file_path.display());

        Ok(file_path)
    }
}
