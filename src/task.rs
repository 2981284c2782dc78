//! Reading a target's properties files into the configuration store
//!
//! The first file of a target is required; every later file is optional and is
//! skipped with a warning when it cannot be read or is empty. The destination key
//! is checked before any file is touched.

use encoding_rs::Encoding;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::{document_to_json, Document};
use crate::merge::merge;
use crate::parse::parse_properties;
use crate::store::ConfigStore;
use crate::utils::decode_bytes;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Conflict - property, {target}, already exists in config")]
    ConfigConflict { target: String },
    #[error("Could not read required properties file: {}", .path.display())]
    RequiredFileMissing { path: PathBuf },
}

/// Supplies the raw text of properties files.
pub trait FileSource {
    /// Text of the file at `path`, or `None` when it cannot be read.
    fn read(&self, path: &Path) -> Option<String>;
}

/// Reads files from disk, decoding them to text.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource {
    encoding: Option<&'static Encoding>,
    preserve_bom: bool,
}

impl FsSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encoding(mut self, encoding: Option<&'static Encoding>) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn preserve_bom(mut self, preserve: bool) -> Self {
        self.preserve_bom = preserve;
        self
    }
}

impl FileSource for FsSource {
    fn read(&self, path: &Path) -> Option<String> {
        if !path.is_file() {
            return None;
        }
        match fs::read(path) {
            Ok(bytes) => Some(decode_bytes(&bytes, self.encoding, self.preserve_bom)),
            Err(e) => {
                tracing::debug!("Failed reading {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// Outcome of reading one target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskReport {
    pub target: String,
    pub files_read: Vec<PathBuf>,
    /// Optional files that could not be read.
    pub skipped: Vec<PathBuf>,
    pub document: Document,
}

/// Read, parse and merge `files` in order.
///
/// A file whose text is empty counts as unreadable. Fails only when the first
/// file is unreadable. The returned report has an empty `target`; [`run_task`]
/// fills it in.
pub fn read_documents(
    files: &[PathBuf],
    source: &impl FileSource,
) -> Result<TaskReport, TaskError> {
    let mut report = TaskReport::default();

    for (index, path) in files.iter().enumerate() {
        let Some(text) = source.read(path).filter(|text| !text.is_empty()) else {
            if index == 0 {
                return Err(TaskError::RequiredFileMissing { path: path.clone() });
            }
            tracing::warn!("Could not read optional properties file: {}", path.display());
            report.skipped.push(path.clone());
            continue;
        };

        let doc = parse_properties(&text);
        tracing::debug!("Parsed {} ({} top-level keys)", path.display(), doc.len());
        merge(&mut report.document, doc);
        report.files_read.push(path.clone());
    }

    Ok(report)
}

/// Read `files` and store the merged document under `target`.
///
/// Refuses to run when `target` already holds a value. Nothing is written to the
/// store unless the required first file was read.
pub fn run_task(
    store: &mut impl ConfigStore,
    target: &str,
    files: &[PathBuf],
    source: &impl FileSource,
) -> Result<TaskReport, TaskError> {
    if store.has(target) {
        return Err(TaskError::ConfigConflict { target: target.to_string() });
    }

    let mut report = read_documents(files, source)?;
    report.target = target.to_string();

    store.set(target, document_to_json(report.document.clone()));
    tracing::info!(
        "Stored {} ({} file(s) read, {} skipped)",
        target,
        report.files_read.len(),
        report.skipped.len()
    );

    Ok(report)
}
