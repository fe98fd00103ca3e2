use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use starquery_core::{Extraction, StarlarkParser, extract_calls};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::display::{print_json, print_text};

/// Calls extracted from one file
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub extraction: Extraction,
}

pub fn query_command(files: &[PathBuf], names: &[String], format: OutputFormat) -> Result<()> {
    debug!("Querying {} file(s)", files.len());

    // Files share nothing, so each one gets its own parser
    let mut reports = files
        .par_iter()
        .map(|path| query_file(path))
        .collect::<Result<Vec<_>>>()?;

    if !names.is_empty() {
        for report in &mut reports {
            report
                .extraction
                .calls
                .retain(|call| names.iter().any(|name| *name == call.name));
        }
    }

    match format {
        OutputFormat::Text => print_text(&reports)?,
        OutputFormat::Json => print_json(&reports)?,
    }

    Ok(())
}

/// Read, parse and extract a single file
pub fn query_file(path: &Path) -> Result<FileReport> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read Starlark file {}", path.display()))?;

    let mut parser = StarlarkParser::new()?;
    let ast = parser
        .parse_build_file(&source)
        .with_context(|| format!("Failed to parse Starlark file {}", path.display()))?;

    let extraction = extract_calls(&ast);
    debug!(
        "{}: found {} function calls",
        path.display(),
        extraction.calls.len()
    );

    Ok(FileReport {
        path: path.to_path_buf(),
        extraction,
    })
}
