//! `anansi leaves` command - every leaf element of one or more documents
//!
//! Directories are searched recursively for files with a document extension.
//! With more than one document, human output prefixes each line with its file.

use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::output_by_format_result;
use crate::commands::helpers::{CollectRows, ElementRow, Selection};
use anansi_core::document::{Document, DocumentKind};
use anansi_core::error::{AnansiError, Result};

#[derive(Debug, Serialize)]
struct FileLeaf {
    file: String,
    #[serde(flatten)]
    row: ElementRow,
}

/// Execute the leaves command
#[tracing::instrument(level = "debug", skip(ctx))]
pub fn execute(ctx: &CommandContext, paths: &[PathBuf], show_values: bool) -> Result<()> {
    let files = collect_documents(paths)?;
    let prefix_files = files.len() > 1;

    let mut leaves = Vec::new();
    for file in &files {
        let rows = Document::load(file)?.accept(CollectRows {
            selection: Selection::Leaves,
            with_values: show_values,
        })?;
        tracing::debug!(file = %file.display(), count = rows.len(), "collected leaves");
        leaves.extend(rows.into_iter().map(|row| FileLeaf {
            file: file.display().to_string(),
            row,
        }));
    }

    output_by_format_result!(ctx.format(),
        json => {
            println!("{}", serde_json::to_string_pretty(&leaves)?);
            Ok::<(), AnansiError>(())
        },
        human => {
            for leaf in &leaves {
                if prefix_files {
                    println!("{}: {}", leaf.file, leaf.row.human_line());
                } else {
                    println!("{}", leaf.row.human_line());
                }
            }
        }
    )
}

/// Expand directories into the documents below them, sorted by path.
/// Files named explicitly are kept whatever their extension, so that
/// loading reports an unsupported one.
fn collect_documents(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }
        let mut found: Vec<PathBuf> = WalkDir::new(path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|file| is_document(file))
            .collect();
        if found.is_empty() {
            return Err(AnansiError::not_found("document", format!("under {}", path.display())));
        }
        found.sort();
        files.extend(found);
    }
    Ok(files)
}

fn is_document(path: &Path) -> bool {
    DocumentKind::from_path(path).is_some()
}
