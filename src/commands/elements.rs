//! `anansi elements` command - the immediate children of a document's root

use std::path::Path;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::output_by_format_result;
use crate::commands::helpers::{CollectRows, Selection};
use anansi_core::document::Document;
use anansi_core::error::Result;

/// Execute the elements command
#[tracing::instrument(level = "debug", skip(ctx))]
pub fn execute(ctx: &CommandContext, file: &Path, show_values: bool) -> Result<()> {
    let document = Document::load(file)?;
    let rows = document.accept(CollectRows {
        selection: Selection::Children,
        with_values: show_values,
    })?;

    tracing::debug!(file = %file.display(), count = rows.len(), "collected elements");

    output_by_format_result!(ctx.format(),
        json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            Ok::<(), anansi_core::error::AnansiError>(())
        },
        human => {
            for row in &rows {
                println!("{}", row.human_line());
            }
        }
    )
}
