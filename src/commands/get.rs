//! `anansi get` command - print the value at an element path

use std::path::Path;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::output_by_format_result;
use crate::commands::helpers::LookupValue;
use anansi_core::document::Document;
use anansi_core::error::{AnansiError, Result};
use anansi_core::format::inline_value;
use anansi_core::split_element_path;

/// Execute the get command
#[tracing::instrument(level = "debug", skip(ctx))]
pub fn execute(ctx: &CommandContext, file: &Path, element_path: &str) -> Result<()> {
    let segments = split_element_path(element_path)?;
    let document = Document::load(file)?;
    let value = document
        .accept(LookupValue {
            segments: &segments,
        })?
        .ok_or_else(|| AnansiError::not_found("element", element_path))?;

    output_by_format_result!(ctx.format(),
        json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "path": element_path,
                    "value": value,
                }))?
            );
            Ok::<(), AnansiError>(())
        },
        human => {
            if value.is_object() || value.is_array() {
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", inline_value(&value));
            }
        }
    )
}
