//! Structured documents read from disk
//!
//! The kind of a document is decided by its file extension. Each kind keeps
//! its own value type, so mapping keys stay in document order and YAML tags
//! and TOML tables are seen as they were written.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::element::Shaped;
use crate::error::{AnansiError, Result};

/// Supported document kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Json,
    Yaml,
    Toml,
}

impl DocumentKind {
    /// Extensions recognized for each kind
    pub const EXTENSIONS: [&'static str; 4] = ["json", "yaml", "yml", "toml"];

    /// The kind of document at `path`, from its extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "json" => Some(DocumentKind::Json),
            "yaml" | "yml" => Some(DocumentKind::Yaml),
            "toml" => Some(DocumentKind::Toml),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DocumentKind::Json => "json",
            DocumentKind::Yaml => "yaml",
            DocumentKind::Toml => "toml",
        })
    }
}

/// A parsed document
#[derive(Debug, Clone)]
pub enum Document {
    Json(serde_json::Value),
    Yaml(serde_yaml::Value),
    Toml(toml::Value),
}

/// Operations generic over the root value of any [`Document`]
pub trait DocumentVisitor {
    type Output;

    fn visit<T: Shaped + Serialize>(self, root: &T) -> Self::Output;
}

/// Read the file at `path`, deciding its kind from the extension.
///
/// `context` names what the file holds in errors, e.g. "document" or "graph".
pub fn read_document_text(path: &Path, context: &str) -> Result<(DocumentKind, String)> {
    let kind = DocumentKind::from_path(path).ok_or_else(|| {
        AnansiError::invalid_value(
            &format!("{} extension", context),
            format!(
                "{} (expected one of: {})",
                path.display(),
                DocumentKind::EXTENSIONS.join(", ")
            ),
        )
    })?;
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AnansiError::not_found(context, path.display())
        } else {
            AnansiError::Io(e)
        }
    })?;
    Ok((kind, content))
}

impl Document {
    /// Read and parse the document at `path`.
    #[tracing::instrument(level = "debug")]
    pub fn load(path: &Path) -> Result<Self> {
        let (kind, content) = read_document_text(path, "document")?;
        Self::parse(&content, kind)
    }

    /// Parse `content` as a document of the given kind.
    pub fn parse(content: &str, kind: DocumentKind) -> Result<Self> {
        Ok(match kind {
            DocumentKind::Json => Document::Json(serde_json::from_str(content)?),
            DocumentKind::Yaml => Document::Yaml(serde_yaml::from_str(content)?),
            DocumentKind::Toml => Document::Toml(toml::from_str(content)?),
        })
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Json(_) => DocumentKind::Json,
            Document::Yaml(_) => DocumentKind::Yaml,
            Document::Toml(_) => DocumentKind::Toml,
        }
    }

    /// Run `visitor` over the root value, whatever its kind.
    pub fn accept<V: DocumentVisitor>(&self, visitor: V) -> V::Output {
        match self {
            Document::Json(root) => visitor.visit(root),
            Document::Yaml(root) => visitor.visit(root),
            Document::Toml(root) => visitor.visit(root),
        }
    }
}
