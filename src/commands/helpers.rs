//! Helpers shared by the document commands

use serde::Serialize;

use anansi_core::document::DocumentVisitor;
use anansi_core::element::Shaped;
use anansi_core::error::Result;
use anansi_core::format::inline_value;
use anansi_core::{element_path, elements, leaf_elements, lookup, Path, Segment};

/// One element of a document: its rendered path and its value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementRow {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl ElementRow {
    fn from_path<T: Serialize + ?Sized>(path: &Path<&T, Segment>, with_value: bool) -> Result<Self> {
        let value = if with_value {
            Some(serde_json::to_value(*path.to_vertex())?)
        } else {
            None
        };
        Ok(ElementRow {
            path: element_path(path),
            value,
        })
    }

    /// `path<TAB>value`, or just the path when the value was not collected
    pub fn human_line(&self) -> String {
        match &self.value {
            Some(value) => format!("{}\t{}", self.path, inline_value(value)),
            None => self.path.clone(),
        }
    }
}

/// Which elements of a document to collect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Immediate children of the root
    Children,
    /// Every leaf below the root
    Leaves,
}

/// Collects the selected elements of a document as rows
pub struct CollectRows {
    pub selection: Selection,
    pub with_values: bool,
}

impl DocumentVisitor for CollectRows {
    type Output = Result<Vec<ElementRow>>;

    fn visit<T: Shaped + Serialize>(self, root: &T) -> Self::Output {
        match self.selection {
            Selection::Children => elements(root)
                .map(|path| ElementRow::from_path(&path, self.with_values))
                .collect(),
            Selection::Leaves => leaf_elements(root)
                .map(|path| ElementRow::from_path(&path, self.with_values))
                .collect(),
        }
    }
}

/// Resolves segments against a document, yielding the value found there
pub struct LookupValue<'a> {
    pub segments: &'a [Segment],
}

impl DocumentVisitor for LookupValue<'_> {
    type Output = Result<Option<serde_json::Value>>;

    fn visit<T: Shaped + Serialize>(self, root: &T) -> Self::Output {
        lookup(root, self.segments)
            .map(serde_json::to_value)
            .transpose()
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anansi_core::document::{Document, DocumentKind};
    use serde_json::json;

    fn doc() -> Document {
        Document::parse(
            r#"{"name": "Alice", "tags": ["a", "b"], "nested": {"x": 1}}"#,
            DocumentKind::Json,
        )
        .unwrap()
    }

    #[test]
    fn test_collect_children() {
        let rows = doc()
            .accept(CollectRows {
                selection: Selection::Children,
                with_values: true,
            })
            .unwrap();
        let lines: Vec<String> = rows.iter().map(ElementRow::human_line).collect();
        assert_eq!(
            lines,
            vec!["name\tAlice", "tags\t[\"a\",\"b\"]", "nested\t{\"x\":1}"]
        );
    }

    #[test]
    fn test_collect_leaves_without_values() {
        let rows = doc()
            .accept(CollectRows {
                selection: Selection::Leaves,
                with_values: false,
            })
            .unwrap();
        let paths: Vec<&str> = rows.iter().map(|row| row.path.as_str()).collect();
        assert_eq!(paths, vec!["name", "tags[0]", "tags[1]", "nested.x"]);
        assert!(rows.iter().all(|row| row.value.is_none()));
        assert_eq!(serde_json::to_value(&rows[0]).unwrap(), json!({"path": "name"}));
    }

    #[test]
    fn test_lookup_value() {
        let segments = vec![Segment::Key("tags".into()), Segment::Index(1)];
        let found = doc().accept(LookupValue { segments: &segments }).unwrap();
        assert_eq!(found, Some(json!("b")));

        let missing = vec![Segment::Key("tags".into()), Segment::Index(5)];
        assert_eq!(doc().accept(LookupValue { segments: &missing }).unwrap(), None);
    }
}
