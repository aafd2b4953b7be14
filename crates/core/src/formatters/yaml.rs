//! YAML document stream for bookmark forests.
//!
//! Each top-level node becomes one YAML document; documents are separated by a
//! `---` line and keep the forest order.

use serde::Deserialize;
use serde_yaml::Value;
use tracing::debug;

use crate::{Result, YambookError};
use crate::bookmark::{BookmarkNode, Forest};

/// Document boundary marker between top-level nodes.
pub const SEPARATOR: &str = "---";

/// Deepest mapping/sequence nesting serde_yaml reads back in one document.
pub const MAX_NESTING: usize = 128;

/// Maps each top-level node, with its subtree, to a YAML document value.
///
/// # Errors
///
/// Returns [`YambookError::NestingTooDeep`] for a node whose document would nest
/// more than [`MAX_NESTING`] levels, since [`from_yaml`] could not read it back.
pub fn to_documents(forest: &[BookmarkNode]) -> Result<Vec<Value>> {
    if let Some(depth) = forest.iter().map(nesting).max()
        && depth > MAX_NESTING
    {
        return Err(YambookError::NestingTooDeep { depth, limit: MAX_NESTING });
    }

    Ok(forest.iter().map(serde_yaml::to_value).collect::<std::result::Result<_, _>>()?)
}

/// Mapping and sequence levels a node occupies in its YAML document.
fn nesting(node: &BookmarkNode) -> usize {
    match node {
        BookmarkNode::Link(_) => 1,
        BookmarkNode::Folder(folder) => 2 + folder.children.iter().map(nesting).max().unwrap_or(0),
    }
}

/// Rebuilds a forest from YAML document values.
///
/// A document with a `folder` key is a folder, anything else a link. Null
/// documents are skipped, and a document holding a sequence contributes each of
/// its elements, so a hand-written single-document list is accepted too.
pub fn from_documents(documents: Vec<Value>) -> Result<Forest> {
    let mut forest = Forest::new();

    for document in documents {
        match document {
            Value::Null => {}
            Value::Sequence(nodes) => {
                for node in nodes {
                    forest.push(serde_yaml::from_value(node)?);
                }
            }
            other => forest.push(serde_yaml::from_value(other)?),
        }
    }

    Ok(forest)
}

/// Serializes a forest as a `---`-separated YAML document stream.
pub fn to_yaml(forest: &[BookmarkNode]) -> Result<String> {
    let mut output = String::new();

    for (index, document) in to_documents(forest)?.iter().enumerate() {
        if index > 0 {
            output.push_str(SEPARATOR);
            output.push('\n');
        }
        output.push_str(&serde_yaml::to_string(document)?);
    }

    debug!(documents = forest.len(), bytes = output.len(), "serialized yaml stream");
    Ok(output)
}

/// Parses a YAML document stream into a forest.
///
/// # Errors
///
/// Returns [`YambookError::MalformedDocument`] when the stream is not valid YAML,
/// a document is not a mapping, or a document nests deeper than [`MAX_NESTING`].
pub fn from_yaml(text: &str) -> Result<Forest> {
    let documents = serde_yaml::Deserializer::from_str(text)
        .map(Value::deserialize)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    debug!(documents = documents.len(), "parsed yaml stream");
    from_documents(documents)
}

/// YAML formatter for bookmark forests
pub struct YamlFormatter;

impl YamlFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_forest(&self, forest: &[BookmarkNode]) -> Result<String> {
        to_yaml(forest)
    }
}

impl Default for YamlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmark::{Folder, Link, NsRoot};

    fn sample_forest() -> Forest {
        let mut tagged = Link::new("Tagged").with_url("https://tagged.example/");
        tagged.tags = Some(vec!["one".to_string(), "two".to_string()]);
        tagged.description = Some("A tagged link".to_string());

        vec![
            Folder::root("Bookmarks Toolbar", NsRoot::Toolbar, vec![tagged.into()]).into(),
            Folder::root(
                "Bookmarks",
                NsRoot::Menu,
                vec![
                    Link::new("Rust").with_url("https://www.rust-lang.org/").into(),
                    Folder::new("Nested", vec![Link::new("Deep").into()]).into(),
                ],
            )
            .into(),
        ]
    }

    #[test]
    fn test_one_document_per_top_level_node() {
        let yaml = to_yaml(&sample_forest()).unwrap();

        assert_eq!(yaml.lines().filter(|line| *line == SEPARATOR).count(), 1);
        assert!(yaml.starts_with("folder: Bookmarks Toolbar\nns_root: toolbar\n"));
        assert!(yaml.contains("---\nfolder: Bookmarks\nns_root: menu\n"));
    }

    #[test]
    fn test_roundtrip() {
        let forest = sample_forest();
        let back = from_yaml(&to_yaml(&forest).unwrap()).unwrap();

        assert_eq!(back, forest);
    }

    #[test]
    fn test_documents_roundtrip() {
        let forest = sample_forest();
        let back = from_documents(to_documents(&forest).unwrap()).unwrap();

        assert_eq!(back, forest);
    }

    #[test]
    fn test_link_document_omits_absent_keys() {
        let documents = to_documents(&[Link::new("Bare").into()]).unwrap();
        let mapping = documents[0].as_mapping().unwrap();

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("title").and_then(Value::as_str), Some("Bare"));
    }

    #[test]
    fn test_empty_stream() {
        assert!(from_yaml("").unwrap().is_empty());
        assert!(to_yaml(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_single_document_list() {
        let forest = from_yaml("- title: A\n  url: https://a.example\n- folder: B\n  bookmarks: []\n").unwrap();

        assert_eq!(
            forest,
            vec![
                Link::new("A").with_url("https://a.example").into(),
                Folder::new("B", vec![]).into()
            ]
        );
    }

    #[test]
    fn test_hand_written_stream() {
        let yaml = r#"
folder: Bookmarks
ns_root: menu
bookmarks:
  - title: Docs
    url: https://docs.rs/
    tags: [rust, docs]
  - folder: Later
---
folder: Other Bookmarks
ns_root: other_bookmarks
bookmarks: []
"#;
        let forest = from_yaml(yaml).unwrap();

        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].ns_root(), Some(NsRoot::Menu));
        assert_eq!(forest[1].ns_root(), Some(NsRoot::OtherBookmarks));

        let BookmarkNode::Folder(menu) = &forest[0] else { panic!("expected folder") };
        assert_eq!(menu.children.len(), 2);
        assert!(menu.children[1].is_folder());
    }

    #[test]
    fn test_malformed_stream() {
        let result = from_yaml("folder: [unterminated\n");
        assert!(matches!(result, Err(YambookError::MalformedDocument(_))));
    }

    #[test]
    fn test_scalar_document_is_malformed() {
        let result = from_yaml("just a string\n");
        assert!(matches!(result, Err(YambookError::MalformedDocument(_))));
    }

    fn chain(depth: usize) -> BookmarkNode {
        (0..depth).fold(Link::new("Bottom").into(), |inner, level| {
            Folder::new(format!("Level {}", level), vec![inner]).into()
        })
    }

    #[test]
    fn test_deep_tree_roundtrip() {
        let forest = vec![chain(60)];
        let back = from_yaml(&to_yaml(&forest).unwrap()).unwrap();

        assert_eq!(back, forest);
    }

    #[test]
    fn test_too_deep_tree_is_refused() {
        let result = to_yaml(&[chain(70)]);
        assert!(matches!(
            result,
            Err(YambookError::NestingTooDeep { depth: 141, limit: MAX_NESTING })
        ));
    }

    #[test]
    fn test_yaml_formatter() {
        let formatter = YamlFormatter::new();
        let result = formatter.format_forest(&sample_forest());

        assert!(result.is_ok());
        assert!(result.unwrap().contains("title: Tagged"));
    }
}
