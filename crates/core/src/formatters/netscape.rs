//! Netscape bookmark file generation.
//!
//! The output follows the layout browsers export: a `<DL><p>` per folder, one
//! `<DT>` line per entry, four spaces of indentation per level by default.

use tracing::debug;

use crate::bookmark::{BookmarkNode, Folder, Link, NsRoot};
use crate::extract::{OTHER_BOOKMARKS_MARKER, TOOLBAR_MARKER};

/// Fixed preamble of every generated bookmark file.
pub const HEADER: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<!-- This is an automatically generated file.
     It will be read and overwritten.
     DO NOT EDIT! -->
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
"#;

/// Configuration for bookmark file generation
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Spaces of indentation per nesting level
    pub indent_width: usize,
    /// Wrap the list in the document header
    pub include_template: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self { indent_width: 4, include_template: true }
    }
}

/// Renders a forest as a complete Netscape bookmark file.
///
/// A depth-0 menu folder is not written as a heading: its children are placed at
/// the top level, where browsers keep their menu content.
pub fn generate(forest: &[BookmarkNode], config: &GenerateConfig) -> String {
    let mut output = String::new();

    if config.include_template {
        output.push_str(HEADER);
    }

    write_list(&mut output, forest, 0, config);

    debug!(bytes = output.len(), "generated bookmark file");
    output
}

fn write_list(output: &mut String, nodes: &[BookmarkNode], depth: usize, config: &GenerateConfig) {
    let indent = " ".repeat(depth * config.indent_width);

    output.push_str(&format!("{}<DL><p>\n", indent));
    write_items(output, nodes, depth, config);
    output.push_str(&format!("{}</DL><p>\n", indent));
}

fn write_items(output: &mut String, nodes: &[BookmarkNode], depth: usize, config: &GenerateConfig) {
    let indent = " ".repeat((depth + 1) * config.indent_width);

    for node in nodes {
        match node {
            BookmarkNode::Folder(folder) if depth == 0 && folder.ns_root == Some(NsRoot::Menu) => {
                write_items(output, &folder.children, depth, config);
            }
            BookmarkNode::Folder(folder) => {
                output.push_str(&format!("{}<DT>{}\n", indent, heading(folder, depth)));
                write_list(output, &folder.children, depth + 1, config);
            }
            BookmarkNode::Link(link) => {
                output.push_str(&format!("{}<DT>{}\n", indent, anchor(link)));
                if let Some(detail) = link.description.as_deref().filter(|d| !fits_comment(d)) {
                    output.push_str(&format!("{}<DD>{}\n", indent, escape_text(detail)));
                }
            }
        }
    }
}

fn heading(folder: &Folder, depth: usize) -> String {
    let marker = match folder.ns_root {
        Some(NsRoot::Toolbar) if depth == 0 => Some(TOOLBAR_MARKER),
        Some(NsRoot::OtherBookmarks) if depth == 0 => Some(OTHER_BOOKMARKS_MARKER),
        _ => None,
    };

    match marker {
        Some(marker) => format!(
            "<H3 {}=\"true\">{}</H3>",
            marker.to_ascii_uppercase(),
            escape_text(&folder.name)
        ),
        None => format!("<H3>{}</H3>", escape_text(&folder.name)),
    }
}

/// Anchor for a link, preceded by its description comment. Only present,
/// non-empty fields become attributes.
fn anchor(link: &Link) -> String {
    let mut attrs = String::new();

    let tags = link.tags.as_ref().filter(|tags| !tags.is_empty()).map(|tags| tags.join(","));

    for (name, value) in [
        ("HREF", link.url.as_deref()),
        ("ICON", link.icon.as_deref().filter(|icon| !icon.is_empty())),
        ("ICON_URI", link.icon_uri.as_deref().filter(|uri| !uri.is_empty())),
        ("TAGS", tags.as_deref()),
    ] {
        if let Some(value) = value {
            attrs.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
        }
    }

    let comment = link
        .description
        .as_deref()
        .filter(|d| fits_comment(d))
        .map(|d| format!("<!--{}-->", d))
        .unwrap_or_default();

    format!("{}<A{}>{}</A>", comment, attrs, escape_text(&link.title))
}

/// Whether a description can sit verbatim inside `<!--...-->` and be read back
/// unchanged. Anything else is written as escaped `<DD>` text after the item.
fn fits_comment(description: &str) -> bool {
    !(description.starts_with('>')
        || description.starts_with("->")
        || description.contains("--")
        || description.ends_with('-')
        || description.ends_with("<!"))
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;")
}

/// Netscape bookmark file formatter
pub struct NetscapeFormatter {
    config: GenerateConfig,
}

impl NetscapeFormatter {
    pub fn new(config: GenerateConfig) -> Self {
        Self { config }
    }

    pub fn format_forest(&self, forest: &[BookmarkNode]) -> String {
        generate(forest, &self.config)
    }
}

impl Default for NetscapeFormatter {
    fn default() -> Self {
        Self::new(GenerateConfig::default())
    }
}
