//! Bookmark tree extraction from Netscape bookmark markup.
//!
//! Browsers disagree on how a folder's children are attached. Most nest the
//! `<DL>` inside the folder's `<DT>` item; some place it in a `<DD>` wrapper that
//! follows the item. Both shapes produce the same [`Folder`].
//!
//! At depth 0 the browser's special roots (toolbar, other bookmarks) are kept as
//! top-level folders, and everything else is gathered into one synthetic menu
//! folder appended after them.
//!
//! # Example
//!
//! ```rust
//! use yambook_core::{Document, ExtractConfig, extract_bookmarks};
//!
//! let html = r#"<DL><p>
//!     <DT><H3 PERSONAL_TOOLBAR_FOLDER="true">Toolbar</H3>
//!     <DL><p></DL><p>
//!     <DT><A HREF="https://example.com">Example</A>
//! </DL><p>"#;
//!
//! let forest = extract_bookmarks(&Document::parse(html), &ExtractConfig::default());
//! assert_eq!(forest.len(), 2);
//! assert_eq!(forest[1].title(), "Bookmarks");
//! ```

use tracing::{debug, trace};

use crate::bookmark::{BookmarkNode, Folder, Forest, Link, NsRoot};
use crate::normalize::normalize;
use crate::parse::{Document, MarkupNode};

/// Heading attribute marking the bookmarks toolbar.
pub const TOOLBAR_MARKER: &str = "personal_toolbar_folder";

/// Heading attribute marking Firefox's "Other Bookmarks".
pub const OTHER_BOOKMARKS_MARKER: &str = "unfiled_bookmarks_folder";

/// Configuration for bookmark extraction
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Name of the synthetic folder wrapping ordinary depth-0 content
    pub menu_folder_name: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { menu_folder_name: "Bookmarks".to_string() }
    }
}

/// Extracts the bookmark forest from a parsed document.
///
/// A document without any `<DL>` list yields an empty forest.
pub fn extract_bookmarks(doc: &Document, config: &ExtractConfig) -> Forest {
    match doc.first_list() {
        Some(list) => {
            let forest = parse_level(&list, 0, config);
            debug!(roots = forest.len(), "extracted bookmark forest");
            forest
        }
        None => {
            debug!("no bookmark list found in document");
            Forest::new()
        }
    }
}

/// Parses the `<DT>` items directly under a `<DL>` container.
///
/// Elements other than `<DT>` at this level are ignored. At depth 0 ordinary
/// items are wrapped into the synthetic menu folder.
pub fn parse_level<N: MarkupNode>(container: &N, depth: usize, config: &ExtractConfig) -> Vec<BookmarkNode> {
    let nodes = container
        .child_elements()
        .into_iter()
        .filter(|el| el.tag_name() == "dt")
        .filter_map(|item| parse_item(&item, depth, config));

    if depth > 0 {
        return nodes.fold(Vec::new(), push_sibling);
    }

    let (mut roots, menu) = nodes.fold((Vec::new(), None), |(roots, menu), node| {
        if node.ns_root().is_some() {
            (push_sibling(roots, node), menu)
        } else {
            (roots, Some(push_sibling(menu.unwrap_or_default(), node)))
        }
    });

    if let Some(children) = menu {
        roots.push(Folder::root(config.menu_folder_name.clone(), NsRoot::Menu, children).into());
    }

    roots
}

/// Appends `node` to a sibling list, except that a link is discarded once the
/// list starts with a folder.
///
/// Browsers do not emit such lists and the rule silently loses bookmarks; it is
/// kept because existing YAML exports depend on it.
pub fn push_sibling(mut siblings: Vec<BookmarkNode>, node: BookmarkNode) -> Vec<BookmarkNode> {
    let first_is_folder = siblings.first().is_some_and(BookmarkNode::is_folder);

    if first_is_folder && node.is_link() {
        debug!(title = node.title(), "dropping link that follows a leading folder");
    } else {
        siblings.push(node);
    }

    siblings
}

/// Builds the node for one `<DT>` item. Items holding neither an anchor nor a
/// heading produce nothing.
fn parse_item<N: MarkupNode>(item: &N, depth: usize, config: &ExtractConfig) -> Option<BookmarkNode> {
    let mut anchor = None;
    let mut heading = None;
    let mut inline_list = None;

    for child in item.child_elements() {
        if anchor.is_none() && child.tag_name() == "a" {
            anchor = Some(child);
        } else if heading.is_none() && child.tag_name() == "h3" {
            heading = Some(child);
        } else if inline_list.is_none() && child.tag_name() == "dl" {
            inline_list = Some(child);
        }
    }

    if let Some(anchor) = anchor {
        let link = parse_link(item, &anchor);
        trace!(depth, title = %link.title, "parsed link");
        return Some(link.into());
    }

    let heading = heading?;
    let ns_root = if depth == 0 { root_marker(&heading) } else { None };

    let children = match inline_list.or_else(|| detail_list(item)) {
        Some(list) => parse_level(&list, depth + 1, config),
        None => Vec::new(),
    };

    let folder = Folder { name: normalize(&heading.text()), ns_root, children };
    trace!(depth, name = %folder.name, children = folder.children.len(), "parsed folder");

    Some(folder.into())
}

fn parse_link<N: MarkupNode>(item: &N, anchor: &N) -> Link {
    let description = item.first_comment().or_else(|| detail_text(item));

    Link {
        title: normalize(&anchor.text()),
        url: anchor.attr("href").map(str::to_string),
        icon: non_empty_attr(anchor, "icon"),
        icon_uri: non_empty_attr(anchor, "icon_uri"),
        tags: anchor.attr("tags").and_then(parse_tags),
        description,
    }
}

fn root_marker<N: MarkupNode>(heading: &N) -> Option<NsRoot> {
    if non_empty_attr(heading, OTHER_BOOKMARKS_MARKER).is_some() {
        Some(NsRoot::OtherBookmarks)
    } else if non_empty_attr(heading, TOOLBAR_MARKER).is_some() {
        Some(NsRoot::Toolbar)
    } else {
        None
    }
}

/// The `<DD>` element directly following an item, if any.
fn detail_wrapper<N: MarkupNode>(item: &N) -> Option<N> {
    item.next_sibling_element().filter(|el| el.tag_name() == "dd")
}

/// Children placed in a `<DD>` wrapper after the folder item.
fn detail_list<N: MarkupNode>(item: &N) -> Option<N> {
    detail_wrapper(item)?.find_descendant("dl")
}

/// Link description written as a `<DD>` after the link item.
fn detail_text<N: MarkupNode>(item: &N) -> Option<String> {
    let wrapper = detail_wrapper(item)?;
    if wrapper.find_descendant("dl").is_some() {
        return None;
    }

    let text = normalize(&wrapper.text());
    (!text.is_empty()).then_some(text)
}

fn non_empty_attr<N: MarkupNode>(node: &N, name: &str) -> Option<String> {
    node.attr(name).filter(|value| !value.is_empty()).map(str::to_string)
}

fn parse_tags(raw: &str) -> Option<Vec<String>> {
    let tags: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();

    (!tags.is_empty()).then_some(tags)
}
