//! The bookmark tree shared by the parser, the YAML codec and the generator.
//!
//! A converted bookmark file is a [`Forest`]: the browser's special roots and the
//! synthetic menu folder sit side by side at depth 0, so there is no single root.
//! Sibling order is significant everywhere.
//!
//! The serde layout of these types is the YAML document layout: a folder is a
//! mapping with `folder`, optional `ns_root` and `bookmarks`; a link is a mapping
//! with `title` and whichever optional keys it carries.

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

/// An ordered sequence of top-level bookmark nodes.
pub type Forest = Vec<BookmarkNode>;

/// Marks a depth-0 folder as a browser-reserved location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NsRoot {
    /// Bookmarks toolbar (Firefox) or bookmarks bar (Chrome).
    Toolbar,
    /// Firefox "Other Bookmarks".
    OtherBookmarks,
    /// The synthetic folder wrapping ordinary menu content.
    Menu,
}

impl NsRoot {
    /// Name used in YAML documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            NsRoot::Toolbar => "toolbar",
            NsRoot::OtherBookmarks => "other_bookmarks",
            NsRoot::Menu => "menu",
        }
    }

    /// Looks up a root by its YAML name. Unknown names have no root.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "toolbar" => Some(NsRoot::Toolbar),
            "other_bookmarks" => Some(NsRoot::OtherBookmarks),
            "menu" => Some(NsRoot::Menu),
            _ => None,
        }
    }
}

/// A single bookmark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Normalized anchor text.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Alternate icon reference written by Firefox.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Link {
    /// Creates a link with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Default::default() }
    }

    /// Sets the target URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// A folder of bookmarks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Folder {
    #[serde(rename = "folder")]
    pub name: String,
    /// Set only on depth-0 folders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ns_root: Option<NsRoot>,
    #[serde(rename = "bookmarks")]
    pub children: Vec<BookmarkNode>,
}

impl Folder {
    /// Creates an ordinary folder.
    pub fn new(name: impl Into<String>, children: Vec<BookmarkNode>) -> Self {
        Self { name: name.into(), ns_root: None, children }
    }

    /// Creates a browser-reserved root folder.
    pub fn root(name: impl Into<String>, ns_root: NsRoot, children: Vec<BookmarkNode>) -> Self {
        Self { name: name.into(), ns_root: Some(ns_root), children }
    }
}

/// A node of the bookmark tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BookmarkNode {
    Folder(Folder),
    Link(Link),
}

impl BookmarkNode {
    pub fn is_folder(&self) -> bool {
        matches!(self, BookmarkNode::Folder(_))
    }

    pub fn is_link(&self) -> bool {
        matches!(self, BookmarkNode::Link(_))
    }

    /// Folder name or link title.
    pub fn title(&self) -> &str {
        match self {
            BookmarkNode::Folder(folder) => &folder.name,
            BookmarkNode::Link(link) => &link.title,
        }
    }

    /// Special root marker, `None` for links and ordinary folders.
    pub fn ns_root(&self) -> Option<NsRoot> {
        match self {
            BookmarkNode::Folder(folder) => folder.ns_root,
            BookmarkNode::Link(_) => None,
        }
    }
}

impl From<Folder> for BookmarkNode {
    fn from(folder: Folder) -> Self {
        BookmarkNode::Folder(folder)
    }
}

impl From<Link> for BookmarkNode {
    fn from(link: Link) -> Self {
        BookmarkNode::Link(link)
    }
}

/// Counts the links in a forest, at any depth.
pub fn count_links(nodes: &[BookmarkNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            BookmarkNode::Folder(folder) => count_links(&folder.children),
            BookmarkNode::Link(_) => 1,
        })
        .sum()
}

/// Counts the folders in a forest, at any depth.
pub fn count_folders(nodes: &[BookmarkNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            BookmarkNode::Folder(folder) => 1 + count_folders(&folder.children),
            BookmarkNode::Link(_) => 0,
        })
        .sum()
}

/// Every key either variant may carry. The presence of `folder` decides the
/// variant; keys that belong to the other variant are ignored.
#[derive(Deserialize)]
struct RawNode {
    #[serde(default, deserialize_with = "scalar_string")]
    folder: Option<String>,
    #[serde(default, deserialize_with = "ns_root_name")]
    ns_root: Option<NsRoot>,
    #[serde(default)]
    bookmarks: Option<Vec<BookmarkNode>>,
    #[serde(default, deserialize_with = "scalar_string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    url: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    icon: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    icon_uri: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "scalar_string")]
    description: Option<String>,
}

impl From<RawNode> for BookmarkNode {
    fn from(raw: RawNode) -> Self {
        match raw.folder {
            Some(name) => BookmarkNode::Folder(Folder {
                name,
                ns_root: raw.ns_root,
                children: raw.bookmarks.unwrap_or_default(),
            }),
            None => BookmarkNode::Link(Link {
                title: raw.title.unwrap_or_default(),
                url: raw.url,
                icon: raw.icon,
                icon_uri: raw.icon_uri,
                tags: raw.tags,
                description: raw.description,
            }),
        }
    }
}

impl<'de> Deserialize<'de> for BookmarkNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawNode::deserialize(deserializer).map(BookmarkNode::from)
    }
}

/// Hand-edited YAML leaves titles like `2024` or `yes` unquoted; read any scalar
/// back as its text.
fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn ns_root_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NsRoot>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_str).and_then(NsRoot::from_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_forest() -> Forest {
        vec![
            Folder::root(
                "Bookmarks Toolbar",
                NsRoot::Toolbar,
                vec![Link::new("Rust").with_url("https://www.rust-lang.org/").into()],
            )
            .into(),
            Folder::root(
                "Bookmarks",
                NsRoot::Menu,
                vec![
                    Link::new("Docs").with_url("https://docs.rs/").into(),
                    Folder::new("Empty", vec![]).into(),
                ],
            )
            .into(),
        ]
    }

    #[test]
    fn test_counts() {
        let forest = sample_forest();
        assert_eq!(count_links(&forest), 2);
        assert_eq!(count_folders(&forest), 3);
    }

    #[test]
    fn test_node_accessors() {
        let forest = sample_forest();
        assert!(forest[0].is_folder());
        assert_eq!(forest[0].ns_root(), Some(NsRoot::Toolbar));
        assert_eq!(forest[1].title(), "Bookmarks");

        let link: BookmarkNode = Link::new("Docs").into();
        assert!(link.is_link());
        assert_eq!(link.ns_root(), None);
    }

    #[test]
    fn test_ns_root_names() {
        for root in [NsRoot::Toolbar, NsRoot::OtherBookmarks, NsRoot::Menu] {
            assert_eq!(NsRoot::from_name(root.as_str()), Some(root));
        }
        assert_eq!(NsRoot::from_name("unfiled"), None);
    }

    #[test]
    fn test_link_serializes_present_fields_only() {
        let node: BookmarkNode = Link::new("Rust").with_url("https://www.rust-lang.org/").into();
        let yaml = serde_yaml::to_string(&node).unwrap();

        assert_eq!(yaml, "title: Rust\nurl: https://www.rust-lang.org/\n");
    }

    #[test]
    fn test_folder_serializes_keys_in_order() {
        let node: BookmarkNode = Folder::root("Toolbar", NsRoot::Toolbar, vec![]).into();
        let yaml = serde_yaml::to_string(&node).unwrap();

        assert_eq!(yaml, "folder: Toolbar\nns_root: toolbar\nbookmarks: []\n");
    }

    #[test]
    fn test_ordinary_folder_omits_ns_root() {
        let node: BookmarkNode = Folder::new("Plain", vec![]).into();
        let yaml = serde_yaml::to_string(&node).unwrap();

        assert!(!yaml.contains("ns_root"));
    }

    #[test]
    fn test_deserialize_folder_by_key_presence() {
        let node: BookmarkNode = serde_yaml::from_str("folder: Work\ntitle: ignored\n").unwrap();
        assert_eq!(node, BookmarkNode::Folder(Folder::new("Work", vec![])));
    }

    #[test]
    fn test_deserialize_link_ignores_unknown_keys() {
        let node: BookmarkNode = serde_yaml::from_str("title: Home\nadd_date: 12345\n").unwrap();
        assert_eq!(node, BookmarkNode::Link(Link::new("Home")));
    }

    #[test]
    fn test_deserialize_unquoted_scalar_title() {
        let node: BookmarkNode = serde_yaml::from_str("title: 2024\n").unwrap();
        assert_eq!(node.title(), "2024");
    }

    #[test]
    fn test_deserialize_unknown_ns_root_is_none() {
        let node: BookmarkNode = serde_yaml::from_str("folder: Mobile\nns_root: mobile\n").unwrap();
        assert_eq!(node.ns_root(), None);
    }

    #[test]
    fn test_deserialize_null_ns_root() {
        let node: BookmarkNode = serde_yaml::from_str("folder: Plain\nns_root: null\nbookmarks: []\n").unwrap();
        assert_eq!(node, BookmarkNode::Folder(Folder::new("Plain", vec![])));
    }

    #[test]
    fn test_roundtrip_nested_forest() {
        let forest = sample_forest();
        let yaml = serde_yaml::to_string(&forest).unwrap();
        let back: Forest = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(back, forest);
    }
}
