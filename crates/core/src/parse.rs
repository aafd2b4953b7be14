//! HTML parsing and tag-tree navigation.
//!
//! The bookmark extractor only needs a handful of operations on a tag tree,
//! collected in the [`MarkupNode`] trait. [`Document`] and [`Element`] implement
//! it on top of `scraper`'s HTML5 tree.
//!
//! # Example
//!
//! ```rust
//! use yambook_core::parse::{Document, MarkupNode};
//!
//! let html = r#"<DL><p><DT><A HREF="https://example.com">Example</A></DL>"#;
//!
//! let doc = Document::parse(html);
//! let list = doc.first_list().unwrap();
//! let item = &list.child_elements()[1];
//! assert_eq!(item.tag_name(), "dt");
//! ```

use scraper::{ElementRef, Html};

/// Read-only view of a markup element, as needed by the bookmark extractor.
///
/// Tag and attribute names are lowercase.
pub trait MarkupNode: Sized {
    /// Lowercase tag name (e.g. `"dl"`, `"a"`).
    fn tag_name(&self) -> &str;

    /// Attribute value by name.
    fn attr(&self, name: &str) -> Option<&str>;

    /// Immediate child elements in document order. Text and comments are skipped.
    fn child_elements(&self) -> Vec<Self>;

    /// Concatenated text of all descendant text nodes.
    fn text(&self) -> String;

    /// The next element among this element's following siblings.
    fn next_sibling_element(&self) -> Option<Self>;

    /// First descendant element with the given tag name, in document order.
    fn find_descendant(&self, tag: &str) -> Option<Self>;

    /// Text of the first comment that is an immediate child.
    fn first_comment(&self) -> Option<String>;
}

/// Represents a parsed HTML document.
///
/// # Example
///
/// ```rust
/// use yambook_core::parse::Document;
///
/// let html = "<html><head><title>Bookmarks</title></head><body><dl></dl></body></html>";
/// let doc = Document::parse(html);
/// assert_eq!(doc.title(), Some("Bookmarks".to_string()));
/// ```
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// HTML5 parsing never fails; malformed markup is repaired the way a browser
    /// repairs it. Implied end tags (`<DT>`, `<p>`) are closed by the parser.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// The document's root element.
    pub fn root(&self) -> Element<'_> {
        Element { element: self.html.root_element() }
    }

    /// The first `<DL>` list container of the document, if any.
    pub fn first_list(&self) -> Option<Element<'_>> {
        self.root().find_descendant("dl")
    }

    /// Gets the title of the document.
    ///
    /// Returns the content of the `<title>` element if present.
    pub fn title(&self) -> Option<String> {
        self.root().find_descendant("title").map(|el| el.text())
    }
}

/// A wrapper around scraper's ElementRef.
///
/// # Example
///
/// ```rust
/// use yambook_core::parse::{Document, MarkupNode};
///
/// let html = r#"<a href="https://example.com" ICON="data:,">Link text</a>"#;
/// let doc = Document::parse(html);
/// let link = doc.root().find_descendant("a").unwrap();
///
/// assert_eq!(link.text(), "Link text");
/// assert_eq!(link.attr("icon"), Some("data:,"));
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl MarkupNode for Element<'_> {
    fn tag_name(&self) -> &str {
        self.element.value().name()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(&name.to_ascii_lowercase())
    }

    fn child_elements(&self) -> Vec<Self> {
        self.element
            .children()
            .filter_map(ElementRef::wrap)
            .map(|element| Element { element })
            .collect()
    }

    fn text(&self) -> String {
        self.element.text().collect()
    }

    fn next_sibling_element(&self) -> Option<Self> {
        self.element
            .next_siblings()
            .find_map(ElementRef::wrap)
            .map(|element| Element { element })
    }

    fn find_descendant(&self, tag: &str) -> Option<Self> {
        self.element
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == tag)
            .map(|element| Element { element })
    }

    fn first_comment(&self) -> Option<String> {
        self.element
            .children()
            .find_map(|node| node.value().as_comment().map(|comment| String::from(&**comment)))
    }
}
