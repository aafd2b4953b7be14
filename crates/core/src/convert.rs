//! Main conversion API.
//!
//! The [`Converter`] struct runs either direction of the conversion with a
//! [`ConvertConfig`]; [`html_to_yaml`] and [`yaml_to_html`] do the same with
//! defaults.
//!
//! # Example
//!
//! ```rust
//! use yambook_core::{html_to_yaml, yaml_to_html};
//!
//! let html = r#"<DL><p><DT><A HREF="https://example.com">Example</A></DL><p>"#;
//! let yaml = html_to_yaml(html).unwrap();
//! assert!(yaml.contains("url: https://example.com"));
//!
//! let back = yaml_to_html(&yaml).unwrap();
//! assert!(back.contains(r#"<A HREF="https://example.com">Example</A>"#));
//! ```

use tracing::debug;

use crate::Result;
use crate::bookmark::{BookmarkNode, Forest, count_folders, count_links};
use crate::extract::{ExtractConfig, extract_bookmarks};
use crate::formatters::netscape::{GenerateConfig, generate};
use crate::formatters::yaml::{from_yaml, to_yaml};
use crate::parse::Document;

/// Configuration for both conversion directions.
///
/// # Example
///
/// ```rust
/// use yambook_core::ConvertConfig;
///
/// let config = ConvertConfig::builder()
///     .indent_width(2)
///     .menu_folder_name("Menu")
///     .build();
/// assert_eq!(config.generate.indent_width, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConvertConfig {
    /// Settings for reading bookmark files.
    pub extract: ExtractConfig,

    /// Settings for writing bookmark files.
    pub generate: GenerateConfig,
}

impl ConvertConfig {
    /// Creates a new builder for ConvertConfig.
    pub fn builder() -> ConvertConfigBuilder {
        ConvertConfigBuilder::new()
    }
}

/// Builder for ConvertConfig.
pub struct ConvertConfigBuilder {
    config: ConvertConfig,
}

impl ConvertConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ConvertConfig::default() }
    }

    /// Sets the name of the synthetic menu folder.
    pub fn menu_folder_name(mut self, value: impl Into<String>) -> Self {
        self.config.extract.menu_folder_name = value.into();
        self
    }

    /// Sets the indentation width per nesting level.
    pub fn indent_width(mut self, value: usize) -> Self {
        self.config.generate.indent_width = value;
        self
    }

    /// Sets whether generated files carry the document header.
    pub fn include_template(mut self, value: bool) -> Self {
        self.config.generate.include_template = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> ConvertConfig {
        self.config
    }
}

impl Default for ConvertConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts bookmark files to YAML documents and back.
///
/// # Example
///
/// ```rust
/// use yambook_core::Converter;
///
/// let converter = Converter::new();
/// let forest = converter.html_to_forest("<DL><p><DT><H3>Folder</H3><DL><p></DL><p></DL><p>");
/// assert_eq!(forest.len(), 1);
/// ```
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    /// Creates a converter with default settings.
    pub fn new() -> Self {
        Self { config: ConvertConfig::default() }
    }

    /// Creates a converter with a custom configuration.
    pub fn with_config(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Parses a Netscape bookmark file into a forest.
    pub fn html_to_forest(&self, html: &str) -> Forest {
        let doc = Document::parse(html);
        let forest = extract_bookmarks(&doc, &self.config.extract);

        debug!(
            links = count_links(&forest),
            folders = count_folders(&forest),
            "parsed bookmark file"
        );
        forest
    }

    /// Renders a forest as a Netscape bookmark file.
    pub fn forest_to_html(&self, forest: &[BookmarkNode]) -> String {
        generate(forest, &self.config.generate)
    }

    /// Converts a Netscape bookmark file to a YAML document stream.
    pub fn html_to_yaml(&self, html: &str) -> Result<String> {
        to_yaml(&self.html_to_forest(html))
    }

    /// Converts a YAML document stream to a Netscape bookmark file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::YambookError::MalformedDocument`] if the YAML cannot be parsed.
    pub fn yaml_to_html(&self, yaml: &str) -> Result<String> {
        let forest = from_yaml(yaml)?;

        debug!(
            links = count_links(&forest),
            folders = count_folders(&forest),
            "loaded yaml bookmarks"
        );
        Ok(self.forest_to_html(&forest))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function converting a bookmark file to YAML with defaults.
pub fn html_to_yaml(html: &str) -> Result<String> {
    Converter::new().html_to_yaml(html)
}

/// Convenience function converting YAML to a bookmark file with defaults.
pub fn yaml_to_html(yaml: &str) -> Result<String> {
    Converter::new().yaml_to_html(yaml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::YambookError;

    const FIREFOX_HTML: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks Menu</H1>

<DL><p>
    <DT><A HREF="https://www.mozilla.org/" ADD_DATE="1700000000">Mozilla</A>
    <DT><H3 ADD_DATE="1700000000" PERSONAL_TOOLBAR_FOLDER="true">Bookmarks Toolbar</H3>
    <DL><p>
        <DT><A HREF="https://www.rust-lang.org/">Rust</A>
    </DL><p>
</DL>
"#;

    #[test]
    fn test_builder_defaults() {
        let config = ConvertConfig::builder().build();
        assert_eq!(config.extract.menu_folder_name, "Bookmarks");
        assert_eq!(config.generate.indent_width, 4);
        assert!(config.generate.include_template);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConvertConfig::builder()
            .menu_folder_name("Menu")
            .indent_width(1)
            .include_template(false)
            .build();

        assert_eq!(config.extract.menu_folder_name, "Menu");
        assert_eq!(config.generate.indent_width, 1);
        assert!(!config.generate.include_template);
    }

    #[test]
    fn test_html_to_yaml() {
        let yaml = html_to_yaml(FIREFOX_HTML).unwrap();

        let toolbar = yaml.find("ns_root: toolbar").unwrap();
        let menu = yaml.find("ns_root: menu").unwrap();
        assert!(toolbar < menu);
        assert!(yaml.contains("title: Mozilla"));
        assert!(!yaml.contains("ADD_DATE"));
    }

    #[test]
    fn test_full_roundtrip_is_stable() {
        let converter = Converter::new();
        let forest = converter.html_to_forest(FIREFOX_HTML);

        let html = converter.forest_to_html(&forest);
        assert_eq!(converter.html_to_forest(&html), forest);

        let yaml = converter.html_to_yaml(&html).unwrap();
        assert_eq!(converter.yaml_to_html(&yaml).unwrap(), html);
    }

    #[test]
    fn test_custom_config() {
        let config = ConvertConfig::builder().menu_folder_name("Menu").include_template(false).build();
        let converter = Converter::with_config(config);

        let forest = converter.html_to_forest(FIREFOX_HTML);
        assert_eq!(forest[1].title(), "Menu");

        let html = converter.forest_to_html(&forest);
        assert!(html.starts_with("<DL><p>"));
    }

    #[test]
    fn test_yaml_to_html_malformed() {
        let result = yaml_to_html("title: [oops");
        assert!(matches!(result, Err(YambookError::MalformedDocument(_))));
    }
}
