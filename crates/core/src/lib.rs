pub mod bookmark;
pub mod convert;
pub mod error;
pub mod extract;
pub mod files;
pub mod formatters;
pub mod normalize;
pub mod parse;

pub use bookmark::{BookmarkNode, Folder, Forest, Link, NsRoot, count_folders, count_links};
pub use convert::{ConvertConfig, ConvertConfigBuilder, Converter, html_to_yaml, yaml_to_html};
pub use error::{Result, YambookError};
pub use extract::{ExtractConfig, extract_bookmarks, parse_level, push_sibling};
pub use files::{read_stdin, read_text, write_text};
pub use formatters::{GenerateConfig, NetscapeFormatter, YamlFormatter};
pub use formatters::{from_documents, from_yaml, generate, to_documents, to_yaml};
pub use normalize::normalize;
pub use parse::{Document, Element, MarkupNode};
