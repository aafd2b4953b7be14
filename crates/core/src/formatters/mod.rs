pub mod netscape;
pub mod yaml;

pub use netscape::{GenerateConfig, HEADER, NetscapeFormatter, generate};
pub use yaml::{MAX_NESTING, SEPARATOR, YamlFormatter, from_documents, from_yaml, to_documents, to_yaml};
