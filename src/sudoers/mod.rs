//! The sudoers subset this crate understands: line classification, the
//! Defaults key registry, the `secure_path` codec, and re-serialization.

pub mod meta;
pub mod parse;
pub mod path_list;
pub mod serialize;

pub use meta::{lookup, DefaultsKeyMeta, KeyKind};
pub use parse::{parse, split_default_body, AliasDecl, LoadError, LogicalLine, SourceDocument};
pub use path_list::PathList;
pub use serialize::serialize;

/// The Defaults key whose value is a [`PathList`].
pub const SECURE_PATH: &str = "secure_path";
