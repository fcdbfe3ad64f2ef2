//! KDL access for the tool config.
//!
//! The config is a flat list of settings, one node each, every entry a
//! quoted string. [`ConfigDocument`] yields those nodes as [`Setting`]s; the
//! `kdl` types stay inside this file.

use std::path::Path;

use super::ConfigError;

pub(super) struct ConfigDocument {
    doc: kdl::KdlDocument,
    source: String,
}

/// One top-level node, e.g. `check "visudo" "-c" "-f" "{staged}"`.
pub(super) struct Setting<'a> {
    node: &'a kdl::KdlNode,
    source: &'a str,
}

impl ConfigDocument {
    pub(super) fn parse(source: &str) -> Result<Self, ConfigError> {
        let doc = source
            .parse::<kdl::KdlDocument>()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Ok(ConfigDocument {
            doc,
            source: source.to_string(),
        })
    }

    /// A missing file is `NotFound`; any other read failure is `ReadError`.
    pub(super) fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ConfigError::NotFound(path.to_path_buf()))
            }
            Err(e) => Err(ConfigError::ReadError(e)),
        }
    }

    pub(super) fn settings(&self) -> impl Iterator<Item = Setting<'_>> {
        self.doc.nodes().iter().map(|node| Setting {
            node,
            source: &self.source,
        })
    }
}

impl<'a> Setting<'a> {
    pub(super) fn name(&self) -> &'a str {
        self.node.name().value()
    }

    pub(super) fn has_children(&self) -> bool {
        self.node.children().is_some()
    }

    /// Entry values in order. Numbers, booleans and `#null` are rejected so
    /// `check "visudo" 42` fails loudly instead of dropping the `42`.
    pub(super) fn strings(&self) -> Result<Vec<&'a str>, ConfigError> {
        self.node
            .entries()
            .iter()
            .map(|entry| {
                entry.value().as_string().ok_or_else(|| {
                    self.error(format!(
                        "'{}' contains non-string values; all entries must be quoted strings",
                        self.name()
                    ))
                })
            })
            .collect()
    }

    /// `ParseError` prefixed with this node's line number.
    pub(super) fn error(&self, message: impl std::fmt::Display) -> ConfigError {
        ConfigError::ParseError(format!("line {}: {message}", self.line()))
    }

    /// 1-based.
    fn line(&self) -> usize {
        let offset = self.node.span().offset().min(self.source.len());
        self.source.as_bytes()[..offset]
            .iter()
            .filter(|&&b| b == b'\n')
            .count()
            + 1
    }
}
