//! Line classifier for sudoers text.
//!
//! Only two statement shapes are understood: `Defaults <body>` and
//! `<Kind>_Alias <Name> = <Definition>`. Everything else is kept verbatim as
//! passthrough so rule lines survive an edit untouched.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::AliasKind;

/// Errors that can occur when reading a sudoers file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("sudoers file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One classified line of the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicalLine {
    /// Text after the `Defaults` keyword, not yet split into key and value.
    Default { raw_body: String },
    Alias {
        kind: AliasKind,
        name: String,
        definition: String,
    },
    /// Comment, blank, or opaque rule line, exactly as it appeared.
    Passthrough { text: String },
}

/// Full source text plus its classified lines in original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    text: String,
    lines: Vec<LogicalLine>,
}

/// A parsed alias declaration borrowed from a [`SourceDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasDecl<'a> {
    pub kind: AliasKind,
    pub name: &'a str,
    pub definition: &'a str,
}

impl SourceDocument {
    /// Read and classify a sudoers file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound(path.to_path_buf())
            } else {
                LoadError::Read {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        Ok(parse(&text))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> &[LogicalLine] {
        &self.lines
    }

    /// Defaults bodies in source order.
    pub fn defaults(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|l| match l {
                LogicalLine::Default { raw_body } => Some(raw_body.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Alias declarations in source order.
    pub fn aliases(&self) -> Vec<AliasDecl<'_>> {
        self.lines
            .iter()
            .filter_map(|l| match l {
                LogicalLine::Alias {
                    kind,
                    name,
                    definition,
                } => Some(AliasDecl {
                    kind: *kind,
                    name,
                    definition,
                }),
                _ => None,
            })
            .collect()
    }

    /// Passthrough lines in source order.
    pub fn passthrough(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|l| match l {
                LogicalLine::Passthrough { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Re-serialize without edits.
    ///
    /// Alias lines come out as `<Name> = <Definition>`: the bare name does not
    /// carry the `<Kind>_Alias` keyword. Callers that need a loadable file
    /// must serialize through an edit state, whose identity column keeps the
    /// keyword (see [`crate::edit::EditState::render`]).
    pub fn render(&self) -> String {
        let defaults: Vec<(&str, &str)> = self
            .defaults()
            .into_iter()
            .map(split_default_body)
            .collect();
        let aliases: Vec<(&str, &str)> = self
            .aliases()
            .into_iter()
            .map(|a| (a.name, a.definition))
            .collect();
        super::serialize::serialize(&defaults, &aliases, &self.passthrough())
    }
}

/// Classify every line of `text` into defaults, aliases, and passthrough.
///
/// Never fails: anything that is not a recognized Defaults or Alias statement
/// becomes passthrough.
pub fn parse(text: &str) -> SourceDocument {
    let lines = text.lines().map(classify).collect();
    SourceDocument {
        text: text.to_string(),
        lines,
    }
}

/// Split a Defaults body on its first `=` into trimmed key and value.
///
/// A bare flag (`env_reset`, `!lecture`) has an empty value.
pub fn split_default_body(body: &str) -> (&str, &str) {
    match body.split_once('=') {
        Some((key, value)) => (key.trim(), value.trim()),
        None => (body.trim(), ""),
    }
}

fn classify(line: &str) -> LogicalLine {
    let stripped = line.trim();
    if stripped.is_empty() || stripped.starts_with('#') {
        return passthrough(line);
    }
    if let Some(raw_body) = match_defaults(stripped) {
        return LogicalLine::Default {
            raw_body: raw_body.to_string(),
        };
    }
    if let Some((kind, name, definition)) = match_alias(stripped) {
        return LogicalLine::Alias {
            kind,
            name: name.to_string(),
            definition: definition.to_string(),
        };
    }
    passthrough(line)
}

fn passthrough(line: &str) -> LogicalLine {
    LogicalLine::Passthrough {
        text: line.to_string(),
    }
}

/// `Defaults` followed by at least one whitespace character.
///
/// `Defaults:user`, `Defaults@host` and friends are scoped defaults and stay
/// passthrough.
static RE_DEFAULTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Defaults\s+(.*)").unwrap());

/// `<Kind>_Alias <Name> = <Definition>` with a word-character name.
static RE_ALIAS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(User|Runas|Host|Cmnd)_Alias\s+(\w+)\s*=\s*(.*)").unwrap()
});

fn match_defaults(line: &str) -> Option<&str> {
    let caps = RE_DEFAULTS.captures(line)?;
    Some(caps.get(1)?.as_str())
}

fn match_alias(line: &str) -> Option<(AliasKind, &str, &str)> {
    let caps = RE_ALIAS.captures(line)?;
    let kind = AliasKind::from_name(caps.get(1)?.as_str())?;
    Some((kind, caps.get(2)?.as_str(), caps.get(3)?.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "Defaults env_reset\n\
                          Defaults timestamp_timeout=15\n\
                          User_Alias ADMINS = alice,bob\n\
                          # a comment\n";

    #[test]
    fn parse_sample_into_buckets() {
        let doc = parse(SAMPLE);
        assert_eq!(doc.defaults(), vec!["env_reset", "timestamp_timeout=15"]);
        assert_eq!(
            doc.aliases(),
            vec![AliasDecl {
                kind: AliasKind::User,
                name: "ADMINS",
                definition: "alice,bob",
            }]
        );
        assert_eq!(doc.passthrough(), vec!["# a comment"]);
    }

    #[test]
    fn render_sample_drops_alias_keyword() {
        assert_eq!(
            parse(SAMPLE).render(),
            "Defaults env_reset\nDefaults timestamp_timeout=15\nADMINS = alice,bob\n# a comment\n"
        );
    }

    #[test]
    fn passthrough_only_text_round_trips() {
        let text = "# sudoers\n\nroot ALL=(ALL:ALL) ALL\n%sudo   ALL=(ALL:ALL) ALL\n\n#includedir /etc/sudoers.d\n";
        assert_eq!(parse(text).render(), text);
    }

    #[test]
    fn passthrough_keeps_leading_whitespace() {
        let doc = parse("   # indented comment\n\t\n");
        assert_eq!(doc.passthrough(), vec!["   # indented comment", "\t"]);
    }

    #[test]
    fn every_line_lands_in_exactly_one_bucket() {
        let text = "Defaults env_reset\n\
                    # c\n\
                    Cmnd_Alias SHUTDOWN = /sbin/halt, /sbin/reboot\n\
                    \n\
                    root ALL=(ALL) ALL\n\
                    Defaults:alice !lecture\n\
                    Host_Alias SERVERS = db1, db2\n";
        let doc = parse(text);
        let total = doc.defaults().len() + doc.aliases().len() + doc.passthrough().len();
        assert_eq!(total, text.lines().count());
        assert_eq!(doc.lines().len(), text.lines().count());
    }

    #[test]
    fn scoped_defaults_are_passthrough() {
        let doc = parse("Defaults:alice !lecture\nDefaults@host env_reset\n");
        assert!(doc.defaults().is_empty());
        assert_eq!(doc.passthrough().len(), 2);
    }

    #[test]
    fn defaults_without_body_is_passthrough() {
        let doc = parse("Defaults\nDefaults   \n");
        assert!(doc.defaults().is_empty());
        assert_eq!(doc.passthrough(), vec!["Defaults", "Defaults   "]);
    }

    #[test]
    fn defaults_body_is_kept_whole() {
        let doc = parse("Defaults  secure_path=\"/usr/bin:/bin\"\n");
        assert_eq!(doc.defaults(), vec!["secure_path=\"/usr/bin:/bin\""]);
    }

    #[test]
    fn indented_defaults_are_recognized() {
        let doc = parse("   Defaults use_pty\n");
        assert_eq!(doc.defaults(), vec!["use_pty"]);
    }

    #[test]
    fn alias_without_spaces_around_equals() {
        let doc = parse("Runas_Alias OP=root,operator\n");
        let alias = doc.aliases()[0];
        assert_eq!(alias.kind, AliasKind::Runas);
        assert_eq!(alias.name, "OP");
        assert_eq!(alias.definition, "root,operator");
    }

    #[test]
    fn unknown_alias_kind_is_passthrough() {
        let doc = parse("Group_Alias WHEEL = alice\n");
        assert!(doc.aliases().is_empty());
        assert_eq!(doc.passthrough(), vec!["Group_Alias WHEEL = alice"]);
    }

    #[test]
    fn alias_needs_a_name_and_whitespace_after_keyword() {
        let doc = parse("User_Alias = alice\nUser_AliasADMINS = alice\n");
        assert!(doc.aliases().is_empty());
        assert_eq!(doc.passthrough().len(), 2);
    }

    #[test]
    fn alias_without_equals_is_passthrough() {
        let doc = parse("User_Alias ADMINS alice\n");
        assert!(doc.aliases().is_empty());
    }

    #[test]
    fn split_default_body_handles_flag_and_pair() {
        assert_eq!(split_default_body("env_reset"), ("env_reset", ""));
        assert_eq!(
            split_default_body("timestamp_timeout = 15"),
            ("timestamp_timeout", "15")
        );
        assert_eq!(split_default_body("a=b=c"), ("a", "b=c"));
    }

    #[test]
    fn load_missing_file_returns_not_found() {
        let result = SourceDocument::load(Path::new("/tmp/does-not-exist-sudoers-12345"));
        assert!(matches!(result.unwrap_err(), LoadError::NotFound(_)));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut tmpfile = NamedTempFile::new().unwrap();
        write!(tmpfile, "{SAMPLE}").unwrap();
        let doc = SourceDocument::load(tmpfile.path()).unwrap();
        assert_eq!(doc.text(), SAMPLE);
        assert_eq!(doc.defaults().len(), 2);
    }
}
