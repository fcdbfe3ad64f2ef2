mod document;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use document::{ConfigDocument, Setting};

/// Placeholder replaced by the staged candidate file.
pub const STAGED_PLACEHOLDER: &str = "{staged}";
/// Placeholder replaced by the real sudoers path.
pub const TARGET_PLACEHOLDER: &str = "{target}";

/// Tool configuration loaded from a KDL file.
///
/// Every setting is optional:
///
/// ```kdl
/// sudoers "/etc/sudoers"
/// staging-dir "/tmp"
/// check "sudo" "visudo" "-c" "-f" "{staged}"
/// install "sudo" "install" "-m" "0440" "{staged}" "{target}"
/// plugins "sudo" "-V"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File edited when no `--file` is given.
    pub sudoers: PathBuf,
    /// Directory for staged candidate files.
    pub staging_dir: PathBuf,
    /// Syntax-check authority, run in check-only mode on the staged file.
    pub check: CommandSpec,
    /// Privileged-write authority that installs the staged file.
    pub install: CommandSpec,
    /// Diagnostic command whose output lists the loaded plugins.
    pub plugins: CommandSpec,
}

/// An external command: program plus argument templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

/// Errors that can occur when loading or parsing a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read config: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    ParseError(String),
}

impl CommandSpec {
    pub fn new(program: &str, args: &[&str]) -> Self {
        CommandSpec {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Arguments with `{staged}` and `{target}` substituted.
    pub fn render_args(&self, staged: &Path, target: &Path) -> Vec<String> {
        let staged = staged.to_string_lossy();
        let target = target.to_string_lossy();
        self.args
            .iter()
            .map(|a| {
                a.replace(STAGED_PLACEHOLDER, &staged)
                    .replace(TARGET_PLACEHOLDER, &target)
            })
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sudoers: PathBuf::from("/etc/sudoers"),
            staging_dir: std::env::temp_dir(),
            check: CommandSpec::new("sudo", &["visudo", "-c", "-f", STAGED_PLACEHOLDER]),
            install: CommandSpec::new(
                "sudo",
                &["install", "-m", "0440", STAGED_PLACEHOLDER, TARGET_PLACEHOLDER],
            ),
            plugins: CommandSpec::new("sudo", &["-V"]),
        }
    }
}

impl Config {
    /// Load a config from a KDL file at the given path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_document(&ConfigDocument::load(path)?)
    }

    /// Parse a KDL string into a Config.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Self::from_document(&ConfigDocument::parse(content)?)
    }

    fn from_document(doc: &ConfigDocument) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        let mut seen = HashSet::new();

        for setting in doc.settings() {
            let name = setting.name();
            if setting.has_children() {
                return Err(setting.error(format!("'{name}' does not take a children block")));
            }
            if !seen.insert(name) {
                return Err(setting.error(format!("'{name}' is set more than once")));
            }
            match name {
                "sudoers" => config.sudoers = PathBuf::from(single_value(&setting)?),
                "staging-dir" => config.staging_dir = PathBuf::from(single_value(&setting)?),
                "check" => config.check = command(&setting)?,
                "install" => config.install = command(&setting)?,
                "plugins" => config.plugins = command(&setting)?,
                other => return Err(setting.error(format!("unknown setting '{other}'"))),
            }
        }
        Ok(config)
    }
}

fn single_value(setting: &Setting<'_>) -> Result<String, ConfigError> {
    match setting.strings()?.as_slice() {
        [value] => Ok(value.to_string()),
        _ => Err(setting.error(format!("'{}' takes exactly one value", setting.name()))),
    }
}

fn command(setting: &Setting<'_>) -> Result<CommandSpec, ConfigError> {
    match setting.strings()?.split_first() {
        Some((program, args)) => Ok(CommandSpec::new(program, args)),
        None => Err(setting.error(format!(
            "'{}' requires a program and optional arguments",
            setting.name()
        ))),
    }
}
