//! Read-only listing of the sudo plugins reported by `sudo -V`.

use serde::Serialize;

use crate::commit::CommandRunner;
use crate::config::CommandSpec;

/// One `name: path` pair from the `Plugins:` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plugin {
    pub name: String,
    pub path: String,
}

impl Plugin {
    fn new(name: &str, path: &str) -> Self {
        Plugin {
            name: name.to_string(),
            path: path.to_string(),
        }
    }
}

/// Run the plugin-listing command and scrape its output.
///
/// Never fails: a command that cannot run yields a single `Error` entry with
/// the message, and output without plugins yields `None detected`.
pub fn list_plugins<R: CommandRunner>(runner: &R, spec: &CommandSpec) -> Vec<Plugin> {
    let output = match runner.run(&spec.program, &spec.args) {
        Ok(output) if output.success => output,
        Ok(output) => return vec![Plugin::new("Error", &output.diagnostic())],
        Err(e) => return vec![Plugin::new("Error", &e.to_string())],
    };
    // sudo -V prints part of its report on stderr.
    let text = format!("{}\n{}", output.stdout, output.stderr);
    let plugins = scrape_plugins(&text);
    if plugins.is_empty() {
        vec![Plugin::new("None detected", "")]
    } else {
        plugins
    }
}

/// Collect `name : path` lines after `Plugins:` up to `Plugin options`.
pub fn scrape_plugins(text: &str) -> Vec<Plugin> {
    let mut plugins = Vec::new();
    let mut in_section = false;
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("Plugin options") {
            break;
        }
        if in_section && !trimmed.is_empty() {
            if let Some((name, path)) = trimmed.split_once(':') {
                let name = name.trim();
                if !name.is_empty() && !name.contains(char::is_whitespace) {
                    plugins.push(Plugin::new(name, path.trim()));
                }
            }
        }
        if trimmed.starts_with("Plugins:") {
            in_section = true;
        }
    }
    plugins
}
