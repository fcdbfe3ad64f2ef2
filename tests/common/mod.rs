// Shared test helpers for integration tests.
// Used by cli_contract.rs and cli_flows.rs.
#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

pub const SAMPLE: &str = "\
# sudoers sample
Defaults env_reset
Defaults timestamp_timeout=15
Defaults secure_path=\"/usr/sbin:/usr/bin\"
User_Alias ADMINS = alice,bob
root ALL=(ALL:ALL) ALL
ADMINS ALL=(ALL) ALL
";

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_sudoers-safe-edit"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// Runs the binary with the given args and stdin.
/// Returns (stdout, stderr, exit_code).
pub fn run_cli(args: &[&str], stdin_input: &str) -> (String, String, i32) {
    let output = Command::new(binary_path())
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::ErrorKind;
            let write_result = child
                .stdin
                .take()
                .unwrap()
                .write_all(stdin_input.as_bytes());
            if let Err(e) = write_result {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e);
                }
            }
            child.wait_with_output()
        })
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// A temp directory holding a sudoers file, a KDL config, and the staging dir.
pub struct Workspace {
    pub dir: TempDir,
    pub sudoers: PathBuf,
    pub config: PathBuf,
}

impl Workspace {
    /// Workspace whose check authority accepts and whose install copies.
    pub fn new(content: &str) -> Self {
        Self::with_authorities(content, r#""true" "{staged}""#, r#""cp" "{staged}" "{target}""#)
    }

    /// `check` and `install` are KDL entry lists, e.g. `"cp" "{staged}" "{target}"`.
    pub fn with_authorities(content: &str, check: &str, install: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let sudoers = dir.path().join("sudoers");
        std::fs::write(&sudoers, content).expect("failed to write sudoers");
        let staging = dir.path().join("staging");
        std::fs::create_dir(&staging).expect("failed to create staging dir");

        let config = dir.path().join("config.kdl");
        let kdl = format!(
            "sudoers \"{}\"\nstaging-dir \"{}\"\ncheck {check}\ninstall {install}\n",
            sudoers.display(),
            staging.display()
        );
        std::fs::write(&config, kdl).expect("failed to write config");
        Workspace {
            dir,
            sudoers,
            config,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run with `--config` pointing at this workspace.
    pub fn run(&self, args: &[&str], stdin_input: &str) -> (String, String, i32) {
        let config = self.config.to_str().unwrap().to_string();
        let mut full = vec!["--config", &config];
        full.extend_from_slice(args);
        run_cli(&full, stdin_input)
    }

    pub fn read_sudoers(&self) -> String {
        std::fs::read_to_string(&self.sudoers).expect("failed to read sudoers")
    }

    pub fn backups(&self) -> Vec<PathBuf> {
        std::fs::read_dir(self.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("sudoers.bak-"))
            })
            .collect()
    }

    pub fn staging_is_empty(&self) -> bool {
        std::fs::read_dir(self.path().join("staging"))
            .unwrap()
            .next()
            .is_none()
    }
}

pub fn parse_json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim()).expect("stdout should be valid JSON")
}
