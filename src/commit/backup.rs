use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Sibling backup path: `<target>.bak-YYYYMMDD-HHMMSS`.
pub fn backup_path(target: &Path, at: DateTime<Local>) -> PathBuf {
    let mut name = target.as_os_str().to_os_string();
    name.push(format!(".bak-{}", at.format("%Y%m%d-%H%M%S")));
    PathBuf::from(name)
}

/// Copy `target` byte-for-byte to a timestamped sibling.
pub(super) fn create(target: &Path) -> std::io::Result<PathBuf> {
    create_at(target, Local::now())
}

/// Fails with `AlreadyExists` rather than overwrite an earlier backup taken
/// in the same second. The copy gets the original's permission bits.
fn create_at(target: &Path, at: DateTime<Local>) -> std::io::Result<PathBuf> {
    let path = backup_path(target, at);
    let mut source = File::open(target)?;
    let mut backup = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)?;
    backup.set_permissions(source.metadata()?.permissions())?;
    std::io::copy(&mut source, &mut backup)?;
    backup.sync_all()?;
    Ok(path)
}
