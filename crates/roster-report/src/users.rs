//! Canonical-user JSON output.

use std::fs;
use std::path::Path;

use roster_model::{CanonicalUser, Result};

/// Serialize `users` to `path` as indented JSON.
///
/// Field order within each object is the canonical {id, name, email,
/// status, tags}. Parent directories are created as needed.
pub fn write_users_json(path: &Path, users: &[CanonicalUser]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut payload = serde_json::to_string_pretty(users)?;
    payload.push('\n');
    fs::write(path, payload)?;
    Ok(())
}
