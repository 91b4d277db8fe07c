use std::path::Path;

use eyre::Result;

/// Write `content` to `path`, creating parent directories as needed.
///
/// Existing files are overwritten unconditionally.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
