//! Tolerant reads and atomic strict writes

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;
use tracing::debug;

use crate::error::{Error, Result};

/// Read a file as UTF-8, dropping malformed byte sequences.
///
/// A damaged input must not abort a run, so invalid sequences are skipped
/// entirely rather than replaced. Only I/O failures are reported.
pub fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let text = decode_lossy(&bytes);
    if text.len() != bytes.len() {
        debug!(path = %path.display(), dropped = bytes.len() - text.len(), "bytes inválidos descartados");
    }
    Ok(text)
}

/// Decode bytes as UTF-8, skipping invalid sequences.
fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                if let Ok(prefix) = std::str::from_utf8(valid) {
                    out.push_str(prefix);
                }
                match err.error_len() {
                    Some(len) => rest = &after[len..],
                    // Truncated sequence at end of input
                    None => break,
                }
            }
        }
    }
    out
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename to prevent partial writes, with an
/// exclusive advisory lock held while the temp file is written. The
/// destination keeps its previous contents until the rename.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Temp file in the same directory, so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

    Ok(())
}
