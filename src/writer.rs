//! Idempotent header output.
//!
//! The header is only rewritten when its contents change, so an unchanged
//! configuration never bumps the file's modification time and never triggers
//! a rebuild of everything that includes it.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Default name of the generated header inside the output directory.
pub const HEADER_FILE_NAME: &str = "AlususDefs.h";

/// What [`write_if_changed`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Existing file already had the same contents; nothing was written.
    Unchanged,
    /// File did not exist and was created.
    Created,
    /// File existed with different contents and was overwritten.
    Updated,
}

impl WriteOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            WriteOutcome::Unchanged => "unchanged",
            WriteOutcome::Created => "created",
            WriteOutcome::Updated => "updated",
        }
    }
}

impl std::fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercase hex SHA-256 of the header text.
pub fn content_digest(contents: &str) -> String {
    hex::encode(Sha256::digest(contents.as_bytes()))
}

/// Writes `contents` to `path` unless the file already holds exactly that text.
///
/// Missing parent directories are created. The existing file is read and
/// closed before any write happens.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<WriteOutcome> {
    tracing::debug!(
        path = %path.display(),
        digest = %content_digest(contents),
        "generated header"
    );

    let existed = match fs::metadata(path) {
        Ok(meta) if meta.is_file() => {
            let old = fs::read(path).map_err(|source| Error::ReadExisting {
                path: path.to_path_buf(),
                source,
            })?;
            if old == contents.as_bytes() {
                tracing::info!(path = %path.display(), "header unchanged, skipping write");
                return Ok(WriteOutcome::Unchanged);
            }
            tracing::debug!(
                path = %path.display(),
                old_digest = %hex::encode(Sha256::digest(&old)),
                "header contents differ"
            );
            true
        }
        Ok(_) => {
            return Err(Error::NotAFile {
                path: path.to_path_buf(),
            });
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => false,
        Err(source) => {
            return Err(Error::ReadExisting {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    let outcome = if existed {
        WriteOutcome::Updated
    } else {
        WriteOutcome::Created
    };
    tracing::info!(path = %path.display(), %outcome, "header written");
    Ok(outcome)
}
