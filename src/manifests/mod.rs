//! Native manifest synchronizers
//!
//! Each synchronizer reads one platform manifest, substitutes the version
//! fields it owns with anchored regex matches, and returns the rewritten
//! contents as a staged write. Nothing touches disk until every file has been
//! staged, so a missing field in any manifest aborts the run before a single
//! byte changes on disk.

pub mod gradle;
pub mod pbxproj;
pub mod plist;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use regex::{Regex, Replacer};

use crate::core::error::{BumpResult, ManifestError};

/// A fully prepared file write, held in memory until flush
#[derive(Debug, Clone)]
pub struct StagedWrite {
  pub path: PathBuf,
  pub contents: String,
}

impl StagedWrite {
  pub fn new(path: &Path, contents: String) -> Self {
    Self {
      path: path.to_path_buf(),
      contents,
    }
  }
}

/// Read a manifest, mapping a missing file to its own error kind
pub(crate) fn read_manifest(path: &Path) -> BumpResult<String> {
  fs::read_to_string(path).map_err(|e| {
    if e.kind() == io::ErrorKind::NotFound {
      ManifestError::Missing {
        path: path.to_path_buf(),
      }
      .into()
    } else {
      e.into()
    }
  })
}

/// Replace every match of `pattern`, failing when the field is absent
///
/// A silent no-op here would desynchronize the manifest from the version
/// state, so zero matches is always an error.
pub(crate) fn substitute<R: Replacer>(
  path: &Path,
  field: &'static str,
  content: &str,
  pattern: &Regex,
  replacement: R,
) -> BumpResult<String> {
  if !pattern.is_match(content) {
    return Err(
      ManifestError::PatternNotFound {
        path: path.to_path_buf(),
        field,
      }
      .into(),
    );
  }

  Ok(pattern.replace_all(content, replacement).into_owned())
}

/// Flush staged writes, each atomically (temp file + rename)
pub fn flush(writes: &[StagedWrite]) -> BumpResult<()> {
  for write in writes {
    flush_one(write)?;
  }
  Ok(())
}

fn flush_one(write: &StagedWrite) -> BumpResult<()> {
  let write_failed = |path: &Path, source: io::Error| ManifestError::WriteFailed {
    path: path.to_path_buf(),
    source,
  };

  let file_name = write
    .path
    .file_name()
    .and_then(|name| name.to_str())
    .ok_or_else(|| write_failed(&write.path, io::Error::new(io::ErrorKind::InvalidInput, "path has no file name")))?;

  // Temp file lives next to the target so the rename stays on one filesystem
  let tmp = write.path.with_file_name(format!(".{file_name}.crossbump-tmp"));

  fs::write(&tmp, &write.contents).map_err(|e| write_failed(&tmp, e))?;
  fs::rename(&tmp, &write.path).map_err(|e| {
    let _ = fs::remove_file(&tmp);
    write_failed(&write.path, e)
  })?;

  Ok(())
}
