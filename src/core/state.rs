//! Canonical version state persisted as versionInfo.json
//!
//! The JSON file is the single source of truth for all three version spaces;
//! platform manifests are derived from it, never the other way around. Key
//! order is stable (declaration order) and output is 2-space indented so the
//! file stays reviewable in version control.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{BumpError, BumpResult, ConfigError};

/// File name of the version state record, relative to the project root
pub const STATE_FILE: &str = "versionInfo.json";

/// All platform version identifiers and build counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
pub struct VersionState {
  pub android_version: String,
  pub android_version_code: u32,
  pub ios_version: String,
  pub ios_build_number: u32,
  pub runtime_version: String,
}

impl VersionState {
  /// Load the state record, failing loudly on a missing or malformed file
  pub fn load(path: &Path) -> BumpResult<Self> {
    let content = fs::read_to_string(path).map_err(|e| {
      if e.kind() == io::ErrorKind::NotFound {
        ConfigError::StateNotFound {
          path: path.to_path_buf(),
        }
        .into()
      } else {
        BumpError::Io(e)
      }
    })?;

    let state: VersionState = serde_json::from_str(&content).map_err(|e| ConfigError::StateInvalid {
      path: path.to_path_buf(),
      reason: e.to_string(),
    })?;

    Ok(state)
  }

  /// Render the record as the exact bytes that get persisted
  pub fn to_pretty_json(&self) -> BumpResult<String> {
    let body = serde_json::to_string_pretty(self).map_err(|e| ConfigError::StateInvalid {
      path: Path::new(STATE_FILE).to_path_buf(),
      reason: e.to_string(),
    })?;
    Ok(format!("{}\n", body))
  }
}
