//! Xcode project.pbxproj synchronizer
//!
//! Xcode declares `MARKETING_VERSION` and `CURRENT_PROJECT_VERSION` once per
//! build configuration (Debug, Release, ...), so both substitutions are
//! global: every occurrence moves to the same value.

use std::path::Path;

use regex::{NoExpand, Regex};

use crate::core::error::BumpResult;
use crate::core::state::VersionState;
use crate::manifests::{StagedWrite, read_manifest, substitute};

pub fn update_project_pbxproj(path: &Path, state: &VersionState, build_only: bool) -> BumpResult<StagedWrite> {
  let mut content = read_manifest(path)?;

  if !build_only {
    let pattern = Regex::new(r"MARKETING_VERSION = [^;]*;").expect("MARKETING_VERSION pattern must compile");
    let replacement = format!("MARKETING_VERSION = {};", state.ios_version);
    content = substitute(path, "MARKETING_VERSION", &content, &pattern, NoExpand(&replacement))?;
  }

  let pattern = Regex::new(r"CURRENT_PROJECT_VERSION = [^;]*;").expect("CURRENT_PROJECT_VERSION pattern must compile");
  let replacement = format!("CURRENT_PROJECT_VERSION = {};", state.ios_build_number);
  content = substitute(path, "CURRENT_PROJECT_VERSION", &content, &pattern, NoExpand(&replacement))?;

  Ok(StagedWrite::new(path, content))
}
