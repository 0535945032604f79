//! Android build.gradle synchronizer
//!
//! The Gradle script is never parsed; only the `versionName "..."` and
//! `versionCode N` declarations are rewritten, anchored to their literal
//! syntax. Everything else in the file is preserved byte for byte.

use std::path::Path;

use regex::{NoExpand, Regex};

use crate::core::error::BumpResult;
use crate::core::state::VersionState;
use crate::manifests::{StagedWrite, read_manifest, substitute};

pub fn update_build_gradle(path: &Path, state: &VersionState, build_only: bool) -> BumpResult<StagedWrite> {
  let mut content = read_manifest(path)?;

  if !build_only {
    let pattern = Regex::new(r#"\bversionName\s+"[^"]*""#).expect("versionName pattern must compile");
    let replacement = format!("versionName \"{}\"", state.android_version);
    content = substitute(path, "versionName", &content, &pattern, NoExpand(&replacement))?;
  }

  let pattern = Regex::new(r"\bversionCode\s+\d+").expect("versionCode pattern must compile");
  let replacement = format!("versionCode {}", state.android_version_code);
  content = substitute(path, "versionCode", &content, &pattern, NoExpand(&replacement))?;

  Ok(StagedWrite::new(path, content))
}
