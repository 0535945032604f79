//! iOS Info.plist synchronizer
//!
//! Replaces only the string values of `CFBundleShortVersionString` and
//! `CFBundleVersion`; the surrounding key/string XML structure, whitespace
//! included, is captured and written back unchanged.

use std::path::Path;

use regex::{Captures, Regex};

use crate::core::error::BumpResult;
use crate::core::state::VersionState;
use crate::manifests::{StagedWrite, read_manifest, substitute};

fn value_pattern(key: &str) -> Regex {
  Regex::new(&format!(r"(<key>{key}</key>\s*<string>)[^<]*(</string>)")).expect("plist pattern must compile")
}

pub fn update_info_plist(path: &Path, state: &VersionState, build_only: bool) -> BumpResult<StagedWrite> {
  let mut content = read_manifest(path)?;

  if !build_only {
    let pattern = value_pattern("CFBundleShortVersionString");
    content = substitute(
      path,
      "CFBundleShortVersionString",
      &content,
      &pattern,
      |caps: &Captures| format!("{}{}{}", &caps[1], state.ios_version, &caps[2]),
    )?;
  }

  let pattern = value_pattern("CFBundleVersion");
  content = substitute(path, "CFBundleVersion", &content, &pattern, |caps: &Captures| {
    format!("{}{}{}", &caps[1], state.ios_build_number, &caps[2])
  })?;

  Ok(StagedWrite::new(path, content))
}
