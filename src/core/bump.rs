//! Pure version-state transitions
//!
//! Nothing here performs I/O. Each transition mutates the in-memory record;
//! `apply` runs the ones selected by the intent in a fixed order:
//! Android, then iOS, then runtime.

use crate::core::error::{BumpError, BumpResult};
use crate::core::intent::Intent;
use crate::core::state::VersionState;

/// Bump the patch component of a MAJOR.MINOR.PATCH string
///
/// Decimal integer arithmetic, so "1.0.9" becomes "1.0.10". A string that
/// does not parse as semver is rejected rather than propagated as garbage.
fn bump_patch(field: &'static str, current: &str) -> BumpResult<String> {
  let mut version: semver::Version = current.parse().map_err(|e: semver::Error| BumpError::MalformedVersion {
    field,
    value: current.to_string(),
    reason: e.to_string(),
  })?;

  version.patch += 1;
  Ok(version.to_string())
}

impl VersionState {
  pub fn bump_android_version(&mut self) -> BumpResult<()> {
    self.android_version = bump_patch("ANDROID_VERSION", &self.android_version)?;
    Ok(())
  }

  pub fn bump_android_version_code(&mut self) {
    self.android_version_code += 1;
  }

  pub fn bump_ios_version(&mut self) -> BumpResult<()> {
    self.ios_version = bump_patch("IOS_VERSION", &self.ios_version)?;
    Ok(())
  }

  /// Build numbers restart at 1 whenever the marketing version moves
  pub fn reset_ios_build_number(&mut self) {
    self.ios_build_number = 1;
  }

  pub fn bump_ios_build_number(&mut self) {
    self.ios_build_number += 1;
  }

  pub fn bump_runtime_version(&mut self) -> BumpResult<()> {
    self.runtime_version = bump_patch("RUNTIME_VERSION", &self.runtime_version)?;
    Ok(())
  }
}

/// Apply the operations selected by the intent
pub fn apply(state: &mut VersionState, intent: &Intent) -> BumpResult<()> {
  if intent.android_full() {
    state.bump_android_version()?;
    state.bump_android_version_code();
  } else if intent.android_build {
    state.bump_android_version_code();
  }

  if intent.ios_full() {
    state.bump_ios_version()?;
    state.reset_ios_build_number();
  } else if intent.ios_build {
    state.bump_ios_build_number();
  }

  if intent.runtime {
    state.bump_runtime_version()?;
  }

  Ok(())
}
