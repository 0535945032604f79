//! Project layout discovery
//!
//! Locates the version-state file and the platform manifests inside a React
//! Native checkout. The Android path is fixed by convention; the iOS app
//! directory name varies per project, so it is discovered by scanning `ios/`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{BumpResult, ConfigError};
use crate::core::state::STATE_FILE;

/// Resolves the files one invocation operates on
#[derive(Debug, Clone)]
pub struct ProjectLayout {
  root: PathBuf,
}

impl ProjectLayout {
  pub fn new(root: &Path) -> Self {
    Self {
      root: root.to_path_buf(),
    }
  }

  pub fn state_file(&self) -> PathBuf {
    self.root.join(STATE_FILE)
  }

  pub fn build_gradle(&self) -> PathBuf {
    self.root.join("android").join("app").join("build.gradle")
  }

  /// `ios/<app>.xcodeproj/project.pbxproj`, whatever the app is called
  pub fn pbxproj(&self) -> BumpResult<PathBuf> {
    let xcodeproj = self.find_in_ios_dir("an .xcodeproj directory", |path| {
      path.is_dir() && path.extension().is_some_and(|ext| ext == "xcodeproj")
    })?;
    Ok(xcodeproj.join("project.pbxproj"))
  }

  /// `ios/<app>/Info.plist`, skipping the .xcodeproj entry
  pub fn info_plist(&self) -> BumpResult<PathBuf> {
    let app_dir = self.find_in_ios_dir("an app directory containing Info.plist", |path| {
      path.is_dir() && path.extension().is_none() && path.join("Info.plist").is_file()
    })?;
    Ok(app_dir.join("Info.plist"))
  }

  fn find_in_ios_dir(&self, looked_for: &str, matches: impl Fn(&Path) -> bool) -> BumpResult<PathBuf> {
    let ios_dir = self.root.join("ios");
    let missing = || ConfigError::LayoutMissing {
      looked_for: looked_for.to_string(),
      searched: ios_dir.clone(),
    };

    let entries = fs::read_dir(&ios_dir).map_err(|_| missing())?;

    let mut found: Vec<PathBuf> = entries
      .flatten()
      .map(|entry| entry.path())
      .filter(|path| matches(path))
      .collect();

    // Deterministic pick when a checkout carries more than one candidate
    found.sort();
    found.into_iter().next().ok_or_else(|| missing().into())
  }
}
