//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const DEFAULT_STATE: &str = r#"{
  "ANDROID_VERSION": "1.0.0",
  "ANDROID_VERSION_CODE": 5,
  "IOS_VERSION": "1.0.0",
  "IOS_BUILD_NUMBER": 3,
  "RUNTIME_VERSION": "1.0.0"
}
"#;

pub const BUILD_GRADLE: &str = r#"apply plugin: "com.android.application"

android {
    defaultConfig {
        applicationId "com.example.habits"
        versionCode 5
        versionName "1.0.0"
    }
}
"#;

pub const INFO_PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>CFBundleDisplayName</key>
	<string>Habits</string>
	<key>CFBundleShortVersionString</key>
	<string>1.0.0</string>
	<key>CFBundleVersion</key>
	<string>3</string>
</dict>
</plist>
"#;

pub const PBXPROJ: &str = r#"// !$*UTF8*$!
		13B07F941A680F5B00A75B9A /* Debug */ = {
			buildSettings = {
				CURRENT_PROJECT_VERSION = 3;
				MARKETING_VERSION = 1.0.0;
				PRODUCT_NAME = Habits;
			};
		};
		13B07F951A680F5B00A75B9A /* Release */ = {
			buildSettings = {
				CURRENT_PROJECT_VERSION = 3;
				MARKETING_VERSION = 1.0.0;
				PRODUCT_NAME = Habits;
			};
		};
"#;

/// A throwaway React Native checkout with all four version-bearing files
pub struct TestProject {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestProject {
  /// Create a project with the default fixture state
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();

    std::fs::write(path.join("versionInfo.json"), DEFAULT_STATE)?;

    std::fs::create_dir_all(path.join("android/app"))?;
    std::fs::write(path.join("android/app/build.gradle"), BUILD_GRADLE)?;

    std::fs::create_dir_all(path.join("ios/Habits"))?;
    std::fs::write(path.join("ios/Habits/Info.plist"), INFO_PLIST)?;
    std::fs::create_dir_all(path.join("ios/Habits.xcodeproj"))?;
    std::fs::write(path.join("ios/Habits.xcodeproj/project.pbxproj"), PBXPROJ)?;

    Ok(Self { _root: root, path })
  }

  /// Replace the state file content
  pub fn write_state(&self, content: &str) -> Result<()> {
    std::fs::write(self.path.join("versionInfo.json"), content)?;
    Ok(())
  }

  /// Parse the current state file
  pub fn state(&self) -> Result<serde_json::Value> {
    let content = self.read_file("versionInfo.json")?;
    Ok(serde_json::from_str(&content)?)
  }

  /// Read a file relative to the project root
  pub fn read_file(&self, path: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(path))?)
  }

  /// Overwrite a file relative to the project root
  pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
    std::fs::write(self.path.join(path), content)?;
    Ok(())
  }
}

/// Run crossbump, failing the test on a non-zero exit
pub fn run_crossbump(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_crossbump_raw(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "crossbump command failed: crossbump {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run crossbump and hand back the raw output, success or not
pub fn run_crossbump_raw(cwd: &Path, args: &[&str]) -> Result<Output> {
  let crossbump_bin = env!("CARGO_BIN_EXE_crossbump");

  Command::new(crossbump_bin)
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run crossbump")
}
