//! Invocation intent derived from CLI flags
//!
//! One immutable value is constructed per invocation and passed explicitly to
//! everything that needs it. Flags combine: `--all` supersedes the per-platform
//! flags, a full platform bump supersedes that platform's build-only flag, and
//! `--runtime` composes with any of them.

/// The set of operations selected for one invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intent {
  pub all: bool,
  pub android: bool,
  pub android_build: bool,
  pub ios: bool,
  pub ios_build: bool,
  pub runtime: bool,
}

impl Intent {
  /// Android version name and code both bump
  pub fn android_full(&self) -> bool {
    self.all || self.android
  }

  /// Only the Android version code bumps
  pub fn android_build_only(&self) -> bool {
    self.android_build && !self.android_full()
  }

  /// iOS marketing version bumps and the build number resets
  pub fn ios_full(&self) -> bool {
    self.all || self.ios
  }

  /// Only the iOS build number bumps
  pub fn ios_build_only(&self) -> bool {
    self.ios_build && !self.ios_full()
  }

  /// Suppress Android manifest writes when nothing Android-side changed
  pub fn skip_android(&self) -> bool {
    !self.android_full() && !self.android_build
  }

  /// Suppress iOS manifest writes when nothing iOS-side changed
  pub fn skip_ios(&self) -> bool {
    !self.ios_full() && !self.ios_build
  }

  /// No operation selected at all
  pub fn is_noop(&self) -> bool {
    !self.all && !self.android && !self.android_build && !self.ios && !self.ios_build && !self.runtime
  }
}
