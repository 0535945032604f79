//! Error types for crossbump with contextual messages and exit codes
//!
//! Every failure mode the tool can hit maps to one of four categories:
//! configuration problems (bad or missing state file, unrecognizable project
//! layout), malformed version strings, manifest synchronization failures
//! (missing file or missing field), and plain I/O errors. Each category
//! carries its own exit code so CI can tell them apart.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for crossbump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (bad state file, invalid versions, missing layout)
  User = 1,
  /// System error (I/O, write failures)
  System = 2,
  /// Validation failure (manifest field not found)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for crossbump
#[derive(Debug)]
pub enum BumpError {
  /// State file or project layout errors
  Config(ConfigError),

  /// Version strings that do not parse as MAJOR.MINOR.PATCH
  MalformedVersion {
    field: &'static str,
    value: String,
    reason: String,
  },

  /// Manifest synchronization errors
  Manifest(ManifestError),

  /// I/O errors
  Io(io::Error),
}

impl BumpError {
  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      BumpError::Config(_) => ExitCode::User,
      BumpError::MalformedVersion { .. } => ExitCode::User,
      BumpError::Manifest(ManifestError::WriteFailed { .. }) => ExitCode::System,
      BumpError::Manifest(_) => ExitCode::Validation,
      BumpError::Io(_) => ExitCode::System,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      BumpError::Config(e) => e.help_message(),
      BumpError::MalformedVersion { field, .. } => Some(format!(
        "Fix {} in versionInfo.json; versions must be MAJOR.MINOR.PATCH, e.g. \"1.4.2\".",
        field
      )),
      BumpError::Manifest(e) => e.help_message(),
      BumpError::Io(_) => None,
    }
  }
}

impl fmt::Display for BumpError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BumpError::Config(e) => write!(f, "{}", e),
      BumpError::MalformedVersion { field, value, reason } => {
        write!(f, "Malformed version in {}: '{}' ({})", field, value, reason)
      }
      BumpError::Manifest(e) => write!(f, "{}", e),
      BumpError::Io(e) => write!(f, "I/O error: {}", e),
    }
  }
}

impl std::error::Error for BumpError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      BumpError::Io(e) => Some(e),
      BumpError::Manifest(ManifestError::WriteFailed { source, .. }) => Some(source),
      _ => None,
    }
  }
}

impl From<io::Error> for BumpError {
  fn from(err: io::Error) -> Self {
    BumpError::Io(err)
  }
}

impl From<ConfigError> for BumpError {
  fn from(err: ConfigError) -> Self {
    BumpError::Config(err)
  }
}

impl From<ManifestError> for BumpError {
  fn from(err: ManifestError) -> Self {
    BumpError::Manifest(err)
  }
}

/// State-file and project-layout errors
#[derive(Debug)]
pub enum ConfigError {
  /// versionInfo.json not found
  StateNotFound { path: PathBuf },

  /// versionInfo.json exists but is not a valid state record
  StateInvalid { path: PathBuf, reason: String },

  /// An expected platform file could not be located
  LayoutMissing { looked_for: String, searched: PathBuf },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::StateNotFound { .. } => Some(
        "Create versionInfo.json at the project root with ANDROID_VERSION, ANDROID_VERSION_CODE, \
         IOS_VERSION, IOS_BUILD_NUMBER, and RUNTIME_VERSION."
          .to_string(),
      ),
      ConfigError::StateInvalid { .. } => Some(
        "versionInfo.json must be a flat JSON object with exactly the five version keys \
         (three strings, two integers)."
          .to_string(),
      ),
      ConfigError::LayoutMissing { looked_for, .. } => Some(format!(
        "Check that this is a React Native checkout; {} is expected to exist.",
        looked_for
      )),
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::StateNotFound { path } => {
        write!(f, "Version state file not found: {}", path.display())
      }
      ConfigError::StateInvalid { path, reason } => {
        write!(f, "Invalid version state in {}: {}", path.display(), reason)
      }
      ConfigError::LayoutMissing { looked_for, searched } => {
        write!(f, "Could not find {} under {}", looked_for, searched.display())
      }
    }
  }
}

/// Manifest synchronization errors
#[derive(Debug)]
pub enum ManifestError {
  /// Manifest file does not exist
  Missing { path: PathBuf },

  /// The anchored field declaration is absent from the manifest
  PatternNotFound { path: PathBuf, field: &'static str },

  /// Filesystem write failure while flushing
  WriteFailed { path: PathBuf, source: io::Error },
}

impl ManifestError {
  fn help_message(&self) -> Option<String> {
    match self {
      ManifestError::Missing { path } => Some(format!(
        "Expected a platform manifest at {}; run from the project root or pass --root.",
        path.display()
      )),
      ManifestError::PatternNotFound { field, .. } => Some(format!(
        "The manifest no longer declares '{}' in the expected form. Restore the declaration \
         so the file stays in sync with versionInfo.json.",
        field
      )),
      ManifestError::WriteFailed { .. } => None,
    }
  }
}

impl fmt::Display for ManifestError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ManifestError::Missing { path } => {
        write!(f, "Manifest file not found: {}", path.display())
      }
      ManifestError::PatternNotFound { path, field } => {
        write!(f, "Manifest field '{}' not found in {}", field, path.display())
      }
      ManifestError::WriteFailed { path, source } => {
        write!(f, "Failed to write {}: {}", path.display(), source)
      }
    }
  }
}

/// Result type alias for crossbump
pub type BumpResult<T> = Result<T, BumpError>;

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &BumpError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
