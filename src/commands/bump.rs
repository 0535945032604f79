//! Top-level bump orchestration
//!
//! One invocation runs: read state → apply transitions → stage the JSON
//! write → stage each affected manifest → flush everything → report. Staging
//! everything before the first write keeps the checkout consistent when a
//! manifest is missing a field: either every file updates or none does.

use std::path::Path;

use crate::core::bump;
use crate::core::error::BumpResult;
use crate::core::intent::Intent;
use crate::core::project::ProjectLayout;
use crate::core::state::VersionState;
use crate::manifests::{self, StagedWrite, gradle, pbxproj, plist};

pub fn run_bump(root: &Path, intent: &Intent, dry_run: bool, json: bool) -> BumpResult<()> {
  let layout = ProjectLayout::new(root);
  let state_path = layout.state_file();

  let mut state = VersionState::load(&state_path)?;
  bump::apply(&mut state, intent)?;

  if intent.is_noop() {
    eprintln!("⚠️  No bump flags given; rewriting {} unchanged", state_path.display());
  }

  let mut writes = Vec::new();
  writes.push(StagedWrite::new(&state_path, state.to_pretty_json()?));

  if !intent.skip_android() {
    writes.push(gradle::update_build_gradle(
      &layout.build_gradle(),
      &state,
      intent.android_build_only(),
    )?);
  }

  if !intent.skip_ios() {
    let build_only = intent.ios_build_only();
    writes.push(pbxproj::update_project_pbxproj(&layout.pbxproj()?, &state, build_only)?);
    writes.push(plist::update_info_plist(&layout.info_plist()?, &state, build_only)?);
  }

  if !dry_run {
    manifests::flush(&writes)?;
  }

  // JSON mode keeps stdout machine-readable for CI
  if json {
    print!("{}", state.to_pretty_json()?);
    return Ok(());
  }

  if dry_run {
    println!("🔍 Dry run; these files would be updated:");
    for write in &writes {
      println!("  {}", write.path.display());
    }
  } else {
    for write in &writes {
      println!("✅ Updated {}", write.path.display());
    }
  }

  println!("{}", format_summary(&state));

  Ok(())
}

/// Short human-readable summary of the resulting state
fn format_summary(state: &VersionState) -> String {
  let mut output = String::from("\n📦 Version state\n");
  output.push_str(&format!(
    "  Android  {} (code {})\n",
    state.android_version, state.android_version_code
  ));
  output.push_str(&format!(
    "  iOS      {} (build {})\n",
    state.ios_version, state.ios_build_number
  ));
  output.push_str(&format!("  Runtime  {}", state.runtime_version));
  output
}
