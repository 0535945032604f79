mod commands;
mod core;
mod manifests;

use std::path::PathBuf;

use clap::Parser;

use crate::core::error::print_error;
use crate::core::intent::Intent;

/// Synchronize app version numbers across platform manifests
#[derive(Parser)]
#[command(name = "crossbump")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// Bump Android and iOS versions together (build counters follow)
  #[arg(long)]
  all: bool,

  /// Bump the Android version name and version code
  #[arg(long)]
  android: bool,

  /// Bump only the Android version code
  #[arg(long)]
  android_build: bool,

  /// Bump the iOS marketing version and reset the build number to 1
  #[arg(long)]
  ios: bool,

  /// Bump only the iOS build number
  #[arg(long)]
  ios_build: bool,

  /// Bump the OTA runtime version
  #[arg(long)]
  runtime: bool,

  /// Project checkout to operate on
  #[arg(long, default_value = ".")]
  root: PathBuf,

  /// Stage and validate everything but write nothing
  #[arg(long)]
  dry_run: bool,

  /// Print the resulting version state as JSON (useful for CI/automation)
  #[arg(long)]
  json: bool,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let intent = Intent {
    all: cli.all,
    android: cli.android,
    android_build: cli.android_build,
    ios: cli.ios,
    ios_build: cli.ios_build,
    runtime: cli.runtime,
  };

  if let Err(error) = commands::run_bump(&cli.root, &intent, cli.dry_run, cli.json) {
    print_error(&error);
    std::process::exit(error.exit_code().as_i32());
  }
}
