mod checks;
mod commands;
mod core;
mod release;

use clap::{Parser, Subcommand};
use crate::core::error::{ReleaseError, print_error};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Prepare releases: validate artifact configuration, manage the version number
#[derive(Parser)]
#[command(name = "relprep")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  /// Enable debug logging (overridden by RUST_LOG)
  #[arg(long, global = true)]
  debug: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Write a sample release configuration to release/config.json
  Init,

  /// Show whether the project is ready to release
  Status {
    /// List targets, files, templates and every problem found
    #[arg(short, long)]
    verbose: bool,
    /// Output status in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Increment the version number (exactly one level is required)
  Bump {
    /// Bump the major version and reset minor and patch
    #[arg(short = 'M', long)]
    major: bool,
    /// Bump the minor version and reset patch
    #[arg(short, long)]
    minor: bool,
    /// Bump the patch version
    #[arg(short, long)]
    patch: bool,
    /// Commit the updated version file
    #[arg(long)]
    commit: bool,
  },

  /// Tag HEAD with the current version once the release is ready
  Tag,
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

fn init_logging(debug: bool) {
  let default = if debug { "relprep=debug" } else { "relprep=warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

  tracing_subscriber::registry()
    .with(filter)
    .with(
      tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr),
    )
    .init();
}

fn main() {
  let cli = Cli::parse();
  init_logging(cli.debug);

  let root = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => handle_error(ReleaseError::from(e).context("Failed to get current directory")),
  };

  let result = match cli.command {
    Commands::Init => commands::run_init(&root),
    Commands::Status { verbose, json } => commands::run_status(&root, verbose, json),
    Commands::Bump {
      major,
      minor,
      patch,
      commit,
    } => commands::run_bump(&root, major, minor, patch, commit),
    Commands::Tag => commands::run_tag(&root),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: ReleaseError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
