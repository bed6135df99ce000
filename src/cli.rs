use std::path::PathBuf;

use clap::Parser;

use aidd::template::TEMPLATE_ROOT_ENV;

/// AI Driven Development - clone the agent orchestration template into a project
///
/// Copies the bundled ai/ folder into the target directory. Existing
/// files are left untouched unless --force is given.
#[derive(Parser, Debug)]
#[command(name = "aidd")]
#[command(about, long_about = None, version)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Target directory to clone the ai/ folder into
    #[arg(value_name = "TARGET_DIRECTORY", default_value = ".")]
    pub target_directory: PathBuf,

    /// Overwrite existing files
    #[arg(short, long)]
    pub force: bool,

    /// Show what would be copied without copying
    #[arg(short, long)]
    pub dry_run: bool,

    /// Provide detailed output
    #[arg(short, long)]
    pub verbose: bool,

    /// Create .cursor symlink for Cursor editor integration
    #[arg(short, long)]
    pub cursor: bool,

    /// Override the bundled template location (packaging and tests)
    #[arg(long, value_name = "PATH", env = TEMPLATE_ROOT_ENV, hide = true)]
    pub template_root: Option<PathBuf>,
}
