//! Command line arguments.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Generate Java Selenium tests from recorded Selenese HTML scripts.
///
/// Every `Test_*.html` file below INPUT becomes one Java class; the
/// directory layout is mirrored into OUTPUT and mapped to packages.
#[derive(Parser, Debug)]
#[command(name = "selegen", version, about, long_about)]
pub struct Cli {
    /// Directory holding the recorded scripts
    #[arg(required_unless_present = "list_commands")]
    pub input: Option<PathBuf>,

    /// Directory receiving the generated classes [default: INPUT]
    pub output: Option<PathBuf>,

    /// Output variant (legacy, webdriver)
    #[arg(long)]
    pub variant: Option<String>,

    /// Config file used instead of INPUT/.selegen/config.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Package prepended to the directory-derived package
    #[arg(long, value_name = "PACKAGE")]
    pub package_prefix: Option<String>,

    /// Stop at the first script that fails to translate
    #[arg(long)]
    pub fail_fast: bool,

    /// Translate and report without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Print every supported command with its category and exit
    #[arg(long)]
    pub list_commands: bool,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
