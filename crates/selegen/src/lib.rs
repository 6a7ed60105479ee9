//! Command line driver for `selegen-core`.
//!
//! Resolves configuration, builds the [`Translator`] and runs the batch over
//! an input tree.

pub mod batch;
pub mod cli;
pub mod config;

use anyhow::Context;
use selegen_core::commands::builtin_commands;
use selegen_core::{CommandSet, Translator, variant_for_name, variants};
use std::path::Path;
use std::process::ExitCode;

pub use batch::{BatchOptions, BatchSummary};
pub use cli::Cli;
pub use config::SelegenConfig;

/// Build the translator for a resolved configuration and optional flag
/// overrides.
pub fn build_translator(config: &SelegenConfig, cli: &Cli) -> anyhow::Result<Translator> {
    let name = cli.variant.as_deref().unwrap_or(config.variant());
    let variant = variant_for_name(name).with_context(|| {
        let known: Vec<_> = variants().iter().map(|v| v.name).collect();
        format!("unknown variant `{name}` (available: {})", known.join(", "))
    })?;

    let mut translator = Translator::new(variant).with_defaults(config.runtime_defaults());
    if let Some(prefix) = cli
        .package_prefix
        .as_deref()
        .or(config.output.package_prefix.as_deref())
    {
        translator = translator.with_package_prefix(prefix);
    }
    let archive = config.archive_set();
    if !archive.is_empty() {
        translator = translator.with_command_set(Box::new(archive));
    }
    Ok(translator)
}

/// Every command the translator accepts, with its category, one per line.
pub fn command_listing(translator: &Translator) -> String {
    let mut out = String::new();
    for (name, handler) in builtin_commands() {
        out.push_str(&format!("{name:<40} {}\n", handler.category()));
    }
    for set in translator.command_sets() {
        for name in set.commands() {
            out.push_str(&format!("{name:<40} {}\n", set.name()));
        }
    }
    out
}

/// Run the command line tool.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let root = cli.input.as_deref().unwrap_or(Path::new("."));
    let config = SelegenConfig::load(root, cli.config.as_deref())?;
    let translator = build_translator(&config, cli)?;

    if cli.list_commands {
        print!("{}", command_listing(&translator));
        return Ok(ExitCode::SUCCESS);
    }

    let options = BatchOptions {
        input: root.to_path_buf(),
        output: cli.output.clone().unwrap_or_else(|| root.to_path_buf()),
        dry_run: cli.dry_run,
        fail_fast: cli.fail_fast || config.fail_fast(),
    };
    tracing::debug!(variant = translator.variant().name, ?options, "starting batch");

    let summary = batch::run(&translator, &options)?;
    for failure in &summary.failures {
        eprintln!("error: {}: {}", failure.path.display(), failure.error);
    }
    println!("{}", summary.report());

    Ok(if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
