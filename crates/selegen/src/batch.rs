//! Batch translation of a script tree.
//!
//! Scripts are discovered up front, translated in parallel and each result
//! is folded into a [`BatchSummary`]. A failing script only fails itself.

use anyhow::Context;
use rayon::prelude::*;
use selegen_core::ir::{SCRIPT_EXTENSION, SCRIPT_PREFIX};
use selegen_core::{Script, Translator};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Where scripts are read from and classes written to.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub dry_run: bool,
    pub fail_fast: bool,
}

/// A script that produced no class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Script path relative to the input root.
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub generated: usize,
    /// Distinct packages holding at least one generated class; the default
    /// package is the empty string.
    pub suites: BTreeSet<String>,
    pub warnings: usize,
    pub failures: Vec<Failure>,
}

impl BatchSummary {
    fn failed(path: &Path, error: String) -> Self {
        Self {
            failures: vec![Failure {
                path: path.to_path_buf(),
                error,
            }],
            ..Default::default()
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.generated += other.generated;
        self.suites.extend(other.suites);
        self.warnings += other.warnings;
        self.failures.extend(other.failures);
        self
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// `Done : N tests generated, M tests suites generated`
    pub fn report(&self) -> String {
        format!(
            "Done : {} tests generated, {} tests suites generated",
            self.generated,
            self.suites.len()
        )
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn is_script(entry: &DirEntry) -> bool {
    if !entry.file_type().is_file() {
        return false;
    }
    let path = entry.path();
    let name = entry.file_name().to_string_lossy();
    name.starts_with(SCRIPT_PREFIX)
        && path.extension().and_then(|e| e.to_str()) == Some(SCRIPT_EXTENSION)
}

/// Find every script below `root`, as sorted paths relative to it. Hidden
/// directories are skipped.
pub fn discover(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut scripts = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));
    for entry in walker {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        if is_script(&entry) {
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            scripts.push(relative.to_path_buf());
        }
    }
    Ok(scripts)
}

/// Translate every script below `options.input`.
pub fn run(translator: &Translator, options: &BatchOptions) -> anyhow::Result<BatchSummary> {
    if !options.input.is_dir() {
        anyhow::bail!("{} is not a directory", options.input.display());
    }
    let scripts = discover(&options.input)?;
    tracing::info!(count = scripts.len(), root = %options.input.display(), "found scripts");

    if options.fail_fast {
        let mut summary = BatchSummary::default();
        for path in &scripts {
            summary = summary.merge(process(translator, options, path));
            if !summary.is_success() {
                break;
            }
        }
        return Ok(summary);
    }

    Ok(scripts
        .par_iter()
        .map(|path| process(translator, options, path))
        .reduce(BatchSummary::default, BatchSummary::merge))
}

fn process(translator: &Translator, options: &BatchOptions, path: &Path) -> BatchSummary {
    match generate(translator, options, path) {
        Ok(summary) => summary,
        Err(e) => {
            let error = format!("{e:#}");
            tracing::error!(script = %path.display(), "{error}");
            BatchSummary::failed(path, error)
        }
    }
}

fn generate(
    translator: &Translator,
    options: &BatchOptions,
    path: &Path,
) -> anyhow::Result<BatchSummary> {
    let source_path = options.input.join(path);
    let source = std::fs::read_to_string(&source_path)
        .with_context(|| format!("failed to read {}", source_path.display()))?;

    let script = Script::new(path, source);
    let unit = translator.translate(&script)?;

    let target = options.output.join(unit.relative_output_path(&script));
    if options.dry_run {
        tracing::info!(file = %target.display(), "would write");
    } else {
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(&target, &unit.source)
            .with_context(|| format!("failed to write {}", target.display()))?;
        tracing::info!(file = %target.display(), "writing file");
    }

    Ok(BatchSummary {
        generated: 1,
        suites: BTreeSet::from([unit.package.unwrap_or_default()]),
        warnings: unit.diagnostics.len(),
        failures: Vec::new(),
    })
}
