//! Intermediate representation shared by the reader, translator and assembler.
//!
//! A [`Script`] is parsed into [`Step`]s, each step is translated into
//! [`Statement`]s, and the assembler turns the rendered statements of every
//! step into one [`GeneratedUnit`].

use std::path::{Component, Path, PathBuf};

/// File name prefix every recorded test case carries.
pub const SCRIPT_PREFIX: &str = "Test_";

/// File extension of recorded test cases.
pub const SCRIPT_EXTENSION: &str = "html";

/// One recorded test case: where it lives and its raw markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    path: PathBuf,
    source: String,
}

impl Script {
    /// `path` is relative to the suite root; it determines the package and
    /// the class name of the generated unit.
    pub fn new(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Class name: the file name up to its first dot.
    pub fn class_name(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match name.find('.') {
            Some(dot) => name[..dot].to_string(),
            None => name,
        }
    }

    /// Test method name: `test` followed by the class name without its prefix.
    pub fn method_name(&self) -> String {
        let class = self.class_name();
        let bare = class.strip_prefix(SCRIPT_PREFIX).unwrap_or(&class);
        format!("test{bare}")
    }

    /// Package derived from the directory path, `None` at the suite root.
    pub fn package(&self) -> Option<String> {
        let parent = self.path.parent()?;
        let parts: Vec<String> = parent
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("."))
        }
    }
}

/// One decoded table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// 1-based position of the row inside the script.
    pub ordinal: usize,
    pub command: String,
    pub target: String,
    pub value: String,
}

impl Step {
    pub fn new(
        ordinal: usize,
        command: impl Into<String>,
        target: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            ordinal,
            command: command.into(),
            target: target.into(),
            value: value.into(),
        }
    }

    /// Rows with an empty command cell produce no code.
    pub fn is_blank(&self) -> bool {
        self.command.trim().is_empty()
    }
}

/// One unit of emitted target code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A single line, terminator included.
    Line(String),
    /// Several lines forming one compound statement (polling loops).
    Block(Vec<String>),
    /// Capture of `expr` into the stored variable `name`.
    Store { name: String, expr: String },
}

impl Statement {
    pub fn line(code: impl Into<String>) -> Self {
        Self::Line(code.into())
    }

    pub fn block<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Block(lines.into_iter().map(Into::into).collect())
    }

    pub fn store(name: impl Into<String>, expr: impl Into<String>) -> Self {
        Self::Store {
            name: name.into(),
            expr: expr.into(),
        }
    }
}

/// Non-fatal finding reported while translating a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub ordinal: Option<usize>,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.ordinal {
            Some(ordinal) => write!(f, "row {ordinal}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// A translated step: its source triple and the rendered code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedStep {
    pub ordinal: usize,
    pub command: String,
    pub target: String,
    pub value: String,
    pub statements: Vec<String>,
}

/// The complete translation unit produced for one script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub package: Option<String>,
    pub class_name: String,
    pub method_name: String,
    pub variant: &'static str,
    pub steps: Vec<EmittedStep>,
    pub diagnostics: Vec<Diagnostic>,
    pub source: String,
}

impl GeneratedUnit {
    /// Number of statements emitted across all steps.
    pub fn statement_count(&self) -> usize {
        self.steps.iter().map(|s| s.statements.len()).sum()
    }

    /// Output path relative to the output root, mirroring the script path.
    pub fn relative_output_path(&self, script: &Script) -> PathBuf {
        let file = format!("{}.java", self.class_name);
        match script.path().parent() {
            Some(parent) => parent.join(file),
            None => PathBuf::from(file),
        }
    }
}
