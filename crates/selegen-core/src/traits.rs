//! Extension points of the translator.

use crate::commands::Operands;
use crate::ir::Statement;

/// A pluggable group of commands translated alongside the built-in table.
///
/// Command sets hold deployment policy (report archival paths and the like)
/// that does not belong in the core dispatch.
///
/// ```ignore
/// struct Screenshots;
///
/// impl CommandSet for Screenshots {
///     fn name(&self) -> &str { "screenshots" }
///     fn commands(&self) -> Vec<&str> { vec!["captureScreen"] }
///     fn emit(&self, ops: &Operands<'_>) -> Option<Vec<Statement>> {
///         (ops.command == "captureScreen").then(|| {
///             vec![Statement::line(format!(
///                 "selenium.captureScreenshot({});",
///                 ops.target.literal()
///             ))]
///         })
///     }
/// }
/// ```
pub trait CommandSet: Send + Sync {
    /// Identifier used in listings and logs.
    fn name(&self) -> &str;

    /// Every command name this set translates.
    fn commands(&self) -> Vec<&str>;

    /// Emit code for the step, or `None` if the command is not in this set.
    fn emit(&self, ops: &Operands<'_>) -> Option<Vec<Statement>>;
}
