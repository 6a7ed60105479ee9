//! Translation of recorded Selenese HTML test cases into Java test classes.
//!
//! `selegen-core` reads the three-column command tables written by the
//! Selenium IDE recorder and emits one JUnit class per script, driving the
//! Selenium API. It is a pure text-to-text library; walking directories and
//! writing files is left to the `selegen` command line tool.
//!
//! # Architecture
//!
//! ```text
//! Script markup        Steps              Statements           Java source
//! ─────────────    ─────────────    ──────────────────────    ─────────────
//! <tbody>       ─> (command,     ─> commands::lookup      ─┐
//!   <tr>...</tr>    target,          CommandSet (archive) ─┼─> JavaWriter
//! </tbody>          value)           + variant overrides  ─┘   (Variant)
//! (input)          (ir.rs)          (translate.rs)             (output)
//! ```
//!
//! # Example
//!
//! ```
//! use selegen_core::{Script, Translator, output::LEGACY};
//!
//! let script = Script::new(
//!     "login/Test_Login.html",
//!     "<tbody>\n<tr>\n\t<td>open</td>\n\t<td>/portal</td>\n\t<td></td>\n</tr>\n</tbody>",
//! );
//! let unit = Translator::new(&LEGACY).translate(&script).unwrap();
//!
//! assert_eq!(unit.package.as_deref(), Some("login"));
//! assert!(unit.source.contains("selenium.open(\"/portal\");"));
//! ```
//!
//! # Variables
//!
//! Cells may reference variables captured by earlier `store*` steps, either
//! as `${name}` or as `storedVars['name']`. Both are spliced into the Java
//! string literal as concatenations, so a recorded `Hello ${name}!` becomes
//! `"Hello " + name + "!"`.

pub mod archive;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod interpolate;
pub mod ir;
pub mod output;
pub mod registry;
pub mod traits;
pub mod translate;

// Re-exports: IR types
pub use ir::{Diagnostic, EmittedStep, GeneratedUnit, Script, Statement, Step};

// Re-exports: errors, configuration and extension points
pub use config::RuntimeDefaults;
pub use error::TranslateError;
pub use traits::CommandSet;

// Re-exports: translation
pub use archive::{ArchiveProfile, ArchiveSet};
pub use output::{Override, Variant};
pub use registry::{register_variant, variant_for_name, variants};
pub use translate::Translator;
