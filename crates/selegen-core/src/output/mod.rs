//! Output variants and the assembler that renders generated units.
//!
//! Both Java flavours share one assembler. A [`Variant`] only describes what
//! differs between them: imports, base class, hook annotations, how the
//! browser session is opened, and a few command overrides.

pub mod assemble;
pub mod legacy;
#[cfg(feature = "variant-webdriver")]
pub mod webdriver;

pub use assemble::JavaWriter;
pub use legacy::LEGACY;
#[cfg(feature = "variant-webdriver")]
pub use webdriver::WEBDRIVER;

/// Variant-specific change to what a command emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Override {
    /// Hover the step's target before running the command.
    HoverTarget,
    /// Hover the given locator after running the command.
    HoverAfter(&'static str),
}

/// Descriptor of one Java API flavour.
#[derive(Debug)]
pub struct Variant {
    /// Identifier used on the command line and in configuration.
    pub name: &'static str,
    pub description: &'static str,
    pub imports: &'static [&'static str],
    pub superclass: &'static str,
    /// Qualifier in front of hard assertions (`TestCase.` for JUnit 3).
    pub assert_prefix: &'static str,
    pub setup_annotation: Option<&'static str>,
    pub teardown_annotation: Option<&'static str>,
    pub test_annotation: Option<&'static str>,
    /// Last lines of the setup hook. `{url}` is replaced by the base URL
    /// expression.
    pub session: &'static [&'static str],
    pub teardown: &'static [&'static str],
    pub overrides: &'static [(&'static str, Override)],
}

impl Variant {
    pub fn override_for(&self, command: &str) -> Option<Override> {
        self.overrides
            .iter()
            .find(|(name, _)| *name == command)
            .map(|(_, o)| *o)
    }
}
