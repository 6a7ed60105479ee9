//! Script to generated unit.
//!
//! The [`Translator`] walks the steps of a script in order, dispatches each
//! one to the built-in table or to a registered [`CommandSet`], applies the
//! variant overrides and tracks the stored variables of the unit.

use crate::commands::{self, Operands};
use crate::config::RuntimeDefaults;
use crate::error::TranslateError;
use crate::input;
use crate::ir::{Diagnostic, EmittedStep, GeneratedUnit, Script, Statement, Step};
use crate::output::{JavaWriter, Override, Variant};
use crate::traits::CommandSet;
use std::collections::HashSet;

/// Translation settings shared by every script of a batch.
pub struct Translator {
    variant: &'static Variant,
    defaults: RuntimeDefaults,
    command_sets: Vec<Box<dyn CommandSet>>,
    package_prefix: Option<String>,
}

impl Translator {
    pub fn new(variant: &'static Variant) -> Self {
        Self {
            variant,
            defaults: RuntimeDefaults::default(),
            command_sets: Vec::new(),
            package_prefix: None,
        }
    }

    pub fn with_defaults(mut self, defaults: RuntimeDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Add a set of extra commands, consulted in registration order after the
    /// built-in table.
    pub fn with_command_set(mut self, set: Box<dyn CommandSet>) -> Self {
        self.command_sets.push(set);
        self
    }

    /// Package prepended to the one derived from the script path.
    pub fn with_package_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.package_prefix = (!prefix.is_empty()).then_some(prefix);
        self
    }

    pub fn variant(&self) -> &'static Variant {
        self.variant
    }

    pub fn command_sets(&self) -> &[Box<dyn CommandSet>] {
        &self.command_sets
    }

    /// Translate one script into a complete unit.
    pub fn translate(&self, script: &Script) -> Result<GeneratedUnit, TranslateError> {
        let class_name = script.class_name();
        let mut diagnostics = Vec::new();

        if !input::title_matches(script.source(), &class_name) {
            let message = format!("test name inside the file should be `{class_name}`");
            tracing::warn!(script = %script.path().display(), "{message}");
            diagnostics.push(Diagnostic {
                ordinal: None,
                message,
            });
        }

        let mut scope = UnitScope::default();
        let mut steps = Vec::new();
        for step in input::read_steps(script.source())? {
            if step.is_blank() {
                tracing::debug!(ordinal = step.ordinal, "skipping blank row");
                continue;
            }
            let emitted = self.translate_step(&step, &mut scope)?;
            tracing::debug!(
                ordinal = step.ordinal,
                command = %step.command,
                statements = emitted.statements.len(),
                "translated step"
            );
            steps.push(emitted);
        }
        for diagnostic in &scope.diagnostics {
            tracing::warn!(script = %script.path().display(), "{diagnostic}");
        }
        diagnostics.append(&mut scope.diagnostics);

        let mut unit = GeneratedUnit {
            package: self.package(script),
            class_name,
            method_name: script.method_name(),
            variant: self.variant.name,
            steps,
            diagnostics,
            source: String::new(),
        };
        unit.source = JavaWriter::emit(&unit, self.variant, &self.defaults);
        Ok(unit)
    }

    fn package(&self, script: &Script) -> Option<String> {
        match (&self.package_prefix, script.package()) {
            (Some(prefix), Some(package)) => Some(format!("{prefix}.{package}")),
            (Some(prefix), None) => Some(prefix.clone()),
            (None, package) => package,
        }
    }

    fn translate_step(
        &self,
        step: &Step,
        scope: &mut UnitScope,
    ) -> Result<EmittedStep, TranslateError> {
        let command = step.command.trim();
        let ops = Operands::new(command, &step.target, &step.value);
        scope.check_references(step.ordinal, &ops);

        let mut statements = self.emit(&ops, step)?;
        match self.variant.override_for(command) {
            Some(Override::HoverTarget) => statements.insert(0, hover(&ops.target.literal())),
            Some(Override::HoverAfter(locator)) => statements.push(hover(&format!("\"{locator}\""))),
            None => {}
        }

        Ok(EmittedStep {
            ordinal: step.ordinal,
            command: step.command.clone(),
            target: step.target.clone(),
            value: step.value.clone(),
            statements: statements.into_iter().map(|s| scope.render(s)).collect(),
        })
    }

    fn emit(&self, ops: &Operands<'_>, step: &Step) -> Result<Vec<Statement>, TranslateError> {
        if let Some(handler) = commands::lookup(ops.command) {
            return handler
                .emit(ops, self.variant)
                .map_err(|reason| TranslateError::malformed_step(step.ordinal, reason));
        }
        for set in &self.command_sets {
            if let Some(statements) = set.emit(ops) {
                tracing::trace!(set = set.name(), command = ops.command, "extension command");
                return Ok(statements);
            }
        }
        Err(TranslateError::UnknownCommand {
            command: ops.command.to_string(),
            target: step.target.clone(),
            ordinal: step.ordinal,
        })
    }
}

fn hover(locator: &str) -> Statement {
    Statement::line(format!("selenium.mouseOver({locator});"))
}

/// Stored variables of the unit being translated.
#[derive(Default)]
struct UnitScope {
    declared: HashSet<String>,
    reported: HashSet<String>,
    diagnostics: Vec<Diagnostic>,
}

impl UnitScope {
    /// Record a diagnostic for every reference to a variable that no earlier
    /// step stored. Each name is reported once.
    fn check_references(&mut self, ordinal: usize, ops: &Operands<'_>) {
        for name in ops.target.references().chain(ops.value.references()) {
            if self.declared.contains(name) || !self.reported.insert(name.to_string()) {
                continue;
            }
            self.diagnostics.push(Diagnostic {
                ordinal: Some(ordinal),
                message: format!("`{name}` is used before any step stores it"),
            });
        }
    }

    fn render(&mut self, statement: Statement) -> String {
        match statement {
            Statement::Line(line) => line,
            Statement::Block(lines) => lines.join("\n"),
            Statement::Store { name, expr } => {
                if self.declared.insert(name.clone()) {
                    format!("String {name} = {expr};")
                } else {
                    format!("{name} = {expr};")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::LEGACY;

    fn script(rows: &[(&str, &str, &str)]) -> Script {
        let mut body = String::new();
        for (command, target, value) in rows {
            body.push_str(&format!(
                "<tr>\n\t<td>{command}</td>\n\t<td>{target}</td>\n\t<td>{value}</td>\n</tr>\n"
            ));
        }
        Script::new(
            "Test_Sample.html",
            format!(
                "<html><head><title>Test_Sample</title></head><body>\n<table>\n\
                 <thead><tr><td rowspan=\"1\" colspan=\"3\">Test_Sample</td></tr></thead>\n\
                 <tbody>\n{body}</tbody></table></body></html>\n"
            ),
        )
    }

    #[test]
    fn test_store_declares_once() {
        let unit = Translator::new(&LEGACY)
            .translate(&script(&[
                ("storeText", "id=a", "label"),
                ("storeText", "id=b", "label"),
            ]))
            .unwrap();
        assert_eq!(
            unit.steps[0].statements,
            vec![r#"String label = selenium.getText("id=a");"#]
        );
        assert_eq!(
            unit.steps[1].statements,
            vec![r#"label = selenium.getText("id=b");"#]
        );
        assert!(unit.diagnostics.is_empty());
    }

    #[test]
    fn test_reference_before_store_is_reported_once() {
        let unit = Translator::new(&LEGACY)
            .translate(&script(&[
                ("type", "id=q", "${query}"),
                ("type", "id=r", "${query}"),
                ("store", "x", "known"),
                ("type", "id=s", "${known}"),
            ]))
            .unwrap();
        assert_eq!(unit.diagnostics.len(), 1);
        assert_eq!(unit.diagnostics[0].ordinal, Some(1));
        assert!(unit.diagnostics[0].message.contains("query"));
    }

    #[test]
    fn test_title_mismatch_is_diagnosed() {
        let script = Script::new(
            "Test_Other.html",
            "<title>Test_Sample</title><tbody>\n</tbody>",
        );
        let unit = Translator::new(&LEGACY).translate(&script).unwrap();
        assert_eq!(unit.diagnostics.len(), 1);
        assert_eq!(unit.diagnostics[0].ordinal, None);
        assert!(unit.steps.is_empty());
    }

    #[test]
    fn test_invalid_store_name_is_malformed_step() {
        let err = Translator::new(&LEGACY)
            .translate(&script(&[("open", "/", ""), ("storeText", "id=a", "")]))
            .unwrap_err();
        assert_eq!(err.ordinal(), Some(2));
        assert!(matches!(err, TranslateError::MalformedStep { .. }));
    }

    #[test]
    fn test_package_prefix() {
        let translator = Translator::new(&LEGACY).with_package_prefix("org.exoplatform");
        let nested = Script::new("ks/forum/Test_A.html", "");
        let root = Script::new("Test_A.html", "");
        assert_eq!(
            translator.package(&nested).as_deref(),
            Some("org.exoplatform.ks.forum")
        );
        assert_eq!(translator.package(&root).as_deref(), Some("org.exoplatform"));
        assert_eq!(Translator::new(&LEGACY).package(&root), None);
    }

    #[test]
    fn test_command_set_consulted_after_builtins() {
        struct Shout;
        impl CommandSet for Shout {
            fn name(&self) -> &str {
                "shout"
            }
            fn commands(&self) -> Vec<&str> {
                vec!["shout", "echo"]
            }
            fn emit(&self, ops: &Operands<'_>) -> Option<Vec<Statement>> {
                matches!(ops.command, "shout" | "echo").then(|| {
                    vec![Statement::line(format!(
                        "System.err.println({});",
                        ops.target.literal()
                    ))]
                })
            }
        }

        let unit = Translator::new(&LEGACY)
            .with_command_set(Box::new(Shout))
            .translate(&script(&[("shout", "hi", ""), ("echo", "hi", "")]))
            .unwrap();
        assert_eq!(unit.steps[0].statements, vec![r#"System.err.println("hi");"#]);
        assert_eq!(unit.steps[1].statements, vec![r#"System.out.println("hi");"#]);
    }
}
