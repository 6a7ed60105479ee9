//! Renders a translated unit as a complete Java source file.

use super::Variant;
use crate::config::RuntimeDefaults;
use crate::interpolate::escape;
use crate::ir::{EmittedStep, GeneratedUnit};

/// Emits one Java test class.
pub struct JavaWriter<'a> {
    variant: &'a Variant,
    defaults: &'a RuntimeDefaults,
    output: String,
    indent: usize,
}

impl<'a> JavaWriter<'a> {
    pub fn new(variant: &'a Variant, defaults: &'a RuntimeDefaults) -> Self {
        Self {
            variant,
            defaults,
            output: String::new(),
            indent: 0,
        }
    }

    /// Render `unit` (its `source` field is ignored) to Java source.
    pub fn emit(unit: &GeneratedUnit, variant: &Variant, defaults: &RuntimeDefaults) -> String {
        let mut writer = JavaWriter::new(variant, defaults);
        writer.write_unit(unit);
        writer.output
    }

    fn line(&mut self, text: &str) {
        if text.is_empty() {
            self.output.push('\n');
            return;
        }
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn blank(&mut self) {
        self.output.push('\n');
    }

    fn write_unit(&mut self, unit: &GeneratedUnit) {
        if let Some(package) = &unit.package {
            self.line(&format!("package {package};"));
            self.blank();
        }
        for import in self.variant.imports {
            self.line(&format!("import {import};"));
        }
        self.blank();
        self.line(&format!(
            "public class {} extends {} {{",
            unit.class_name, self.variant.superclass
        ));
        self.indent += 1;
        self.write_fields();
        self.blank();
        self.write_set_speed();
        self.blank();
        self.write_set_up();
        self.blank();
        self.write_tear_down();
        self.blank();
        self.write_test(unit);
        self.indent -= 1;
        self.line("}");
    }

    fn write_fields(&mut self) {
        let d = self.defaults;
        self.line(&format!("public String speed = \"{}\";", d.speed));
        self.line(&format!("public String timeout = \"{}\";", d.timeout_ms));
        self.line(&format!("public int timeoutSecInt = {};", d.timeout_secs()));
        self.line(&format!("public String browser = \"{}\";", escape(&d.browser)));
        self.line(&format!("public String host = \"{}\";", escape(&d.host)));
        self.line(&format!("public String hostPort = \"{}\";", d.host_port));
    }

    fn write_set_speed(&mut self) {
        self.line("public void setSpeed() {");
        self.indent += 1;
        self.line("selenium.setSpeed(speed);");
        self.indent -= 1;
        self.line("}");
    }

    fn write_set_up(&mut self) {
        if let Some(annotation) = self.variant.setup_annotation {
            self.line(annotation);
        }
        self.line("public void setUp() throws Exception {");
        self.indent += 1;
        self.line("browser = System.getProperty(\"selenium.browser\", browser);");
        self.line("timeout = System.getProperty(\"selenium.timeout\", timeout);");
        self.line("timeoutSecInt = Integer.parseInt(timeout) / 1000;");
        self.line("speed = System.getProperty(\"selenium.speed\", speed);");
        self.line("host = System.getProperty(\"selenium.host\", host);");
        self.line("hostPort = System.getProperty(\"selenium.host.port\", hostPort);");
        let url = format!(
            "\"http://\" + host + \":\" + hostPort + \"{}\"",
            escape(&self.defaults.context_path)
        );
        for session in self.variant.session {
            self.line(&session.replace("{url}", &url));
        }
        self.indent -= 1;
        self.line("}");
    }

    fn write_tear_down(&mut self) {
        if let Some(annotation) = self.variant.teardown_annotation {
            self.line(annotation);
        }
        self.line("public void tearDown() throws Exception {");
        self.indent += 1;
        for line in self.variant.teardown {
            self.line(line);
        }
        self.indent -= 1;
        self.line("}");
    }

    fn write_test(&mut self, unit: &GeneratedUnit) {
        if let Some(annotation) = self.variant.test_annotation {
            self.line(annotation);
        }
        self.line(&format!("public void {}() throws Exception {{", unit.method_name));
        self.indent += 1;
        self.line("setSpeed();");
        for step in &unit.steps {
            self.write_step(step);
        }
        self.indent -= 1;
        self.line("}");
    }

    fn write_step(&mut self, step: &EmittedStep) {
        self.line(&trace_comment(step));
        for statement in &step.statements {
            for line in statement.lines() {
                self.line(line);
            }
        }
    }
}

/// `// N: command | target | value`, kept on one line.
///
/// Cells are escaped as for a string literal: javac expands `\u` sequences
/// inside comments too, and a doubled backslash cannot start one.
fn trace_comment(step: &EmittedStep) -> String {
    let flat = |s: &str| escape(s).replace("\r\n", " ").replace(['\n', '\r'], " ");
    let comment = format!(
        "// {}: {} | {} | {}",
        step.ordinal,
        flat(&step.command),
        flat(&step.target),
        flat(&step.value)
    );
    comment.trim_end().to_string()
}
