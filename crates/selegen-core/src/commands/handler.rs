//! Tagged command handlers and the code shapes they emit.
//!
//! Every handler is a pure function of the step operands and the output
//! variant. Variable scoping and per-variant overrides are applied by the
//! translator on top of what is emitted here.

use crate::interpolate::Field;
use crate::ir::Statement;
use crate::output::Variant;

/// Interval between two polls of a wait loop, in milliseconds.
pub const WAIT_INTERVAL_MS: u32 = 1000;

/// Coordinates passed to positional (`…At`) commands.
pub const DEFAULT_COORDINATES: &str = "1,1";

/// Interpolated cells of one step, plus the raw text where names are needed.
#[derive(Debug, Clone)]
pub struct Operands<'a> {
    pub command: &'a str,
    pub raw_target: &'a str,
    pub raw_value: &'a str,
    pub target: Field,
    pub value: Field,
}

impl<'a> Operands<'a> {
    pub fn new(command: &'a str, raw_target: &'a str, raw_value: &'a str) -> Self {
        Self {
            command,
            raw_target,
            raw_value,
            target: crate::interpolate::interpolate(raw_target),
            value: crate::interpolate::interpolate(raw_value),
        }
    }
}

/// Which cells an action passes to the API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    None,
    Target,
    TargetValue,
    /// Target plus the fixed default coordinates.
    TargetAt,
}

impl Arity {
    fn args(self, ops: &Operands<'_>) -> Vec<String> {
        match self {
            Arity::None => Vec::new(),
            Arity::Target => vec![ops.target.literal()],
            Arity::TargetValue => vec![ops.target.literal(), ops.value.literal()],
            Arity::TargetAt => vec![
                ops.target.literal(),
                format!("\"{DEFAULT_COORDINATES}\""),
            ],
        }
    }

    /// Arguments as they appear inside a JavaScript call embedded in a
    /// Java literal.
    fn script_args(self, ops: &Operands<'_>) -> Vec<String> {
        let quote = |f: &Field| format!("\\\"{}\\\"", f.inner());
        match self {
            Arity::None => Vec::new(),
            Arity::Target => vec![quote(&ops.target)],
            Arity::TargetValue => vec![quote(&ops.target), quote(&ops.value)],
            Arity::TargetAt => vec![
                quote(&ops.target),
                format!("\\\"{DEFAULT_COORDINATES}\\\""),
            ],
        }
    }
}

/// What a query reads from the browser session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    ElementPresent,
    TextPresent,
    Visible,
    Checked,
    ConfirmationPresent,
    Ordered,
    Alert,
    Confirmation,
    Location,
    Title,
    Text,
    Value,
    SelectedValue,
    SelectedLabel,
    Attribute,
    Eval,
    Table,
    XpathCount,
    ElementPositionTop,
    /// The target cell itself.
    Literal,
}

/// Which cells a query consumes as arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    None,
    Target,
    TargetValue,
}

impl Query {
    fn method(self) -> &'static str {
        match self {
            Query::ElementPresent => "isElementPresent",
            Query::TextPresent => "isTextPresent",
            Query::Visible => "isVisible",
            Query::Checked => "isChecked",
            Query::ConfirmationPresent => "isConfirmationPresent",
            Query::Ordered => "isOrdered",
            Query::Alert => "getAlert",
            Query::Confirmation => "getConfirmation",
            Query::Location => "getLocation",
            Query::Title => "getTitle",
            Query::Text => "getText",
            Query::Value => "getValue",
            Query::SelectedValue => "getSelectedValue",
            Query::SelectedLabel => "getSelectedLabel",
            Query::Attribute => "getAttribute",
            Query::Eval => "getEval",
            Query::Table => "getTable",
            Query::XpathCount => "getXpathCount",
            Query::ElementPositionTop => "getElementPositionTop",
            Query::Literal => "",
        }
    }

    pub fn input(self) -> Input {
        match self {
            Query::ConfirmationPresent
            | Query::Alert
            | Query::Confirmation
            | Query::Location
            | Query::Title => Input::None,
            Query::Ordered => Input::TargetValue,
            _ => Input::Target,
        }
    }

    pub fn is_boolean(self) -> bool {
        matches!(
            self,
            Query::ElementPresent
                | Query::TextPresent
                | Query::Visible
                | Query::Checked
                | Query::ConfirmationPresent
                | Query::Ordered
        )
    }

    /// Java expression evaluating the query; non-boolean queries yield a
    /// `String`.
    pub fn expr(self, ops: &Operands<'_>) -> String {
        if self == Query::Literal {
            return ops.target.literal();
        }
        let args = match self.input() {
            Input::None => String::new(),
            Input::Target => ops.target.literal(),
            Input::TargetValue => format!("{}, {}", ops.target.literal(), ops.value.literal()),
        };
        let call = format!("selenium.{}({args})", self.method());
        match self {
            Query::XpathCount | Query::ElementPositionTop => format!("{call}.toString()"),
            _ => call,
        }
    }

    /// The cell holding the expected value when the query is compared.
    fn expected<'o>(self, ops: &'o Operands<'_>) -> &'o Field {
        match self.input() {
            Input::None => &ops.target,
            _ => &ops.value,
        }
    }
}

/// How a query result is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Boolean query must return the given value.
    Is(bool),
    /// Exact string equality with the expected cell.
    Equals,
    /// Whole-string regex match against the expected cell, `?` as wildcard.
    Matches,
}

/// A query plus the way its result is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub query: Query,
    pub check: Check,
}

impl Condition {
    pub const fn new(query: Query, check: Check) -> Self {
        Self { query, check }
    }

    /// Boolean Java expression that is true when the condition holds.
    pub fn probe(&self, ops: &Operands<'_>) -> String {
        let expr = self.query.expr(ops);
        match self.check {
            Check::Is(true) => expr,
            Check::Is(false) => format!("!{expr}"),
            Check::Equals => format!("{}.equals({expr})", self.query.expected(ops).literal()),
            Check::Matches => format!("{expr}.matches({})", self.pattern(ops)),
        }
    }

    fn pattern(&self, ops: &Operands<'_>) -> String {
        format!("\"^{}$\"", self.query.expected(ops).with_wildcards().inner())
    }

    /// Check statement using the given primitive family (`assert` or
    /// `verify`), e.g. `assertTrue(…)` or `verifyEquals(…)`.
    fn check_call(&self, prefix: &str, family: &str, ops: &Operands<'_>) -> String {
        let expr = self.query.expr(ops);
        match self.check {
            Check::Is(true) => format!("{prefix}{family}True({expr});"),
            Check::Is(false) => format!("{prefix}{family}False({expr});"),
            Check::Equals => format!(
                "{prefix}{family}Equals({}, {expr});",
                self.query.expected(ops).literal()
            ),
            Check::Matches => format!(
                "{prefix}{family}True({expr}.matches({}));",
                self.pattern(ops)
            ),
        }
    }
}

/// Broad kind of a command, used for listings and counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Action,
    Assertion,
    Verification,
    Wait,
    Store,
    Misc,
    UserExtension,
    Archive,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Action => "action",
            Category::Assertion => "assertion",
            Category::Verification => "verification",
            Category::Wait => "wait",
            Category::Store => "store",
            Category::Misc => "misc",
            Category::UserExtension => "user-extension",
            Category::Archive => "archive",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emission behavior bound to a command name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// `selenium.<method>(…)`.
    Action { method: &'static str, arity: Arity },
    /// The action followed by a page load wait.
    ActionAndWait { method: &'static str, arity: Arity },
    /// Sleep for the number of milliseconds in the target.
    Pause,
    /// Print the target.
    Echo,
    Assert(Condition),
    Verify(Condition),
    /// Poll until the condition holds or the timeout elapses.
    WaitFor(Condition),
    /// Capture the query result into a stored variable.
    Store(Query),
    /// Call a function of the browser-side user extension script.
    Extension {
        function: &'static str,
        arity: Arity,
        wait: bool,
    },
}

impl Handler {
    pub fn category(&self) -> Category {
        match self {
            Handler::Action { .. } | Handler::ActionAndWait { .. } => Category::Action,
            Handler::Pause | Handler::Echo => Category::Misc,
            Handler::Assert(_) => Category::Assertion,
            Handler::Verify(_) => Category::Verification,
            Handler::WaitFor(_) => Category::Wait,
            Handler::Store(_) => Category::Store,
            Handler::Extension { .. } => Category::UserExtension,
        }
    }

    /// Emit the statements for one step. Errors carry a reason for the
    /// offending row.
    pub fn emit(&self, ops: &Operands<'_>, variant: &Variant) -> Result<Vec<Statement>, String> {
        let statements = match *self {
            Handler::Action { method, arity } => vec![call(method, arity, ops)],
            Handler::ActionAndWait { method, arity } => {
                vec![call(method, arity, ops), page_load_wait()]
            }
            Handler::Pause => {
                let delay = if ops.target.is_empty() {
                    &ops.value
                } else {
                    &ops.target
                };
                vec![Statement::line(format!(
                    "Thread.sleep(Long.parseLong({}));",
                    delay.literal()
                ))]
            }
            Handler::Echo => vec![Statement::line(format!(
                "System.out.println({});",
                ops.target.literal()
            ))],
            Handler::Assert(condition) => vec![Statement::line(condition.check_call(
                variant.assert_prefix,
                "assert",
                ops,
            ))],
            Handler::Verify(condition) => {
                vec![Statement::line(condition.check_call("", "verify", ops))]
            }
            Handler::WaitFor(condition) => vec![wait_loop(ops.command, &condition.probe(ops))],
            Handler::Store(query) => vec![store(query, ops)?],
            Handler::Extension {
                function,
                arity,
                wait,
            } => {
                let script = format!(
                    "selenium.{function}({})",
                    arity.script_args(ops).join(", ")
                );
                let mut out = vec![Statement::line(format!("selenium.getEval(\"{script}\");"))];
                if wait {
                    out.push(page_load_wait());
                }
                out
            }
        };
        Ok(statements)
    }
}

fn call(method: &str, arity: Arity, ops: &Operands<'_>) -> Statement {
    Statement::line(format!(
        "selenium.{method}({});",
        arity.args(ops).join(", ")
    ))
}

/// `selenium.waitForPageToLoad(timeout);`
pub fn page_load_wait() -> Statement {
    Statement::line("selenium.waitForPageToLoad(timeout);")
}

/// The polling loop shared by every wait command.
pub fn wait_loop(command: &str, probe: &str) -> Statement {
    Statement::block([
        "for (int second = 0;; second++) {".to_string(),
        "    if (second >= timeoutSecInt) {".to_string(),
        format!("        fail(\"{command} reached a timeout (\" + timeoutSecInt + \"s)\");"),
        "    }".to_string(),
        "    try {".to_string(),
        format!("        if ({probe}) {{"),
        "            break;".to_string(),
        "        }".to_string(),
        "    } catch (Exception e) {".to_string(),
        "    }".to_string(),
        format!("    Thread.sleep({WAIT_INTERVAL_MS});"),
        "}".to_string(),
    ])
}

fn store(query: Query, ops: &Operands<'_>) -> Result<Statement, String> {
    let name = match query.input() {
        Input::None => ops.raw_target.trim(),
        _ => ops.raw_value.trim(),
    };
    if name.is_empty() {
        return Err(format!("`{}` needs a variable name", ops.command));
    }
    if !is_identifier(name) {
        return Err(format!("`{name}` is not a valid variable name"));
    }
    if RESERVED_NAMES.contains(&name) {
        return Err(format!("`{name}` is reserved in the generated class"));
    }
    Ok(Statement::store(name, query.expr(ops)))
}

/// Java keywords and literals, then the fields and locals every generated
/// class already declares.
const RESERVED_NAMES: &[&str] = &[
    "_", "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while",
    // generated
    "browser", "driver", "e", "host", "hostPort", "second", "selenium", "speed", "timeout",
    "timeoutSecInt",
];

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
