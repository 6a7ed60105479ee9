//! Escaping and variable interpolation for cell text.
//!
//! Cell text ends up inside Java string literals. It is escaped first, then
//! the two reference syntaxes the recorder understands are split out:
//!
//! - `${name}` becomes `" + name + "`
//! - `storedVars['name']` becomes `'" + name + "'`
//!
//! so `Hello ${name}!` rendered as a literal is `"Hello " + name + "!"`.

use regex::Regex;
use std::sync::LazyLock;

static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}|storedVars\['([A-Za-z_][A-Za-z0-9_]*)'\]")
        .expect("reference pattern is valid")
});

/// Regex class matching any character, as Java literal text.
const ANY_CHAR: &str = r"[\\s\\S]";

/// One piece of an interpolated field, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Escaped literal text.
    Text(String),
    /// `${name}` reference.
    Var(String),
    /// `storedVars['name']` reference, kept inside single quotes.
    QuotedVar(String),
}

/// An escaped, interpolated cell ready for embedding in a string literal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    segments: Vec<Segment>,
}

impl Field {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Text to place between the quotes of a string literal.
    pub fn inner(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Var(name) => {
                    out.push_str("\" + ");
                    out.push_str(name);
                    out.push_str(" + \"");
                }
                Segment::QuotedVar(name) => {
                    out.push_str("'\" + ");
                    out.push_str(name);
                    out.push_str(" + \"'");
                }
            }
        }
        out
    }

    /// The field as a complete quoted expression.
    pub fn literal(&self) -> String {
        format!("\"{}\"", self.inner())
    }

    /// Names of the variables referenced, left to right.
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Var(name) | Segment::QuotedVar(name) => Some(name.as_str()),
            Segment::Text(_) => None,
        })
    }

    /// Same field with the pattern wildcard `?` turned into an any-character
    /// class in literal text.
    pub fn with_wildcards(&self) -> Field {
        let segments = self
            .segments
            .iter()
            .map(|s| match s {
                Segment::Text(text) => Segment::Text(text.replace('?', ANY_CHAR)),
                other => other.clone(),
            })
            .collect();
        Field { segments }
    }
}

/// Escape text for a Java string literal.
///
/// Backslashes and double quotes are escaped; everything else, whitespace
/// included, passes through. A recorded `\n` and the `<br />` tag both become
/// the newline escape.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out.replace("\\\\n", "\\n").replace("<br />", "\\n")
}

/// Escape `raw` and split out its variable references.
pub fn interpolate(raw: &str) -> Field {
    let escaped = escape(raw);
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in REFERENCE.captures_iter(&escaped) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            segments.push(Segment::Text(escaped[last..whole.start()].to_string()));
        }
        if let Some(name) = caps.get(1) {
            segments.push(Segment::Var(name.as_str().to_string()));
        } else if let Some(name) = caps.get(2) {
            segments.push(Segment::QuotedVar(name.as_str().to_string()));
        }
        last = whole.end();
    }
    if last < escaped.len() {
        segments.push(Segment::Text(escaped[last..].to_string()));
    }

    Field { segments }
}
