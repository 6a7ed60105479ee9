//! Row and cell scanning for Selenese HTML tables.
//!
//! The recorder writes one `<tbody>` holding one `<tr>` per command, each row
//! holding three `<td>` cells. Scanning is a single forward pass over the
//! text; nothing here touches files or emits code.

use super::entities;
use crate::error::TranslateError;
use crate::ir::Step;

const BODY_START: &str = "<tbody>";
const BODY_END: &str = "</tbody>";
const ROW_START: &str = "<tr>";
const ROW_END: &str = "</tr>";
const CELL_START: &str = "<td>";
const CELL_END: &str = "</td>";

/// A row as it appears in the markup, before its cells are split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRow<'a> {
    pub ordinal: usize,
    pub text: &'a str,
}

/// Forward-only iterator over the rows of a table body.
pub struct Rows<'a> {
    body: &'a str,
    cursor: usize,
    ordinal: usize,
    finished: bool,
}

/// Locate the table body and iterate its rows.
pub fn rows(source: &str) -> Result<Rows<'_>, TranslateError> {
    let start = source
        .find(BODY_START)
        .ok_or_else(|| TranslateError::malformed_script("missing <tbody>"))?
        + BODY_START.len();
    let end = source[start..]
        .find(BODY_END)
        .ok_or_else(|| TranslateError::malformed_script("missing </tbody>"))?
        + start;

    Ok(Rows {
        body: &source[start..end],
        cursor: 0,
        ordinal: 0,
        finished: false,
    })
}

impl<'a> Iterator for Rows<'a> {
    type Item = Result<RawRow<'a>, TranslateError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some(open) = self.body[self.cursor..].find(ROW_START) else {
            self.finished = true;
            return None;
        };
        let open = self.cursor + open + ROW_START.len();
        self.ordinal += 1;

        let Some(close) = self.body[open..].find(ROW_END) else {
            self.finished = true;
            return Some(Err(TranslateError::malformed_step(
                self.ordinal,
                "unterminated <tr>",
            )));
        };
        let close = open + close;
        self.cursor = close + ROW_END.len();

        Some(Ok(RawRow {
            ordinal: self.ordinal,
            text: &self.body[open..close],
        }))
    }
}

/// Split a raw row into its command, target and value cells.
pub fn parse_step(row: RawRow<'_>) -> Result<Step, TranslateError> {
    let mut fields: [String; 3] = Default::default();
    let mut cursor = 0;

    for (column, field) in fields.iter_mut().enumerate() {
        let (text, next) = cell(row.text, cursor).ok_or_else(|| {
            TranslateError::malformed_step(
                row.ordinal,
                format!("expected 3 columns, found {column}"),
            )
        })?;
        *field = entities::decode(text);
        cursor = next;
    }

    let [command, target, value] = fields;
    Ok(Step::new(row.ordinal, command, target, value))
}

/// Find the cell starting at or after `from`; returns its content and the
/// offset just past its closing tag.
///
/// A cell ends at the last `</td>` before the end of its line or the next
/// `<td>`, whichever comes first. Content spanning lines ends at the first
/// `</td>`.
fn cell(text: &str, from: usize) -> Option<(&str, usize)> {
    let open = from + text[from..].find(CELL_START)? + CELL_START.len();
    let rest = &text[open..];

    let eol = rest.find('\n').unwrap_or(rest.len());
    let limit = rest[..eol].find(CELL_START).unwrap_or(eol);
    let close = match rest[..limit].rfind(CELL_END) {
        Some(i) => i,
        None => rest.find(CELL_END)?,
    };

    Some((&rest[..close], open + close + CELL_END.len()))
}

/// Parse every step of a script, failing on the first malformed row.
pub fn read_steps(source: &str) -> Result<Vec<Step>, TranslateError> {
    rows(source)?
        .map(|row| row.and_then(parse_step))
        .collect()
}

/// Whether the declared title and table caption both match `name`.
pub fn title_matches(source: &str, name: &str) -> bool {
    source.contains(&format!("<title>{name}</title>"))
        && source.contains(&format!("colspan=\"3\">{name}</td>"))
}
