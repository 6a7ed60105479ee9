//! Input side: recorded HTML tables into ordered steps.

pub mod entities;
pub mod markup;

pub use markup::{RawRow, Rows, parse_step, read_steps, rows, title_matches};
