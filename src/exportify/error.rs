use super::Column;
use thiserror::Error;

/// Failure to turn one CSV row into an addition
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("row has {width} column(s), expected at least {expected} (missing column {} \"{}\")", .column.letter(), .column.label())]
    MissingColumn {
        column: Column,
        width: usize,
        expected: usize,
    },

    #[error("column {} \"{}\" is not a number: {value:?}", .column.letter(), .column.label())]
    InvalidNumber { column: Column, value: String },

    #[error("invalid date {value:?}")]
    InvalidDate { value: String },
}
