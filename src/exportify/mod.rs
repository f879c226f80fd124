//! Exportify export parsing
//!
//! Parses the CSV produced by Exportify (https://github.com/watsonbox/exportify)
//! into [`Addition`](crate::model::Addition) records, resolving each
//! contributor through the contributor config.

mod columns;
mod date;
mod error;
pub(crate) mod row;
mod reader;

pub use columns::Column;
pub use date::parse_date;
pub use error::ParseError;
pub use reader::{read_additions, read_playlist};
pub use row::{extract_addition, split_escaped};
