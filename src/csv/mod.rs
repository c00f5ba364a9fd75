//! Field-count scanning over byte cursors

mod cursor;
mod parser;

pub use cursor::{ByteCursor, Bytes};
pub use parser::Parser;
