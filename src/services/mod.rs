pub mod converter;
pub mod report;

pub use converter::{convert_sample, table_values, Direction, TableKind};
pub use report::{render_sample, render_table};
