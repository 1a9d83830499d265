pub mod cell;
pub mod parser;
pub mod grid;
pub mod validate;
pub mod error;

pub use cell::CellValue;
pub use grid::{read_grid, Grid, GridCell, GridError};
pub use parser::parse_cell;
pub use validate::{check_cell, check_grid, is_cell_ready, is_ready, NotReadyReason, Readiness};

#[cfg(test)]
mod tests;
