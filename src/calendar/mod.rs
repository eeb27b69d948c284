//! Month-view computations: day keys, D-Day labels, the per-day todo index
//! and the padded month grid.

pub mod d_day;
pub mod date_index;
pub mod date_key;
pub mod month_grid;
#[cfg(test)]
mod tests;
