pub mod ansi;
pub mod ascii;
pub mod chrome;
pub mod display_data;
pub mod display_manager;
pub mod table_printer;
#[cfg(test)]
mod tests;
pub mod width_util;
