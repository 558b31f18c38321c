mod suggestions;
mod table;

#[cfg(test)]
mod tests;

pub use suggestions::decode_suggestions;
pub use table::{Column, ROW_WIDTH, ResultsTable};
