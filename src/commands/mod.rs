pub mod search;
pub mod suggest;

pub use search::{SearchAction, SearchCommand};
pub use suggest::SuggestCommand;
