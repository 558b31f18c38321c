pub mod client;
pub mod models;
pub mod query;


pub use client::{AurClient, RPC_VERSION};
pub use models::PackageRecord;
pub use query::{Outdated, SearchBy, SearchQuery, SortBy, SortOrder, SuggestQuery};
