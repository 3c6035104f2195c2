pub mod classifier;
pub mod extractor;
pub mod providers;
pub mod recommendations;
pub mod search;

pub use providers::{SearchParams, SearchProvider, SerpApiProvider};
