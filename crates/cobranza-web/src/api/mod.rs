mod http;
mod stats;

pub use stats::fetch_collection_stats;
