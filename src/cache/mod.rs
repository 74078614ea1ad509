// Cache module.
// Holds extracted trending lists in memory and resolves the on-disk log location.

pub mod paths;
pub mod store;

pub use paths::{cache_dir, log_path, log_path_in};
pub use store::{CachedList, ListCache};
