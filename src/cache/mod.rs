pub mod key;
pub mod store;

pub use store::{CacheStore, Lookup};
