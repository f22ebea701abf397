pub mod blocklist_cache;

pub use blocklist_cache::BlocklistCache;
