pub mod lookup;

pub use lookup::{JsonLookup, LookupParams};
