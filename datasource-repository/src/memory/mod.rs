//! In-memory content store.
//!
//! Backs fixtures, the command-line tool and tests.

mod store;

pub use store::InMemoryContentStore;
