//! Persistence layer (file-backed JSON store).

pub mod codec;
pub mod store;

pub use codec::Store;
pub use store::ProfileStore;
