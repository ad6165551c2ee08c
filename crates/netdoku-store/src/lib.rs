pub mod error;
pub mod provision;
pub mod store;

pub use error::{Result, StoreError};
pub use provision::provision_from_template;
pub use store::{AppendMode, AppendResult, DestinationStore, MemoryStore};
