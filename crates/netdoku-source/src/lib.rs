pub mod error;
pub mod memory;
pub mod provider;

pub use error::{Result, SourceError};
pub use memory::{MemoryLayer, MemoryProject};
pub use provider::{JobFilter, SourceLayer, SourceProvider};
