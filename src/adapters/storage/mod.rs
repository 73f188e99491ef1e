//! Persistence Adapters
//!
//! Implementations of the PersistenceProvider port.
//!
//! ## Available Adapters
//!
//! - **FilePersistence** - One YAML file per collection on disk
//! - **InMemoryPersistence** - Process memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FilePersistence, InMemoryPersistence};
//!
//! // Durable: file-based storage
//! let store = FilePersistence::new("./data");
//!
//! // Testing: in-memory storage
//! let store = InMemoryPersistence::new();
//! ```

mod file_persistence;
mod in_memory_persistence;

pub use file_persistence::FilePersistence;
pub use in_memory_persistence::InMemoryPersistence;
