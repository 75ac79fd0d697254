//! Port traits defining external boundaries.
//!
//! The filesystem is the only boundary the generators cross. Implementations
//! live in `src/adapters/`.

pub mod filesystem;

pub use filesystem::{EntryKind, FileSystem};
