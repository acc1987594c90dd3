//! Filesystem access layer
//!
//! The catalog only touches storage through the [`Filesystem`] trait, so it
//! can run against the real disk or an in-memory fake.

mod memory;
mod os;
mod traits;

pub use memory::MemoryFilesystem;
pub use os::OsFilesystem;
pub use traits::Filesystem;
