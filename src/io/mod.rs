//! I/O modules for venue loading.

pub mod async_loader;
pub mod file_loader;

// Re-export commonly used types
pub use async_loader::{AsyncLoader, LoadResult};
pub use file_loader::LoadingState;
