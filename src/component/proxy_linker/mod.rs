//! Proxy linker component
//!
//! Finds the in-camera low-resolution (.LRV) counterpart of every
//! high-resolution file referenced by a Shotcut project and copies it into
//! the project's proxies directory under the content-derived name Shotcut
//! expects.

mod main;
mod project_scanner;

pub use main::{ProxyLinker, SyncOutcome};
pub use project_scanner::scan_project_files;
