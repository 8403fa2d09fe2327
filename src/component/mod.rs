//! Feature components
//!
//! Each submodule implements one self-contained workflow on top of the
//! shared tools.

pub mod proxy_linker;

pub use proxy_linker::ProxyLinker;
