//! Shared runtime plumbing for custody services and tools.

pub mod logging;
