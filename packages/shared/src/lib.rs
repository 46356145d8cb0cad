//! Shared utilities for Roomclock binaries.

pub mod logger;
pub mod time;
