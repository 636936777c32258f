//! Command implementations.
//!
//! CHANGELOG:
//! - 02/16/2026 - Reading and info commands

pub mod info;
pub mod reading;
