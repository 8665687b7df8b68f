// ABOUTME: Library root for srcd - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod components;
pub mod config;
pub mod error;
pub mod output;
pub mod runtime;
