//! # Almacén Library
//!
//! This library exposes the Almacén modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod api;
pub mod cli;

// Re-export almacen_core for convenience
pub use almacen_core;
