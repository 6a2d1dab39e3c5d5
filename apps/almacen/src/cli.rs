//! # CLI Interface
//!
//! Clap-based command definitions for the `almacen` binary.

use clap::{Parser, Subcommand};

/// Default bind address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8000;

/// Almacén — an in-memory item catalog REST service.
#[derive(Debug, Parser)]
#[command(name = "almacen", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server.
    Serve {
        /// Address to bind.
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on.
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },

    /// Print the OpenAPI document to stdout and exit.
    Openapi,
}

// =============================================================================
// TESTS
// =============================================================================
