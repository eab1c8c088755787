//! MCP (Model Context Protocol) server and tool types.
//!
//! This module provides an MCP server for the lakeFS Actions API,
//! allowing AI assistants to inspect action runs, hook runs and hook output.
//!
//! # Example
//!
//! ```no_run
//! use lakeapi::mcp::ActionsServer;
//!
//! # fn main() -> lakeapi::Result<()> {
//! let server = ActionsServer::from_env()?;
//! // Server can now be used with rmcp transport
//! # Ok(())
//! # }
//! ```

mod params;
mod server;

pub use params::*;
pub use server::ActionsServer;
