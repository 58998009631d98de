//! Model Context Protocol (MCP) server implementation.
//!
//! This module provides an MCP server that exposes tscheck functionality to
//! AI assistants. The server implements the MCP specification for tool
//! calling.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: MCP-specific type definitions

mod server;
pub mod types;

pub use server::{TsCheckMcpServer, run_server};
