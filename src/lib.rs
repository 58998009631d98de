//! tscheck - Qt Linguist translation catalog checker
//!
//! tscheck is a CLI tool and library for working with Qt Linguist `.ts`
//! translation catalogs. It loads catalogs with per-entry error recovery,
//! resolves (context, source, comment) keys with source-text fallback, and
//! checks catalogs for unfinished, vanished, duplicate and malformed
//! messages.
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog data model, parser, writer, lookup and directory scan
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Check rules for catalog issues

pub mod catalog;
pub mod cli;
pub mod config;
pub mod issues;
pub mod mcp;
pub mod rules;
