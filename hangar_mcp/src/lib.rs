//! MCP server for Hangar deployments.
//!
//! This crate provides an MCP (Model Context Protocol) server that exposes
//! template discovery and server deployment to AI assistants like Claude.

mod server;

pub mod remote;
pub mod tools;

pub use server::HangarMcpServer;
