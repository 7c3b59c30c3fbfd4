//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Config: Application configuration
//! - Catalog loader: built-in or file-based class and skill catalogs
//! - Sheet store client: HTTP adapter for the remote sheet store
//! - Store server: in-memory development sheet store
//! - Console: text rendering and line commands

pub mod catalog_loader;
pub mod config;
pub mod console;
pub mod sheet_store_client;
pub mod store_server;
