//! Shared test utilities for the appconfig workspace.
//!
//! This crate provides standardised fixtures so that every test suite builds
//! catalogs, environments and documents the same way. It is a dev-dependency
//! only and never published.
//!
//! # Modules
//!
//! - [`catalog`] - the sample application catalog
//! - [`document`] - on-disk and in-memory JSON documents
//! - [`env`] - in-memory environments

pub mod catalog;
pub mod document;
pub mod env;

pub use catalog::sample_catalog;
pub use document::{MemoryOpener, TestDocument};
pub use env::env;
