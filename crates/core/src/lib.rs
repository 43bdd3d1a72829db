//! Catalog Admin Core - Shared types library.
//!
//! This crate provides common types used across the catalog admin workspace:
//! - `admin` - Server-rendered admin panel (users, categories, products)
//! - `cli` - Command-line tools for seed validation and special links
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP,
//! no storage. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, email addresses, user roles and UI languages

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
