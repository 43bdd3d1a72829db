//! Core types for the catalog admin.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod language;
pub mod role;

pub use email::{Email, EmailError};
pub use id::*;
pub use language::{Language, LanguageError};
pub use role::{RoleError, UserRole};
