//! Shared configuration and error types for the rental-operations workspace.

pub mod config;
pub mod error;
