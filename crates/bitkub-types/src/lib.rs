//! Shared types for the Bitkub REST API
//!
//! This crate provides the core type definitions used across the workspace.
//! It has no networking and can be used independently.
//!
//! # Key Types
//!
//! - [`ParameterMap`], [`ParamValue`] - Ordered request parameters with absent values
//! - [`BitkubErrorCode`] - Numeric exchange error codes and their messages
//! - [`transform`] - Response envelope normalization (`errorMsg` attachment)

pub mod envelope;
pub mod error_codes;
pub mod params;

// Re-export commonly used types
pub use envelope::transform;
pub use error_codes::*;
pub use params::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
