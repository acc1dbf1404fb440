#![no_std]
//! # Shared Voting Contracts Library
//!
//! Reusable limits and validation helpers for the voting session contracts.
//!
//! ## Modules
//!
//! - `constants` - Limits on proposals, descriptions and pagination, ledger TTLs
//! - `errors` - Plain validation errors, converted by each contract into its own error type
//! - `validation` - Reusable validation helper functions
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! shared = { path = "../shared" }
//! ```
//!
//! ```rust,ignore
//! use shared::constants::MAX_PROPOSALS;
//! use shared::validation::validate_description;
//! ```

pub mod constants;
pub mod errors;
pub mod validation;

pub use errors::ValidationError;
pub use validation::{effective_page_limit, validate_capacity, validate_description};
