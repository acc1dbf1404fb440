//! Validation errors shared across voting contracts
//!
//! These are not `#[contracterror]` types: each contract maps them into its
//! own error enum with a `From` impl so error codes stay contract-local.

/// Reason a validation helper rejected its input
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ValidationError {
    /// Required text was empty
    Empty,
    /// Text exceeded its maximum length
    TooLong,
    /// A collection already holds its maximum number of items
    LimitExceeded,
}
