//! Validation helper utilities for voting contracts

use crate::constants::{MAX_DESCRIPTION_LEN, MAX_PAGINATION_LIMIT};
use crate::errors::ValidationError;
use soroban_sdk::String;

// ===== Text Validation =====

/// Validate a proposal description
///
/// # Returns
/// `Err(ValidationError::Empty)` for an empty description,
/// `Err(ValidationError::TooLong)` above `MAX_DESCRIPTION_LEN` bytes
pub fn validate_description(description: &String) -> Result<(), ValidationError> {
    let len = description.len();
    if len == 0 {
        return Err(ValidationError::Empty);
    }
    if len > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong);
    }
    Ok(())
}

// ===== Capacity Validation =====

/// Validate that one more item fits into a collection holding `count` items
pub fn validate_capacity(count: u32, max: u32) -> Result<(), ValidationError> {
    if count >= max {
        return Err(ValidationError::LimitExceeded);
    }
    Ok(())
}

// ===== Pagination =====

/// Cap a requested page size. Zero means "as many as allowed".
pub fn effective_page_limit(limit: u32) -> u32 {
    if limit == 0 || limit > MAX_PAGINATION_LIMIT {
        MAX_PAGINATION_LIMIT
    } else {
        limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_validate_description() {
        let env = Env::default();

        assert_eq!(
            validate_description(&String::from_str(&env, "")),
            Err(ValidationError::Empty)
        );
        assert_eq!(
            validate_description(&String::from_str(&env, "Rond point")),
            Ok(())
        );

        let max = [b'a'; MAX_DESCRIPTION_LEN as usize];
        let at_limit = String::from_bytes(&env, &max);
        assert_eq!(validate_description(&at_limit), Ok(()));

        let over = [b'a'; MAX_DESCRIPTION_LEN as usize + 1];
        let too_long = String::from_bytes(&env, &over);
        assert_eq!(
            validate_description(&too_long),
            Err(ValidationError::TooLong)
        );
    }

    #[test]
    fn test_validate_capacity() {
        assert_eq!(validate_capacity(0, 2), Ok(()));
        assert_eq!(validate_capacity(1, 2), Ok(()));
        assert_eq!(validate_capacity(2, 2), Err(ValidationError::LimitExceeded));
    }

    #[test]
    fn test_effective_page_limit() {
        assert_eq!(effective_page_limit(0), MAX_PAGINATION_LIMIT);
        assert_eq!(effective_page_limit(10), 10);
        assert_eq!(effective_page_limit(MAX_PAGINATION_LIMIT), MAX_PAGINATION_LIMIT);
        assert_eq!(effective_page_limit(MAX_PAGINATION_LIMIT + 1), MAX_PAGINATION_LIMIT);
    }
}
