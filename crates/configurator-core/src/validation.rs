//! # Validation Module
//!
//! Field validators for catalog entries.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Startup: Catalog construction                                         │
//! │  ├── THIS MODULE: code / name / price field rules                      │
//! │  └── Catalog: duplicate code detection                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Per request: order rules (see `order` module)                         │
//! │  ├── Request shape (typed decode)                                      │
//! │  └── Known codes, one per category, all categories covered             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use configurator_core::validation::{validate_component_code, validate_price_cents};
//!
//! assert!(validate_component_code("A").is_ok());
//! assert!(validate_price_cents(1028).is_ok());
//! ```

use crate::error::ValidationError;
use crate::types::Category;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted component code.
pub const MAX_CODE_LEN: usize = 50;

/// Longest accepted display name.
pub const MAX_NAME_LEN: usize = 200;

/// Highest accepted unit price in cents.
///
/// An accepted order holds at most one component per category, so a total
/// of `Category::ALL.len()` prices at this ceiling still fits in an `i64`.
pub const MAX_PRICE_CENTS: i64 = i64::MAX / Category::ALL.len() as i64;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a component code.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
///
/// Codes are matched verbatim against submitted orders, so surrounding
/// whitespace is rejected rather than trimmed.
///
/// ## Example
/// ```rust
/// use configurator_core::validation::validate_component_code;
///
/// assert!(validate_component_code("A").is_ok());
/// assert!(validate_component_code("").is_err());
/// assert!(validate_component_code(" A").is_err());
/// ```
pub fn validate_component_code(code: &str) -> ValidationResult<()> {
    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > MAX_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: MAX_CODE_LEN,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a component display name.
///
/// ## Rules
/// - Must not be blank
/// - At most 200 characters
pub fn validate_component_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (bundled parts)
/// - At most [`MAX_PRICE_CENTS`]
///
/// ## Example
/// ```rust
/// use configurator_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1028).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// assert!(validate_price_cents(i64::MAX).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
