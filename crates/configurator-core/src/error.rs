//! # Error Types
//!
//! Domain-specific error types for configurator-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  configurator-core errors (this file)                                  │
//! │  ├── OrderError       - Why a submitted order was rejected             │
//! │  └── ValidationError  - Catalog entry validation failures              │
//! │                                                                         │
//! │  order-api errors (app)                                                │
//! │  ├── ApiError         - What HTTP clients see (serialized)             │
//! │  └── ConfigError      - Startup configuration failures                 │
//! │                                                                         │
//! │  Flow: OrderError → ApiError → 400 {"error": ..., "code": ...}         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (code, category)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::types::Category;

// =============================================================================
// Order Error
// =============================================================================

/// Reasons an order submission is rejected.
///
/// All of these are client input errors. Validation is fail-fast, so a
/// request yields the first error met while walking its codes in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The `components` field is absent, not a list of strings, or empty.
    #[error(
        "Invalid request data. Please provide a list of components. \
         Example: {{\"components\": [\"A\", \"D\", \"F\", \"I\", \"K\"]}}"
    )]
    InvalidRequestShape,

    /// A submitted code is not in the catalog.
    #[error("Invalid component code: {0}")]
    UnknownComponent(String),

    /// Two submitted codes share a category.
    ///
    /// ## When This Occurs
    /// ```text
    /// ["A", "B", "F", "I", "K"]
    ///   │    │
    ///   │    └── B: OLED Screen   (Screen already taken)
    ///   └─────── A: LED Screen
    ///
    /// DuplicateCategory(Screen)
    /// ```
    #[error("Invalid order. Only one part per category is allowed ({0} selected more than once).")]
    DuplicateCategory(Category),

    /// Every code was valid but at least one required category is uncovered.
    ///
    /// Categories are listed in declaration order.
    #[error(
        "Invalid order. Please include one part from each category: {}. Missing: {}",
        Category::list(Category::ALL.iter()),
        Category::list(.0.iter())
    )]
    MissingCategories(Vec<Category>),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog entry validation errors.
///
/// Raised while building a [`crate::catalog::Catalog`], before the service
/// accepts any traffic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., a code with spaces).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two catalog entries with the same code).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with OrderError.
pub type CoreResult<T> = Result<T, OrderError>;

// =============================================================================
// Unit Tests
// =============================================================================
