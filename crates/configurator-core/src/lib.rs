//! # configurator-core: Pure Business Logic for the Device Configurator
//!
//! This crate decides whether a set of component codes makes a valid device
//! configuration and what it costs. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Device Configurator Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP client                                  │   │
//! │  │         POST /orders {"components": ["A", "D", ...]}            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    order-api (axum)                             │   │
//! │  │    config, logging, SystemClock, ThreadRandom, JSON mapping     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ configurator-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │   order   │  │   │
//! │  │   │ Component │  │   Money   │  │  Catalog  │  │ Validator │  │   │
//! │  │   │ Category  │  │           │  │           │  │   Desk    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • CLOCK AND RANDOMNESS INJECTED                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Component, Category)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Immutable code → component lookup
//! - [`order`] - Request decoding, order validation, order placement
//! - [`order_id`] - Order identifier generation behind `Clock` / `RandomSource`
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog field validation
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use configurator_core::{Catalog, OrderError, OrderRequest, OrderValidator};
//!
//! let validator = OrderValidator::new(Arc::new(Catalog::reference()));
//!
//! let priced = validator
//!     .validate(&OrderRequest::new(["A", "D", "F", "I", "K"]))
//!     .unwrap();
//! assert_eq!(priced.total.to_string(), "$142.30");
//!
//! let err = validator
//!     .validate(&OrderRequest::new(["A", "D", "F", "I"]))
//!     .unwrap_err();
//! assert!(matches!(err, OrderError::MissingCategories(_)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod order_id;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreResult, OrderError, ValidationError};
pub use money::Money;
pub use order::{OrderDesk, OrderRequest, OrderResult, OrderValidator, PricedOrder, RequestShapeError};
pub use order_id::{Clock, OrderIdGenerator, RandomSource};
pub use types::*;
