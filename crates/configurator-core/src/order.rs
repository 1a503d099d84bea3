//! # Order Module
//!
//! Turns a list of component codes into a priced order, or the reason it
//! cannot be placed.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  request body (bytes)                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderRequest::decode ── not {"components": [string, ...]} ──► Shape   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderValidator::validate                                               │
//! │  ├── sort codes                                                         │
//! │  ├── for each code (sorted, fail-fast):                                 │
//! │  │     unknown? ──────────────────────────────► UnknownComponent       │
//! │  │     category taken? ───────────────────────► DuplicateCategory      │
//! │  │     else: take category, add name, add price                        │
//! │  └── every category taken? ── no ─────────────► MissingCategories      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PricedOrder ──► OrderIdGenerator ──► OrderResult                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::error::{CoreResult, OrderError};
use crate::money::Money;
use crate::order_id::OrderIdGenerator;
use crate::types::Category;

// =============================================================================
// Request Decoding
// =============================================================================

/// A decoded order submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderRequest {
    /// Component codes as submitted (any order, possibly repeated).
    pub components: Vec<String>,
}

/// Why a request body is not a usable order submission.
///
/// Every variant surfaces to clients as [`OrderError::InvalidRequestShape`];
/// the detail exists for logs.
#[derive(Debug, Error)]
pub enum RequestShapeError {
    /// Not JSON, not an object, or `components` missing / not a string list.
    #[error("malformed order body: {0}")]
    Malformed(#[from] serde_json::Error),

    /// `components` is an empty list.
    #[error("no components submitted")]
    NoComponents,
}

impl From<RequestShapeError> for OrderError {
    fn from(_: RequestShapeError) -> Self {
        OrderError::InvalidRequestShape
    }
}

impl OrderRequest {
    pub fn new<S: Into<String>>(components: impl IntoIterator<Item = S>) -> Self {
        OrderRequest {
            components: components.into_iter().map(Into::into).collect(),
        }
    }

    /// Decodes a JSON body of the form `{"components": ["A", "D", ...]}`.
    ///
    /// ## Example
    /// ```rust
    /// use configurator_core::order::OrderRequest;
    ///
    /// let request = OrderRequest::decode(br#"{"components": ["K", "A"]}"#).unwrap();
    /// assert_eq!(request.components, vec!["K", "A"]);
    ///
    /// assert!(OrderRequest::decode(br#"{"components": "A, K"}"#).is_err());
    /// assert!(OrderRequest::decode(br#"{"components": []}"#).is_err());
    /// ```
    pub fn decode(body: &[u8]) -> Result<Self, RequestShapeError> {
        let request: OrderRequest = serde_json::from_slice(body)?;
        if request.components.is_empty() {
            return Err(RequestShapeError::NoComponents);
        }
        Ok(request)
    }
}

// =============================================================================
// Validation Output
// =============================================================================

/// A validated order before it has been given an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedOrder {
    /// Submitted codes in ascending order.
    pub sorted_codes: Vec<String>,

    /// Sum of the component prices.
    pub total: Money,

    /// Display names, in `sorted_codes` order.
    pub ordered_parts: Vec<String>,
}

/// An accepted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderResult {
    pub order_id: String,
    pub total: Money,
    pub ordered_parts: Vec<String>,
}

// =============================================================================
// Order Validator
// =============================================================================

/// Checks an order against an injected catalog.
///
/// Every category in [`Category::ALL`] must be covered exactly once.
#[derive(Debug, Clone)]
pub struct OrderValidator {
    catalog: Arc<Catalog>,
}

impl OrderValidator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        OrderValidator { catalog }
    }

    /// Validates and prices an order.
    ///
    /// Codes are processed in ascending order and the first failure wins;
    /// later codes are not examined. The category coverage check is only
    /// reached once every code has been accepted.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use configurator_core::catalog::Catalog;
    /// use configurator_core::order::{OrderRequest, OrderValidator};
    ///
    /// let validator = OrderValidator::new(Arc::new(Catalog::reference()));
    /// let priced = validator
    ///     .validate(&OrderRequest::new(["K", "I", "F", "D", "A"]))
    ///     .unwrap();
    ///
    /// assert_eq!(priced.total.cents(), 14230);
    /// assert_eq!(priced.sorted_codes, vec!["A", "D", "F", "I", "K"]);
    /// ```
    pub fn validate(&self, request: &OrderRequest) -> CoreResult<PricedOrder> {
        if request.components.is_empty() {
            return Err(OrderError::InvalidRequestShape);
        }

        let mut sorted_codes = request.components.clone();
        sorted_codes.sort();

        let mut selected = BTreeSet::new();
        let mut ordered_parts = Vec::with_capacity(sorted_codes.len());
        let mut total = Money::zero();

        for code in &sorted_codes {
            let component = self
                .catalog
                .get(code)
                .ok_or_else(|| OrderError::UnknownComponent(code.clone()))?;

            if !selected.insert(component.category) {
                return Err(OrderError::DuplicateCategory(component.category));
            }

            ordered_parts.push(component.name.clone());
            total += component.price();
        }

        // Duplicates were rejected above, so only missing categories remain.
        let missing: Vec<Category> = Category::ALL
            .into_iter()
            .filter(|category| !selected.contains(category))
            .collect();
        if !missing.is_empty() {
            return Err(OrderError::MissingCategories(missing));
        }

        Ok(PricedOrder {
            sorted_codes,
            total,
            ordered_parts,
        })
    }
}

// =============================================================================
// Order Desk
// =============================================================================

/// Validates orders and issues identifiers for the accepted ones.
#[derive(Clone)]
pub struct OrderDesk {
    validator: OrderValidator,
    ids: OrderIdGenerator,
}

impl OrderDesk {
    pub fn new(validator: OrderValidator, ids: OrderIdGenerator) -> Self {
        OrderDesk { validator, ids }
    }

    /// Places an order. Identifiers are only drawn for valid orders.
    pub fn place(&self, request: &OrderRequest) -> CoreResult<OrderResult> {
        let priced = self.validator.validate(request)?;
        let order_id = self.ids.generate(&priced.sorted_codes);

        Ok(OrderResult {
            order_id,
            total: priced.total,
            ordered_parts: priced.ordered_parts,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU16, Ordering};

    use super::*;
    use crate::order_id::testing::{fixed_generator, FixedClock};
    use crate::order_id::RandomSource;
    use crate::types::Component;
    use crate::validation::MAX_PRICE_CENTS;

    fn validator() -> OrderValidator {
        OrderValidator::new(Arc::new(Catalog::reference()))
    }

    fn validate(codes: &[&str]) -> CoreResult<PricedOrder> {
        validator().validate(&OrderRequest::new(codes.iter().copied()))
    }

    // -------------------------------------------------------------------------
    // Decoding
    // -------------------------------------------------------------------------

    #[test]
    fn test_decode_accepts_string_list() {
        let request = OrderRequest::decode(br#"{"components": ["A", "D", "F", "I", "K"]}"#).unwrap();
        assert_eq!(request, OrderRequest::new(["A", "D", "F", "I", "K"]));
    }

    #[test]
    fn test_decode_rejects_bad_shapes() {
        let bodies: [&[u8]; 7] = [
            br#"{"components": "A, D, F, I, K"}"#,
            br#"{"components": null}"#,
            br#"{"components": [1, 2, 3]}"#,
            br#"{"parts": ["A"]}"#,
            br#"["A", "D"]"#,
            b"not json",
            b"",
        ];
        for body in bodies {
            assert!(
                matches!(OrderRequest::decode(body), Err(RequestShapeError::Malformed(_))),
                "body {:?} should be malformed",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_decode_rejects_empty_list() {
        let err = OrderRequest::decode(br#"{"components": []}"#).unwrap_err();
        assert!(matches!(err, RequestShapeError::NoComponents));
        assert_eq!(OrderError::from(err), OrderError::InvalidRequestShape);
    }

    // -------------------------------------------------------------------------
    // Validation scenarios
    // -------------------------------------------------------------------------

    #[test]
    fn test_valid_reference_order() {
        let priced = validate(&["A", "D", "F", "I", "K"]).unwrap();
        assert_eq!(priced.total, Money::from_cents(14230));
        assert_eq!(
            priced.ordered_parts,
            vec![
                "LED Screen",
                "Wide-Angle Camera",
                "USB-C Port",
                "Android OS",
                "Metallic Body"
            ]
        );
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let expected = validate(&["A", "D", "F", "I", "K"]).unwrap();
        let mut codes = vec!["A", "D", "F", "I", "K"];
        for _ in 0..codes.len() {
            codes.rotate_left(1);
            assert_eq!(validate(&codes).unwrap(), expected);
        }
        assert_eq!(validate(&["K", "I", "F", "D", "A"]).unwrap(), expected);
    }

    #[test]
    fn test_total_is_exact_sum() {
        let priced = validate(&["C", "E", "H", "J", "L"]).unwrap();
        assert_eq!(priced.total.cents(), 3330 + 3239 + 2000 + 4500 + 3000);
    }

    #[test]
    fn test_duplicate_category() {
        assert_eq!(
            validate(&["A", "B", "F", "I", "K"]),
            Err(OrderError::DuplicateCategory(Category::Screen))
        );
    }

    #[test]
    fn test_duplicate_category_any_pair_any_order() {
        let catalog = Catalog::reference();
        let base = ["A", "D", "F", "I", "K"];
        for extra in ["B", "C", "E", "G", "H", "J", "L"] {
            let category = catalog.get(extra).unwrap().category;
            let mut codes: Vec<&str> = base
                .iter()
                .copied()
                .filter(|code| catalog.get(code).unwrap().category != category)
                .collect();
            codes.push(extra);
            let twin = base
                .iter()
                .copied()
                .find(|code| catalog.get(code).unwrap().category == category)
                .unwrap();
            codes.insert(0, twin);

            assert_eq!(validate(&codes), Err(OrderError::DuplicateCategory(category)));
            codes.reverse();
            assert_eq!(validate(&codes), Err(OrderError::DuplicateCategory(category)));
        }
    }

    #[test]
    fn test_repeated_code_is_duplicate_category() {
        assert_eq!(
            validate(&["A", "A", "D", "F", "I", "K"]),
            Err(OrderError::DuplicateCategory(Category::Screen))
        );
    }

    #[test]
    fn test_missing_category() {
        assert_eq!(
            validate(&["A", "D", "F", "I"]),
            Err(OrderError::MissingCategories(vec![Category::Body]))
        );
        assert_eq!(
            validate(&["K"]),
            Err(OrderError::MissingCategories(vec![
                Category::Screen,
                Category::Camera,
                Category::Port,
                Category::Os,
            ]))
        );
    }

    #[test]
    fn test_unknown_component() {
        assert_eq!(
            validate(&["A", "D", "F", "I", "X"]),
            Err(OrderError::UnknownComponent("X".to_string()))
        );
    }

    #[test]
    fn test_fail_fast_in_sorted_order() {
        // "B" sorts before "X": the duplicate Screen is met first.
        assert_eq!(
            validate(&["X", "B", "A"]),
            Err(OrderError::DuplicateCategory(Category::Screen))
        );
        // "0" sorts before "A": the unknown code is met first.
        assert_eq!(
            validate(&["B", "A", "0"]),
            Err(OrderError::UnknownComponent("0".to_string()))
        );
        // Coverage is never checked when a code fails.
        assert_eq!(
            validate(&["Z"]),
            Err(OrderError::UnknownComponent("Z".to_string()))
        );
    }

    #[test]
    fn test_empty_request() {
        assert_eq!(validate(&[]), Err(OrderError::InvalidRequestShape));
    }

    #[test]
    fn test_alternate_catalog() {
        let catalog = Catalog::new([
            Component::new("s1", "Tiny Screen", Category::Screen, Money::from_cents(100)),
            Component::new("c1", "Pinhole Camera", Category::Camera, Money::from_cents(200)),
            Component::new("p1", "Barrel Port", Category::Port, Money::from_cents(300)),
            Component::new("o1", "Custom OS", Category::Os, Money::zero()),
            Component::new("b1", "Wood Body", Category::Body, Money::from_cents(400)),
        ])
        .unwrap();
        let validator = OrderValidator::new(Arc::new(catalog));

        let priced = validator
            .validate(&OrderRequest::new(["s1", "c1", "p1", "o1", "b1"]))
            .unwrap();
        assert_eq!(priced.total.cents(), 1000);
        assert_eq!(priced.sorted_codes, vec!["b1", "c1", "o1", "p1", "s1"]);
        assert_eq!(
            priced.ordered_parts,
            vec!["Wood Body", "Pinhole Camera", "Custom OS", "Barrel Port", "Tiny Screen"]
        );

        // Reference codes mean nothing here.
        assert_eq!(
            validator.validate(&OrderRequest::new(["A"])),
            Err(OrderError::UnknownComponent("A".to_string()))
        );
    }

    #[test]
    fn test_total_at_price_ceiling_does_not_overflow() {
        let catalog = Catalog::new(Category::ALL.into_iter().enumerate().map(|(i, category)| {
            Component::new(
                format!("X{i}"),
                format!("{category} part"),
                category,
                Money::from_cents(MAX_PRICE_CENTS),
            )
        }))
        .unwrap();
        let validator = OrderValidator::new(Arc::new(catalog));

        let priced = validator
            .validate(&OrderRequest::new(["X0", "X1", "X2", "X3", "X4"]))
            .unwrap();
        assert_eq!(priced.total.cents(), MAX_PRICE_CENTS * Category::ALL.len() as i64);

        // A duplicate is rejected before its price is added.
        assert_eq!(
            validator.validate(&OrderRequest::new(["X0", "X0", "X1", "X2", "X3", "X4"])),
            Err(OrderError::DuplicateCategory(Category::Screen))
        );
    }

    // -------------------------------------------------------------------------
    // Order desk
    // -------------------------------------------------------------------------

    #[test]
    fn test_place_attaches_identifier() {
        let desk = OrderDesk::new(validator(), fixed_generator(1_700_000_000, 5555));
        let result = desk.place(&OrderRequest::new(["K", "A", "I", "D", "F"])).unwrap();

        assert_eq!(result.order_id, "1700000000ADFIK5555");
        assert_eq!(result.total.cents(), 14230);
        assert_eq!(result.ordered_parts[0], "LED Screen");
    }

    /// Counts draws so tests can tell whether an identifier was generated.
    struct CountingRandom(AtomicU16);

    impl RandomSource for CountingRandom {
        fn number_between(&self, min: u16, _max: u16) -> u16 {
            min + self.0.fetch_add(1, Ordering::SeqCst)
        }
    }

    #[test]
    fn test_repeated_orders_differ_only_in_identifier() {
        let random = Arc::new(CountingRandom(AtomicU16::new(0)));
        let ids = OrderIdGenerator::new(Arc::new(FixedClock(1_700_000_000)), random);
        let desk = OrderDesk::new(validator(), ids);
        let request = OrderRequest::new(["A", "D", "F", "I", "K"]);

        let first = desk.place(&request).unwrap();
        let second = desk.place(&request).unwrap();

        assert_eq!(first.total, second.total);
        assert_eq!(first.ordered_parts, second.ordered_parts);
        assert_ne!(first.order_id, second.order_id);
    }

    #[test]
    fn test_rejected_orders_draw_no_identifier() {
        let random = Arc::new(CountingRandom(AtomicU16::new(0)));
        let ids = OrderIdGenerator::new(Arc::new(FixedClock(0)), random.clone());
        let desk = OrderDesk::new(validator(), ids);

        assert!(desk.place(&OrderRequest::new(["A", "D"])).is_err());
        assert_eq!(random.0.load(Ordering::SeqCst), 0);
    }
}
