//! # Catalog
//!
//! The immutable code → component lookup an order is validated against.
//!
//! ## Lifecycle
//! ```text
//! startup ──► Catalog::new(entries) / Catalog::reference()
//!                  │
//!                  ▼
//!            Arc<Catalog> ──► OrderValidator (shared, read-only, never mutated)
//! ```

use std::collections::{BTreeSet, HashMap};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Category, Component};
use crate::validation::{
    validate_component_code, validate_component_name, validate_price_cents, ValidationResult,
};

/// Mapping from component code to component.
///
/// Every component belongs to exactly one category by construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    components: HashMap<String, Component>,
}

impl Catalog {
    /// Builds a catalog, validating every entry.
    ///
    /// ## Errors
    /// - Invalid code, name, or price → the matching [`ValidationError`]
    /// - Two entries with the same code → [`ValidationError::Duplicate`]
    pub fn new(entries: impl IntoIterator<Item = Component>) -> ValidationResult<Self> {
        let mut components = HashMap::new();

        for component in entries {
            validate_component_code(&component.code)?;
            validate_component_name(&component.name)?;
            validate_price_cents(component.price_cents)?;

            if components.contains_key(&component.code) {
                return Err(ValidationError::Duplicate {
                    field: "code".to_string(),
                    value: component.code,
                });
            }
            components.insert(component.code.clone(), component);
        }

        Ok(Catalog { components })
    }

    /// The 12-entry phone configuration catalog.
    ///
    /// | Code | Part | Category | Price |
    /// |---|---|---|---|
    /// | A / B / C | LED / OLED / AMOLED Screen | Screen | 10.28 / 24.07 / 33.30 |
    /// | D / E | Wide-Angle / Ultra-Wide-Angle Camera | Camera | 25.94 / 32.39 |
    /// | F / G / H | USB-C / Micro-USB / Lightning Port | Port | 18.77 / 15.13 / 20.00 |
    /// | I / J | Android / iOS OS | OS | 42.31 / 45.00 |
    /// | K / L | Metallic / Plastic Body | Body | 45.00 / 30.00 |
    pub fn reference() -> Self {
        let entries = [
            ("A", "LED Screen", Category::Screen, 10, 28),
            ("B", "OLED Screen", Category::Screen, 24, 7),
            ("C", "AMOLED Screen", Category::Screen, 33, 30),
            ("D", "Wide-Angle Camera", Category::Camera, 25, 94),
            ("E", "Ultra-Wide-Angle Camera", Category::Camera, 32, 39),
            ("F", "USB-C Port", Category::Port, 18, 77),
            ("G", "Micro-USB Port", Category::Port, 15, 13),
            ("H", "Lightning Port", Category::Port, 20, 0),
            ("I", "Android OS", Category::Os, 42, 31),
            ("J", "iOS OS", Category::Os, 45, 0),
            ("K", "Metallic Body", Category::Body, 45, 0),
            ("L", "Plastic Body", Category::Body, 30, 0),
        ];

        let components = entries
            .into_iter()
            .map(|(code, name, category, major, minor)| {
                let component =
                    Component::new(code, name, category, Money::from_major_minor(major, minor));
                (code.to_string(), component)
            })
            .collect();

        Catalog { components }
    }

    /// Looks up a component by its exact code.
    pub fn get(&self, code: &str) -> Option<&Component> {
        self.components.get(code)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Categories that no catalog entry belongs to.
    ///
    /// Non-empty means no order placed against this catalog can succeed.
    pub fn uncovered_categories(&self) -> Vec<Category> {
        let covered: BTreeSet<Category> =
            self.components.values().map(|c| c.category).collect();
        Category::ALL
            .into_iter()
            .filter(|category| !covered.contains(category))
            .collect()
    }
}
