//! # Domain Types
//!
//! Core domain types used throughout the device configurator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   Component     │   │    Category     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  code ("A")     │   │  Screen         │                             │
//! │  │  name           │──►│  Camera         │                             │
//! │  │  category       │   │  Port           │                             │
//! │  │  price_cents    │   │  OS             │                             │
//! │  └─────────────────┘   │  Body           │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::Deserialize;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// A classification bucket. A valid order selects exactly one component
/// from each category.
///
/// Ordering follows declaration order, which is also the order categories
/// are reported in error messages. Deserialized from catalog configuration;
/// responses carry names through [`Category::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Category {
    Screen,
    Camera,
    Port,
    #[serde(rename = "OS")]
    Os,
    Body,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Screen,
        Category::Camera,
        Category::Port,
        Category::Os,
        Category::Body,
    ];

    /// Wire and display name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Screen => "Screen",
            Category::Camera => "Camera",
            Category::Port => "Port",
            Category::Os => "OS",
            Category::Body => "Body",
        }
    }

    /// Joins category names with `", "`.
    pub fn list<'a>(categories: impl Iterator<Item = &'a Category>) -> String {
        categories
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Component
// =============================================================================

/// A single purchasable part. Loaded from `[[components]]` configuration
/// entries; never serialized back out.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Component {
    /// Short business key submitted by clients ("A", "B", ...).
    pub code: String,

    /// Display name returned in `ordered_parts`.
    pub name: String,

    pub category: Category,

    /// Unit price in cents (smallest currency unit).
    pub price_cents: i64,
}

impl Component {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        price: Money,
    ) -> Self {
        Component {
            code: code.into(),
            name: name.into(),
            category,
            price_cents: price.cents(),
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}
