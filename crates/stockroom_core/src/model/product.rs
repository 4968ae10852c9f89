//! Product domain model.
//!
//! # Responsibility
//! - Define the canonical product record consumed by the lifecycle controller.
//! - Guard field-level invariants before records reach persistence.
//!
//! # Invariants
//! - `id` is assigned by the caller before `create` and never changes afterwards.
//! - `name` is non-empty on every write path.
//! - `price_cents` is non-negative on every write path.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a persisted product.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProductId = i64;

/// Canonical product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Caller-assigned stable id. Immutable once persisted.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in cents.
    pub price_cents: i64,
    /// Units currently on hand.
    pub stock: u32,
    /// Display color tag.
    pub color: String,
}

impl Product {
    /// Creates a fully-populated product with a caller-assigned id.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price_cents: i64,
        stock: u32,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price_cents,
            stock,
            color: color.into(),
        }
    }

    /// Creates an identifier-only stub for delete-by-id paths.
    ///
    /// Only `id` carries meaning; the remaining fields are empty placeholders.
    /// A tombstone fails `validate()` on purpose, so it can never slip through
    /// a create/update write path.
    pub fn tombstone(id: ProductId) -> Self {
        Self {
            id,
            name: String::new(),
            price_cents: 0,
            stock: 0,
            color: String::new(),
        }
    }

    /// Validates field-level invariants ahead of persistence writes.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is empty or whitespace-only.
    /// - `NegativePrice` when `price_cents` is below zero.
    pub fn validate(&self) -> Result<(), ProductValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProductValidationError::EmptyName);
        }
        if self.price_cents < 0 {
            return Err(ProductValidationError::NegativePrice(self.price_cents));
        }
        Ok(())
    }
}

/// Field-level validation failure for product write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductValidationError {
    /// `name` is empty or whitespace-only.
    EmptyName,
    /// `price_cents` is below zero.
    NegativePrice(i64),
}

impl Display for ProductValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "product name must not be empty"),
            Self::NegativePrice(value) => {
                write!(f, "product price must not be negative, got {value}")
            }
        }
    }
}

impl Error for ProductValidationError {}
