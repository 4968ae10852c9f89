//! Outcome variants produced by lifecycle operations.
//!
//! The hosting surface decides what to do with each variant (render a page,
//! issue a redirect, answer 404). This layer only decides which variant
//! applies.

use crate::model::product::Product;

/// The only redirect target this system produces.
pub const ACTION_INDEX: &str = "index";

/// Model attached to a `View` outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewModel {
    /// Listing of all products, in repository order.
    ProductList(Vec<Product>),
    /// A single product, either looked up or echoed back for correction.
    Product(Product),
    /// Blank form with no backing record.
    Empty,
}

impl ViewModel {
    /// Returns the single product when this model carries one.
    pub fn as_product(&self) -> Option<&Product> {
        match self {
            Self::Product(product) => Some(product),
            _ => None,
        }
    }

    /// Returns the product list when this model carries one.
    pub fn as_product_list(&self) -> Option<&[Product]> {
        match self {
            Self::ProductList(products) => Some(products),
            _ => None,
        }
    }
}

/// Tagged result of one lifecycle operation.
///
/// Exactly one variant is produced per call; domain conditions never travel
/// through the error channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Render the attached model.
    View(ViewModel),
    /// Forward to another named action.
    Redirect(&'static str),
    /// The requested record does not exist.
    NotFound,
}

impl Outcome {
    /// The successful-mutation outcome: forward to the index action.
    pub fn redirect_to_index() -> Self {
        Self::Redirect(ACTION_INDEX)
    }

    /// Returns the redirect target when this outcome is a redirect.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Self::Redirect(target) => Some(target),
            _ => None,
        }
    }

    /// Returns the attached model when this outcome renders a view.
    pub fn view_model(&self) -> Option<&ViewModel> {
        match self {
            Self::View(model) => Some(model),
            _ => None,
        }
    }

    /// Returns whether this outcome is the uniform not-found signal.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
