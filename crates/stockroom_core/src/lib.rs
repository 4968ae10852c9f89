//! Core domain logic for Stockroom.
//! This crate is the single source of truth for resource lifecycle decisions.

pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use controller::{ModelState, Outcome, ProductsController, ViewModel, ACTION_INDEX};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::product::{Product, ProductId, ProductValidationError};
pub use repo::product_repo::{ProductRepository, RepoError, RepoResult, SqliteProductRepository};
pub use service::calculator::{Arithmetic, BasicArithmetic, Calculator};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
