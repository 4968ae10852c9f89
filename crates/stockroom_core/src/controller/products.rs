//! Product lifecycle controller.
//!
//! # Responsibility
//! - Apply the validation / existence / redirect decision sequence for
//!   index, details, create, edit and delete flows.
//! - Delegate all persistence to the injected `ProductRepository`.
//!
//! # Invariants
//! - Every operation produces exactly one `Outcome` per call.
//! - Each repository operation is issued at most once per lifecycle call.
//! - Infrastructure failures propagate unchanged; no retries, no local
//!   recovery.
//! - The controller is stateless across calls and caches no records.

use crate::controller::outcome::{Outcome, ViewModel};
use crate::model::product::{Product, ProductId};
use crate::repo::product_repo::{ProductRepository, RepoResult};
use log::{info, warn};
use std::sync::Arc;

/// Host-side model validation verdict for a submitted payload.
///
/// The hosting framework performs field validation before the controller
/// runs; this type carries its verdict the way a model-state dictionary
/// would. An empty state is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelState {
    errors: Vec<(String, String)>,
}

impl ModelState {
    /// Creates a valid (error-free) state.
    pub fn valid() -> Self {
        Self::default()
    }

    /// Records one field validation error.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push((field.into(), message.into()));
    }

    /// Returns whether the submitted payload passed validation.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates recorded `(field, message)` pairs.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }
}

/// Lifecycle controller for product resources.
pub struct ProductsController {
    repo: Arc<dyn ProductRepository>,
}

impl ProductsController {
    /// Creates a controller over the injected repository capability.
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Lists all products.
    pub async fn index(&self) -> RepoResult<Outcome> {
        let products = self.repo.get_all().await?;
        info!(
            "event=product_index module=controller status=ok count={}",
            products.len()
        );
        Ok(Outcome::View(ViewModel::ProductList(products)))
    }

    /// Shows one product.
    ///
    /// A missing identifier forwards to the index; an unknown identifier is
    /// the uniform not-found signal.
    pub async fn details(&self, id: Option<ProductId>) -> RepoResult<Outcome> {
        let Some(id) = id else {
            return Ok(Outcome::redirect_to_index());
        };
        match self.repo.get_by_id(id).await? {
            Some(product) => Ok(Outcome::View(ViewModel::Product(product))),
            None => Ok(Outcome::NotFound),
        }
    }

    /// Presents the blank create form. No repository interaction.
    pub fn create_form(&self) -> Outcome {
        Outcome::View(ViewModel::Empty)
    }

    /// Persists a submitted product.
    ///
    /// An invalid payload is echoed back for correction and must not reach
    /// the repository.
    pub async fn create(&self, candidate: Product, model_state: &ModelState) -> RepoResult<Outcome> {
        if !model_state.is_valid() {
            return Ok(Outcome::View(ViewModel::Product(candidate)));
        }

        self.repo.create(&candidate).await?;
        info!(
            "event=product_create module=controller status=ok id={}",
            candidate.id
        );
        Ok(Outcome::redirect_to_index())
    }

    /// Presents the edit form for one product.
    ///
    /// Same decision sequence as `details`: missing identifier forwards to
    /// the index, unknown identifier is not-found.
    pub async fn edit_form(&self, id: Option<ProductId>) -> RepoResult<Outcome> {
        let Some(id) = id else {
            return Ok(Outcome::redirect_to_index());
        };
        match self.repo.get_by_id(id).await? {
            Some(product) => Ok(Outcome::View(ViewModel::Product(product))),
            None => Ok(Outcome::NotFound),
        }
    }

    /// Applies a submitted edit.
    ///
    /// A route/body identifier mismatch answers not-found without touching
    /// the repository, so the response does not reveal whether the record
    /// exists under a different id.
    pub async fn edit(
        &self,
        route_id: ProductId,
        candidate: Product,
        model_state: &ModelState,
    ) -> RepoResult<Outcome> {
        if route_id != candidate.id {
            warn!(
                "event=product_edit module=controller status=rejected route_id={route_id} body_id={}",
                candidate.id
            );
            return Ok(Outcome::NotFound);
        }
        if !model_state.is_valid() {
            return Ok(Outcome::View(ViewModel::Product(candidate)));
        }

        self.repo.update(&candidate).await?;
        info!(
            "event=product_edit module=controller status=ok id={}",
            candidate.id
        );
        Ok(Outcome::redirect_to_index())
    }

    /// Presents the delete confirmation prompt.
    ///
    /// Unlike `details`, a missing identifier is not-found here: there is no
    /// sensible form to fall back to when deletion was requested without a
    /// target.
    pub async fn delete_prompt(&self, id: Option<ProductId>) -> RepoResult<Outcome> {
        let Some(id) = id else {
            return Ok(Outcome::NotFound);
        };
        match self.repo.get_by_id(id).await? {
            Some(product) => Ok(Outcome::View(ViewModel::Product(product))),
            None => Ok(Outcome::NotFound),
        }
    }

    /// Executes a confirmed deletion by identifier.
    ///
    /// Deletion commits by id with a tombstone stub and no pre-fetch, so
    /// "absent at delete time" is the repository's concern, not this
    /// layer's. Exactly one `delete` call per invocation.
    pub async fn delete_confirmed(&self, id: ProductId) -> RepoResult<Outcome> {
        self.repo.delete(&Product::tombstone(id)).await?;
        info!("event=product_delete module=controller status=ok id={id}");
        Ok(Outcome::redirect_to_index())
    }
}

#[cfg(test)]
mod tests {
    use super::ModelState;

    #[test]
    fn model_state_starts_valid_and_tracks_errors() {
        let mut state = ModelState::valid();
        assert!(state.is_valid());

        state.add_error("name", "name is required");
        assert!(!state.is_valid());
        let collected: Vec<_> = state.errors().collect();
        assert_eq!(collected, vec![("name", "name is required")]);
    }
}
