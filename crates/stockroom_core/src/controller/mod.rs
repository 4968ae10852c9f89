//! Resource lifecycle decision layer.
//!
//! # Responsibility
//! - Map (operation, inputs, repository state) to exactly one outcome
//!   variant per call.
//! - Keep domain conditions (absent, invalid, mismatched) out of the error
//!   channel; only infrastructure failures propagate as errors.

pub mod outcome;
pub mod products;

pub use outcome::{Outcome, ViewModel, ACTION_INDEX};
pub use products::{ModelState, ProductsController};
