//! Auxiliary services with substitutable collaborators.

pub mod calculator;
