//! Domain model types shared across repository and controller layers.

pub mod product;
