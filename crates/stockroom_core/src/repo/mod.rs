//! Persistence contracts and their SQLite implementations.

pub mod product_repo;
