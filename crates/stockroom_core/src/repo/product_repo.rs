//! Product repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Define the asynchronous persistence capability consumed by the
//!   lifecycle controller.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Product::validate()` before SQL mutations.
//! - Absence on lookup is `Ok(None)`, never an error.
//! - Zero-row mutations on update/delete surface as `NotFound`.

use crate::db::DbError;
use crate::model::product::{Product, ProductId, ProductValidationError};
use async_trait::async_trait;
use parking_lot::Mutex;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PRODUCT_SELECT_SQL: &str = "SELECT
    id,
    name,
    price_cents,
    stock,
    color
FROM products";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for product persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ProductValidationError),
    Db(DbError),
    NotFound(ProductId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "product not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid product data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ProductValidationError> for RepoError {
    fn from(value: ProductValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Asynchronous persistence capability for products.
///
/// The controller consumes this trait behind `Arc<dyn ProductRepository>`,
/// so test doubles can substitute real persistence.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns every stored product; empty vec when none exist.
    async fn get_all(&self) -> RepoResult<Vec<Product>>;
    /// Returns the product matching `id`, or `None` when absent.
    async fn get_by_id(&self, id: ProductId) -> RepoResult<Option<Product>>;
    /// Persists a new product. The caller pre-populates `product.id`.
    async fn create(&self, product: &Product) -> RepoResult<()>;
    /// Overwrites the stored product matching `product.id`.
    async fn update(&self, product: &Product) -> RepoResult<()>;
    /// Removes the stored product matching `product.id`.
    async fn delete(&self, product: &Product) -> RepoResult<()>;
}

/// SQLite-backed product repository.
///
/// Owns its connection behind a mutex so a single instance can back
/// concurrent lifecycle calls through a shared trait object.
pub struct SqliteProductRepository {
    conn: Mutex<Connection>,
}

impl SqliteProductRepository {
    /// Wraps a migrated/ready connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn get_all(&self) -> RepoResult<Vec<Product>> {
        let conn = self.conn.lock();
        let sql = format!("{PRODUCT_SELECT_SQL} ORDER BY id ASC;");
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        let mut products = Vec::new();
        while let Some(row) = rows.next()? {
            products.push(product_from_row(row)?);
        }
        Ok(products)
    }

    async fn get_by_id(&self, id: ProductId) -> RepoResult<Option<Product>> {
        let conn = self.conn.lock();
        let sql = format!("{PRODUCT_SELECT_SQL} WHERE id = ?1;");
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(product_from_row(row)?));
        }
        Ok(None)
    }

    async fn create(&self, product: &Product) -> RepoResult<()> {
        product.validate()?;
        if product.id <= 0 {
            return Err(RepoError::InvalidData(format!(
                "create requires a positive caller-assigned id, got {}",
                product.id
            )));
        }

        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO products (id, name, price_cents, stock, color)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                product.id,
                product.name.as_str(),
                product.price_cents,
                product.stock,
                product.color.as_str(),
            ],
        )?;
        Ok(())
    }

    async fn update(&self, product: &Product) -> RepoResult<()> {
        product.validate()?;

        let conn = self.conn.lock();
        let changed = conn.execute(
            "UPDATE products
             SET
                name = ?2,
                price_cents = ?3,
                stock = ?4,
                color = ?5
             WHERE id = ?1;",
            params![
                product.id,
                product.name.as_str(),
                product.price_cents,
                product.stock,
                product.color.as_str(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(product.id));
        }
        Ok(())
    }

    async fn delete(&self, product: &Product) -> RepoResult<()> {
        let conn = self.conn.lock();
        let changed = conn.execute("DELETE FROM products WHERE id = ?1;", [product.id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(product.id));
        }
        Ok(())
    }
}

fn product_from_row(row: &Row<'_>) -> RepoResult<Product> {
    Ok(Product {
        id: row.get("id")?,
        name: row.get("name")?,
        price_cents: row.get("price_cents")?,
        stock: row.get("stock")?,
        color: row.get("color")?,
    })
}
