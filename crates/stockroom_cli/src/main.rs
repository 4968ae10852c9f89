//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `stockroom_core` linkage.
//! - Drive one pass of the product lifecycle against in-memory storage.
//! - Keep output deterministic for quick local sanity checks.

use std::error::Error;
use std::sync::Arc;
use stockroom_core::db::open_db_in_memory;
use stockroom_core::{ModelState, Outcome, Product, ProductsController, SqliteProductRepository};

fn outcome_tag(outcome: &Outcome) -> String {
    match outcome {
        Outcome::View(_) => "view".to_string(),
        Outcome::Redirect(target) => format!("redirect:{target}"),
        Outcome::NotFound => "not_found".to_string(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    println!("stockroom_core version={}", stockroom_core::core_version());

    let conn = open_db_in_memory()?;
    let repo = Arc::new(SqliteProductRepository::new(conn));
    let controller = ProductsController::new(repo);

    let created = controller
        .create(Product::new(1, "Pen", 100, 20, "blue"), &ModelState::valid())
        .await?;
    println!("create(Pen) -> {}", outcome_tag(&created));

    let created = controller
        .create(
            Product::new(2, "Notebook", 200, 20, "red"),
            &ModelState::valid(),
        )
        .await?;
    println!("create(Notebook) -> {}", outcome_tag(&created));

    let listed = controller.index().await?;
    let count = listed
        .view_model()
        .and_then(|model| model.as_product_list())
        .map_or(0, <[_]>::len);
    println!("index -> {} count={count}", outcome_tag(&listed));

    let edited = controller
        .edit(
            1,
            Product::new(1, "Pen", 150, 18, "blue"),
            &ModelState::valid(),
        )
        .await?;
    println!("edit(1) -> {}", outcome_tag(&edited));

    let deleted = controller.delete_confirmed(2).await?;
    println!("delete(2) -> {}", outcome_tag(&deleted));

    let missing = controller.details(Some(2)).await?;
    println!("details(2) -> {}", outcome_tag(&missing));

    Ok(())
}
