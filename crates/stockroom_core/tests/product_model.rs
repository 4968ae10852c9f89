//! Product model validation and serialization tests.

use stockroom_core::{Product, ProductValidationError};

#[test]
fn validate_accepts_well_formed_product() {
    let product = Product::new(1, "Pen", 100, 20, "blue");
    assert!(product.validate().is_ok());
}

#[test]
fn validate_rejects_whitespace_only_name() {
    let product = Product::new(1, "   ", 100, 20, "blue");
    assert_eq!(
        product.validate().unwrap_err(),
        ProductValidationError::EmptyName
    );
}

#[test]
fn validate_rejects_negative_price() {
    let product = Product::new(1, "Pen", -5, 20, "blue");
    assert_eq!(
        product.validate().unwrap_err(),
        ProductValidationError::NegativePrice(-5)
    );
}

#[test]
fn tombstone_carries_only_the_identifier_and_fails_validation() {
    let stub = Product::tombstone(7);
    assert_eq!(stub.id, 7);
    assert!(stub.name.is_empty());
    assert!(stub.validate().is_err());
}

#[test]
fn serde_roundtrip_preserves_field_names() {
    let product = Product::new(2, "Notebook", 200, 20, "red");

    let json = serde_json::to_value(&product).unwrap();
    assert_eq!(json["id"], 2);
    assert_eq!(json["name"], "Notebook");
    assert_eq!(json["price_cents"], 200);
    assert_eq!(json["stock"], 20);
    assert_eq!(json["color"], "red");

    let decoded: Product = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, product);
}

#[test]
fn validation_error_messages_are_human_readable() {
    assert_eq!(
        ProductValidationError::EmptyName.to_string(),
        "product name must not be empty"
    );
    assert!(ProductValidationError::NegativePrice(-1)
        .to_string()
        .contains("-1"));
}
