//! Domain types for the product resource.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::StoreError;

/// A persisted product.
///
/// The `id` is assigned by the store on creation and is never accepted from
/// clients. `image` is optional and omitted from JSON when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Client-supplied fields for a create or a whole-record replace.
///
/// Deserialization enforces presence and typing of the required fields;
/// `validate` adds the field-level checks the store itself cannot express.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductDraft {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
}

impl ProductDraft {
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::Validation(
                "product name must not be blank".to_string(),
            ));
        }
        if self.quantity < 0 {
            return Err(StoreError::Validation(
                "product quantity cannot be negative".to_string(),
            ));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(StoreError::Validation(
                "product price must be a non-negative number".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, quantity: i32, price: f64) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            quantity,
            price,
            image: None,
        }
    }

    #[test]
    fn accepts_a_well_formed_draft() {
        assert!(draft("Pikachu Plush", 5, 12.99).validate().is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        assert!(matches!(
            draft("   ", 5, 12.99).validate(),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn rejects_negative_quantity() {
        assert!(matches!(
            draft("Pikachu Plush", -1, 12.99).validate(),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn rejects_non_finite_or_negative_price() {
        assert!(draft("Pikachu Plush", 5, f64::NAN).validate().is_err());
        assert!(draft("Pikachu Plush", 5, -0.01).validate().is_err());
    }

    #[test]
    fn unset_image_is_omitted_from_json() {
        let product = Product {
            id: 1,
            name: "Pikachu Plush".to_string(),
            quantity: 5,
            price: 12.99,
            image: None,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("image").is_none());
    }

    #[test]
    fn missing_required_field_fails_deserialization() {
        let err = serde_json::from_str::<ProductDraft>(r#"{"quantity": 5, "price": 12.99}"#);
        assert!(err.is_err());
    }
}
