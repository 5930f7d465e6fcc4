//! Catalog product documents and the DTOs used to create and update them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::Identified;

/// Product color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
}

/// Physical characteristics of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFeature {
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
    /// Color.
    pub color: Color,
}

/// A catalog product stored in the products index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Document identifier (a UUID assigned on save).
    #[serde(default)]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Units in stock.
    pub stock: i32,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    /// Optional physical characteristics.
    #[serde(default)]
    pub feature: Option<ProductFeature>,
}

impl Identified for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Request body for creating a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreateDto {
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Units in stock.
    pub stock: i32,
    /// Optional physical characteristics.
    #[serde(default)]
    pub feature: Option<ProductFeature>,
}

impl ProductCreateDto {
    /// Checks the fields a stored product must satisfy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.name, self.price, self.stock)
    }

    /// Builds the product to store under `id`.
    pub fn into_product(self, id: String, created: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            stock: self.stock,
            created,
            updated: None,
            feature: self.feature,
        }
    }
}

/// Request body for updating a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdateDto {
    /// Identifier of the product to replace.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Units in stock.
    pub stock: i32,
    /// Optional physical characteristics.
    #[serde(default)]
    pub feature: Option<ProductFeature>,
}

impl ProductUpdateDto {
    /// Checks the fields a stored product must satisfy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::InvalidDocument {
                message: "product id is required".to_string(),
            });
        }
        validate_fields(&self.name, self.price, self.stock)
    }

    /// Applies this update on top of `current`, stamping `updated`.
    pub fn apply_to(self, current: Product, updated: DateTime<Utc>) -> Product {
        Product {
            id: current.id,
            name: self.name,
            price: self.price,
            stock: self.stock,
            created: current.created,
            updated: Some(updated),
            feature: self.feature,
        }
    }
}

fn validate_fields(name: &str, price: f64, stock: i32) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::InvalidDocument {
            message: "product name is required".to_string(),
        });
    }
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidDocument {
            message: format!("price must be a non-negative number, got {}", price),
        });
    }
    if stock < 0 {
        return Err(ValidationError::InvalidDocument {
            message: format!("stock cannot be negative, got {}", stock),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_dto() -> ProductCreateDto {
        ProductCreateDto {
            name: "Pen".to_string(),
            price: 12.5,
            stock: 40,
            feature: Some(ProductFeature {
                width: 1,
                height: 14,
                color: Color::Blue,
            }),
        }
    }

    #[test]
    fn test_create_dto_validation() {
        assert!(create_dto().validate().is_ok());

        let mut dto = create_dto();
        dto.name = "  ".to_string();
        assert!(dto.validate().is_err());

        let mut dto = create_dto();
        dto.price = -1.0;
        assert!(dto.validate().is_err());

        let mut dto = create_dto();
        dto.price = f64::NAN;
        assert!(dto.validate().is_err());

        let mut dto = create_dto();
        dto.stock = -3;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_requires_id() {
        let dto = ProductUpdateDto {
            id: String::new(),
            name: "Pen".to_string(),
            price: 1.0,
            stock: 1,
            feature: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_apply_update_keeps_identity_and_created() {
        let created = Utc::now();
        let current = create_dto().into_product("p-1".to_string(), created);
        let later = created + chrono::Duration::seconds(5);
        let updated = ProductUpdateDto {
            id: "ignored".to_string(),
            name: "Pencil".to_string(),
            price: 3.0,
            stock: 7,
            feature: None,
        }
        .apply_to(current, later);

        assert_eq!(updated.id, "p-1");
        assert_eq!(updated.created, created);
        assert_eq!(updated.updated, Some(later));
        assert_eq!(updated.name, "Pencil");
        assert!(updated.feature.is_none());
    }

    #[test]
    fn test_color_serializes_by_name() {
        let feature = ProductFeature {
            width: 2,
            height: 3,
            color: Color::Red,
        };
        assert_eq!(
            serde_json::to_value(&feature).unwrap(),
            json!({ "width": 2, "height": 3, "color": "Red" })
        );
    }
}
