// src/cart/cart_structs.rs

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;
use crate::shared::coercion;

/// Request body for POST /api/add-to-cart.
///
/// Required fields stay `Option` here so the handler can answer with a
/// descriptive 400 instead of a bare deserialization error. Numeric
/// fields accept JSON numbers or numeric strings; see `shared::coercion`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    #[serde(default, deserialize_with = "coercion::opt_i64")]
    pub product_id: Option<i64>,
    #[serde(default, deserialize_with = "coercion::opt_i32")]
    pub quantity: Option<i32>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "coercion::opt_f64")]
    pub rating: Option<f64>,
    pub brand: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "coercion::opt_decimal")]
    pub price: Option<BigDecimal>,
    #[serde(default, deserialize_with = "coercion::opt_f64")]
    pub discount_percentage: Option<f64>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "coercion::opt_i32")]
    pub stock: Option<i32>,
}

/// A validated add-to-cart request, ready to be written.
#[derive(Debug)]
pub struct NewCartItem {
    pub product_id: i64,
    pub quantity: i32,
    pub title: String,
    pub rating: Option<f64>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub price: BigDecimal,
    pub discount_percentage: Option<f64>,
    pub description: Option<String>,
    pub stock: Option<i32>,
}

impl AddToCartRequest {
    /// Checks the required fields and applies the quantity default.
    pub fn into_new_item(self) -> Result<NewCartItem, AppError> {
        match (self.product_id, self.title, self.price) {
            (Some(product_id), Some(title), Some(price)) => Ok(NewCartItem {
                product_id,
                quantity: self.quantity.unwrap_or(1),
                title,
                rating: self.rating,
                brand: self.brand,
                category: self.category,
                price,
                discount_percentage: self.discount_percentage,
                description: self.description,
                stock: self.stock,
            }),
            (product_id, title, price) => {
                let mut missing = Vec::new();
                if product_id.is_none() {
                    missing.push("productId");
                }
                if title.is_none() {
                    missing.push("title");
                }
                if price.is_none() {
                    missing.push("price");
                }
                Err(AppError::Validation(format!(
                    "Missing required product fields: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

/// A cart row as stored. Serialized with the original camelCase keys.
#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: i32,
    pub product_id: i64,
    pub title: String,
    pub rating: Option<f64>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub price: BigDecimal,
    pub discount_percentage: Option<f64>,
    pub description: Option<String>,
    pub stock: Option<i32>,
    pub quantity: i32,
    pub added_at: DateTime<Utc>,
}

/// Row returned by the cart upsert: the stored item plus whether the
/// statement inserted or incremented.
#[derive(FromRow)]
pub struct UpsertedCartItem {
    #[sqlx(flatten)]
    pub item: CartItem,
    pub inserted: bool,
}

#[derive(Serialize)]
pub struct CartMutationResponse {
    pub message: String,
    pub item: CartItem,
}

#[derive(Serialize)]
pub struct CartListResponse {
    pub success: bool,
    pub data: Vec<CartItem>,
    pub count: usize,
}

/// Failure body for GET /api/get-cart. Callers check `success`, not just
/// the HTTP status.
#[derive(Serialize)]
pub struct CartFetchError {
    pub success: bool,
    pub error: String,
}
