// src/wishlist/wishlist_structs.rs

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;
use crate::shared::coercion;

/// Request body for POST /api/wishlist. Same coercion rules as the cart:
/// numeric fields accept numbers or numeric strings.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToWishlistRequest {
    #[serde(default, deserialize_with = "coercion::opt_i64")]
    pub product_id: Option<i64>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "coercion::opt_f64")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "coercion::opt_decimal")]
    pub price: Option<BigDecimal>,
    #[serde(default, deserialize_with = "coercion::opt_f64")]
    pub discount_percentage: Option<f64>,
}

/// A validated wishlist request, ready to be written.
#[derive(Debug)]
pub struct NewWishlistItem {
    pub product_id: i64,
    pub title: String,
    pub rating: Option<f64>,
    pub price: BigDecimal,
    pub discount_percentage: Option<f64>,
}

impl AddToWishlistRequest {
    pub fn into_new_item(self) -> Result<NewWishlistItem, AppError> {
        match (self.product_id, self.title, self.price) {
            (Some(product_id), Some(title), Some(price)) => Ok(NewWishlistItem {
                product_id,
                title,
                rating: self.rating,
                price,
                discount_percentage: self.discount_percentage,
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

/// A wishlist row as stored: the display snapshot, without a quantity.
#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: i32,
    pub product_id: i64,
    pub title: String,
    pub rating: Option<f64>,
    pub price: BigDecimal,
    pub discount_percentage: Option<f64>,
}

#[derive(Serialize)]
pub struct WishlistMutationResponse {
    pub message: String,
    pub item: WishlistItem,
}
