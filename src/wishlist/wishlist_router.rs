// src/wishlist/wishlist_router.rs

use actix_web::{post, web, HttpResponse};
use sqlx::query_as;

use super::wishlist_structs::{AddToWishlistRequest, WishlistItem, WishlistMutationResponse};
use crate::errors::AppError;
use crate::AppState;

/// Adds a product to the wishlist. Unlike the cart, a repeat request is
/// an idempotent no-op: the existing row is returned unchanged with 200.
///
/// DO NOTHING makes the insert race-safe: of two concurrent requests for
/// the same product one wins the insert, the other falls through to the
/// select and finds the winner's row.
#[post("/api/wishlist")]
pub async fn add_to_wishlist(
    data: web::Data<AppState>,
    body: web::Json<AddToWishlistRequest>,
) -> Result<HttpResponse, AppError> {
    let item = body.into_inner().into_new_item()?;

    let inserted = query_as::<_, WishlistItem>(
        "INSERT INTO wishlist_items (product_id, title, rating, price, discount_percentage) \
         VALUES ($1, $2, $3, $4, $5) \
         ON CONFLICT (product_id) DO NOTHING \
         RETURNING id, product_id, title, rating, price, discount_percentage",
    )
    .bind(item.product_id)
    .bind(&item.title)
    .bind(item.rating)
    .bind(&item.price)
    .bind(item.discount_percentage)
    .fetch_optional(&data.db_pool)
    .await?;

    match inserted {
        Some(stored) => {
            tracing::info!(product_id = item.product_id, "wishlist item created");
            Ok(HttpResponse::Created().json(WishlistMutationResponse {
                message: "Item added to wishlist".to_string(),
                item: stored,
            }))
        }
        None => {
            // No row came back, so one already exists; rows are never
            // deleted, which makes this fetch safe.
            let existing = query_as::<_, WishlistItem>(
                "SELECT id, product_id, title, rating, price, discount_percentage \
                 FROM wishlist_items WHERE product_id = $1",
            )
            .bind(item.product_id)
            .fetch_one(&data.db_pool)
            .await?;

            Ok(HttpResponse::Ok().json(WishlistMutationResponse {
                message: "Item already in wishlist".to_string(),
                item: existing,
            }))
        }
    }
}
