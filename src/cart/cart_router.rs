// src/cart/cart_router.rs

use actix_web::{get, post, web, HttpResponse};
use sqlx::query_as;

use super::cart_structs::{
    AddToCartRequest, CartFetchError, CartItem, CartListResponse, CartMutationResponse,
    UpsertedCartItem,
};
use crate::errors::AppError;
use crate::AppState;

/// Adds a product to the cart, or increments its quantity when a row for
/// the product already exists.
///
/// The write is a single conditional insert so that two concurrent
/// requests for the same product can neither create duplicate rows nor
/// lose an increment. `xmax = 0` marks a freshly inserted row; an updated
/// row carries the previous version's xmax.
#[post("/api/add-to-cart")]
pub async fn add_to_cart(
    data: web::Data<AppState>,
    body: web::Json<AddToCartRequest>,
) -> Result<HttpResponse, AppError> {
    let item = body.into_inner().into_new_item()?;

    let upserted = query_as::<_, UpsertedCartItem>(
        "INSERT INTO cart_items \
           (product_id, title, rating, brand, category, price, \
            discount_percentage, description, stock, quantity) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
         ON CONFLICT (product_id) DO UPDATE \
           SET quantity = cart_items.quantity + EXCLUDED.quantity \
         RETURNING id, product_id, title, rating, brand, category, price, \
                   discount_percentage, description, stock, quantity, added_at, \
                   (xmax = 0) AS inserted",
    )
    .bind(item.product_id)
    .bind(&item.title)
    .bind(item.rating)
    .bind(&item.brand)
    .bind(&item.category)
    .bind(&item.price)
    .bind(item.discount_percentage)
    .bind(&item.description)
    .bind(item.stock)
    .bind(item.quantity)
    .fetch_one(&data.db_pool)
    .await?;

    if upserted.inserted {
        tracing::info!(product_id = item.product_id, "cart item created");
        Ok(HttpResponse::Created().json(CartMutationResponse {
            message: "Item added to cart".to_string(),
            item: upserted.item,
        }))
    } else {
        tracing::info!(
            product_id = item.product_id,
            quantity = upserted.item.quantity,
            "cart quantity updated"
        );
        Ok(HttpResponse::Ok().json(CartMutationResponse {
            message: "Cart updated".to_string(),
            item: upserted.item,
        }))
    }
}

/// Returns every cart row with a count and a success flag. An empty cart
/// is a successful response with an empty list, not an error.
#[get("/api/get-cart")]
pub async fn get_cart(data: web::Data<AppState>) -> HttpResponse {
    let result = query_as::<_, CartItem>(
        "SELECT id, product_id, title, rating, brand, category, price, \
                discount_percentage, description, stock, quantity, added_at \
         FROM cart_items ORDER BY added_at, id",
    )
    .fetch_all(&data.db_pool)
    .await;

    match result {
        Ok(items) => {
            let count = items.len();
            HttpResponse::Ok().json(CartListResponse {
                success: true,
                data: items,
                count,
            })
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch cart items");
            HttpResponse::InternalServerError().json(CartFetchError {
                success: false,
                error: "Failed to fetch cart items".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use super::*;
    use crate::shared::test_util;

    #[actix_web::test]
    async fn add_to_cart_without_product_id_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(test_util::lazy_state())
                .service(add_to_cart),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/add-to-cart")
            .set_json(json!({ "title": "Powder Canister", "price": 14.99 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("productId"));
    }

    #[actix_web::test]
    async fn add_to_cart_without_title_or_price_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(test_util::lazy_state())
                .service(add_to_cart),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/add-to-cart")
            .set_json(json!({ "productId": 3 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("title"));
        assert!(message.contains("price"));
    }

    #[actix_web::test]
    async fn unparsable_numeric_field_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(test_util::lazy_state())
                .service(add_to_cart),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/add-to-cart")
            .set_json(json!({ "productId": 3, "title": "Powder Canister", "price": "free" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    // Exercises the upsert semantics end to end; needs DATABASE_URL.
    #[actix_web::test]
    #[ignore = "requires a running PostgreSQL, see schema.sql"]
    async fn cart_round_trip_accumulates_quantity() {
        let state = test_util::db_state().await;
        sqlx::query("DELETE FROM cart_items")
            .execute(&state.db_pool)
            .await
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(add_to_cart)
                .service(get_cart),
        )
        .await;

        // Empty store: success with an empty list.
        let req = test::TestRequest::get().uri("/api/get-cart").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["count"], json!(0));
        assert_eq!(body["data"], json!([]));

        // First add inserts.
        let payload = json!({
            "productId": 3,
            "quantity": 2,
            "title": "Powder Canister",
            "rating": 4.26,
            "brand": "Velvet Touch",
            "category": "beauty",
            "price": 14.99,
            "discountPercentage": 18.14,
            "description": "Fine powder in a compact canister.",
            "stock": 89
        });
        let req = test::TestRequest::post()
            .uri("/api/add-to-cart")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["item"]["quantity"], json!(2));

        // Second add increments the same row.
        let mut repeat = payload.clone();
        repeat["quantity"] = json!(3);
        let req = test::TestRequest::post()
            .uri("/api/add-to-cart")
            .set_json(&repeat)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["item"]["quantity"], json!(5));

        // Still exactly one row for the product.
        let req = test::TestRequest::get().uri("/api/get-cart").to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["count"], json!(1));
        assert_eq!(body["data"][0]["productId"], json!(3));
        assert_eq!(body["data"][0]["quantity"], json!(5));
    }
}
