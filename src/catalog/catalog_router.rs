// src/catalog/catalog_router.rs

use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

use super::catalog_structs::{
    filter_products, ProductCard, ProductDetail, ProductListResponse,
};
use crate::errors::AppError;
use crate::AppState;

#[derive(Deserialize)]
pub struct ListQuery {
    /// Search text from the header bar; matched as a substring of title
    /// or description.
    pub q: Option<String>,
}

/// Listing view: the full collection from the catalog, optionally
/// filtered, shaped into cards. Every request re-fetches; there is no
/// cache between the catalog and this endpoint.
#[get("/api/products")]
pub async fn list_products(
    data: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let page = data.catalog.list_products().await?;
    let total = page.total;

    let products = match query.q.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => filter_products(page.products, q),
        _ => page.products,
    };

    let cards: Vec<ProductCard> = products.iter().map(ProductCard::from_product).collect();
    tracing::debug!(count = cards.len(), "serving product listing");

    Ok(HttpResponse::Ok().json(ProductListResponse {
        count: cards.len(),
        total,
        products: cards,
    }))
}

/// Detail view for one product, with the computed pre-discount price and
/// stock flag the page displays.
#[get("/api/products/{id}")]
pub async fn get_product(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let product = data.catalog.get_product(id).await?;
    Ok(HttpResponse::Ok().json(ProductDetail::from_product(product)))
}
