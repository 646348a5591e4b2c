// src/catalog/catalog_client.rs

use std::time::Duration;

use reqwest::StatusCode;

use super::catalog_structs::{Product, ProductsPage};
use crate::errors::AppError;

/// Thin client for the public read-only product catalog. One fetch per
/// request; no retry, no cache.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the full product collection.
    pub async fn list_products(&self) -> Result<ProductsPage, AppError> {
        let url = format!("{}/products", self.base_url);
        let resp = self.http.get(&url).send().await?.error_for_status()?;
        Ok(resp.json::<ProductsPage>().await?)
    }

    /// Fetches a single product. The catalog's 404 surfaces as our 404.
    pub async fn get_product(&self, id: i64) -> Result<Product, AppError> {
        let url = format!("{}/products/{}", self.base_url, id);
        let resp = self.http.get(&url).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Product with id {} not found", id)));
        }
        let resp = resp.error_for_status()?;
        Ok(resp.json::<Product>().await?)
    }
}
