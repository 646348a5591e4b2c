// src/main.rs

use actix_web::{web, App, HttpServer};
use sqlx::{Pool, Postgres};
use tracing_actix_web::TracingLogger;

mod cart;
mod catalog;
mod config;
mod errors;
mod shared;
mod wishlist;

use crate::catalog::catalog_client::CatalogClient;
use crate::config::AppConfig;

/// Shared application state: the Postgres pool for the cart/wishlist
/// stores and the outbound client for the product catalog.
pub struct AppState {
    pub db_pool: Pool<Postgres>,
    pub catalog: CatalogClient,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().expect("Failed to load configuration");

    // The cart and wishlist tables live in Postgres; see schema.sql.
    // price columns are NUMERIC to stay compatible with bigdecimal::BigDecimal.
    let db_pool = Pool::<Postgres>::connect(&config.database_url)
        .await
        .expect("Failed to connect to PostgreSQL");
    tracing::info!("connected to PostgreSQL");

    let catalog = CatalogClient::new(&config.catalog_base_url, config.catalog_timeout)
        .expect("Failed to build catalog client");

    let app_state = web::Data::new(AppState { db_pool, catalog });

    tracing::info!(
        "starting minimart API on {}:{}",
        config.server_host,
        config.server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(TracingLogger::default())
            // Cart
            .service(cart::cart_router::add_to_cart)
            .service(cart::cart_router::get_cart)
            // Wishlist
            .service(wishlist::wishlist_router::add_to_wishlist)
            // Catalog (listing and detail views)
            .service(catalog::catalog_router::list_products)
            .service(catalog::catalog_router::get_product)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
