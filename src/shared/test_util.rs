// src/shared/test_util.rs

use std::time::Duration;

use actix_web::web;
use sqlx::postgres::PgPoolOptions;

use crate::catalog::catalog_client::CatalogClient;
use crate::AppState;

/// Catalog client pointing at a port nothing listens on. Tests that use
/// it must not reach the catalog.
pub fn test_catalog() -> CatalogClient {
    CatalogClient::new("http://127.0.0.1:1", Duration::from_secs(1)).expect("catalog client")
}

/// State over a lazily-connected pool. No connection is opened until a
/// query runs, so handler paths that reject before touching the store can
/// be tested without a database.
pub fn lazy_state() -> web::Data<AppState> {
    let db_pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost:1/minimart_unreachable")
        .expect("lazy pool");
    web::Data::new(AppState {
        db_pool,
        catalog: test_catalog(),
    })
}

/// State connected to the database named by DATABASE_URL, with the schema
/// applied. Only for tests marked #[ignore].
pub async fn db_state() -> web::Data<AppState> {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for database tests");
    let db_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect to test database");
    sqlx::raw_sql(include_str!("../../schema.sql"))
        .execute(&db_pool)
        .await
        .expect("apply schema");
    web::Data::new(AppState {
        db_pool,
        catalog: test_catalog(),
    })
}
