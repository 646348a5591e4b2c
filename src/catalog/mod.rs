// src/catalog/mod.rs

pub mod catalog_client;
pub mod catalog_router;
pub mod catalog_structs;
