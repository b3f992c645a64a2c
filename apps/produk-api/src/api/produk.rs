//! Produk routes

use axum::Router;
use domain_produk::{MySqlProductRepository, ProductService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MySqlProductRepository::new(state.db.clone());
    let service = ProductService::new(repository);
    handlers::router(service)
}
