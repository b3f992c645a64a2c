use axum::Router;

pub mod health;
pub mod produk;

/// API routes without the `/api` prefix, which `create_router` adds.
///
/// Products live under `/user`, the collection root existing clients call.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/user", produk::router(state))
}

/// Router with the `/ready` endpoint, to merge next to the stateless app router.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
