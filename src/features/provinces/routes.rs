use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::provinces::handlers;
use crate::features::provinces::services::ProvinceService;

/// Create routes for the provinces feature
///
/// Static segments (`/all`, `/country`, `/save`) must not collide with the
/// `/{id}` capture; axum gives them precedence.
pub fn routes(service: Arc<ProvinceService>) -> Router {
    Router::new()
        .route("/api/province/all", get(handlers::list_all_provinces))
        .route(
            "/api/province/country",
            get(handlers::search_provinces_by_country),
        )
        .route("/api/province/save", post(handlers::save_province))
        .route(
            "/api/province",
            get(handlers::search_provinces_by_name).put(handlers::update_province),
        )
        .route(
            "/api/province/{id}",
            get(handlers::get_province_by_id).delete(handlers::delete_province),
        )
        .with_state(service)
}
