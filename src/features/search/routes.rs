use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::search::handlers;
use crate::features::search::services::LookupService;

/// Create routes for the name lookups
pub fn routes(service: Arc<LookupService>) -> Router {
    Router::new()
        .route("/search/village/{village_name}", get(handlers::find_village))
        .route("/search/cell/{cell_name}", get(handlers::find_cells))
        .route("/search/sector/{sector_name}", get(handlers::find_sector))
        .route("/search/district/{district_name}", get(handlers::find_district))
        .route("/search/province/{province_name}", get(handlers::find_province))
        .with_state(service)
}
