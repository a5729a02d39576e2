use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the hierarchy listings
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        // Flat listings
        .route("/provinces", get(handlers::list_provinces))
        .route("/districts", get(handlers::list_districts))
        .route("/sectors", get(handlers::list_sectors))
        .route("/cells", get(handlers::list_cells))
        .route("/villages", get(handlers::list_villages))
        // Nested listings, one level deeper per path segment
        .route(
            "/provinces/districts",
            get(handlers::list_provinces_with_districts),
        )
        .route(
            "/provinces/districts/sectors",
            get(handlers::list_provinces_to_sectors),
        )
        .route(
            "/provinces/districts/sectors/cells",
            get(handlers::list_provinces_to_cells),
        )
        .route(
            "/provinces/districts/sectors/cells/villages",
            get(handlers::list_provinces_to_villages),
        )
        .with_state(service)
}
