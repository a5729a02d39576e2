use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::core::error::Result;
use crate::features::regions::dtos::{CellDto, DistrictDto, ProvinceDto, SectorDto, VillageDto};
use crate::features::regions::projection::shapes;
use crate::features::regions::services::RegionService;
use crate::shared::types::ErrorBody;

// ==================== Flat Listings ====================

/// List all provinces
#[utoipa::path(
    get,
    path = "/provinces",
    responses(
        (status = 200, description = "All provinces", body = Vec<ProvinceDto>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "hierarchy"
)]
pub async fn list_provinces(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<Vec<Value>>> {
    Ok(Json(service.list(&shapes::PROVINCES).await?))
}

/// List all districts
#[utoipa::path(
    get,
    path = "/districts",
    responses(
        (status = 200, description = "All districts", body = Vec<DistrictDto>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "hierarchy"
)]
pub async fn list_districts(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<Vec<Value>>> {
    Ok(Json(service.list(&shapes::DISTRICTS).await?))
}

/// List all sectors
#[utoipa::path(
    get,
    path = "/sectors",
    responses(
        (status = 200, description = "All sectors", body = Vec<SectorDto>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "hierarchy"
)]
pub async fn list_sectors(State(service): State<Arc<RegionService>>) -> Result<Json<Vec<Value>>> {
    Ok(Json(service.list(&shapes::SECTORS).await?))
}

/// List all cells
#[utoipa::path(
    get,
    path = "/cells",
    responses(
        (status = 200, description = "All cells", body = Vec<CellDto>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "hierarchy"
)]
pub async fn list_cells(State(service): State<Arc<RegionService>>) -> Result<Json<Vec<Value>>> {
    Ok(Json(service.list(&shapes::CELLS).await?))
}

/// List all villages
#[utoipa::path(
    get,
    path = "/villages",
    responses(
        (status = 200, description = "All villages", body = Vec<VillageDto>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "hierarchy"
)]
pub async fn list_villages(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<Vec<Value>>> {
    Ok(Json(service.list(&shapes::VILLAGES).await?))
}

// ==================== Nested Listings ====================

/// List provinces with their districts
#[utoipa::path(
    get,
    path = "/provinces/districts",
    responses(
        (status = 200, description = "Provinces with nested districts", body = Vec<ProvinceDto>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "hierarchy"
)]
pub async fn list_provinces_with_districts(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<Vec<Value>>> {
    Ok(Json(service.list(&shapes::PROVINCES_DISTRICTS).await?))
}

/// List provinces with districts and sectors
#[utoipa::path(
    get,
    path = "/provinces/districts/sectors",
    responses(
        (status = 200, description = "Provinces down to sectors", body = Vec<ProvinceDto>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "hierarchy"
)]
pub async fn list_provinces_to_sectors(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<Vec<Value>>> {
    Ok(Json(service.list(&shapes::PROVINCES_TO_SECTORS).await?))
}

/// List provinces down to cells
#[utoipa::path(
    get,
    path = "/provinces/districts/sectors/cells",
    responses(
        (status = 200, description = "Provinces down to cells", body = Vec<ProvinceDto>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "hierarchy"
)]
pub async fn list_provinces_to_cells(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<Vec<Value>>> {
    Ok(Json(service.list(&shapes::PROVINCES_TO_CELLS).await?))
}

/// List the full hierarchy down to villages
///
/// This is the largest response the API produces: every row of every level.
#[utoipa::path(
    get,
    path = "/provinces/districts/sectors/cells/villages",
    responses(
        (status = 200, description = "Full hierarchy", body = Vec<ProvinceDto>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "hierarchy"
)]
pub async fn list_provinces_to_villages(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<Vec<Value>>> {
    Ok(Json(service.list(&shapes::PROVINCES_TO_VILLAGES).await?))
}
