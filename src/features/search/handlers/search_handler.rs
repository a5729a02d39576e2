use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::core::error::Result;
use crate::core::extractor::AppPath;
use crate::features::regions::models::Level;
use crate::features::search::dtos::{
    CellMatchDto, DistrictMatchDto, ProvinceMatchDto, SectorMatchDto, VillageMatchDto,
};
use crate::features::search::services::LookupService;
use crate::shared::types::ErrorBody;

/// Find a village by name
///
/// The name is capitalized (`BUGOMBA` -> `Bugomba`) before matching.
#[utoipa::path(
    get,
    path = "/search/village/{villageName}",
    params(
        ("villageName" = String, Path, description = "Village name, any casing")
    ),
    responses(
        (status = 200, description = "Village with cell, sector, district and province", body = VillageMatchDto),
        (status = 400, description = "Undecodable village name", body = ErrorBody),
        (status = 404, description = "Village not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "search"
)]
pub async fn find_village(
    State(service): State<Arc<LookupService>>,
    AppPath(village_name): AppPath<String>,
) -> Result<Json<Value>> {
    Ok(Json(service.find_one(Level::Village, &village_name).await?))
}

/// Find cells by name
///
/// The name is matched exactly as given. Every cell sharing the name is
/// returned.
#[utoipa::path(
    get,
    path = "/search/cell/{cellName}",
    params(
        ("cellName" = String, Path, description = "Cell name, exact casing")
    ),
    responses(
        (status = 200, description = "Matching cells with sector, district and province", body = Vec<CellMatchDto>),
        (status = 400, description = "Undecodable cell name", body = ErrorBody),
        (status = 404, description = "Cell not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "search"
)]
pub async fn find_cells(
    State(service): State<Arc<LookupService>>,
    AppPath(cell_name): AppPath<String>,
) -> Result<Json<Vec<Value>>> {
    Ok(Json(service.find_all(Level::Cell, &cell_name).await?))
}

/// Find a sector by name
#[utoipa::path(
    get,
    path = "/search/sector/{sectorName}",
    params(
        ("sectorName" = String, Path, description = "Sector name, any casing")
    ),
    responses(
        (status = 200, description = "Sector with district and province", body = SectorMatchDto),
        (status = 400, description = "Undecodable sector name", body = ErrorBody),
        (status = 404, description = "Sector not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "search"
)]
pub async fn find_sector(
    State(service): State<Arc<LookupService>>,
    AppPath(sector_name): AppPath<String>,
) -> Result<Json<Value>> {
    Ok(Json(service.find_one(Level::Sector, &sector_name).await?))
}

/// Find a district by name
#[utoipa::path(
    get,
    path = "/search/district/{districtName}",
    params(
        ("districtName" = String, Path, description = "District name, any casing")
    ),
    responses(
        (status = 200, description = "District with province", body = DistrictMatchDto),
        (status = 400, description = "Undecodable district name", body = ErrorBody),
        (status = 404, description = "District not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "search"
)]
pub async fn find_district(
    State(service): State<Arc<LookupService>>,
    AppPath(district_name): AppPath<String>,
) -> Result<Json<Value>> {
    Ok(Json(service.find_one(Level::District, &district_name).await?))
}

/// Find a province by name
#[utoipa::path(
    get,
    path = "/search/province/{provinceName}",
    params(
        ("provinceName" = String, Path, description = "Province name, any casing")
    ),
    responses(
        (status = 200, description = "Province", body = ProvinceMatchDto),
        (status = 400, description = "Undecodable province name", body = ErrorBody),
        (status = 404, description = "Province not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "search"
)]
pub async fn find_province(
    State(service): State<Arc<LookupService>>,
    AppPath(province_name): AppPath<String>,
) -> Result<Json<Value>> {
    Ok(Json(service.find_one(Level::Province, &province_name).await?))
}
