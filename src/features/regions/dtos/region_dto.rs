//! Response shapes of the hierarchy endpoints.
//!
//! Responses are produced by the hierarchy projector; these types describe
//! them for the OpenAPI document. Unknown fields are rejected so the same
//! types double as strict decoders.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Province
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProvinceDto {
    #[schema(example = 1)]
    pub province_id: i32,
    #[schema(example = "KIGALI CITY")]
    pub name: String,
    /// Present on `/provinces/districts` and deeper listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub districts: Option<Vec<DistrictDto>>,
}

/// District
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DistrictDto {
    #[schema(example = 11)]
    pub district_id: i32,
    #[schema(example = "NYARUGENGE")]
    pub name: String,
    pub province_id: i32,
    /// Present on `/provinces/districts/sectors` and deeper listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sectors: Option<Vec<SectorDto>>,
}

/// Sector
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SectorDto {
    #[schema(example = 111)]
    pub sector_id: i32,
    #[schema(example = "GITEGA")]
    pub name: String,
    /// Omitted when cells are nested below the sector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<CellDto>>,
}

/// Cell
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CellDto {
    #[schema(example = 1111)]
    pub cell_id: i32,
    #[schema(example = "Akabahizi")]
    pub name: String,
    /// Omitted inside nested listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub villages: Option<Vec<VillageDto>>,
}

/// Village
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VillageDto {
    #[schema(example = 11111)]
    pub village_id: i32,
    #[schema(example = "Bugomba")]
    pub name: String,
    /// Omitted inside nested listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_id: Option<i32>,
}
