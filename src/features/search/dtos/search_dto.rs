use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Province found by name
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProvinceMatchDto {
    #[schema(example = 1)]
    pub province_id: i32,
    #[schema(example = "KIGALI CITY")]
    pub name: String,
}

/// District found by name, with its province
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DistrictMatchDto {
    pub district_id: i32,
    #[schema(example = "NYARUGENGE")]
    pub name: String,
    pub province_id: i32,
    pub province: ProvinceMatchDto,
}

/// Sector found by name, with district and province
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SectorMatchDto {
    pub sector_id: i32,
    #[schema(example = "GITEGA")]
    pub name: String,
    pub district_id: i32,
    pub district: DistrictMatchDto,
}

/// Cell found by name, with its ancestors
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CellMatchDto {
    pub cell_id: i32,
    #[schema(example = "Akabahizi")]
    pub name: String,
    pub sector_id: i32,
    pub sector: SectorMatchDto,
}

/// Village found by name, with its full ancestor chain
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VillageMatchDto {
    pub village_id: i32,
    #[schema(example = "Bugomba")]
    pub name: String,
    pub cell_id: i32,
    pub cell: CellMatchDto,
}
