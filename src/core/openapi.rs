use utoipa::{Modify, OpenApi};

use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::features::search::{dtos as search_dtos, handlers as search_handlers};
use crate::shared::types::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Flat listings
        regions_handlers::list_provinces,
        regions_handlers::list_districts,
        regions_handlers::list_sectors,
        regions_handlers::list_cells,
        regions_handlers::list_villages,
        // Nested listings
        regions_handlers::list_provinces_with_districts,
        regions_handlers::list_provinces_to_sectors,
        regions_handlers::list_provinces_to_cells,
        regions_handlers::list_provinces_to_villages,
        // Name lookups
        search_handlers::find_village,
        search_handlers::find_cells,
        search_handlers::find_sector,
        search_handlers::find_district,
        search_handlers::find_province,
    ),
    components(
        schemas(
            ErrorBody,
            regions_dtos::ProvinceDto,
            regions_dtos::DistrictDto,
            regions_dtos::SectorDto,
            regions_dtos::CellDto,
            regions_dtos::VillageDto,
            search_dtos::ProvinceMatchDto,
            search_dtos::DistrictMatchDto,
            search_dtos::SectorMatchDto,
            search_dtos::CellMatchDto,
            search_dtos::VillageMatchDto,
        )
    ),
    tags(
        (name = "hierarchy", description = "Provinces, districts, sectors, cells and villages, flat or nested"),
        (name = "search", description = "Look up a single level by name, with its ancestors")
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
