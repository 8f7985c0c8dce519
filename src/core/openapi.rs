use utoipa::{Modify, OpenApi};

use crate::features::provinces::{dtos as province_dtos, handlers as province_handlers};
use crate::features::provinces::models::{Country, Province};

#[derive(OpenApi)]
#[openapi(
    paths(
        province_handlers::get_province_by_id,
        province_handlers::search_provinces_by_name,
        province_handlers::search_provinces_by_country,
        province_handlers::save_province,
        province_handlers::update_province,
        province_handlers::delete_province,
        province_handlers::list_all_provinces,
    ),
    components(schemas(
        Province,
        Country,
        province_dtos::ProvinceResponseDto,
        province_dtos::CountryProvinceResponseDto,
        province_dtos::SaveProvinceDto,
        province_dtos::CountryRefDto,
    )),
    tags(
        (name = "provinces", description = "Province reference data endpoints")
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
