use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::provinces::models::{Country, Province};

/// Query parameters for the name-search endpoints
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct NameQuery {
    /// Name to match exactly
    #[param(example = "Cordoba")]
    pub name: Option<String>,
}

/// Flattened projection: the owning country appears only as its name,
/// under the historical `pais` key.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProvinceResponseDto {
    pub id: Option<i64>,
    pub name: String,
    #[serde(rename = "pais")]
    pub country_name: String,
}

impl From<Province> for ProvinceResponseDto {
    fn from(province: Province) -> Self {
        Self {
            id: province.id,
            name: province.name,
            country_name: province.country.name,
        }
    }
}

/// Country-scoped projection: id and name only, the country is implied by
/// the query and never echoed back.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CountryProvinceResponseDto {
    pub id: Option<i64>,
    pub name: String,
}

impl From<Province> for CountryProvinceResponseDto {
    fn from(province: Province) -> Self {
        Self {
            id: province.id,
            name: province.name,
        }
    }
}

/// Request body for create and update. Every field is optional at the
/// boundary; the service decides what is acceptable.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveProvinceDto {
    /// Ignored on create, required on update.
    pub id: Option<i64>,
    pub name: Option<String>,
    pub country: Option<CountryRefDto>,
}

/// Country reference inside a save payload. Usually just an id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CountryRefDto {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl SaveProvinceDto {
    /// Builds the domain entity this payload describes. Absent strings
    /// become empty ones, which never survive validation downstream.
    pub fn into_province(self) -> Province {
        Province {
            id: self.id,
            name: self.name.unwrap_or_default(),
            country: match self.country {
                Some(country) => Country {
                    id: country.id,
                    name: country.name.unwrap_or_default(),
                },
                None => Country {
                    id: None,
                    name: String::new(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{argentina, province};

    #[test]
    fn test_detail_projection_flattens_country_name() {
        let dto = ProvinceResponseDto::from(province(Some(1), "Cordoba", argentina()));

        assert_eq!(dto.id, Some(1));
        assert_eq!(dto.name, "Cordoba");
        assert_eq!(dto.country_name, "Argentina");

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Cordoba", "pais": "Argentina"})
        );
    }

    #[test]
    fn test_country_scoped_projection_drops_country() {
        let dto = CountryProvinceResponseDto::from(province(Some(2), "Salta", argentina()));

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json, serde_json::json!({"id": 2, "name": "Salta"}));
    }

    #[test]
    fn test_payload_with_country_id_only() {
        let payload: SaveProvinceDto =
            serde_json::from_str(r#"{"name": "Nueva Provincia", "country": {"id": 1}}"#).unwrap();

        let entity = payload.into_province();
        assert_eq!(entity.id, None);
        assert_eq!(entity.name, "Nueva Provincia");
        assert_eq!(entity.country.id, Some(1));
    }
}
