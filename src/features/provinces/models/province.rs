use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Country;

/// A province. Belongs to exactly one country.
///
/// `id` stays `None` until the store persists the entity; a persisted
/// province always carries a name of at least 3 characters and a country
/// reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Province {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub country: Country,
}
