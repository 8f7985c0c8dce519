use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A country referenced by provinces. Holds only identity and a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Country {
    /// `None` until the store assigns an id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}
