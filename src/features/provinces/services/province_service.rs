use std::sync::Arc;

use crate::core::error::Result;
use crate::features::provinces::models::Province;
use crate::features::provinces::store::ProvinceStore;
use crate::features::provinces::validation;

/// Business rules for the province dataset.
///
/// All persistence goes through the injected store; validation runs here,
/// before any write and before both free-text name lookups. Everything else
/// is pass-through.
pub struct ProvinceService {
    store: Arc<dyn ProvinceStore>,
}

impl ProvinceService {
    pub fn new(store: Arc<dyn ProvinceStore>) -> Self {
        Self { store }
    }

    /// An absent id is an empty result, never an error.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Province>> {
        self.store.get_by_id(id).await
    }

    /// Validates and inserts. The store assigns the id; whatever id the
    /// client sent is dropped before insertion. On validation failure the
    /// store is never touched.
    pub async fn save(&self, mut province: Province) -> Result<Province> {
        validation::validate_province(&province)?;

        province.id = None;
        let saved = self.store.insert(province).await?;
        tracing::info!("Province created: id={:?}, name={}", saved.id, saved.name);

        Ok(saved)
    }

    /// Validates and persists with upsert-by-id semantics.
    pub async fn update(&self, province: Province) -> Result<Province> {
        validation::validate_province(&province)?;

        self.store.upsert(province).await
    }

    /// Idempotent: deleting an id that does not exist is a silent no-op.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.store.delete_by_id(id).await
    }

    /// Store-defined ordering, passed through untouched.
    pub async fn find_all(&self) -> Result<Vec<Province>> {
        self.store.list_all().await
    }

    /// Case-insensitive exact match on the province name.
    pub async fn find_by_exact_name(&self, name: Option<&str>) -> Result<Vec<Province>> {
        validation::validate_name(name)?;

        self.store
            .find_by_name_case_insensitive(name.unwrap_or_default())
            .await
    }

    /// Equality match on the owning country's name. The same minimum-length
    /// rule applies to the country-name argument.
    pub async fn find_by_country_name(&self, country_name: Option<&str>) -> Result<Vec<Province>> {
        validation::validate_name(country_name)?;

        self.store
            .find_by_country_name(country_name.unwrap_or_default())
            .await
    }
}
