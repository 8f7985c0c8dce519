#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use crate::core::error::{AppError, Result};
#[cfg(test)]
use crate::features::provinces::models::{Country, Province};
#[cfg(test)]
use crate::features::provinces::store::ProvinceStore;

#[cfg(test)]
pub fn argentina() -> Country {
    Country {
        id: Some(1),
        name: "Argentina".to_string(),
    }
}

#[cfg(test)]
pub fn province(id: Option<i64>, name: &str, country: Country) -> Province {
    Province {
        id,
        name: name.to_string(),
        country,
    }
}

/// In-memory stand-in for the Postgres store. Keeps insertion order so
/// order-preservation can be asserted, generates ids the way a serial
/// column would, and resolves the owning country on write the way the
/// joined read does.
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryProvinceStore {
    countries: Mutex<Vec<Country>>,
    provinces: Mutex<Vec<Province>>,
}

/// Store preloaded with the two sample provinces used across the tests.
#[cfg(test)]
pub fn seeded_store() -> InMemoryProvinceStore {
    let store = InMemoryProvinceStore::default();
    {
        let mut countries = store.countries.lock().unwrap();
        countries.push(argentina());
    }
    {
        let mut provinces = store.provinces.lock().unwrap();
        provinces.push(province(Some(1), "Buenos Aires", argentina()));
        provinces.push(province(Some(2), "Cordoba", argentina()));
    }
    store
}

#[cfg(test)]
impl InMemoryProvinceStore {
    fn next_id(provinces: &[Province]) -> i64 {
        provinces.iter().filter_map(|p| p.id).max().unwrap_or(0) + 1
    }

    /// Payloads often reference a country by id alone; swap in the known
    /// country so the stored entity is fully populated, like a join would.
    fn resolve_country(&self, country: Country) -> Country {
        let mut countries = self.countries.lock().unwrap();
        if let Some(known) = countries
            .iter()
            .find(|c| c.id.is_some() && c.id == country.id)
        {
            known.clone()
        } else {
            countries.push(country.clone());
            country
        }
    }
}

#[cfg(test)]
#[async_trait]
impl ProvinceStore for InMemoryProvinceStore {
    async fn get_by_id(&self, id: i64) -> Result<Option<Province>> {
        let provinces = self.provinces.lock().unwrap();
        Ok(provinces.iter().find(|p| p.id == Some(id)).cloned())
    }

    async fn insert(&self, mut province: Province) -> Result<Province> {
        province.country = self.resolve_country(province.country);
        let mut provinces = self.provinces.lock().unwrap();
        province.id = Some(Self::next_id(&provinces));
        provinces.push(province.clone());
        Ok(province)
    }

    async fn upsert(&self, mut province: Province) -> Result<Province> {
        let id = province
            .id
            .ok_or_else(|| AppError::BadRequest("an id is required to upsert".to_string()))?;

        province.country = self.resolve_country(province.country);
        let mut provinces = self.provinces.lock().unwrap();
        match provinces.iter_mut().find(|p| p.id == Some(id)) {
            Some(existing) => *existing = province.clone(),
            None => provinces.push(province.clone()),
        }
        Ok(province)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let mut provinces = self.provinces.lock().unwrap();
        provinces.retain(|p| p.id != Some(id));
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Province>> {
        let provinces = self.provinces.lock().unwrap();
        Ok(provinces.clone())
    }

    async fn find_by_name_case_insensitive(&self, name: &str) -> Result<Vec<Province>> {
        let provinces = self.provinces.lock().unwrap();
        Ok(provinces
            .iter()
            .filter(|p| p.name.to_lowercase() == name.to_lowercase())
            .cloned()
            .collect())
    }

    async fn find_by_country_name(&self, country_name: &str) -> Result<Vec<Province>> {
        let provinces = self.provinces.lock().unwrap();
        Ok(provinces
            .iter()
            .filter(|p| p.country.name == country_name)
            .cloned()
            .collect())
    }
}
