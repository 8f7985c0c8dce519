//! Persistence boundary for provinces.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::core::error::{AppError, Result};
use crate::features::provinces::models::{Country, Province};

/// Store interface the province service depends on.
///
/// Injected as a trait object so tests can substitute an in-memory fake;
/// at runtime [`PgProvinceStore`] is wired in.
#[async_trait]
pub trait ProvinceStore: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Option<Province>>;

    /// Inserts ignoring any id on the entity; the store assigns one.
    async fn insert(&self, province: Province) -> Result<Province>;

    /// Insert-or-update keyed on the entity id.
    async fn upsert(&self, province: Province) -> Result<Province>;

    /// Silent no-op when the id does not exist.
    async fn delete_by_id(&self, id: i64) -> Result<()>;

    async fn list_all(&self) -> Result<Vec<Province>>;

    /// Exact match on the province name, case-insensitive.
    async fn find_by_name_case_insensitive(&self, name: &str) -> Result<Vec<Province>>;

    /// Equality match on the owning country's name.
    async fn find_by_country_name(&self, country_name: &str) -> Result<Vec<Province>>;
}

/// Postgres-backed store. Every read joins the owning country so callers
/// always receive a fully populated entity.
pub struct PgProvinceStore {
    pool: PgPool,
}

impl PgProvinceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProvinceRow {
    id: i64,
    name: String,
    country_id: i64,
    country_name: String,
}

impl From<ProvinceRow> for Province {
    fn from(row: ProvinceRow) -> Self {
        Province {
            id: Some(row.id),
            name: row.name,
            country: Country {
                id: Some(row.country_id),
                name: row.country_name,
            },
        }
    }
}

const SELECT_PROVINCE: &str = r#"
    SELECT p.id, p.name, p.country_id, c.name AS country_name
    FROM provinces p
    JOIN countries c ON c.id = p.country_id
"#;

#[async_trait]
impl ProvinceStore for PgProvinceStore {
    async fn get_by_id(&self, id: i64) -> Result<Option<Province>> {
        let row = sqlx::query_as::<_, ProvinceRow>(&format!("{} WHERE p.id = $1", SELECT_PROVINCE))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch province by id {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, province: Province) -> Result<Province> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO provinces (name, country_id)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&province.name)
        .bind(province.country.id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert province '{}': {:?}", province.name, e);
            AppError::Database(e)
        })?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("province {} missing after insert", id)))
    }

    async fn upsert(&self, province: Province) -> Result<Province> {
        let id = province
            .id
            .ok_or_else(|| AppError::BadRequest("an id is required to upsert".to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO provinces (id, name, country_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name, country_id = EXCLUDED.country_id
            "#,
        )
        .bind(id)
        .bind(&province.name)
        .bind(province.country.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to upsert province {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("province {} missing after upsert", id)))
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM provinces WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete province {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Province>> {
        let rows =
            sqlx::query_as::<_, ProvinceRow>(&format!("{} ORDER BY p.id ASC", SELECT_PROVINCE))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to list provinces: {:?}", e);
                    AppError::Database(e)
                })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_name_case_insensitive(&self, name: &str) -> Result<Vec<Province>> {
        let rows = sqlx::query_as::<_, ProvinceRow>(&format!(
            "{} WHERE LOWER(p.name) = LOWER($1) ORDER BY p.id ASC",
            SELECT_PROVINCE
        ))
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search provinces by name '{}': {:?}", name, e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_country_name(&self, country_name: &str) -> Result<Vec<Province>> {
        let rows = sqlx::query_as::<_, ProvinceRow>(&format!(
            "{} WHERE c.name = $1 ORDER BY p.id ASC",
            SELECT_PROVINCE
        ))
        .bind(country_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to search provinces by country '{}': {:?}",
                country_name,
                e
            );
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
