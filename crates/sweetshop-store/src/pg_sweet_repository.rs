//! `PostgreSQL` implementation of the `SweetRepository` trait.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::error;
use uuid::Uuid;

use sweetshop_core::error::DomainError;
use sweetshop_core::filter::{SortOrder, SweetFilter};
use sweetshop_core::repository::{StockDecrement, SweetRepository};
use sweetshop_core::sweet::{NewSweet, Sweet};

use crate::schema::{SWEET_COLUMNS, SWEETS_TABLE};

/// PostgreSQL-backed sweet repository.
#[derive(Debug, Clone)]
pub struct PgSweetRepository {
    pool: PgPool,
}

impl PgSweetRepository {
    /// Creates a new `PgSweetRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SweetRow {
    id: Uuid,
    name: String,
    category: String,
    price: f64,
    quantity: f64,
}

impl From<SweetRow> for Sweet {
    fn from(row: SweetRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            category: row.category,
            price: row.price,
            quantity: row.quantity,
        }
    }
}

fn infrastructure(operation: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        error!(operation, error = %e, "sweet store query failed");
        DomainError::Infrastructure(format!("{operation} failed: {e}"))
    }
}

/// Appends the filter's predicates as a `WHERE` clause.
fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &SweetFilter) {
    builder.push(" WHERE TRUE");
    if let Some(needle) = filter.name_needle() {
        // strpos keeps the needle literal; LIKE would treat % and _ as wildcards.
        builder
            .push(" AND strpos(lower(name), lower(")
            .push_bind(needle.to_owned())
            .push(")) > 0");
    }
    if let Some(category) = filter.category_eq() {
        builder.push(" AND category = ").push_bind(category.to_owned());
    }
    let range = filter.price_range();
    if let Some(min) = range.min {
        builder.push(" AND price >= ").push_bind(min);
    }
    if let Some(max) = range.max {
        builder.push(" AND price <= ").push_bind(max);
    }
}

#[async_trait]
impl SweetRepository for PgSweetRepository {
    async fn insert(&self, sweet: NewSweet) -> Result<Sweet, DomainError> {
        let sql = format!(
            "INSERT INTO {SWEETS_TABLE} (name, category, price, quantity) \
             VALUES ($1, $2, $3, $4) RETURNING {SWEET_COLUMNS}"
        );
        let row = sqlx::query_as::<_, SweetRow>(&sql)
            .bind(&sweet.name)
            .bind(&sweet.category)
            .bind(sweet.price)
            .bind(sweet.quantity)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    DomainError::DuplicateName
                }
                other => infrastructure("insert")(other),
            })?;
        Ok(row.into())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Sweet>, DomainError> {
        let sql =
            format!("SELECT {SWEET_COLUMNS} FROM {SWEETS_TABLE} WHERE lower(name) = lower($1)");
        let row = sqlx::query_as::<_, SweetRow>(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(infrastructure("find_by_name"))?;
        Ok(row.map(Into::into))
    }

    async fn find(
        &self,
        filter: &SweetFilter,
        order: Option<SortOrder>,
    ) -> Result<Vec<Sweet>, DomainError> {
        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT {SWEET_COLUMNS} FROM {SWEETS_TABLE}"));
        push_filter(&mut builder, filter);
        if let Some(SortOrder::PriceAscending) = order {
            builder.push(" ORDER BY price ASC");
        }

        let rows = builder
            .build_query_as::<SweetRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(infrastructure("find"))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Sweet>, DomainError> {
        let sql = format!("SELECT {SWEET_COLUMNS} FROM {SWEETS_TABLE} WHERE id = $1");
        let row = sqlx::query_as::<_, SweetRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(infrastructure("find_by_id"))?;
        Ok(row.map(Into::into))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Sweet>, DomainError> {
        let sql = format!("DELETE FROM {SWEETS_TABLE} WHERE id = $1 RETURNING {SWEET_COLUMNS}");
        let row = sqlx::query_as::<_, SweetRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(infrastructure("delete_by_id"))?;
        Ok(row.map(Into::into))
    }

    async fn decrement_stock(
        &self,
        id: Uuid,
        amount: f64,
    ) -> Result<StockDecrement, DomainError> {
        let sql = format!(
            "UPDATE {SWEETS_TABLE} SET quantity = quantity - $2 \
             WHERE id = $1 AND quantity >= $2 RETURNING {SWEET_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, SweetRow>(&sql)
            .bind(id)
            .bind(amount)
            .fetch_optional(&self.pool)
            .await
            .map_err(infrastructure("decrement_stock"))?;
        if let Some(row) = updated {
            return Ok(StockDecrement::Applied(row.into()));
        }

        // Nothing was updated: either the sweet is gone or it is short.
        Ok(match self.find_by_id(id).await? {
            Some(sweet) => StockDecrement::Insufficient(sweet),
            None => StockDecrement::Missing,
        })
    }

    async fn increment_stock(&self, id: Uuid, amount: f64) -> Result<Option<Sweet>, DomainError> {
        let sql = format!(
            "UPDATE {SWEETS_TABLE} SET quantity = quantity + $2 \
             WHERE id = $1 RETURNING {SWEET_COLUMNS}"
        );
        let row = sqlx::query_as::<_, SweetRow>(&sql)
            .bind(id)
            .bind(amount)
            .fetch_optional(&self.pool)
            .await
            .map_err(infrastructure("increment_stock"))?;
        Ok(row.map(Into::into))
    }

    async fn distinct_categories(&self) -> Result<Vec<String>, DomainError> {
        let sql = format!("SELECT DISTINCT category FROM {SWEETS_TABLE}");
        sqlx::query_scalar::<_, String>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(infrastructure("distinct_categories"))
    }
}
