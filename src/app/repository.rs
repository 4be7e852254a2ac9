//! The product repository.
//!
//! This module is the boundary between the HTTP transport and PostgreSQL.
//! It owns the `products` table and the identifier format; handlers never
//! see SQL or driver errors, only `StoreError`.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::domain::{Product, ProductDraft};
use crate::error::StoreError;

/// Contract between handlers and the persistence layer.
///
/// Identifiers are accepted as strings and parsed inside the repository, so
/// the invalid-identifier case stays part of this contract rather than
/// leaking into the transport.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in insertion order.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    async fn get(&self, id: &str) -> Result<Product, StoreError>;

    async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError>;

    /// Whole-record replace. The prior value is discarded entirely; there is
    /// no partial merge.
    async fn replace(&self, id: &str, draft: ProductDraft) -> Result<Product, StoreError>;

    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Store reachability probe.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Store-assigned identifiers are 64-bit integers rendered as strings.
pub(crate) fn parse_id(id: &str) -> Result<i64, StoreError> {
    id.trim()
        .parse::<i64>()
        .map_err(|_| StoreError::InvalidId(id.to_string()))
}

/// PostgreSQL-backed repository over a shared connection pool.
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    /// Connects to the store and ensures the `products` table exists.
    ///
    /// A connection failure here is fatal for the caller: the process must
    /// not begin listening if the store is unreachable.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS products (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                quantity INTEGER NOT NULL,
                price DOUBLE PRECISION NOT NULL,
                image TEXT
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, quantity, price, image FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    async fn get(&self, id: &str) -> Result<Product, StoreError> {
        let key = parse_id(id)?;
        sqlx::query_as::<_, Product>(
            "SELECT id, name, quantity, price, image FROM products WHERE id = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        draft.validate()?;
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, quantity, price, image)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, quantity, price, image",
        )
        .bind(draft.name)
        .bind(draft.quantity)
        .bind(draft.price)
        .bind(draft.image)
        .fetch_one(&self.pool)
        .await?;
        Ok(product)
    }

    async fn replace(&self, id: &str, draft: ProductDraft) -> Result<Product, StoreError> {
        let key = parse_id(id)?;
        draft.validate()?;
        sqlx::query_as::<_, Product>(
            "UPDATE products SET name = $2, quantity = $3, price = $4, image = $5
             WHERE id = $1
             RETURNING id, name, quantity, price, image",
        )
        .bind(key)
        .bind(draft.name)
        .bind(draft.quantity)
        .bind(draft.price)
        .bind(draft.image)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let key = parse_id(id)?;
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(key)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_ids() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
    }

    #[test]
    fn rejects_malformed_ids() {
        for bad in ["", "abc", "12.5", "0x10", "9999999999999999999999"] {
            assert!(matches!(parse_id(bad), Err(StoreError::InvalidId(_))), "{bad}");
        }
    }
}
