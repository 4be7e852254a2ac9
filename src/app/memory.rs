//! In-memory product repository.
//!
//! Backs the integration tests behind the same trait as the PostgreSQL
//! repository. Identifiers come from a counter that never reuses a value,
//! matching the store's uniqueness guarantee.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::app::repository::{parse_id, ProductRepository};
use crate::domain::{Product, ProductDraft};
use crate::error::StoreError;

#[derive(Default)]
pub struct InMemoryProductRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    products: Vec<Product>,
    next_id: i64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.inner.lock().await.products.clone())
    }

    async fn get(&self, id: &str) -> Result<Product, StoreError> {
        let key = parse_id(id)?;
        self.inner
            .lock()
            .await
            .products
            .iter()
            .find(|p| p.id == key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        draft.validate()?;
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let product = Product {
            id: inner.next_id,
            name: draft.name,
            quantity: draft.quantity,
            price: draft.price,
            image: draft.image,
        };
        inner.products.push(product.clone());
        Ok(product)
    }

    async fn replace(&self, id: &str, draft: ProductDraft) -> Result<Product, StoreError> {
        let key = parse_id(id)?;
        draft.validate()?;
        let mut inner = self.inner.lock().await;
        let slot = inner
            .products
            .iter_mut()
            .find(|p| p.id == key)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        *slot = Product {
            id: key,
            name: draft.name,
            quantity: draft.quantity,
            price: draft.price,
            image: draft.image,
        };
        Ok(slot.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let key = parse_id(id)?;
        let mut inner = self.inner.lock().await;
        let before = inner.products.len();
        inner.products.retain(|p| p.id != key);
        if inner.products.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
