//! Product catalog storage.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;
use tracing::debug;

use catalog_core::DomainError;

use crate::config::{StoreConfig, UpdatePlacement};
use crate::product::Product;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("product with name '{0}' already exists")]
    DuplicateName(String),

    #[error("product '{0}' not found")]
    NotFound(String),

    #[error("product store lock poisoned")]
    Poisoned,
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateName(_) => DomainError::conflict(err.to_string()),
            StoreError::NotFound(_) => DomainError::not_found(),
            StoreError::Poisoned => DomainError::invariant(err.to_string()),
        }
    }
}

/// Catalog store keyed by case-insensitive product name.
///
/// Implementations keep at most one product per name and list products in
/// insertion order. A failed call leaves the store unchanged.
pub trait ProductStore: Send + Sync {
    /// Snapshot of every product, in insertion order.
    fn list(&self) -> Vec<Product>;

    fn find_by_name(&self, name: &str) -> Option<Product>;

    /// Append a product; fails if its name is already taken.
    fn add(&self, product: Product) -> Result<(), StoreError>;

    /// Replace the product with the same name; fails if there is none.
    fn update(&self, product: Product) -> Result<(), StoreError>;

    /// Remove and return the product with the given name.
    fn delete(&self, name: &str) -> Result<Product, StoreError>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn list(&self) -> Vec<Product> {
        (**self).list()
    }

    fn find_by_name(&self, name: &str) -> Option<Product> {
        (**self).find_by_name(name)
    }

    fn add(&self, product: Product) -> Result<(), StoreError> {
        (**self).add(product)
    }

    fn update(&self, product: Product) -> Result<(), StoreError> {
        (**self).update(product)
    }

    fn delete(&self, name: &str) -> Result<Product, StoreError> {
        (**self).delete(name)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn contains(&self, name: &str) -> bool {
        (**self).contains(name)
    }
}

/// In-memory product store.
///
/// Lookups are linear scans over a `Vec`, which keeps insertion order without
/// a second index. Every mutation holds the write lock for its whole
/// check-then-modify sequence, so concurrent callers cannot break name
/// uniqueness.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    config: StoreConfig,
    inner: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            inner: RwLock::new(Vec::new()),
        }
    }

    // Readers never observe a half-applied mutation, so a poisoned guard
    // still holds consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Product>>, StoreError> {
        self.inner.write().map_err(|_| StoreError::Poisoned)
    }
}

fn position(products: &[Product], name: &str) -> Option<usize> {
    products.iter().position(|p| p.name().matches(name))
}

impl ProductStore for InMemoryProductStore {
    fn list(&self) -> Vec<Product> {
        self.read().clone()
    }

    fn find_by_name(&self, name: &str) -> Option<Product> {
        let products = self.read();
        position(&products, name).map(|i| products[i].clone())
    }

    fn add(&self, product: Product) -> Result<(), StoreError> {
        let mut products = self.write()?;
        let name = product.name().as_str();

        if position(&products, name).is_some() {
            debug!(name, "rejected duplicate product");
            return Err(StoreError::DuplicateName(name.to_string()));
        }

        debug!(name, "product added");
        products.push(product);
        Ok(())
    }

    fn update(&self, product: Product) -> Result<(), StoreError> {
        let mut products = self.write()?;
        let name = product.name().as_str();

        let Some(index) = position(&products, name) else {
            debug!(name, "update of unknown product");
            return Err(StoreError::NotFound(name.to_string()));
        };

        debug!(name, placement = ?self.config.update_placement, "product updated");
        match self.config.update_placement {
            UpdatePlacement::MoveToEnd => {
                products.remove(index);
                products.push(product);
            }
            UpdatePlacement::InPlace => products[index] = product,
        }
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<Product, StoreError> {
        let mut products = self.write()?;

        match position(&products, name) {
            Some(index) => {
                debug!(name, "product deleted");
                Ok(products.remove(index))
            }
            None => {
                debug!(name, "delete of unknown product");
                Err(StoreError::NotFound(name.to_string()))
            }
        }
    }

    fn len(&self) -> usize {
        self.read().len()
    }

    fn contains(&self, name: &str) -> bool {
        position(&self.read(), name).is_some()
    }
}
