//! Catalog storage and search.

use std::collections::{BTreeSet, HashMap, HashSet};

use shop_core::{DomainError, DomainResult, Entity};

use crate::config::CatalogConfig;
use crate::naming::resolve_display_names;
use crate::product::{Product, ProductId};

/// Product catalog abstraction.
///
/// Mutations report their outcome as `bool` and never fail otherwise. Searches
/// are read-only and return at most the configured result limit.
pub trait ProductCatalog {
    /// Insert `product` unless a product with the same id is already present.
    ///
    /// Returns `false` for a duplicate id; the stored product is left as is.
    fn add(&mut self, product: Product) -> bool;

    /// Remove the product with `id`. Returns `false` if there was none.
    fn delete(&mut self, id: &ProductId) -> bool;

    /// Display names of products whose name contains `search` (case-sensitive).
    ///
    /// Names shared by several matching products are shown in long form
    /// (`"<producer> - <name>"`). When more entries match than the limit allows,
    /// which ones are kept is unspecified, but it is the same for repeated
    /// queries against an unchanged catalog.
    fn list_by_name(&self, search: &str) -> HashSet<String>;

    /// Names of products whose producer contains `search`, ordered by product id.
    fn list_by_producer(&self, search: &str) -> Vec<String>;
}

/// In-memory catalog keyed by product id.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    products: HashMap<ProductId, Product>,
    config: CatalogConfig,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
            config: CatalogConfig::default(),
        }
    }

    /// Build an empty catalog with `config`, rejecting invalid settings.
    pub fn with_config(config: CatalogConfig) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self {
            products: HashMap::new(),
            config,
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    /// Like [`InMemoryCatalog::get`], but a missing product is an error.
    pub fn require(&self, id: &ProductId) -> DomainResult<&Product> {
        self.get(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.products.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products, in no particular order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Like [`ProductCatalog::add`], but a duplicate id is an error.
    pub fn try_add(&mut self, product: Product) -> DomainResult<()> {
        let id = product.id().clone();
        if self.add(product) {
            Ok(())
        } else {
            Err(DomainError::conflict(format!("product {id} already exists")))
        }
    }

    /// Remove the stored product that shares `product`'s identity.
    ///
    /// Only the id is consulted, so `Product::empty(id)` is enough.
    pub fn remove(&mut self, product: &Product) -> bool {
        self.delete(product.id())
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn add(&mut self, product: Product) -> bool {
        if self.products.contains_key(product.id()) {
            tracing::debug!(product_id = %product.id(), outcome = "duplicate", "product add rejected");
            return false;
        }

        tracing::debug!(product_id = %product.id(), outcome = "added", "product added");
        self.products.insert(product.id().clone(), product);
        true
    }

    fn delete(&mut self, id: &ProductId) -> bool {
        let removed = self.products.remove(id).is_some();
        let outcome = if removed { "deleted" } else { "missing" };
        tracing::debug!(product_id = %id, outcome, "product delete");
        removed
    }

    fn list_by_name(&self, search: &str) -> HashSet<String> {
        let matched: Vec<&Product> = self
            .products
            .values()
            .filter(|p| p.name().contains(search))
            .collect();

        // Ordered dedup keeps truncation stable across calls.
        let names: BTreeSet<String> =
            resolve_display_names(&matched, &self.config.name_separator).collect();
        let distinct = names.len();

        let result: HashSet<String> = names.into_iter().take(self.config.result_limit).collect();
        tracing::trace!(
            search,
            matched = matched.len(),
            distinct,
            returned = result.len(),
            "list_by_name"
        );
        result
    }

    fn list_by_producer(&self, search: &str) -> Vec<String> {
        let mut matched: Vec<&Product> = self
            .products
            .values()
            .filter(|p| p.producer().contains(search))
            .collect();
        matched.sort_by(|a, b| a.id().cmp(b.id()));

        let result: Vec<String> = matched
            .iter()
            .take(self.config.result_limit)
            .map(|p| p.name().to_string())
            .collect();
        tracing::trace!(
            search,
            matched = matched.len(),
            returned = result.len(),
            "list_by_producer"
        );
        result
    }
}

impl Extend<Product> for InMemoryCatalog {
    fn extend<I: IntoIterator<Item = Product>>(&mut self, iter: I) {
        for product in iter {
            self.add(product);
        }
    }
}

impl FromIterator<Product> for InMemoryCatalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut catalog = Self::new();
        catalog.extend(iter);
        catalog
    }
}
