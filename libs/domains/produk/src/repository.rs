use async_trait::async_trait;
use sea_orm::{DbErr, RuntimeErr};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{Operation, ProductError, ProductResult};
use crate::models::{CreateProduct, ProductDetail, ProductSummary, UpdateProduct};

/// Repository trait for product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products ordered by id, with brand and category names
    async fn list(&self) -> ProductResult<Vec<ProductSummary>>;

    /// A single product by id
    async fn get_by_id(&self, id: i64) -> ProductResult<Option<ProductDetail>>;

    /// Insert a product and return its generated id
    async fn create(&self, input: CreateProduct) -> ProductResult<u64>;

    /// Overwrite all columns of a product; false when no row has `id`
    async fn update(&self, id: i64, input: UpdateProduct) -> ProductResult<bool>;

    /// Delete a product; false when no row has `id`
    async fn delete(&self, id: i64) -> ProductResult<bool>;
}

#[derive(Debug, Clone)]
struct StoredProduct {
    nama_produk: String,
    tahun_rilis: Option<i32>,
    merk_id: Option<i32>,
    kategori_id: Option<i32>,
    harga: Option<rust_decimal::Decimal>,
}

#[derive(Debug, Default)]
struct Store {
    products: BTreeMap<i32, StoredProduct>,
    last_id: i32,
}

/// The error MySQL raises for a NULL in the `NOT NULL` name column.
fn require_name(name: Option<String>, operation: Operation) -> ProductResult<String> {
    name.ok_or_else(|| {
        ProductError::database(operation)(DbErr::Exec(RuntimeErr::Internal(
            "Column 'nama_produk' cannot be null".to_string(),
        )))
    })
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Brand and category names are looked up the way the SQL joins do: a
/// dangling id resolves to `None` rather than an error. A missing
/// `nama_produk` fails like the `NOT NULL` column does.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
    merk: Arc<HashMap<i32, String>>,
    kategori: Arc<HashMap<i32, String>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a brand name for lookups
    pub fn with_merk(mut self, id: i32, nama_merk: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.merk).insert(id, nama_merk.into());
        self
    }

    /// Register a category name for lookups
    pub fn with_kategori(mut self, id: i32, nama_kategori: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.kategori).insert(id, nama_kategori.into());
        self
    }

    fn nama_merk(&self, id: Option<i32>) -> Option<String> {
        id.and_then(|id| self.merk.get(&id).cloned())
    }

    fn nama_kategori(&self, id: Option<i32>) -> Option<String> {
        id.and_then(|id| self.kategori.get(&id).cloned())
    }

    fn detail(&self, id: i32, product: &StoredProduct) -> ProductDetail {
        ProductDetail {
            id,
            nama_produk: product.nama_produk.clone(),
            tahun_rilis: product.tahun_rilis,
            merk_id: product.merk_id,
            kategori_id: product.kategori_id,
            harga: product.harga,
            nama_merk: self.nama_merk(product.merk_id),
            nama_kategori: self.nama_kategori(product.kategori_id),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<ProductSummary>> {
        let store = self.store.read().await;

        Ok(store
            .products
            .iter()
            .map(|(id, product)| {
                let detail = self.detail(*id, product);
                ProductSummary {
                    id: detail.id,
                    nama_produk: detail.nama_produk,
                    tahun_rilis: detail.tahun_rilis,
                    nama_merk: detail.nama_merk,
                    nama_kategori: detail.nama_kategori,
                    harga: detail.harga,
                }
            })
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<ProductDetail>> {
        let Ok(id) = i32::try_from(id) else {
            return Ok(None);
        };
        let store = self.store.read().await;
        Ok(store.products.get(&id).map(|p| self.detail(id, p)))
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<u64> {
        let nama_produk = require_name(input.nama_produk, Operation::Create)?;
        let mut store = self.store.write().await;

        store.last_id += 1;
        let id = store.last_id;
        store.products.insert(
            id,
            StoredProduct {
                nama_produk,
                tahun_rilis: input.tahun_rilis,
                merk_id: input.merk_id,
                kategori_id: input.kategori_id,
                harga: input.harga,
            },
        );

        tracing::info!(product_id = id, "Created product");
        Ok(u64::from(id.unsigned_abs()))
    }

    async fn update(&self, id: i64, input: UpdateProduct) -> ProductResult<bool> {
        let Ok(id) = i32::try_from(id) else {
            return Ok(false);
        };
        let mut store = self.store.write().await;

        let Some(product) = store.products.get_mut(&id) else {
            return Ok(false);
        };
        *product = StoredProduct {
            nama_produk: require_name(input.nama_produk, Operation::Update)?,
            tahun_rilis: input.tahun_rilis,
            merk_id: input.merk_id,
            kategori_id: input.kategori_id,
            harga: input.harga,
        };

        tracing::info!(product_id = id, "Updated product");
        Ok(true)
    }

    async fn delete(&self, id: i64) -> ProductResult<bool> {
        let Ok(id) = i32::try_from(id) else {
            return Ok(false);
        };
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
