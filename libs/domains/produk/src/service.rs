//! Product service: id parsing, presence validation and not-found mapping
//! on top of a [`ProductRepository`].

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::messages;
use crate::models::{CreateProduct, ProductDetail, ProductSummary, UpdateProduct};
use crate::repository::ProductRepository;

pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Route ids are path strings; anything that is not an integer names no row.
fn parse_id(raw: &str) -> ProductResult<i64> {
    raw.parse::<i64>().map_err(|_| {
        tracing::debug!(id = raw, "Non-numeric product id");
        ProductError::NotFound(raw.to_string())
    })
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<ProductSummary>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<ProductDetail> {
        let parsed = parse_id(id)?;
        self.repository
            .get_by_id(parsed)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Create a product and return its generated id.
    #[instrument(skip(self, input), fields(nama_produk = ?input.nama_produk))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<u64> {
        if !input.has_required_fields() {
            return Err(ProductError::Validation(
                messages::REQUIRED_FIELDS.to_string(),
            ));
        }

        self.repository.create(input).await
    }

    /// Overwrite every column of a product. No field is required.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: UpdateProduct) -> ProductResult<()> {
        let parsed = parse_id(id)?;
        if !self.repository.update(parsed, input).await? {
            return Err(ProductError::NotFound(id.to_string()));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        let parsed = parse_id(id)?;
        if !self.repository.delete(parsed).await? {
            return Err(ProductError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
