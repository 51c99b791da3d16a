use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::Product;
use crate::repository::ProductRepository;

/// Service layer between the HTTP handlers and a [`ProductRepository`]
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Persist a new product
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn create_product(&self, product: Product) -> ProductResult<Product> {
        self.repository.create(product).await
    }

    /// Replace the fields of the product stored under `id`.
    ///
    /// `Ok(None)` means nothing is stored under `id`.
    #[instrument(skip(self, product))]
    pub async fn update_product(
        &self,
        id: String,
        product: Product,
    ) -> ProductResult<Option<Product>> {
        self.repository.update(id, product).await
    }

    /// All products in insertion order, or `None` when there are none.
    #[instrument(skip(self))]
    pub async fn products(&self) -> ProductResult<Option<Vec<Product>>> {
        let products = self.repository.list().await?;

        if products.is_empty() {
            Ok(None)
        } else {
            Ok(Some(products))
        }
    }
}
