use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryOrder, SqlErr,
};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::Product,
    repository::ProductRepository,
};

/// PostgreSQL implementation of [`ProductRepository`]
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, product: Product) -> ProductResult<Product> {
        if self.exists(product.id.clone()).await? {
            return Err(ProductError::DuplicateId(product.id));
        }

        let id = product.id.clone();
        let active_model: entity::ActiveModel = product.into();

        // A concurrent insert can still win the race for the primary key
        let model = active_model.insert(&self.db).await.map_err(|e| {
            match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => ProductError::DuplicateId(id),
                _ => ProductError::from(e),
            }
        })?;

        tracing::info!(product_id = %model.id, "Created product");
        Ok(model.into())
    }

    async fn update(&self, id: String, changes: Product) -> ProductResult<Option<Product>> {
        let Some(model) = entity::Entity::find_by_id(id.clone()).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active_model = model.into_active_model();
        active_model.name = Set(changes.name);
        active_model.price = Set(changes.price);
        active_model.purchased = Set(changes.purchased);

        let model = active_model.update(&self.db).await?;

        tracing::info!(product_id = %id, "Updated product");
        Ok(Some(model.into()))
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Seq)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn exists(&self, id: String) -> ProductResult<bool> {
        let count = entity::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }
}
