use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;
use tracing::{error, info};

const PRODUCT_COLUMNS: &str =
    "product_id, name, description, price, pages, image, category, created_at";

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
        image: Option<String>,
    ) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            INSERT INTO products (name, description, price, pages, image, category, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, current_timestamp)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(req.pages)
        .bind(image)
        .bind(req.category.as_str())
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", req.name, err);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created product ID {} ({})",
            product.product_id, product.name
        );
        Ok(product)
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
        image: Option<String>,
    ) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // When no new image arrives the existing one is kept.
        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products
            SET name = $2,
                description = $3,
                price = $4,
                pages = $5,
                category = $6,
                image = COALESCE($7, image)
            WHERE product_id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(req.id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(req.pages)
        .bind(req.category.as_str())
        .bind(image)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", req.id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated product ID {}", product.product_id);
        Ok(product)
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete product {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("✅ Product ID {} deleted", id);
        Ok(())
    }
}
