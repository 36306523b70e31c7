use crate::{
    abstract_trait::ProductQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllProducts, errors::RepositoryError, model::Product,
    utils::escape_like,
};
use async_trait::async_trait;
use tracing::{error, info};

const PRODUCT_COLUMNS: &str =
    "product_id, name, description, price, pages, image, category, created_at";

/// The catalog filter: `category` is an exact match, `search` is a
/// case-insensitive substring over name and description, and when both are
/// present the search OR is nested inside an AND with the category — never
/// merged beside it, which would silently widen the result set.
#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

fn search_pattern(req: &FindAllProducts) -> Option<String> {
    let term = req.search.trim();
    if term.is_empty() {
        None
    } else {
        Some(format!("%{}%", escape_like(term)))
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self, req: &FindAllProducts) -> Result<(Vec<Product>, i64), RepositoryError> {
        info!(
            "🔍 Fetching products: category={:?} search={:?} page={} limit={}",
            req.category, req.search, req.page, req.limit
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let category = req.category.map(|c| c.as_str());
        let pattern = search_pattern(req);

        let limit = req.limit.max(1) as i64;
        let offset = ((req.page - 1).max(0) as i64) * limit;

        let filter = r#"
            WHERE ($1::TEXT IS NULL OR category = $1)
              AND ($2::TEXT IS NULL OR name ILIKE $2 OR description ILIKE $2)
        "#;

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM products {filter}"
        ))
        .bind(category)
        .bind(pattern.as_deref())
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to count products: {:?}", e);
            RepositoryError::from(e)
        })?;

        let products = sqlx::query_as::<_, Product>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            {filter}
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(category)
        .bind(pattern.as_deref())
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok((products, total))
    }

    async fn find_all_unpaged(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC"
        ))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products for admin: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(products)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductCategory;

    #[test]
    fn blank_search_builds_no_pattern() {
        let req = FindAllProducts {
            search: "   ".into(),
            ..Default::default()
        };
        assert_eq!(search_pattern(&req), None);
    }

    #[test]
    fn search_term_is_wrapped_and_escaped() {
        let req = FindAllProducts {
            search: "50% off".into(),
            category: Some(ProductCategory::English),
            ..Default::default()
        };
        assert_eq!(search_pattern(&req).unwrap(), "%50\\% off%");
    }
}
