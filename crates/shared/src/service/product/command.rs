use crate::{
    abstract_trait::{
        DynFileStorage, DynProductCommandRepository, ProductCommandServiceTrait, UploadedFile,
    },
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{ApiResponse, ProductResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct ProductCommandService {
    command: DynProductCommandRepository,
    storage: DynFileStorage,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, storage: DynFileStorage) -> Self {
        Self { command, storage }
    }

    async fn store_image(&self, image: Option<UploadedFile>) -> Result<Option<String>, ServiceError> {
        match image {
            Some(file) => Ok(Some(self.storage.store(file).await?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create(
        &self,
        req: &CreateProductRequest,
        image: Option<UploadedFile>,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let image_url = self.store_image(image).await?;
        let product = self.command.create_product(req, image_url).await?;

        info!("✅ Created product {} ({})", product.product_id, product.name);
        Ok(ApiResponse {
            status: "success".into(),
            message: "Product created".into(),
            data: product.into(),
        })
    }

    async fn update(
        &self,
        req: &UpdateProductRequest,
        image: Option<UploadedFile>,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        // Absent image keeps the stored one (COALESCE on the repo side).
        let image_url = self.store_image(image).await?;
        let product = self.command.update_product(req, image_url).await?;

        info!("✅ Updated product {}", product.product_id);
        Ok(ApiResponse {
            status: "success".into(),
            message: "Product updated".into(),
            data: product.into(),
        })
    }

    async fn delete(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        self.command.delete_product(id).await?;

        info!("🗑️ Deleted product {}", id);
        Ok(ApiResponse {
            status: "success".into(),
            message: "Product deleted".into(),
            data: (),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{FileStorageTrait, ProductCommandRepositoryTrait},
        errors::RepositoryError,
        model::{Product, ProductCategory},
    };
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    struct MockProductCommand {
        last_image: Mutex<Option<Option<String>>>,
    }

    #[async_trait]
    impl ProductCommandRepositoryTrait for MockProductCommand {
        async fn create_product(
            &self,
            req: &CreateProductRequest,
            image: Option<String>,
        ) -> Result<Product, RepositoryError> {
            *self.last_image.lock().unwrap() = Some(image.clone());
            Ok(Product {
                product_id: 1,
                name: req.name.clone(),
                description: req.description.clone(),
                price: req.price,
                pages: req.pages,
                image,
                category: req.category.as_str().to_string(),
                created_at: None,
            })
        }

        async fn update_product(
            &self,
            req: &UpdateProductRequest,
            image: Option<String>,
        ) -> Result<Product, RepositoryError> {
            *self.last_image.lock().unwrap() = Some(image.clone());
            Ok(Product {
                product_id: req.id,
                name: req.name.clone(),
                description: req.description.clone(),
                price: req.price,
                pages: req.pages,
                image,
                category: req.category.as_str().to_string(),
                created_at: None,
            })
        }

        async fn delete_product(&self, _id: i32) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    struct MockStorage {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl FileStorageTrait for MockStorage {
        async fn store(&self, file: UploadedFile) -> Result<String, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("/uploads/{}", file.filename))
        }
    }

    fn create_request() -> CreateProductRequest {
        CreateProductRequest {
            name: "Notebook".into(),
            description: "Ruled, 80 pages".into(),
            price: 3500,
            pages: 80,
            category: ProductCategory::SchoolSupplies,
        }
    }

    #[tokio::test]
    async fn create_with_image_stores_file_first() {
        let storage = Arc::new(MockStorage {
            calls: AtomicUsize::new(0),
        });
        let svc = ProductCommandService::new(
            Arc::new(MockProductCommand {
                last_image: Mutex::new(None),
            }),
            storage.clone(),
        );

        let res = svc
            .create(
                &create_request(),
                Some(UploadedFile {
                    filename: "cover.png".into(),
                    bytes: vec![0u8; 4],
                }),
            )
            .await
            .unwrap();

        assert_eq!(storage.calls.load(Ordering::SeqCst), 1);
        assert_eq!(res.data.image.as_deref(), Some("/uploads/cover.png"));
    }

    #[tokio::test]
    async fn update_without_image_passes_none_to_repo() {
        let command = Arc::new(MockProductCommand {
            last_image: Mutex::new(None),
        });
        let storage = Arc::new(MockStorage {
            calls: AtomicUsize::new(0),
        });
        let svc = ProductCommandService::new(command.clone(), storage.clone());

        svc.update(
            &UpdateProductRequest {
                id: 3,
                name: "Notebook".into(),
                description: "Ruled".into(),
                price: 3600,
                pages: 80,
                category: ProductCategory::SchoolSupplies,
            },
            None,
        )
        .await
        .unwrap();

        assert_eq!(storage.calls.load(Ordering::SeqCst), 0);
        assert_eq!(*command.last_image.lock().unwrap(), Some(None));
    }
}
