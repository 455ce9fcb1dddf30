use async_trait::async_trait;
use contracts::domain::products::{CreateProductDto, DeleteResult, Product, UpdateProductDto};
use contracts::shared::api::ApiResponse;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::shared::api_utils::{ApiConfig, ApiError};

/// Products endpoints of the remote API.
///
/// The page talks to this trait so the delete/load flow can run against an
/// in-memory implementation in tests.
#[async_trait(?Send)]
pub trait ProductsApi {
    /// GET /products
    async fn list(&self) -> Result<Vec<Product>, ApiError>;

    /// GET /products/{id}
    async fn get(&self, id: i64) -> Result<Product, ApiError>;

    /// POST /products
    async fn create(&self, dto: &CreateProductDto) -> Result<Product, ApiError>;

    /// PUT /products/{id}
    async fn update(&self, id: i64, dto: &UpdateProductDto) -> Result<Product, ApiError>;

    /// DELETE /products/{id}
    async fn delete(&self, id: i64) -> Result<DeleteResult, ApiError>;
}

/// `ProductsApi` over HTTP with gloo-net.
#[derive(Debug, Clone)]
pub struct HttpProductsApi {
    config: ApiConfig,
}

impl HttpProductsApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn products_url(&self) -> String {
        self.config.url("/products")
    }

    fn product_url(&self, id: i64) -> String {
        self.config.url(&format!("/products/{}", id))
    }
}

/// Check the status and unwrap the `{ data }` envelope.
async fn read_data<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .json::<ApiResponse<T>>()
        .await
        .map(ApiResponse::into_inner)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn send_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[async_trait(?Send)]
impl ProductsApi for HttpProductsApi {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let response = Request::get(&self.products_url())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(send_error)?;
        let products: Vec<Product> = read_data(response).await?;
        log::debug!("fetched {} products", products.len());
        Ok(products)
    }

    async fn get(&self, id: i64) -> Result<Product, ApiError> {
        let response = Request::get(&self.product_url(id))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(send_error)?;
        read_data(response).await
    }

    async fn create(&self, dto: &CreateProductDto) -> Result<Product, ApiError> {
        let response = Request::post(&self.products_url())
            .header("Accept", "application/json")
            .json(dto)
            .map_err(|e| ApiError::Decode(format!("failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(send_error)?;
        let product: Product = read_data(response).await?;
        log::info!("created product {}", product.id);
        Ok(product)
    }

    async fn update(&self, id: i64, dto: &UpdateProductDto) -> Result<Product, ApiError> {
        let response = Request::put(&self.product_url(id))
            .header("Accept", "application/json")
            .json(dto)
            .map_err(|e| ApiError::Decode(format!("failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(send_error)?;
        let product: Product = read_data(response).await?;
        log::info!("updated product {}", product.id);
        Ok(product)
    }

    async fn delete(&self, id: i64) -> Result<DeleteResult, ApiError> {
        let response = Request::delete(&self.product_url(id))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(send_error)?;
        read_data(response).await
    }
}
