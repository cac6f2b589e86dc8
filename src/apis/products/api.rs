use crate::{
    apis::{
        products::{CreateProductRequest, ListProductsRequest, Product, UpdateProductRequest},
        PaystackClientInner,
    },
    common::ensure_not_empty,
    Error, Response,
};
use std::sync::Arc;

/// Paystack Products APIs client.
#[derive(Clone, Debug)]
pub struct ProductsApi {
    inner: Arc<PaystackClientInner>,
}

impl ProductsApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(
        name = "Create Product",
        skip(self, request),
        fields(name = %request.name, price = request.price)
    )]
    pub async fn create(&self, request: &CreateProductRequest) -> Result<Response<Product>, Error> {
        ensure_not_empty("name", &request.name)?;
        ensure_not_empty("description", &request.description)?;

        self.inner.post("/product", request).await
    }

    #[tracing::instrument(name = "List Products", skip(self, request))]
    pub async fn list(
        &self,
        request: &ListProductsRequest,
    ) -> Result<Response<Vec<Product>>, Error> {
        self.inner.get_with_query("/product", request).await
    }

    #[tracing::instrument(name = "Fetch Product", skip(self))]
    pub async fn fetch(&self, id: u64) -> Result<Response<Product>, Error> {
        self.inner.get(&format!("/product/{}", id)).await
    }

    #[tracing::instrument(name = "Update Product", skip(self, request))]
    pub async fn update(
        &self,
        id: u64,
        request: &UpdateProductRequest,
    ) -> Result<Response<Product>, Error> {
        self.inner.put(&format!("/product/{}", id), request).await
    }
}
