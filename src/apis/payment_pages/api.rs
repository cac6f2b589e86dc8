use crate::{
    apis::{
        payment_pages::{
            AddPageProductsRequest, CreatePageRequest, ListPagesRequest, Page, UpdatePageRequest,
        },
        PaystackClientInner,
    },
    common::{ensure_not_empty, ensure_not_empty_list},
    Error, Response,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paystack Payment Pages APIs client.
#[derive(Clone, Debug)]
pub struct PaymentPagesApi {
    inner: Arc<PaystackClientInner>,
}

impl PaymentPagesApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(name = "Create Page", skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: &CreatePageRequest) -> Result<Response<Page>, Error> {
        ensure_not_empty("name", &request.name)?;

        self.inner.post("/page", request).await
    }

    #[tracing::instrument(name = "List Pages", skip(self, request))]
    pub async fn list(&self, request: &ListPagesRequest) -> Result<Response<Vec<Page>>, Error> {
        self.inner.get_with_query("/page", request).await
    }

    #[tracing::instrument(name = "Fetch Page", skip(self))]
    pub async fn fetch(&self, id_or_slug: &str) -> Result<Response<Page>, Error> {
        ensure_not_empty("id_or_slug", id_or_slug)?;

        self.inner
            .get(&format!("/page/{}", encode(id_or_slug)))
            .await
    }

    #[tracing::instrument(name = "Update Page", skip(self, request))]
    pub async fn update(
        &self,
        id_or_slug: &str,
        request: &UpdatePageRequest,
    ) -> Result<Response<Page>, Error> {
        ensure_not_empty("id_or_slug", id_or_slug)?;

        self.inner
            .put(&format!("/page/{}", encode(id_or_slug)), request)
            .await
    }

    /// Checks whether a slug is free to use. A taken slug is reported as a `400`.
    #[tracing::instrument(name = "Check Slug Availability", skip(self))]
    pub async fn check_slug_availability(
        &self,
        slug: &str,
    ) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("slug", slug)?;

        self.inner
            .get(&format!("/page/check_slug_availability/{}", encode(slug)))
            .await
    }

    /// Adds products to a page of type `product`.
    #[tracing::instrument(name = "Add Page Products", skip(self, products))]
    pub async fn add_products(&self, id: u64, products: Vec<u64>) -> Result<Response<Page>, Error> {
        ensure_not_empty_list("product", &products)?;

        self.inner
            .post(
                &format!("/page/{}/product", id),
                &AddPageProductsRequest { product: products },
            )
            .await
    }
}
