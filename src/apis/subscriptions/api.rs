use crate::{
    apis::{
        subscriptions::{
            CreateSubscriptionRequest, ListSubscriptionsRequest, Subscription,
            SubscriptionToggleRequest, SubscriptionUpdateLink,
        },
        PaystackClientInner,
    },
    common::ensure_not_empty,
    Error, Response,
};
use serde_json::json;
use std::sync::Arc;
use urlencoding::encode;

/// Paystack Subscriptions APIs client.
#[derive(Clone, Debug)]
pub struct SubscriptionsApi {
    inner: Arc<PaystackClientInner>,
}

impl SubscriptionsApi {
    pub(crate) fn new(inner: Arc<PaystackClientInner>) -> Self {
        Self { inner }
    }

    /// Subscribes a customer to a plan.
    #[tracing::instrument(
        name = "Create Subscription",
        skip(self, request),
        fields(plan = %request.plan)
    )]
    pub async fn create(
        &self,
        request: &CreateSubscriptionRequest,
    ) -> Result<Response<Subscription>, Error> {
        ensure_not_empty("customer", &request.customer)?;
        ensure_not_empty("plan", &request.plan)?;

        self.inner.post("/subscription", request).await
    }

    #[tracing::instrument(name = "List Subscriptions", skip(self, request))]
    pub async fn list(
        &self,
        request: &ListSubscriptionsRequest,
    ) -> Result<Response<Vec<Subscription>>, Error> {
        self.inner.get_with_query("/subscription", request).await
    }

    #[tracing::instrument(name = "Fetch Subscription", skip(self))]
    pub async fn fetch(&self, id_or_code: &str) -> Result<Response<Subscription>, Error> {
        ensure_not_empty("id_or_code", id_or_code)?;

        self.inner
            .get(&format!("/subscription/{}", encode(id_or_code)))
            .await
    }

    #[tracing::instrument(name = "Enable Subscription", skip(self, token))]
    pub async fn enable(
        &self,
        code: &str,
        token: &str,
    ) -> Result<Response<serde_json::Value>, Error> {
        self.toggle("/subscription/enable", code, token).await
    }

    #[tracing::instrument(name = "Disable Subscription", skip(self, token))]
    pub async fn disable(
        &self,
        code: &str,
        token: &str,
    ) -> Result<Response<serde_json::Value>, Error> {
        self.toggle("/subscription/disable", code, token).await
    }

    /// Generates a link the customer can use to update their card.
    #[tracing::instrument(name = "Generate Subscription Update Link", skip(self))]
    pub async fn generate_update_link(
        &self,
        code: &str,
    ) -> Result<Response<SubscriptionUpdateLink>, Error> {
        ensure_not_empty("code", code)?;

        self.inner
            .get(&format!("/subscription/{}/manage/link", encode(code)))
            .await
    }

    /// Emails the customer a link to update their card.
    #[tracing::instrument(name = "Send Subscription Update Link", skip(self))]
    pub async fn send_update_link(&self, code: &str) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("code", code)?;

        self.inner
            .post(
                &format!("/subscription/{}/manage/email", encode(code)),
                &json!({}),
            )
            .await
    }

    async fn toggle(
        &self,
        path: &str,
        code: &str,
        token: &str,
    ) -> Result<Response<serde_json::Value>, Error> {
        ensure_not_empty("code", code)?;
        ensure_not_empty("token", token)?;

        self.inner
            .post(
                path,
                &SubscriptionToggleRequest {
                    code: code.to_string(),
                    token: token.to_string(),
                },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::{
        subscriptions::{CreateSubscriptionRequestBuilder, SubscriptionStatus},
        test_support::mock_inner_and_server,
    };
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    async fn mock_api_and_server() -> (SubscriptionsApi, MockServer) {
        let (inner, mock_server) = mock_inner_and_server().await;
        (SubscriptionsApi::new(inner), mock_server)
    }

    #[tokio::test]
    async fn create() {
        let (api, mock_server) = mock_api_and_server().await;

        Mock::given(method("POST"))
            .and(path("/subscription"))
            .and(body_json(json!({
                "customer": "CUS_xnxdt6s1zg1f4nx",
                "plan": "PLN_gx2wn530m0i3w3m"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Subscription successfully created",
                "data": {
                    "customer": 1173,
                    "plan": 28,
                    "integration": 100032,
                    "domain": "test",
                    "start": 1459296064,
                    "status": "active",
                    "quantity": 1,
                    "amount": 50000,
                    "authorization": {
                        "authorization_code": "AUTH_6tmt288t0o",
                        "reusable": true
                    },
                    "subscription_code": "SUB_vsyqdmlzble3uii",
                    "email_token": "d7gofp6yppn3qz7",
                    "id": 9,
                    "createdAt": "2016-03-30T00:01:04.687Z",
                    "updatedAt": "2016-03-30T00:01:04.687Z"
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let request = CreateSubscriptionRequestBuilder::default()
            .customer("CUS_xnxdt6s1zg1f4nx")
            .plan("PLN_gx2wn530m0i3w3m")
            .build()
            .unwrap();
        let subscription = api.create(&request).await.unwrap().into_data().unwrap();

        assert_eq!(subscription.status, SubscriptionStatus::Active);
        assert_eq!(subscription.plan, Some(json!(28)));
        assert_eq!(subscription.email_token.as_deref(), Some("d7gofp6yppn3qz7"));
    }

    #[tokio::test]
    async fn disable() {
        let (api, mock_server) = mock_api_and_server().await;

        Mock::given(method("POST"))
            .and(path("/subscription/disable"))
            .and(body_json(json!({
                "code": "SUB_vsyqdmlzble3uii",
                "token": "d7gofp6yppn3qz7"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Subscription disabled successfully"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let res = api
            .disable("SUB_vsyqdmlzble3uii", "d7gofp6yppn3qz7")
            .await
            .unwrap();

        assert_eq!(res.message, "Subscription disabled successfully");
    }

    #[tokio::test]
    async fn enable_requires_token() {
        let (api, _mock_server) = mock_api_and_server().await;

        let err = api.enable("SUB_vsyqdmlzble3uii", "").await.unwrap_err();

        assert!(matches!(err, Error::ValidationError { field: "token", .. }));
    }

    #[tokio::test]
    async fn generate_update_link() {
        let (api, mock_server) = mock_api_and_server().await;

        Mock::given(method("GET"))
            .and(path("/subscription/SUB_vsyqdmlzble3uii/manage/link"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Link generated",
                "data": { "link": "https://paystack.com/manage/subscriptions/qlgwhpyq1ts9nsw?subscription_token=uqbt9s7ul0blx4k" }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let link = api
            .generate_update_link("SUB_vsyqdmlzble3uii")
            .await
            .unwrap()
            .into_data()
            .unwrap();

        assert!(link.link.starts_with("https://paystack.com/manage/subscriptions/"));
    }
}
