//! Clients for the various Paystack APIs.

use crate::{
    response::{decode_envelope, Response},
    Error,
};
use reqwest::Url;
use reqwest_middleware::{ClientWithMiddleware, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::{Debug, Formatter};

pub mod apple_pay;
pub mod bulk_charges;
pub mod charges;
pub mod common;
pub mod customers;
pub mod dedicated_virtual_accounts;
pub mod disputes;
pub mod integration;
pub mod miscellaneous;
pub mod payment_pages;
pub mod payment_requests;
pub mod plans;
pub mod products;
pub mod refunds;
pub mod settlements;
pub mod subaccounts;
pub mod subscriptions;
pub mod terminals;
pub mod transaction_splits;
pub mod transactions;
pub mod transfer_control;
pub mod transfer_recipients;
pub mod transfers;
pub mod verification;
pub mod virtual_terminals;

pub(crate) struct PaystackClientInner {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) base_url: Url,
}

impl PaystackClientInner {
    /// Resolves `path` against the base URL. Absolute URLs are used as they are.
    ///
    /// Relative paths are appended to the base URL path, so a base such as
    /// `https://proxy.example/paystack` keeps its prefix.
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        let url = if path.starts_with("http://") || path.starts_with("https://") {
            Url::parse(path)
        } else {
            let mut base = self.base_url.clone();
            if !base.path().ends_with('/') {
                let prefix = format!("{}/", base.path());
                base.set_path(&prefix);
            }

            base.join(path.trim_start_matches('/'))
        };

        url.map_err(|e| Error::Other(e.into()))
    }

    pub(crate) async fn get<O>(&self, path: &str) -> Result<Response<O>, Error>
    where
        O: DeserializeOwned,
    {
        self.send(self.client.get(self.url(path)?)).await
    }

    pub(crate) async fn get_with_query<Q, O>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Response<O>, Error>
    where
        Q: Serialize + ?Sized,
        O: DeserializeOwned,
    {
        self.send(self.client.get(self.url(path)?).query(query))
            .await
    }

    pub(crate) async fn post<I, O>(&self, path: &str, body: &I) -> Result<Response<O>, Error>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned,
    {
        self.send(self.client.post(self.url(path)?).json(body))
            .await
    }

    pub(crate) async fn put<I, O>(&self, path: &str, body: &I) -> Result<Response<O>, Error>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned,
    {
        self.send(self.client.put(self.url(path)?).json(body)).await
    }

    pub(crate) async fn delete<O>(&self, path: &str) -> Result<Response<O>, Error>
    where
        O: DeserializeOwned,
    {
        self.send(self.client.delete(self.url(path)?)).await
    }

    pub(crate) async fn delete_with_body<I, O>(
        &self,
        path: &str,
        body: &I,
    ) -> Result<Response<O>, Error>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned,
    {
        self.send(self.client.delete(self.url(path)?).json(body))
            .await
    }

    /// Performs one round trip. Non-2xx responses are turned into errors by the middleware stack.
    async fn send<O>(&self, request: RequestBuilder) -> Result<Response<O>, Error>
    where
        O: DeserializeOwned,
    {
        let bytes = request.send().await?.bytes().await?;

        decode_envelope(&bytes)
    }
}

impl Debug for PaystackClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaystackClientInner")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
mod tests {
    use super::{test_support::*, *};
    use serde_json::{json, Value};
    use test_case::test_case;
    use wiremock::{
        matchers::{body_json, header, method, path, query_param},
        Mock, ResponseTemplate,
    };

    #[tokio::test]
    async fn relative_and_absolute_paths() {
        let (inner, mock_server) = mock_inner_and_server().await;

        assert_eq!(
            inner.url("/transfer/verify/ref_1").unwrap().as_str(),
            format!("{}/transfer/verify/ref_1", mock_server.uri())
        );
        assert_eq!(
            inner.url("https://elsewhere.example/bank").unwrap().as_str(),
            "https://elsewhere.example/bank"
        );
    }

    #[test_case("https://proxy.example/paystack/" ; "prefix with trailing slash")]
    #[test_case("https://proxy.example/paystack" ; "prefix without trailing slash")]
    fn base_url_prefix_is_kept(base_url: &str) {
        let inner = PaystackClientInner {
            client: crate::client::build_client_with_middleware(
                reqwest::Client::new(),
                &secrecy::SecretString::new(MOCK_SECRET_KEY.to_string()),
            )
            .unwrap(),
            base_url: Url::parse(base_url).unwrap(),
        };

        assert_eq!(
            inner.url("/transfer").unwrap().as_str(),
            "https://proxy.example/paystack/transfer"
        );
        assert_eq!(
            inner.url("transfer/verify/ref_1").unwrap().as_str(),
            "https://proxy.example/paystack/transfer/verify/ref_1"
        );
        assert_eq!(
            inner.url("/customer/rhodes%40email.com").unwrap().as_str(),
            "https://proxy.example/paystack/customer/rhodes%40email.com"
        );
    }

    #[test]
    fn default_base_url_has_no_prefix() {
        let inner = PaystackClientInner {
            client: crate::client::build_client_with_middleware(
                reqwest::Client::new(),
                &secrecy::SecretString::new(MOCK_SECRET_KEY.to_string()),
            )
            .unwrap(),
            base_url: Url::parse(crate::common::DEFAULT_BASE_URL).unwrap(),
        };

        assert_eq!(
            inner.url("/bank").unwrap().as_str(),
            "https://api.paystack.co/bank"
        );
    }

    #[tokio::test]
    async fn post_sends_json_with_bearer_token() {
        let (inner, mock_server) = mock_inner_and_server().await;

        Mock::given(method("POST"))
            .and(path("/customer"))
            .and(header(
                "Authorization",
                format!("Bearer {}", MOCK_SECRET_KEY).as_str(),
            ))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({ "email": "customer@email.com" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Customer created",
                "data": { "id": 1 }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let res: Response<Value> = inner
            .post("/customer", &json!({ "email": "customer@email.com" }))
            .await
            .unwrap();

        assert!(res.status);
        assert_eq!(res.data, Some(json!({ "id": 1 })));
    }

    #[tokio::test]
    async fn get_with_query_encodes_parameters() {
        let (inner, mock_server) = mock_inner_and_server().await;

        Mock::given(method("GET"))
            .and(path("/bank"))
            .and(query_param("country", "nigeria"))
            .and(query_param("perPage", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Banks retrieved",
                "data": []
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let res: Response<Vec<Value>> = inner
            .get_with_query("/bank", &[("country", "nigeria"), ("perPage", "10")])
            .await
            .unwrap();

        assert_eq!(res.data, Some(vec![]));
    }

    #[tokio::test]
    async fn empty_success_body_is_tolerated() {
        let (inner, mock_server) = mock_inner_and_server().await;

        Mock::given(method("DELETE"))
            .and(path("/apple-pay/domain"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let res: Response<Value> = inner
            .delete_with_body("/apple-pay/domain", &json!({ "domainName": "example.com" }))
            .await
            .unwrap();

        assert_eq!(res, Response::default());
    }

    #[tokio::test]
    async fn failures_are_classified() {
        let (inner, mock_server) = mock_inner_and_server().await;

        Mock::given(method("PUT"))
            .and(path("/integration/payment_session_timeout"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "status": false,
                "message": "Invalid key"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = inner
            .put::<_, Value>("/integration/payment_session_timeout", &json!({ "timeout": 30 }))
            .await
            .unwrap_err();

        assert!(err.is_authentication_error());
    }
}
