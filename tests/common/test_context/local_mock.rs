use paystack_rust::PaystackClient;
use url::Url;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

static MOCK_SECRET_KEY: &str = "sk_test_integration-secret-key";

pub struct TestContext {
    pub client: PaystackClient,
    mock_server: MockServer,
}

impl TestContext {
    pub async fn start() -> Self {
        // Setup a new mock server
        let mock_server = MockServer::start().await;

        // Configure a new PaystackClient to point to the mock server
        let client = PaystackClient::builder(MOCK_SECRET_KEY)
            .unwrap()
            .with_base_url(Url::parse(&mock_server.uri()).unwrap())
            .build()
            .unwrap();

        Self {
            client,
            mock_server,
        }
    }

    /// Client sharing this context's base URL but authenticating with another key.
    pub fn client_with_secret_key(&self, secret_key: &str) -> PaystackClient {
        PaystackClient::builder(secret_key)
            .unwrap()
            .with_base_url(Url::parse(&self.mock_server.uri()).unwrap())
            .build()
            .unwrap()
    }

    /// Serves `body` exactly once for requests matching `http_method` and `request_path`.
    ///
    /// Only requests carrying this context's secret key match. Anything else gets a 404.
    pub async fn respond_with(
        &self,
        http_method: &str,
        request_path: &str,
        status: u16,
        body: &str,
    ) {
        Mock::given(method(http_method))
            .and(path(request_path))
            .and(header(
                "Authorization",
                format!("Bearer {}", MOCK_SECRET_KEY).as_str(),
            ))
            .respond_with(ResponseTemplate::new(status).set_body_raw(body, "application/json"))
            .expect(1)
            .mount(&self.mock_server)
            .await;
    }

    /// Serves `body` for requests made with any secret key.
    #[allow(dead_code)]
    pub async fn respond_to_any_key_with(
        &self,
        http_method: &str,
        request_path: &str,
        status: u16,
        body: &str,
    ) {
        Mock::given(method(http_method))
            .and(path(request_path))
            .respond_with(ResponseTemplate::new(status).set_body_raw(body, "application/json"))
            .mount(&self.mock_server)
            .await;
    }
}
