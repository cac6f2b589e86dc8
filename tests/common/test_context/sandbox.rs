use paystack_rust::PaystackClient;

pub struct TestContext {
    pub client: PaystackClient,
}

impl TestContext {
    pub async fn start() -> Self {
        // Take the test secret key from the env
        let secret_key = std::env::var("ACCEPTANCE_TESTS_SECRET_KEY").unwrap();
        assert!(
            secret_key.starts_with("sk_test_"),
            "Acceptance tests must never run against a live key"
        );

        // Configure a new PaystackClient to point to the Paystack API
        let client = PaystackClient::new(secret_key).unwrap();

        Self { client }
    }

    pub fn client_with_secret_key(&self, secret_key: &str) -> PaystackClient {
        PaystackClient::new(secret_key).unwrap()
    }

    /// Real responses come from Paystack, so there is nothing to prepare.
    pub async fn respond_with(
        &self,
        _http_method: &str,
        _request_path: &str,
        _status: u16,
        _body: &str,
    ) {
    }

    pub async fn respond_to_any_key_with(
        &self,
        _http_method: &str,
        _request_path: &str,
        _status: u16,
        _body: &str,
    ) {
    }
}
