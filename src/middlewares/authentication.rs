use crate::Error;
use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use secrecy::{ExposeSecret, SecretString};
use task_local_extensions::Extensions;

/// Reqwest middleware to inject the secret key as a bearer token into outgoing HTTP requests.
pub struct AuthenticationMiddleware {
    bearer: HeaderValue,
}

impl AuthenticationMiddleware {
    pub fn new(secret_key: &SecretString) -> Result<Self, Error> {
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", secret_key.expose_secret()))
            .map_err(|_| Error::ValidationError {
                field: "secret_key",
                message: "is not a valid header value".to_string(),
            })?;
        bearer.set_sensitive(true);

        Ok(Self { bearer })
    }
}

#[async_trait]
impl Middleware for AuthenticationMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        req.headers_mut().insert(AUTHORIZATION, self.bearer.clone());

        next.run(req, extensions).await
    }
}
