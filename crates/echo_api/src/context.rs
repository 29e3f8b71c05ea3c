//! The shared API client context.

use echo_types::ApiOperation;
use reqwest::StatusCode;

use crate::error::ApiError;

/// Typed HTTP client bound to a base URL.
///
/// Constructed once by [`ApiProvider`](crate::ApiProvider) and shared with
/// the whole component tree through Leptos context; read-only after
/// construction, with no teardown.
#[derive(Clone)]
pub struct ApiContext {
    client: reqwest::Client,
    base_url: String,
}

impl ApiContext {
    /// Create a client bound to the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// The base URL all operations are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// POST one operation and decode the declared response type.
    ///
    /// Success is the declared 200 with a JSON body; any other status,
    /// transport failure, or decode failure comes back as an [`ApiError`].
    pub async fn execute<Op: ApiOperation>(&self, operation: &Op) -> Result<Op::Response, ApiError> {
        let response = self
            .client
            .post(self.url_for(Op::PATH))
            .json(operation)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let ctx = ApiContext::new("http://localhost:5080");
        assert_eq!(
            ctx.url_for("/api/demo/echo"),
            "http://localhost:5080/api/demo/echo"
        );
    }

    #[test]
    fn test_url_tolerates_trailing_slash() {
        let ctx = ApiContext::new("http://localhost:5080/");
        assert_eq!(
            ctx.url_for("/api/demo/echo"),
            "http://localhost:5080/api/demo/echo"
        );
    }
}
