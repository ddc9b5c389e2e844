use gloo::net::http::{Request, Response};
use shared::{
    AuthCheckResponse, CredentialsRequest, ExchangeRateResponse, ExchangeRateSnapshot, Identity,
    Summary, Transaction, TransactionPayload,
};
use thiserror::Error;
use web_sys::RequestCredentials;
use yew::Callback;

/// Default API origin. Override with [`ApiClient::with_base_url`].
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401/403; the unauthorized callback has already been notified
    #[error("not authenticated")]
    Unauthorized,
    /// Any other non-2xx response, surfaced unmodified
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// API client for the finance dashboard backend.
///
/// Every request goes to a fixed base origin with session cookies attached
/// and a JSON content type. Authorization failures on any call invoke the
/// registered `on_unauthorized` callback; navigation policy stays with the
/// UI layer, the transport only reports. Other error statuses are returned
/// to the caller as-is. No retries, no explicit timeouts.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    on_unauthorized: Callback<()>,
}

impl ApiClient {
    pub fn new(on_unauthorized: Callback<()>) -> Self {
        Self::with_base_url(DEFAULT_API_BASE.to_string(), on_unauthorized)
    }

    pub fn with_base_url(base_url: String, on_unauthorized: Callback<()>) -> Self {
        Self {
            base_url,
            on_unauthorized,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Global response policy: 401/403 fire the unauthorized callback, any
    /// other failure status is passed through with its body.
    async fn ensure_ok(&self, response: Response) -> Result<Response, ApiError> {
        match response.status() {
            401 | 403 => {
                self.on_unauthorized.emit(());
                Err(ApiError::Unauthorized)
            }
            _ if response.ok() => Ok(response),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ApiError::Status { status, body })
            }
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .credentials(RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.ensure_ok(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Resolve the current session, if any.
    pub async fn check(&self) -> Result<Identity, ApiError> {
        let body: AuthCheckResponse = self.get_json("/auth/check").await?;
        Ok(body.user)
    }

    /// Exchange credentials for a session cookie. The caller owns the
    /// resulting local session transition.
    pub async fn login(&self, credentials: &CredentialsRequest) -> Result<(), ApiError> {
        self.post_empty("/auth/login", credentials).await
    }

    pub async fn signup(&self, credentials: &CredentialsRequest) -> Result<(), ApiError> {
        self.post_empty("/auth/signup", credentials).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = Request::post(&self.url("/auth/logout"))
            .credentials(RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.ensure_ok(response).await?;
        Ok(())
    }

    pub async fn summary(&self) -> Result<Summary, ApiError> {
        self.get_json("/transactions/summary").await
    }

    pub async fn list_transactions(
        &self,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<Transaction>, ApiError> {
        self.get_json(&format!("/transactions/?skip={}&limit={}", skip, limit))
            .await
    }

    pub async fn create_transaction(
        &self,
        payload: &TransactionPayload,
    ) -> Result<Transaction, ApiError> {
        let response = Request::post(&self.url("/transactions/"))
            .credentials(RequestCredentials::Include)
            .json(payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.ensure_ok(response).await?;
        response
            .json::<Transaction>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn update_transaction(
        &self,
        id: i64,
        payload: &TransactionPayload,
    ) -> Result<Transaction, ApiError> {
        let response = Request::put(&self.url(&format!("/transactions/{}", id)))
            .credentials(RequestCredentials::Include)
            .json(payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.ensure_ok(response).await?;
        response
            .json::<Transaction>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn delete_transaction(&self, id: i64) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(&format!("/transactions/{}", id)))
            .credentials(RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.ensure_ok(response).await?;
        Ok(())
    }

    pub async fn exchange_rate(&self) -> Result<ExchangeRateSnapshot, ApiError> {
        let body: ExchangeRateResponse = self.get_json("/transactions/exchange-rate").await?;
        Ok(body.result)
    }

    /// Fetch the CSV report as raw bytes. The response is the only
    /// non-JSON payload in the contract.
    pub async fn report(&self) -> Result<Vec<u8>, ApiError> {
        let response = Request::get(&self.url("/transactions/report"))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.ensure_ok(response).await?;
        response
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_empty<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let response = Request::post(&self.url(path))
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.ensure_ok(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = ApiClient::with_base_url(
            "http://localhost:8000".to_string(),
            Callback::noop(),
        );
        assert_eq!(
            client.url("/transactions/summary"),
            "http://localhost:8000/transactions/summary"
        );
    }

    #[test]
    fn test_status_error_carries_body() {
        let err = ApiError::Status {
            status: 422,
            body: "amount required".to_string(),
        };
        assert_eq!(err.to_string(), "server returned 422: amount required");
    }
}
