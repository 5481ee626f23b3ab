use crate::errors::ApiError;
use crate::models::{
    Property, PropertyPayload, Snapshot, Tenant, TenantPayload, TogglePaymentRequest,
};
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::error;

/// Shown whenever the backend cannot be reached.
pub const CONNECT_HINT: &str =
    "Could not connect to the backend. Please make sure it is running.";

/// Thin wrapper over the backend REST API. One method per endpoint; every
/// mutation either succeeds or surfaces an [`ApiError`] with a message fit
/// for the user. No retries, no auth.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_snapshot(&self) -> Result<Snapshot, ApiError> {
        let response = self
            .http
            .get(self.url("/data"))
            .send()
            .await
            .map_err(connection_error)?;
        let response = expect_success(response, "Failed to load data").await?;
        response.json().await.map_err(malformed)
    }

    pub async fn create_tenant(&self, payload: &TenantPayload) -> Result<Tenant, ApiError> {
        let response = self
            .http
            .post(self.url("/tenants"))
            .json(payload)
            .send()
            .await
            .map_err(connection_error)?;
        let response = expect_success(response, "Failed to save tenant").await?;
        response.json().await.map_err(malformed)
    }

    pub async fn update_tenant(
        &self,
        id: i64,
        payload: &TenantPayload,
    ) -> Result<Tenant, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("/tenants/{id}")))
            .json(payload)
            .send()
            .await
            .map_err(connection_error)?;
        let response = expect_success(response, "Failed to save tenant").await?;
        response.json().await.map_err(malformed)
    }

    pub async fn delete_tenant(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/tenants/{id}")))
            .send()
            .await
            .map_err(connection_error)?;
        expect_success(response, "Failed to delete tenant").await?;
        Ok(())
    }

    pub async fn create_property(&self, payload: &PropertyPayload) -> Result<Property, ApiError> {
        let response = self
            .http
            .post(self.url("/properties"))
            .json(payload)
            .send()
            .await
            .map_err(connection_error)?;
        let response = expect_success(response, "Failed to save property").await?;
        response.json().await.map_err(malformed)
    }

    pub async fn delete_property(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/properties/{id}")))
            .send()
            .await
            .map_err(connection_error)?;
        expect_success(response, "Failed to delete property").await?;
        Ok(())
    }

    pub async fn toggle_payment(
        &self,
        tenant_id: i64,
        month: u32,
        year: i32,
    ) -> Result<(), ApiError> {
        let request = TogglePaymentRequest {
            tenant_id,
            month,
            year,
        };
        let response = self
            .http
            .post(self.url("/payments/toggle"))
            .json(&request)
            .send()
            .await
            .map_err(connection_error)?;
        expect_success(response, "Failed to update payment status").await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Non-success statuses carry the server's `{"error": ...}` reason when one
/// is present (the occupied-property rejection relies on this being shown
/// verbatim), otherwise the caller's fallback message.
async fn expect_success(response: Response, fallback: &str) -> Result<Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            error: Some(message),
        }) => message,
        _ => fallback.to_string(),
    };
    error!("backend returned {status}: {message}");
    Err(ApiError::Request(message))
}

fn connection_error(err: reqwest::Error) -> ApiError {
    error!("backend unreachable: {err}");
    ApiError::Connection(CONNECT_HINT.to_string())
}

fn malformed(err: reqwest::Error) -> ApiError {
    error!("malformed backend response: {err}");
    ApiError::Request("Received a malformed response from the backend".to_string())
}
