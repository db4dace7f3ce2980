//! WestFax API client.
//!
//! Low-level HTTP plumbing plus the four remote operations. Every
//! operation is a single form-encoded POST against a fixed path; the
//! client holds no state besides its immutable identity.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::envelope::ApiResponse;
use crate::error::{Result, WestfaxError};
use crate::models::{Fax, FaxDirection};

const DEFAULT_API_URL: &str = "https://api2.westfax.com/REST";
const USER_AGENT: &str = concat!("westfax/", env!("CARGO_PKG_VERSION"));

/// Document format requested from the document endpoint.
const DOCUMENT_FORMAT: &str = "pdf";

/// WestFax API client.
///
/// Holds the connection identity (base URL, username, password, product id)
/// set once at construction, and exposes the four remote operations. Each
/// operation is one synchronous request/response round trip; there is no
/// retry, no caching, and no state carried between calls, so one client may
/// be shared freely across tasks.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use westfax::WestfaxClient;
///
/// # async fn example() -> westfax::Result<()> {
/// // Create from environment variables
/// let client = WestfaxClient::from_env()?;
///
/// // Or configure manually
/// let client = WestfaxClient::new("user", "secret", "product-id")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct WestfaxClient {
    http: Client,
    base_url: Arc<Url>,
    username: String,
    password: String,
    product_id: String,
}

impl std::fmt::Debug for WestfaxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WestfaxClient")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Credential triplet attached to every fax endpoint as form fields.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
    cookies: bool,
    product_id: &'a str,
}

#[derive(Serialize)]
struct PingParams<'a> {
    #[serde(rename = "StringParams1")]
    message: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct FaxIdParams<'a> {
    #[serde(flatten)]
    credentials: Credentials<'a>,
    fax_ids1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct IdentifierQueryParams<'a> {
    #[serde(flatten)]
    credentials: Credentials<'a>,
    start_date: &'a str,
    fax_direction: FaxDirection,
}

impl WestfaxClient {
    /// Create a client against the production WestFax endpoint.
    ///
    /// Performs no network I/O; any credential triplet is accepted as-is
    /// and validated only by the remote service.
    pub fn new(username: &str, password: &str, product_id: &str) -> Result<Self> {
        Self::with_base_url(username, password, product_id, DEFAULT_API_URL)
    }

    /// Create a client against a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_base_url(
        username: &str,
        password: &str,
        product_id: &str,
        base_url: &str,
    ) -> Result<Self> {
        // Ensure base URL ends with / so fixed path suffixes join below it
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(WestfaxError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            username: username.to_string(),
            password: password.to_string(),
            product_id: product_id.to_string(),
        })
    }

    /// Create a client from environment variables.
    ///
    /// Uses `WESTFAX_USERNAME`, `WESTFAX_PASSWORD` and `WESTFAX_PRODUCT_ID`
    /// for the credential triplet, and optionally `WESTFAX_API_URL` for the
    /// base URL (defaults to `https://api2.westfax.com/REST`).
    ///
    /// # Errors
    ///
    /// Returns an error if any required variable is not set.
    pub fn from_env() -> Result<Self> {
        let username = require_env("WESTFAX_USERNAME")?;
        let password = require_env("WESTFAX_PASSWORD")?;
        let product_id = require_env("WESTFAX_PRODUCT_ID")?;

        let base_url =
            env::var("WESTFAX_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::with_base_url(&username, &password, &product_id, &base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Echo `message` off the service.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[tracing::instrument(skip(self))]
    pub async fn ping(&self, message: &str) -> Result<ApiResponse<String>> {
        let params = PingParams { message };
        self.post_form("Security_Ping/json", &params).await
    }

    /// Fetch the full metadata record for one fax.
    ///
    /// # Errors
    ///
    /// Returns [`WestfaxError::EmptyResult`] if the service knows no fax
    /// with this id, besides the usual transport and decode errors.
    #[tracing::instrument(skip(self))]
    pub async fn get_fax_description(&self, fax_id: &str) -> Result<ApiResponse<Fax>> {
        let params = FaxIdParams {
            credentials: self.credentials(),
            fax_ids1: fax_id_fragment(fax_id),
            format: None,
        };

        let response: ApiResponse<Vec<Fax>> = self
            .post_form("Fax_GetFaxDescriptionsUsingIds/json", &params)
            .await?;
        first_record(response, "Fax_GetFaxDescriptionsUsingIds", fax_id)
    }

    /// Fetch one fax with its document payload attached.
    ///
    /// The returned record's `fax_files` carries the document as base64
    /// text in PDF format.
    ///
    /// # Errors
    ///
    /// Returns [`WestfaxError::EmptyResult`] if the service knows no fax
    /// with this id, besides the usual transport and decode errors.
    #[tracing::instrument(skip(self))]
    pub async fn get_fax_document(&self, fax_id: &str) -> Result<ApiResponse<Fax>> {
        let params = FaxIdParams {
            credentials: self.credentials(),
            fax_ids1: fax_id_fragment(fax_id),
            format: Some(DOCUMENT_FORMAT),
        };

        let response: ApiResponse<Vec<Fax>> =
            self.post_form("Fax_GetFaxDocuments/json", &params).await?;
        first_record(response, "Fax_GetFaxDocuments", fax_id)
    }

    /// List inbound faxes received since `start_date`.
    ///
    /// `start_date` is passed through unvalidated; formatting it the way
    /// the service expects is the caller's contract. An empty list is a
    /// legitimate answer, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[tracing::instrument(skip(self))]
    pub async fn get_inbound_fax_identifiers(
        &self,
        start_date: &str,
    ) -> Result<ApiResponse<Vec<Fax>>> {
        let params = IdentifierQueryParams {
            credentials: self.credentials(),
            start_date,
            fax_direction: FaxDirection::Inbound,
        };

        self.post_form("Fax_GetFaxIdentifiers/json", &params).await
    }

    fn credentials(&self) -> Credentials<'_> {
        Credentials {
            username: &self.username,
            password: &self.password,
            cookies: false,
            product_id: &self.product_id,
        }
    }

    /// POST a form to a fixed path suffix and decode the response envelope.
    async fn post_form<T, F>(&self, path: &str, form: &F) -> Result<T>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(WestfaxError::HttpError)?;

        let response = Self::check_response(response).await?;

        // Body is fully read on every path; failures here are transport,
        // failures below are decode.
        let body = response.text().await.map_err(WestfaxError::HttpError)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = Self::extract_error_message(response, status).await;
        Err(WestfaxError::ApiError {
            message,
            status_code: Some(status.as_u16()),
        })
    }

    /// Extract error message from a failed response.
    async fn extract_error_message(response: Response, status: reqwest::StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        if body.is_empty() {
            return format!("HTTP {status}");
        }

        // Try to parse as JSON and extract a message field
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(msg) = json.get("Message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
        }

        body
    }
}

fn require_env(name: &'static str) -> Result<String> {
    env::var(name)
        .map_err(|_| WestfaxError::ConfigMissing(format!("{name} environment variable not set")))
}

/// The `FaxIds1` form value: a JSON fragment carrying one fax id.
fn fax_id_fragment(fax_id: &str) -> String {
    serde_json::json!({ "Id": fax_id }).to_string()
}

/// Surface the first element of a scalar-returning endpoint's result list,
/// keeping the service-reported success flag. An empty list is an explicit
/// error, never an out-of-bounds access.
fn first_record(
    response: ApiResponse<Vec<Fax>>,
    operation: &'static str,
    fax_id: &str,
) -> Result<ApiResponse<Fax>> {
    let ApiResponse { success, result } = response;
    let fax = result
        .into_iter()
        .next()
        .ok_or_else(|| WestfaxError::EmptyResult {
            operation,
            fax_id: fax_id.to_string(),
        })?;

    Ok(ApiResponse {
        success,
        result: fax,
    })
}
