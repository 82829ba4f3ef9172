use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::application::ports::trash_ports::DocumentApi;
use crate::common::config::ApiConfig;
use crate::common::errors::{DomainError, ErrorContext, ErrorKind, Result};
use crate::domain::entities::deleted_document::DeletedDocument;

/// HTTP implementation of the document API
pub struct HttpDocumentApi {
    client: Client,
    base_url: Url,
    auth_token: Option<String>,
}

impl HttpDocumentApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .with_context(|| "Failed to build HTTP client")?;

        let base_url = Url::parse(config.base_url.trim())
            .with_error_kind(ErrorKind::InvalidInput, "ApiConfig")?;
        if base_url.cannot_be_a_base() {
            return Err(DomainError::validation_error(
                "ApiConfig",
                format!("API URL cannot be used as a base: {}", config.base_url),
            ));
        }

        Ok(Self {
            client,
            base_url,
            auth_token: config.auth_token.clone(),
        })
    }

    /// Appends percent-encoded path segments to the base URL
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DomainError::validation_error("ApiConfig", "API URL cannot be used as a base"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn document_url(&self, id: &str, action: &str) -> Result<Url> {
        validate_document_id(id)?;
        self.url(&["documents", id, action])
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = self.authorize(request).send().await.map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = status_error(status, &body);
        error!("Document API responded {}: {}", status, err.message);
        Err(err)
    }
}

#[async_trait]
impl DocumentApi for HttpDocumentApi {
    #[instrument(skip(self))]
    async fn list_deleted_documents(&self) -> Result<Vec<DeletedDocument>> {
        let response = self.send(self.client.get(self.url(&["documents", "trash"])?)).await?;

        let documents = response
            .json::<Vec<DeletedDocument>>()
            .await
            .with_error_kind(ErrorKind::InternalError, "Trash")?;

        debug!("Received {} deleted documents", documents.len());
        Ok(documents)
    }

    #[instrument(skip(self))]
    async fn restore_document(&self, id: &str) -> Result<()> {
        let url = self.document_url(id, "restore")?;
        self.send(self.client.post(url))
            .await
            .map_err(|e| e.with_id(id))?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn permanently_delete(&self, id: &str) -> Result<()> {
        let url = self.document_url(id, "permanent")?;
        self.send(self.client.delete(url))
            .await
            .map_err(|e| e.with_id(id))?;
        Ok(())
    }
}

/// Ids are opaque, but a blank id, a dot segment or a slash would address
/// another resource even after percent-encoding.
fn validate_document_id(id: &str) -> Result<()> {
    if id.trim().is_empty() || id == "." || id == ".." || id.contains('/') {
        return Err(DomainError::validation_error(
            "Document",
            format!("Invalid document ID: {:?}", id),
        ));
    }
    Ok(())
}

fn transport_error(err: reqwest::Error) -> DomainError {
    let message = err.to_string();
    let mapped = if err.is_timeout() {
        DomainError::timeout("DocumentApi", message)
    } else {
        DomainError::internal_error("DocumentApi", message)
    };
    mapped.with_source(err)
}

fn kind_for_status(status: StatusCode) -> ErrorKind {
    match status {
        StatusCode::NOT_FOUND => ErrorKind::NotFound,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ErrorKind::AccessDenied,
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ErrorKind::InvalidInput,
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => ErrorKind::Timeout,
        _ => ErrorKind::InternalError,
    }
}

/// Extracts a string `detail` field from a JSON error body
fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn status_error(status: StatusCode, body: &str) -> DomainError {
    let err = DomainError::new(
        kind_for_status(status),
        "DocumentApi",
        format!("Request failed with status code {}", status.as_u16()),
    );
    match error_detail(body) {
        Some(detail) => err.with_detail(detail),
        None => err,
    }
}
