//! Request/response envelope shared by every handler.
//!
//! The shape follows what serverless HTTP gateways hand to a function:
//! a method string, an optional body and optional query parameters in, and
//! a status code, headers and a JSON body string out.

use std::collections::{BTreeMap, HashMap};

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::cors;
use crate::error::AppError;

/// An incoming HTTP-like invocation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpEvent {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl HttpEvent {
    pub fn new(method: &str) -> Self {
        Self {
            http_method: Some(method.to_string()),
            ..Default::default()
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_query(mut self, name: &str, value: &str) -> Self {
        self.query_string_parameters
            .get_or_insert_with(HashMap::new)
            .insert(name.to_string(), value.to_string());
        self
    }

    /// The request method, or `default` when the gateway omitted it.
    pub fn method_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.http_method.as_deref().unwrap_or(default)
    }

    /// A query parameter, treating an empty value as absent.
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Deserialize the JSON body. A missing or blank body reads as `{}`.
    pub fn json_body<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        let decoded;
        let text = match self.body.as_deref() {
            None => "",
            Some(raw) if self.is_base64_encoded => {
                let bytes = STANDARD
                    .decode(raw.trim())
                    .map_err(|e| AppError::Validation(format!("Invalid base64 body: {e}")))?;
                decoded = String::from_utf8(bytes)
                    .map_err(|_| AppError::Validation("Body must be UTF-8".into()))?;
                decoded.as_str()
            }
            Some(raw) => raw,
        };

        let text = if text.trim().is_empty() { "{}" } else { text };
        serde_json::from_str(text)
            .map_err(|e| AppError::Validation(format!("Invalid JSON body: {e}")))
    }
}

/// The result of a handler invocation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl HttpResponse {
    /// A response with the CORS origin header and an empty body.
    pub fn empty(status: StatusCode) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(
            cors::ALLOW_ORIGIN_HEADER.to_string(),
            cors::ALLOW_ORIGIN.to_string(),
        );
        Self {
            status_code: status.as_u16(),
            headers,
            body: String::new(),
            is_base64_encoded: false,
        }
    }

    /// A JSON response with the CORS origin header.
    pub fn json<T: Serialize>(status: StatusCode, value: &T) -> Self {
        let (status, body) = match serde_json::to_string(value) {
            Ok(body) => (status, body),
            Err(e) => {
                tracing::error!("Failed to serialize response body: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    r#"{"error":"An unexpected error occurred"}"#.to_string(),
                )
            }
        };

        let mut response = Self::empty(status);
        response
            .headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        response.body = body;
        response
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let mut builder = Response::builder().status(self.status());
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder.body(Body::from(self.body)).unwrap_or_else(|e| {
            tracing::error!("Failed to build HTTP response: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })
    }
}
