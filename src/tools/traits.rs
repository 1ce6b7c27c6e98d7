//! Tool trait and request/response types

use crate::results::SearchResponse;
use async_trait::async_trait;
use std::collections::HashMap;

/// A ready-to-invoke search tool.
///
/// Construction never performs I/O; the first network call happens inside
/// [`run`](SearchTool::run).
#[async_trait]
pub trait SearchTool: Send + Sync {
    /// Engine name this tool queries
    fn name(&self) -> &str;

    /// Execute a query and return parsed results
    async fn run(&self, query: &str) -> anyhow::Result<SearchResponse>;
}

impl std::fmt::Debug for dyn SearchTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchTool")
            .field("name", &self.name())
            .finish()
    }
}

/// HTTP request to be made by a tool
#[derive(Debug, Clone)]
pub struct ToolRequest {
    /// URL to request
    pub url: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Query parameters
    pub params: HashMap<String, String>,
    /// POST body
    pub body: Option<RequestBody>,
}

impl ToolRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Get,
            headers: HashMap::new(),
            params: HashMap::new(),
            body: None,
        }
    }

    /// Create a POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Post,
            headers: HashMap::new(),
            params: HashMap::new(),
            body: None,
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add form data (sets content-type to form-urlencoded)
    pub fn form(mut self, data: HashMap<String, String>) -> Self {
        self.body = Some(RequestBody::Form(data));
        self
    }

    /// Add a JSON body
    pub fn json(mut self, data: serde_json::Value) -> Self {
        self.body = Some(RequestBody::Json(data));
        self
    }
}

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Request body types
#[derive(Debug, Clone)]
pub enum RequestBody {
    Form(HashMap<String, String>),
    Json(serde_json::Value),
}

/// HTTP response received by a tool
#[derive(Debug)]
pub struct ToolResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl ToolResponse {
    /// Parse the response body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> anyhow::Result<T> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if the response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builders() {
        let request = ToolRequest::get("https://example.org")
            .param("q", "rust")
            .header("Accept", "application/json");

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.params.get("q"), Some(&"rust".to_string()));
        assert!(request.body.is_none());

        let request = ToolRequest::post("https://example.org").json(serde_json::json!({"q": 1}));
        assert!(matches!(request.body, Some(RequestBody::Json(_))));
    }

    #[test]
    fn test_response_status() {
        let response = ToolResponse {
            status: 204,
            text: String::new(),
            url: "https://example.org".to_string(),
        };
        assert!(response.is_success());

        let response = ToolResponse {
            status: 429,
            text: String::new(),
            url: "https://example.org".to_string(),
        };
        assert!(!response.is_success());
    }
}
