//! Mock implementations for testing.
//!
//! `MockHttpTransport` stands in for the backend: tests enqueue canned
//! responses and inspect the requests the adapter sent.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Mock HTTP transport for testing.
///
/// # Example
///
/// ```
/// use integrations_embedding_adapter::mocks::MockHttpTransport;
/// use integrations_embedding_adapter::transport::{HttpMethod, HttpRequest, HttpTransport};
/// use std::collections::HashMap;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let transport = MockHttpTransport::new();
/// transport.enqueue_json_response(200, r#"{"embedding": {"values": [0.1]}}"#);
///
/// let request = HttpRequest {
///     method: HttpMethod::Post,
///     url: "https://example.com/v1beta/models/m:embedContent".to_string(),
///     headers: HashMap::new(),
///     body: None,
/// };
///
/// let response = transport.send(request).await.unwrap();
/// assert_eq!(response.status, 200);
/// transport.verify_request_count(1);
/// # });
/// ```
pub struct MockHttpTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockHttpTransport {
    /// Create a new mock HTTP transport.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Enqueue a response to be returned by the next request.
    pub fn enqueue_response(&self, response: Result<HttpResponse, TransportError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Enqueue a JSON response with the given status code and body.
    pub fn enqueue_json_response(&self, status: u16, body: &str) {
        self.enqueue_body(status, "application/json", body);
    }

    /// Enqueue a plain-text response with the given status code and body.
    pub fn enqueue_text_response(&self, status: u16, body: &str) {
        self.enqueue_body(status, "text/plain", body);
    }

    fn enqueue_body(&self, status: u16, content_type: &str, body: &str) {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), content_type.to_string());

        self.enqueue_response(Ok(HttpResponse {
            status,
            headers,
            body: Bytes::from(body.to_string()),
        }));
    }

    /// Enqueue a transport failure.
    pub fn enqueue_error(&self, error: TransportError) {
        self.enqueue_response(Err(error));
    }

    /// Get all requests that were made.
    pub fn get_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Get the last request that was made.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Parse the body of request `index` as JSON.
    pub fn request_json(&self, index: usize) -> serde_json::Value {
        let requests = self.requests.lock().unwrap();
        let body = requests[index].body.as_ref().expect("request has no body");
        serde_json::from_slice(body).expect("request body is not JSON")
    }

    /// Verify that exactly `expected` requests were made.
    pub fn verify_request_count(&self, expected: usize) {
        let actual = self.requests.lock().unwrap().len();
        assert_eq!(actual, expected, "Expected {} requests, got {}", expected, actual);
    }

    /// Verify that a request was made with the expected method and URL.
    pub fn verify_request(&self, index: usize, method: HttpMethod, url_contains: &str) {
        let requests = self.requests.lock().unwrap();
        assert!(index < requests.len(), "No request at index {}", index);

        let request = &requests[index];
        assert_eq!(request.method, method, "Expected method {:?}, got {:?}", method, request.method);
        assert!(
            request.url.contains(url_contains),
            "Expected URL to contain '{}', got '{}'",
            url_contains,
            request.url
        );
    }

    /// Verify that a request contains a specific header.
    pub fn verify_header(&self, index: usize, header_name: &str, header_value: &str) {
        let requests = self.requests.lock().unwrap();
        assert!(index < requests.len(), "No request at index {}", index);

        let actual_value = requests[index].headers.get(header_name);
        assert_eq!(
            actual_value,
            Some(&header_value.to_string()),
            "Expected header '{}' to be '{}', got {:?}",
            header_name,
            header_value,
            actual_value
        );
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Connection(
                    "No response configured in MockHttpTransport".into(),
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            url: url.to_string(),
            headers: HashMap::new(),
            body: Some(Bytes::from_static(br#"{"a": 1}"#)),
        }
    }

    #[tokio::test]
    async fn test_responses_are_returned_in_order() {
        let transport = MockHttpTransport::new();
        transport.enqueue_json_response(200, r#"{"id": 1}"#);
        transport.enqueue_text_response(500, "boom");

        let first = transport.send(request("https://example.com/1")).await.unwrap();
        let second = transport.send(request("https://example.com/2")).await.unwrap();

        assert_eq!(first.status, 200);
        assert_eq!(second.status, 500);
        assert_eq!(second.text(), "boom");
        transport.verify_request_count(2);
        assert_eq!(transport.request_json(0)["a"], 1);
    }

    #[tokio::test]
    async fn test_empty_queue_is_connection_error() {
        let transport = MockHttpTransport::new();
        let result = transport.send(request("https://example.com")).await;
        assert!(matches!(result, Err(TransportError::Connection(_))));
        assert_eq!(transport.last_request().unwrap().url, "https://example.com");
    }
}
