//! Plain-data HTTP request and decoded response types.
//!
//! # Design
//! `PokeApiClient` shapes every call into an `HttpRequest` before touching
//! the network, so URL and body construction can be checked without I/O.
//! The decoded result of a round trip is an `ApiResponse`.

use serde_json::{Map, Value};

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Decoded result of one call: the status code and the JSON object body.
///
/// Owned by the caller and not retained by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Map<String, Value>,
}

impl ApiResponse {
    /// Look up a top-level key of the body.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }
}
