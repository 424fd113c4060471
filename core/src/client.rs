//! Blocking HTTP client for the PokeAPI.
//!
//! # Design
//! `PokeApiClient` splits each call into a `build_*` step that produces a
//! plain-data `HttpRequest` and an `execute` step that performs the round
//! trip. Shaping stays deterministic and testable without a network.
//!
//! The `ureq::Agent` is created on first use and kept in a per-instance
//! `OnceCell`, so every call on one client reuses the same connection pool
//! and nothing is shared between clients. `OnceCell` makes the client
//! `!Sync`; it is meant to be owned by a single caller.

use std::cell::OnceCell;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiErrorKind};
use crate::http::{ApiResponse, HttpMethod, HttpRequest};
use crate::types::{CreatePokemon, ResourceQuery, ResourceType};

/// The calls the fetch services need from a PokeAPI connection.
///
/// Implemented by `PokeApiClient`; tests substitute their own.
pub trait PokeApi {
    fn get_pokemon(&self, name: &str) -> Result<ApiResponse, ApiError>;
    fn get_berry(&self, name: &str) -> Result<ApiResponse, ApiError>;
    fn get_item(&self, name: &str) -> Result<ApiResponse, ApiError>;

    /// Illustrative write call. The public PokeAPI is read-only and rejects
    /// this request.
    fn create_pokemon(&self, params: &CreatePokemon) -> Result<ApiResponse, ApiError>;
}

/// Wire shape of the create call; `locations` is always sent empty.
#[derive(Serialize)]
struct CreatePokemonBody<'a> {
    name: &'a str,
    height: i64,
    weight: i64,
    locations: Map<String, Value>,
}

pub struct PokeApiClient {
    config: ClientConfig,
    base_url: String,
    agent: OnceCell<ureq::Agent>,
}

impl fmt::Debug for PokeApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PokeApiClient")
            .field("base_url", &self.base_url)
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl PokeApiClient {
    pub fn new(config: ClientConfig) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Self {
            config,
            base_url,
            agent: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Whether the underlying agent has been created yet.
    pub fn is_connected(&self) -> bool {
        self.agent.get().is_some()
    }

    pub fn build_get(&self, query: &ResourceQuery) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/{}", self.base_url, query.path()),
            headers: vec![("accept".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    pub fn build_create_pokemon(&self, params: &CreatePokemon) -> Result<HttpRequest, ApiError> {
        let payload = CreatePokemonBody {
            name: &params.name,
            height: params.height,
            weight: params.weight,
            locations: Map::new(),
        };
        let body = serde_json::to_string(&payload)
            .map_err(|e| ApiError::new(ApiErrorKind::Encode, e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/{}", self.base_url, ResourceType::Pokemon),
            headers: vec![
                ("accept".to_string(), "application/json".to_string()),
                ("content-type".to_string(), "application/json".to_string()),
            ],
            body: Some(body),
        })
    }

    /// Perform one round trip and decode the JSON object body.
    ///
    /// Non-2xx statuses are errors; the status check runs before decoding.
    pub fn execute(&self, request: &HttpRequest) -> Result<ApiResponse, ApiError> {
        debug!(
            method = request.method.as_str(),
            url = %request.url,
            headers = ?request.headers,
            body = request.body.as_deref().unwrap_or(""),
            "PokeAPI request"
        );

        let result = self.send(request).and_then(|mut response| {
            let status = response.status().as_u16();
            let headers: Vec<(String, String)> = response
                .headers()
                .iter()
                .map(|(name, value)| {
                    (name.to_string(), value.to_str().unwrap_or_default().to_string())
                })
                .collect();
            let text = response.body_mut().read_to_string()?;
            Ok((status, headers, text))
        });

        let (status, headers, text) = result.map_err(|err| {
            let err = ApiError::from(err);
            warn!(url = %request.url, kind = %err.kind(), "PokeAPI transport failure: {}", err.message());
            err
        })?;

        debug!(status, headers = ?headers, body = %text, "PokeAPI response");

        if !(200..300).contains(&status) {
            let err = ApiError::new(
                ApiErrorKind::Status(status),
                format!("the server responded with status {status} for {}", request.url),
            );
            warn!(url = %request.url, status, "PokeAPI request rejected");
            return Err(err);
        }

        let body = decode_body(&text)?;
        Ok(ApiResponse { status, body })
    }

    fn send(&self, request: &HttpRequest) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
        let agent = self.agent();
        match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => {
                let mut builder = agent.get(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
            (HttpMethod::Post, body) => {
                let mut builder = agent.post(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        }
    }

    fn agent(&self) -> &ureq::Agent {
        self.agent.get_or_init(|| {
            debug!(base_url = %self.base_url, "opening PokeAPI connection");
            ureq::Agent::config_builder()
                .timeout_connect(Some(self.config.connect_timeout))
                .timeout_recv_response(Some(self.config.read_timeout))
                .timeout_recv_body(Some(self.config.read_timeout))
                .http_status_as_error(false)
                .build()
                .new_agent()
        })
    }

    fn get(&self, resource: ResourceType, name: &str) -> Result<ApiResponse, ApiError> {
        let request = self.build_get(&ResourceQuery::new(resource, name));
        self.execute(&request)
    }
}

impl PokeApi for PokeApiClient {
    fn get_pokemon(&self, name: &str) -> Result<ApiResponse, ApiError> {
        self.get(ResourceType::Pokemon, name)
    }

    fn get_berry(&self, name: &str) -> Result<ApiResponse, ApiError> {
        self.get(ResourceType::Berry, name)
    }

    fn get_item(&self, name: &str) -> Result<ApiResponse, ApiError> {
        self.get(ResourceType::Item, name)
    }

    fn create_pokemon(&self, params: &CreatePokemon) -> Result<ApiResponse, ApiError> {
        let request = self.build_create_pokemon(params)?;
        self.execute(&request)
    }
}

/// An empty body decodes to an empty object; anything but an object is an error.
fn decode_body(text: &str) -> Result<Map<String, Value>, ApiError> {
    if text.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ApiError::new(
            ApiErrorKind::Decode,
            format!("expected a JSON object, got {}", json_type(&other)),
        )),
        Err(e) => Err(ApiError::new(ApiErrorKind::Decode, e.to_string())),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
