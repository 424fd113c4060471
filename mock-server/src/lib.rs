use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

/// In-memory stand-in for the PokeAPI `v2` read endpoints.
///
/// Resources are keyed by `(resource, name)`, e.g. `("pokemon", "sprigatito")`.
#[derive(Default)]
pub struct StubApi {
    resources: RwLock<HashMap<(String, String), Value>>,
    hits: AtomicUsize,
    delay: Option<Duration>,
}

impl StubApi {
    /// A stub preloaded with `sprigatito`, `cheri` and `master-ball`.
    pub fn with_fixtures() -> Self {
        Self::default()
            .with_resource(
                "pokemon",
                "sprigatito",
                json!({"name": "sprigatito", "height": 25, "weight": 5}),
            )
            .with_resource(
                "berry",
                "cheri",
                json!({"name": "cheri", "size": 20, "smoothness": 25}),
            )
            .with_resource("item", "master-ball", json!({"name": "master-ball", "cost": 100}))
    }

    pub fn with_resource(mut self, resource: &str, name: &str, body: Value) -> Self {
        self.resources
            .get_mut()
            .insert((resource.to_string(), name.to_string()), body);
        self
    }

    /// Hold every response for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of requests served so far, including 404s.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub type Db = Arc<StubApi>;

pub fn app() -> Router {
    router(Arc::new(StubApi::with_fixtures()))
}

pub fn router(db: Db) -> Router {
    Router::new()
        .route("/api/v2/{resource}/{name}", get(get_resource))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, router(db)).await
}

async fn get_resource(
    State(db): State<Db>,
    Path((resource, name)): Path<(String, String)>,
) -> Result<Json<Value>, (StatusCode, &'static str)> {
    db.hits.fetch_add(1, Ordering::SeqCst);
    if let Some(delay) = db.delay {
        tokio::time::sleep(delay).await;
    }

    let resources = db.resources.read().await;
    match resources.get(&(resource.clone(), name.clone())) {
        Some(body) => {
            tracing::info!(%resource, %name, "served resource");
            Ok(Json(body.clone()))
        }
        None => {
            tracing::info!(%resource, %name, "resource not found");
            Err((StatusCode::NOT_FOUND, "Not Found"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_contain_documented_bodies() {
        let mut stub = StubApi::with_fixtures();
        let resources = stub.resources.get_mut();

        let pokemon = &resources[&("pokemon".to_string(), "sprigatito".to_string())];
        assert_eq!(pokemon["height"], 25);
        assert_eq!(pokemon["weight"], 5);

        let item = &resources[&("item".to_string(), "master-ball".to_string())];
        assert_eq!(item["cost"], 100);
    }

    #[test]
    fn with_resource_overrides_fixture() {
        let mut stub = StubApi::with_fixtures().with_resource(
            "item",
            "master-ball",
            json!({"name": "master-ball", "cost": 0}),
        );
        let resources = stub.resources.get_mut();
        assert_eq!(resources[&("item".to_string(), "master-ball".to_string())]["cost"], 0);
    }

    #[test]
    fn hits_start_at_zero() {
        assert_eq!(StubApi::default().hits(), 0);
    }
}
