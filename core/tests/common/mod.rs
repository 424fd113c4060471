//! Shared setup: run the stub PokeAPI on a random port in a background
//! thread so the blocking client can talk to it over real HTTP.

use std::sync::Arc;

use mock_server::StubApi;
use poke_core::ClientConfig;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Start `stub` and return a client config pointing at it, plus a handle for
/// inspecting hit counts.
pub fn start(stub: StubApi) -> (ClientConfig, Arc<StubApi>) {
    init_tracing();

    let stub = Arc::new(stub);
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    let db = stub.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with(listener, db).await
        })
        .unwrap();
    });

    (ClientConfig::with_base_url(&format!("http://{addr}/api/v2/")), stub)
}
