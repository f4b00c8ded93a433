//! In-process server for integration tests.

use minibank::api::create_router;
use minibank::infrastructure::{AppConfig, AppDependencies, seed_demo_data};
use tokio::net::TcpListener;

use super::client::BankApiClient;

/// A running server and a handle on its stores.
pub struct TestApp {
    pub base_url: String,
    pub dependencies: AppDependencies,
}

impl TestApp {
    pub fn client(&self) -> BankApiClient {
        BankApiClient::new(&self.base_url)
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(AppConfig::default()).await
}

pub async fn spawn_app_with(config: AppConfig) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let address = listener.local_addr().expect("Failed to read local address");

    let dependencies = AppDependencies::in_memory(config);
    seed_demo_data(&dependencies);
    let router = create_router(dependencies.clone());

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Server failed");
    });

    TestApp {
        base_url: format!("http://{address}"),
        dependencies,
    }
}
