use std::sync::Arc;

use tempfile::TempDir;
use tokio::task::JoinHandle;

use forecourt::auth::{PasswordHasher, TokenService};
use forecourt::server::{AppState, create_router};
use forecourt::store::{SqliteStore, Store};

/// Signing secret shared by every test server. Tests that mint tokens out
/// of band sign with the same bytes.
pub const TEST_SIGNING_SECRET: &[u8] = b"forecourt-integration-test-secret";

pub struct TestServer {
    pub base_url: String,
    _temp_dir: TempDir,
    server_task: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");

        let store = SqliteStore::new(temp_dir.path().join("forecourt.db")).expect("open store");
        store.initialize().expect("initialize store");

        let state = Arc::new(AppState {
            store: Arc::new(store),
            tokens: TokenService::new(TEST_SIGNING_SECRET),
            hasher: PasswordHasher::new(),
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("local addr");

        let app = create_router(state);
        let server_task = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });

        Self {
            base_url: format!("http://{}", addr),
            _temp_dir: temp_dir,
            server_task,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.server_task.abort();
    }
}
