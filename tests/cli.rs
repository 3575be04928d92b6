//! CLI integration tests for the init and serve commands.
//!
//! Each test uses an isolated temp directory for the database, ensuring tests
//! can run in parallel safely.

#![allow(deprecated)] // Command::cargo_bin deprecation only affects custom build dirs

use std::path::Path;

use assert_cmd::Command;
use assert_fs::TempDir;
use chrono::Utc;
use forecourt::store::{SqliteStore, Store};
use forecourt::types::{Account, Role};
use predicates::prelude::*;

struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    fn data_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    fn data_dir_str(&self) -> String {
        self.data_dir().to_string_lossy().to_string()
    }

    fn init(&self) -> assert_cmd::assert::Assert {
        Command::cargo_bin("forecourt")
            .expect("failed to find binary")
            .args(["init", "--data-dir", &self.data_dir_str()])
            .assert()
    }
}

fn open_store(ctx: &TestContext) -> SqliteStore {
    let db_path = ctx.data_dir().join("forecourt.db");
    SqliteStore::new(&db_path).expect("open store")
}

// ============================================================================
// Init Command Tests
// ============================================================================

#[test]
fn init_creates_database_and_signing_secret() {
    let ctx = TestContext::new();

    ctx.init()
        .success()
        .stdout(predicate::str::contains("Signing secret written to"));

    assert!(ctx.data_dir().join("forecourt.db").exists());

    let secret = std::fs::read_to_string(ctx.data_dir().join(".signing_secret"))
        .expect("failed to read secret file");
    assert_eq!(secret.len(), 64);
    assert!(secret.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn init_rejects_second_initialization() {
    let ctx = TestContext::new();

    ctx.init().success();
    ctx.init()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn init_generates_a_fresh_secret_per_directory() {
    let first = TestContext::new();
    let second = TestContext::new();

    first.init().success();
    second.init().success();

    let read = |ctx: &TestContext| {
        std::fs::read_to_string(ctx.data_dir().join(".signing_secret")).expect("read secret")
    };
    assert_ne!(read(&first), read(&second));
}

#[test]
fn init_preserves_existing_accounts_when_reinitialization_rejected() {
    let ctx = TestContext::new();

    ctx.init().success();

    let store = open_store(&ctx);
    store
        .create_account(&Account {
            username: "keeper".to_string(),
            password_hash: "placeholder-hash".to_string(),
            role: Role::Admin,
            created_at: Utc::now(),
        })
        .expect("create account");

    ctx.init().failure();

    let store = open_store(&ctx);
    assert!(store.get_account("keeper").expect("get account").is_some());
}

// ============================================================================
// Serve Command Tests
// ============================================================================

#[test]
fn serve_requires_initialization() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");

    Command::cargo_bin("forecourt")
        .expect("failed to find binary")
        .env_remove("FORECOURT_SIGNING_SECRET")
        .args(["serve", "--data-dir"])
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No signing secret found"));
}
