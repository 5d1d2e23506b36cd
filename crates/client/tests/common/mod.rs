//! Stub remote used by the HTTP client suite.
//!
//! Serves the `/projects` collection from memory on an ephemeral local port,
//! answering in the backend's wire shape: the short code comes back as a
//! generated `tag` (`PREFIX-0001`) rather than `prefix`.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tarefas_client::api::HttpProjectApi;
use tarefas_client::config::ClientConfig;
use tarefas_core::project::ProjectDraft;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct StubRemote {
    records: Arc<Mutex<Vec<Value>>>,
    next_id: Arc<Mutex<u64>>,
}

impl StubRemote {
    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }
}

async fn list(State(stub): State<StubRemote>) -> Json<Vec<Value>> {
    Json(stub.records.lock().await.clone())
}

async fn create(
    State(stub): State<StubRemote>,
    Json(draft): Json<ProjectDraft>,
) -> (StatusCode, Json<Value>) {
    let mut next_id = stub.next_id.lock().await;
    *next_id += 1;

    let mut records = stub.records.lock().await;
    let sequence = records
        .iter()
        .filter(|r| {
            r["tag"]
                .as_str()
                .is_some_and(|t| t.starts_with(&format!("{}-", draft.prefix)))
        })
        .count()
        + 1;

    let record = json!({
        "id": format!("00000000-0000-0000-0000-{:012}", *next_id),
        "user_id": "11111111-1111-1111-1111-111111111111",
        "tag": format!("{}-{:04}", draft.prefix, sequence),
        "name": draft.name,
        "description": draft.description,
        "status": draft.status,
        "created_at": "2025-02-01T10:00:00Z",
    });
    records.insert(0, record.clone());
    (StatusCode::CREATED, Json(record))
}

async fn show(
    State(stub): State<StubRemote>,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, &'static str)> {
    stub.records
        .lock()
        .await
        .iter()
        .find(|r| r["id"] == id.as_str())
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "projeto não encontrado"))
}

async fn update(
    State(stub): State<StubRemote>,
    Path(id): Path<String>,
    Json(draft): Json<ProjectDraft>,
) -> Result<Json<Value>, (StatusCode, &'static str)> {
    let mut records = stub.records.lock().await;
    let record = records
        .iter_mut()
        .find(|r| r["id"] == id.as_str())
        .ok_or((StatusCode::NOT_FOUND, "projeto não encontrado"))?;

    record["name"] = json!(draft.name);
    record["description"] = json!(draft.description);
    record["status"] = json!(draft.status);
    Ok(Json(record.clone()))
}

async fn remove(
    State(stub): State<StubRemote>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, &'static str)> {
    let mut records = stub.records.lock().await;
    let before = records.len();
    records.retain(|r| r["id"] != id.as_str());
    if records.len() == before {
        return Err((StatusCode::NOT_FOUND, "projeto não encontrado"));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn stub_router(stub: StubRemote) -> Router {
    Router::new()
        .route("/projects", get(list).post(create))
        .route("/projects/{id}", get(show).put(update).delete(remove))
        .with_state(stub)
}

/// Serve `router` on an ephemeral port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Start a fresh stub remote and an API client pointed at it.
pub async fn spawn_stub() -> (HttpProjectApi, StubRemote) {
    let stub = StubRemote::default();
    let base_url = serve(stub_router(stub.clone())).await;
    (api_for(&base_url), stub)
}

pub fn api_for(base_url: &str) -> HttpProjectApi {
    let config = ClientConfig {
        api_url: base_url.to_string(),
        request_timeout: Duration::from_secs(5),
    };
    HttpProjectApi::new(&config).unwrap()
}

pub fn draft(name: &str, prefix: &str) -> ProjectDraft {
    ProjectDraft {
        name: name.to_string(),
        description: format!("{name} description"),
        prefix: prefix.to_string(),
        ..ProjectDraft::default()
    }
}
