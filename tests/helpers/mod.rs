use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// In-process stand-in for the notes API, served on a random local port.
///
/// Mirrors the public API's envelope (`status`, `message`, `data`) and keeps a
/// log of `METHOD path` lines for every request it receives.
#[allow(dead_code)]
pub struct FakeNotesApi {
    pub base_url: String,
    store: Store,
}

#[derive(Clone, Default)]
struct Store {
    notes: Arc<Mutex<Vec<Value>>>,
    requests: Arc<Mutex<Vec<String>>>,
    next_id: Arc<Mutex<u32>>,
}

impl Store {
    fn log(&self, line: String) {
        self.requests.lock().unwrap().push(line);
    }

    fn filtered(&self, archived: bool) -> Vec<Value> {
        self.notes
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n["archived"] == json!(archived))
            .cloned()
            .collect()
    }
}

#[allow(dead_code)]
impl FakeNotesApi {
    pub async fn start() -> Self {
        let store = Store::default();
        let router = Router::new()
            .route("/v2/notes", get(list_active).post(create))
            .route("/v2/notes/archived", get(list_archived))
            .route("/v2/notes/{id}", axum::routing::delete(remove))
            .route("/v2/notes/{id}/archive", post(archive))
            .route("/v2/notes/{id}/unarchive", post(unarchive))
            .route("/broken/notes", get(|| async { "definitely not json" }))
            .with_state(store.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake API listener");
        let addr = listener.local_addr().expect("Listener has an address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Fake API server failed");
        });

        Self {
            base_url: format!("http://{addr}/v2"),
            store,
        }
    }

    pub fn broken_url(&self) -> String {
        self.base_url.replace("/v2", "/broken")
    }

    pub fn seed(&self, id: &str, title: &str, archived: bool) {
        self.store.notes.lock().unwrap().push(json!({
            "id": id,
            "title": title,
            "body": format!("Body of {title}"),
            "createdAt": "2022-07-28T10:03:12.594Z",
            "archived": archived,
            "owner": "user-test",
        }));
    }

    pub fn requests(&self) -> Vec<String> {
        self.store.requests.lock().unwrap().clone()
    }

    pub fn note_ids(&self) -> Vec<String> {
        self.store
            .notes
            .lock()
            .unwrap()
            .iter()
            .map(|n| n["id"].as_str().unwrap().to_string())
            .collect()
    }
}

fn success(data: Value) -> Json<Value> {
    Json(json!({ "status": "success", "message": "OK", "data": data }))
}

fn fail(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "status": "fail", "message": message })))
}

async fn list_active(State(store): State<Store>) -> Json<Value> {
    store.log("GET /notes".to_string());
    success(Value::Array(store.filtered(false)))
}

async fn list_archived(State(store): State<Store>) -> Json<Value> {
    store.log("GET /notes/archived".to_string());
    success(Value::Array(store.filtered(true)))
}

async fn create(State(store): State<Store>, Json(payload): Json<Value>) -> (StatusCode, Json<Value>) {
    store.log("POST /notes".to_string());
    let title = payload["title"].as_str().unwrap_or_default();
    let body = payload["body"].as_str().unwrap_or_default();
    if title.is_empty() || body.is_empty() {
        return fail(StatusCode::BAD_REQUEST, "Gagal menambahkan catatan");
    }

    let id = {
        let mut next = store.next_id.lock().unwrap();
        *next += 1;
        format!("notes-fake-{}", *next)
    };
    let note = json!({
        "id": id,
        "title": title,
        "body": body,
        "createdAt": "2024-03-01T08:00:00.000Z",
        "archived": false,
    });
    store.notes.lock().unwrap().push(note.clone());
    (StatusCode::CREATED, success(note))
}

async fn remove(State(store): State<Store>, Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    store.log(format!("DELETE /notes/{id}"));
    let mut notes = store.notes.lock().unwrap();
    let before = notes.len();
    notes.retain(|n| n["id"] != json!(id));
    if notes.len() == before {
        return fail(StatusCode::NOT_FOUND, "Catatan tidak ditemukan");
    }
    (
        StatusCode::OK,
        Json(json!({ "status": "success", "message": "Note deleted" })),
    )
}

fn set_archived(store: &Store, id: &str, archived: bool) -> (StatusCode, Json<Value>) {
    let mut notes = store.notes.lock().unwrap();
    match notes.iter_mut().find(|n| n["id"] == json!(id)) {
        Some(note) => {
            note["archived"] = json!(archived);
            (
                StatusCode::OK,
                Json(json!({ "status": "success", "message": "Note updated" })),
            )
        }
        None => fail(StatusCode::NOT_FOUND, "Catatan tidak ditemukan"),
    }
}

async fn archive(State(store): State<Store>, Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    store.log(format!("POST /notes/{id}/archive"));
    set_archived(&store, &id, true)
}

async fn unarchive(State(store): State<Store>, Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    store.log(format!("POST /notes/{id}/unarchive"));
    set_archived(&store, &id, false)
}
