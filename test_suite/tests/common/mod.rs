// Mock catalog backend
// Serves the login and collection endpoints the admin client talks to, backed
// by in-memory tables, on an ephemeral local port.

use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use dealer_admin::session::SessionContext;
use dealer_admin::{AdminConfig, ApiClient};
use serde::Deserialize;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "secret";
pub const TOKEN: &str = "mock-access-token";

const TABLES: [&str; 4] = ["marcas", "modelos", "estados", "vehiculos"];

#[derive(Default)]
struct Store {
    tables: HashMap<String, Vec<Value>>,
    next_id: i64,
    hits: usize,
}

type Shared = Arc<Mutex<Store>>;

pub struct MockBackend {
    pub url: String,
    store: Shared,
    handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl MockBackend {
    pub async fn start() -> Self {
        let store = Shared::default();
        let app = router(store.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend stopped");
        });
        Self {
            url: format!("http://{addr}"),
            store,
            handle,
        }
    }

    /// Client pointed at this backend with the given session
    pub fn client(&self, session: SessionContext) -> ApiClient {
        let config = AdminConfig::new(&self.url).expect("mock backend url");
        ApiClient::from_config(&config, session)
    }

    /// Client with a session already holding the valid token
    pub fn logged_in_client(&self) -> ApiClient {
        let session = SessionContext::in_memory();
        session.establish(TOKEN).expect("store token");
        self.client(session)
    }

    pub async fn rows(&self, table: &str) -> Vec<Value> {
        self.store
            .lock()
            .await
            .tables
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of requests served so far
    pub async fn hits(&self) -> usize {
        self.store.lock().await.hits
    }

    pub async fn seed(&self, table: &str, row: Value) -> i64 {
        let mut store = self.store.lock().await;
        insert(&mut store, table, row)
    }
}

/// Client pointed at a local port nothing listens on
#[allow(dead_code)]
pub fn unreachable_client(session: SessionContext) -> ApiClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    let config = AdminConfig::new(&format!("http://127.0.0.1:{port}")).expect("valid url");
    ApiClient::from_config(&config, session)
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn router(store: Shared) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/{table}/", get(list).post(create))
        .route("/{table}/{id}", get(get_one).put(update).delete(remove))
        .with_state(store)
}

// ============================================================================
// Handlers
// ============================================================================

#[derive(Deserialize)]
struct Credentials {
    username: String,
    password: String,
}

async fn login(State(store): State<Shared>, Form(credentials): Form<Credentials>) -> Response {
    store.lock().await.hits += 1;
    if credentials.username == USERNAME && credentials.password == PASSWORD {
        Json(json!({"access_token": TOKEN, "token_type": "bearer"})).into_response()
    } else {
        detail(StatusCode::UNAUTHORIZED, "Incorrect username or password")
    }
}

async fn list(
    State(store): State<Shared>,
    Path(table): Path<String>,
    headers: HeaderMap,
) -> Response {
    let mut store = store.lock().await;
    store.hits += 1;
    if let Err(response) = authorize(&headers).and_then(|()| known_table(&table)) {
        return response;
    }
    Json(store.tables.get(&table).cloned().unwrap_or_default()).into_response()
}

async fn get_one(
    State(store): State<Shared>,
    Path((table, id)): Path<(String, i64)>,
    headers: HeaderMap,
) -> Response {
    let mut store = store.lock().await;
    store.hits += 1;
    if let Err(response) = authorize(&headers).and_then(|()| known_table(&table)) {
        return response;
    }
    match find(&store, &table, id) {
        Some(row) => Json(row.clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "No encontrado"),
    }
}

async fn create(
    State(store): State<Shared>,
    Path(table): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut store = store.lock().await;
    store.hits += 1;
    if let Err(response) = authorize(&headers)
        .and_then(|()| known_table(&table))
        .and_then(|()| check_body(&store, &table, &body, None))
    {
        return response;
    }
    let id = insert(&mut store, &table, body);
    let row = find(&store, &table, id).cloned().unwrap_or(Value::Null);
    (StatusCode::CREATED, Json(row)).into_response()
}

async fn update(
    State(store): State<Shared>,
    Path((table, id)): Path<(String, i64)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut store = store.lock().await;
    store.hits += 1;
    if let Err(response) = authorize(&headers)
        .and_then(|()| known_table(&table))
        .and_then(|()| check_body(&store, &table, &body, Some(id)))
    {
        return response;
    }
    let Some(row) = store
        .tables
        .entry(table)
        .or_default()
        .iter_mut()
        .find(|row| row["id"] == id)
    else {
        return detail(StatusCode::NOT_FOUND, "No encontrado");
    };
    let mut updated = body;
    updated["id"] = json!(id);
    *row = updated.clone();
    Json(updated).into_response()
}

async fn remove(
    State(store): State<Shared>,
    Path((table, id)): Path<(String, i64)>,
    headers: HeaderMap,
) -> Response {
    let mut store = store.lock().await;
    store.hits += 1;
    if let Err(response) = authorize(&headers).and_then(|()| known_table(&table)) {
        return response;
    }
    let rows = store.tables.entry(table).or_default();
    let before = rows.len();
    rows.retain(|row| row["id"] != id);
    if rows.len() == before {
        detail(StatusCode::NOT_FOUND, "No encontrado")
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

// ============================================================================
// Rules
// ============================================================================

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"detail": message}))).into_response()
}

fn authorize(headers: &HeaderMap) -> Result<(), Response> {
    let expected = format!("Bearer {TOKEN}");
    match headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        _ => Err(detail(StatusCode::UNAUTHORIZED, "Not authenticated")),
    }
}

fn known_table(table: &str) -> Result<(), Response> {
    if TABLES.contains(&table) {
        Ok(())
    } else {
        Err(detail(StatusCode::NOT_FOUND, "Not Found"))
    }
}

fn required_fields(table: &str) -> &'static [&'static str] {
    match table {
        "modelos" => &["nombre", "marca_id"],
        "vehiculos" => &["marca_id", "modelo_id", "estado_id", "anio", "precio"],
        _ => &["nombre"],
    }
}

fn check_body(
    store: &Store,
    table: &str,
    body: &Value,
    editing: Option<i64>,
) -> Result<(), Response> {
    let missing: Vec<Value> = required_fields(table)
        .iter()
        .filter(|field| body.get(**field).is_none_or(Value::is_null))
        .map(|field| json!({"loc": ["body", field], "msg": "Field required", "type": "missing"}))
        .collect();
    if !missing.is_empty() {
        return Err(
            (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({"detail": missing}))).into_response(),
        );
    }

    let parents = [("marca_id", "marcas"), ("modelo_id", "modelos"), ("estado_id", "estados")];
    for (field, parent) in parents {
        let Some(value) = body.get(field) else { continue };
        let Some(parent_id) = value.as_i64() else {
            return Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"detail": [{
                    "loc": ["body", field],
                    "msg": "Input should be a valid integer"
                }]})),
            )
                .into_response());
        };
        if find(store, parent, parent_id).is_none() {
            return Err(detail(StatusCode::NOT_FOUND, &format!("{field} {parent_id} no existe")));
        }
    }

    if let Some(name) = body.get("nombre").and_then(Value::as_str) {
        let taken = store.tables.get(table).is_some_and(|rows| {
            rows.iter()
                .any(|row| row["nombre"] == name && editing.is_none_or(|id| row["id"] != id))
        });
        if taken {
            return Err(detail(StatusCode::BAD_REQUEST, "Ya existe"));
        }
    }
    Ok(())
}

fn find<'a>(store: &'a Store, table: &str, id: i64) -> Option<&'a Value> {
    store.tables.get(table)?.iter().find(|row| row["id"] == id)
}

fn insert(store: &mut Store, table: &str, mut row: Value) -> i64 {
    store.next_id += 1;
    let id = store.next_id;
    row["id"] = json!(id);
    store.tables.entry(table.to_string()).or_default().push(row);
    id
}
