use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    body::{to_bytes, Body},
    extract::{Path, Query, Request, State},
    http::{HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use client::{ApiClient, MemoryTokenStore, TokenStore};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const DOCTOR_EMAIL: &str = "house@clinic.test";
pub const PASSWORD: &str = "secret1";

/// One request as the mock backend saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

/// Requests received so far, in arrival order.
#[derive(Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<Recorded>>>);

impl RequestLog {
    pub fn all(&self) -> Vec<Recorded> {
        self.0.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.all().pop().expect("backend received no request")
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

/// Build an unsigned JWT carrying `claims`.
pub fn token_for(claims: Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

pub fn doctor_token() -> String {
    token_for(json!({ "sub": "d-7", "name": "Gregory House", "email": DOCTOR_EMAIL, "role": "DOCTOR" }))
}

async fn record(State(log): State<RequestLog>, req: Request, next: Next) -> Response {
    let (parts, body) = req.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
    log.0.lock().unwrap().push(Recorded {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        authorization: parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&bytes).into_owned(),
    });
    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Full authentication is required" })))
        .into_response()
}

fn require_bearer(headers: &HeaderMap) -> Result<(), Response> {
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some(value) if value.starts_with("Bearer ") => Ok(()),
        _ => Err(unauthorized()),
    }
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["email"] == DOCTOR_EMAIL && body["password"] == PASSWORD {
        Json(json!({
            "token": doctor_token(),
            "id": "d-7",
            "name": "Gregory House",
            "email": DOCTOR_EMAIL,
            "role": "DOCTOR",
        }))
        .into_response()
    } else {
        unauthorized()
    }
}

async fn register(Json(body): Json<Value>) -> Response {
    let role = body["role"].as_str().unwrap_or("PATIENT").to_string();
    let token = token_for(json!({ "id": "u-new", "name": body["name"], "role": role }));
    Json(json!({
        "token": token,
        "id": "u-new",
        "name": body["name"],
        "email": body["email"],
        "role": role,
    }))
    .into_response()
}

async fn admin_stats(headers: HeaderMap) -> Response {
    if let Err(denied) = require_bearer(&headers) {
        return denied;
    }
    Json(json!({
        "totalUsers": 12,
        "totalDoctors": 3,
        "totalPatients": 8,
        "totalAppointments": 20,
    }))
    .into_response()
}

async fn admin_users(headers: HeaderMap) -> Response {
    if let Err(denied) = require_bearer(&headers) {
        return denied;
    }
    Json(json!([
        { "id": "a-1", "name": "Ada Admin", "email": "admin@clinic.test", "role": "ADMIN" },
        { "id": "d-7", "name": "Gregory House", "email": DOCTOR_EMAIL, "role": "DOCTOR" },
    ]))
    .into_response()
}

async fn delete_user(Path(id): Path<String>) -> StatusCode {
    if id == "missing" {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn doctor_appointments(Path(id): Path<String>) -> Json<Value> {
    Json(json!([
        {
            "id": "ap-1",
            "appointmentDate": "2026-04-01T10:30:00",
            "status": "PENDING",
            "notes": "Headache",
            "doctor": { "id": id, "user": { "name": "Gregory House" }, "specialization": "Diagnostics" },
            "patient": { "id": "p-1", "user": { "name": "Jane Roe" }, "dob": "1990-05-01", "bloodGroup": "O+" }
        },
        {
            "id": "ap-2",
            "appointmentDate": "2026-03-20T09:00:00",
            "status": "COMPLETED",
            "patient": { "id": "p-2", "user": { "name": "John Doe" } }
        }
    ]))
}

async fn update_status(
    Path(id): Path<String>,
    Query(q): Query<HashMap<String, String>>,
) -> Json<Value> {
    Json(json!({ "id": id, "status": q.get("status") }))
}

async fn doctors() -> Json<Value> {
    Json(json!([
        { "id": "d-7", "user": { "name": "Gregory House" }, "specialization": "Diagnostics", "experience": 20 }
    ]))
}

async fn book(Path(_patient): Path<String>, Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "success": true,
        "appointmentId": "ap-99",
        "message": format!("Booked with {}", body["doctorId"].as_str().unwrap_or("?")),
    }))
}

async fn patient_appointments(Path(_patient): Path<String>) -> Json<Value> {
    Json(json!([]))
}

async fn records(Path(patient): Path<String>) -> Response {
    // A patient without records yet gets a 404 from the real backend.
    if patient == "p-new" {
        return (StatusCode::NOT_FOUND, Json(json!({ "message": "No records" }))).into_response();
    }
    Json(json!([
        { "id": "r-1", "fileUrl": "https://files.test/r-1.pdf", "fileName": "r-1.pdf", "description": "Blood test" }
    ]))
    .into_response()
}

async fn upload(
    Path(_patient): Path<String>,
    Query(q): Query<HashMap<String, String>>,
) -> Json<Value> {
    Json(json!({
        "id": "r-2",
        "fileUrl": q.get("fileUrl"),
        "description": q.get("description"),
        "uploadedAt": "2026-04-02T08:00:00",
    }))
}

async fn broken() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "not json at all").into_response()
}

fn router(log: RequestLog) -> Router {
    let api = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/admin/stats", get(admin_stats))
        .route("/admin/users", get(admin_users))
        .route("/admin/users/{id}", delete(delete_user))
        .route("/doctor/{id}/appointments", get(doctor_appointments))
        .route("/doctor/appointments/{id}/status", put(update_status))
        .route("/patient/doctors", get(doctors))
        .route("/patient/{id}/book", post(book))
        .route("/patient/{id}/appointments", get(patient_appointments))
        .route("/patient/{id}/records", get(records).post(upload))
        .route("/broken", get(broken));

    Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(log, record))
}

/// A running mock backend plus a client pointed at it.
pub struct Backend {
    pub addr: SocketAddr,
    pub log: RequestLog,
    pub tokens: Arc<dyn TokenStore>,
    pub api: ApiClient,
}

/// Start a mock backend on an ephemeral port. The client starts without a token.
pub async fn backend() -> Backend {
    backend_with(Arc::new(MemoryTokenStore::new())).await
}

pub async fn backend_with(tokens: Arc<dyn TokenStore>) -> Backend {
    let log = RequestLog::default();
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("mock backend has no address");
    let app = router(log.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock backend crashed");
    });

    let api = ApiClient::new(format!("http://{addr}/api/"), tokens.clone());
    Backend { addr, log, tokens, api }
}
