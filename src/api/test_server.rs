//! In-process booking backend for exercising the HTTP services
//!
//! Serves the same routes as the real backend from an in-memory data set and
//! records every request it receives.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use chrono::{NaiveTime, TimeZone, Utc};
use serde_json::{json, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

use super::ApiClient;
use crate::config::ApiConfig;
use crate::models::{Session, SessionInput};
use crate::state::{fixtures, SessionState};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    /// `Value::Null` when the request had no JSON body
    pub body: Value,
}

struct BackendData {
    sessions: BTreeMap<i64, Session>,
    users: BTreeMap<i64, Value>,
    teachers: Vec<Value>,
    next_session_id: i64,
    requests: Vec<RecordedRequest>,
}

impl BackendData {
    fn seeded() -> Self {
        let day = |d: u32| {
            let date = chrono::NaiveDate::from_ymd_opt(2025, 1, d).unwrap();
            Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
        };
        let session = |id: i64, users: &[i64]| Session {
            id,
            name: format!("session{}", id),
            description: format!("session number {}", id),
            date: day(id as u32),
            teacher_id: 1,
            users: users.iter().copied().collect::<BTreeSet<_>>(),
            created_at: Some(day(1)),
            updated_at: None,
        };

        let mut sessions = BTreeMap::new();
        sessions.insert(1, session(1, &[2, 3]));
        sessions.insert(2, session(2, &[]));

        let user = |id: i64, email: &str, name: &str, admin: bool| {
            json!({
                "id": id,
                "email": email,
                "firstName": name,
                "lastName": name,
                "admin": admin,
                "createdAt": "2025-01-01T00:00:00",
                "updatedAt": null
            })
        };
        let mut users = BTreeMap::new();
        users.insert(1, user(1, "admin@email.com", "admin", true));
        users.insert(2, user(2, "user@email.com", "user", false));

        let teachers = (1..=2)
            .map(|id| {
                json!({
                    "id": id,
                    "firstName": format!("teacher{}", id),
                    "lastName": "name",
                    "createdAt": "2025-01-01T00:00:00",
                    "updatedAt": "2025-01-01T00:00:00"
                })
            })
            .collect();

        Self {
            sessions,
            users,
            teachers,
            next_session_id: 3,
            requests: Vec::new(),
        }
    }
}

pub struct MockBackend {
    addr: SocketAddr,
    data: Arc<Mutex<BackendData>>,
    state: Arc<SessionState>,
    server: JoinHandle<()>,
}

impl MockBackend {
    /// Bind an ephemeral port and serve the seeded data set
    pub async fn start() -> Self {
        let data = Arc::new(Mutex::new(BackendData::seeded()));
        let app = Router::new().fallback(handle).with_state(data.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            data,
            state: SessionState::shared(),
            server,
        }
    }

    /// Session state the clients of this backend authenticate with
    pub fn state(&self) -> &Arc<SessionState> {
        &self.state
    }

    pub fn client(&self) -> ApiClient {
        let config = ApiConfig {
            base_url: format!("http://{}", self.addr),
            timeout_seconds: 5,
        };
        ApiClient::new(&config, self.state.clone()).unwrap()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.data.lock().unwrap().requests.last().cloned()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn handle(
    State(data): State<Arc<Mutex<BackendData>>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let mut data = data.lock().unwrap();
    data.requests.push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        authorization: authorization.clone(),
        body: body.clone(),
    });

    let segments: Vec<&str> = uri.path().split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("POST", ["api", "auth", "login"]) => login(&body),
        ("POST", ["api", "auth", "register"]) => {
            let taken = data
                .users
                .values()
                .any(|u| u["email"] == body["email"]);
            if taken {
                StatusCode::BAD_REQUEST.into_response()
            } else {
                StatusCode::OK.into_response()
            }
        }
        _ if !is_authorized(authorization.as_deref()) => StatusCode::UNAUTHORIZED.into_response(),
        (m, ["api", "session"]) => match m {
            "GET" => Json(data.sessions.values().cloned().collect::<Vec<_>>()).into_response(),
            "POST" => match serde_json::from_value::<SessionInput>(body) {
                Ok(input) => {
                    let id = data.next_session_id;
                    data.next_session_id += 1;
                    let session = from_input(id, input, BTreeSet::new());
                    data.sessions.insert(id, session.clone());
                    Json(session).into_response()
                }
                Err(_) => StatusCode::BAD_REQUEST.into_response(),
            },
            _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
        },
        (m, ["api", "session", id]) => {
            let Some(id) = id.parse::<i64>().ok().filter(|id| data.sessions.contains_key(id)) else {
                return StatusCode::NOT_FOUND.into_response();
            };
            match m {
                "GET" => Json(data.sessions[&id].clone()).into_response(),
                "PUT" => match serde_json::from_value::<SessionInput>(body) {
                    Ok(input) => {
                        let users = data.sessions[&id].users.clone();
                        let session = from_input(id, input, users);
                        data.sessions.insert(id, session.clone());
                        Json(session).into_response()
                    }
                    Err(_) => StatusCode::BAD_REQUEST.into_response(),
                },
                "DELETE" => {
                    data.sessions.remove(&id);
                    StatusCode::OK.into_response()
                }
                _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
            }
        }
        (m, ["api", "session", id, "participate", user_id]) => {
            let (Ok(id), Ok(user_id)) = (id.parse::<i64>(), user_id.parse::<i64>()) else {
                return StatusCode::BAD_REQUEST.into_response();
            };
            let Some(session) = data.sessions.get_mut(&id) else {
                return StatusCode::NOT_FOUND.into_response();
            };
            let changed = match m {
                "POST" => session.users.insert(user_id),
                "DELETE" => session.users.remove(&user_id),
                _ => return StatusCode::METHOD_NOT_ALLOWED.into_response(),
            };
            if changed {
                StatusCode::OK.into_response()
            } else {
                StatusCode::BAD_REQUEST.into_response()
            }
        }
        ("GET", ["api", "teacher"]) => Json(data.teachers.clone()).into_response(),
        ("GET", ["api", "teacher", id]) => data
            .teachers
            .iter()
            .find(|t| t["id"].to_string() == *id)
            .map(|t| Json(t.clone()).into_response())
            .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response()),
        (m, ["api", "user", id]) => {
            let Some(id) = id.parse::<i64>().ok().filter(|id| data.users.contains_key(id)) else {
                return StatusCode::NOT_FOUND.into_response();
            };
            match m {
                "GET" => Json(data.users[&id].clone()).into_response(),
                "DELETE" => {
                    data.users.remove(&id);
                    StatusCode::OK.into_response()
                }
                _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
            }
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

fn login(body: &Value) -> Response {
    let principal = match (body["email"].as_str(), body["password"].as_str()) {
        (Some("admin@email.com"), Some("admin")) => fixtures::admin(),
        (Some("user@email.com"), Some("user")) => fixtures::user(),
        _ => return StatusCode::UNAUTHORIZED.into_response(),
    };
    Json(principal).into_response()
}

fn is_authorized(authorization: Option<&str>) -> bool {
    [fixtures::admin(), fixtures::user()]
        .iter()
        .any(|p| authorization == Some(p.authorization().as_str()))
}

fn from_input(id: i64, input: SessionInput, users: BTreeSet<i64>) -> Session {
    Session {
        id,
        name: input.name,
        description: input.description,
        date: Utc.from_utc_datetime(&input.date.and_time(NaiveTime::MIN)),
        teacher_id: input.teacher_id,
        users,
        created_at: Some(Utc::now()),
        updated_at: Some(Utc::now()),
    }
}
