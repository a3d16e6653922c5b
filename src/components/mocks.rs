//! In-memory API services for view tests

use async_trait::async_trait;
use chrono::{NaiveTime, TimeZone, Utc};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::{AppContext, MemoryNotifier};
use crate::api::{ApiError, ApiServices, AuthApi, SessionApi, TeacherApi, UserApi};
use crate::config::Config;
use crate::models::{LoginRequest, Principal, RegisterRequest, Session, SessionInput, Teacher, User};
use crate::state::{fixtures, SessionState};

fn server_error() -> ApiError {
    ApiError::Status {
        status: 500,
        body: "boom".to_string(),
    }
}

fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        body: String::new(),
    }
}

fn midnight(date: chrono::NaiveDate) -> chrono::DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

pub fn session(id: i64, users: &[i64]) -> Session {
    Session {
        id,
        name: format!("session{}", id),
        description: format!("session number {}", id),
        date: midnight(chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()),
        teacher_id: 1,
        users: users.iter().copied().collect(),
        created_at: None,
        updated_at: None,
    }
}

pub fn teacher(id: i64) -> Teacher {
    Teacher {
        id,
        first_name: format!("teacher{}", id),
        last_name: "name".to_string(),
        created_at: None,
        updated_at: None,
    }
}

pub fn user(principal: &Principal) -> User {
    User {
        id: principal.id,
        email: principal.username.clone(),
        first_name: principal.first_name.clone(),
        last_name: principal.last_name.clone(),
        admin: principal.admin,
        password: None,
        created_at: midnight(chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
        updated_at: None,
    }
}

#[derive(Default)]
pub struct MockAuthApi {
    pub registered: Mutex<Vec<RegisterRequest>>,
    pub fail: AtomicBool,
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<Principal, ApiError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        match (request.email.as_str(), request.password.as_str()) {
            ("admin@email.com", "admin") => Ok(fixtures::admin()),
            ("user@email.com", "user") => Ok(fixtures::user()),
            _ => Err(ApiError::Status {
                status: 401,
                body: String::new(),
            }),
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        self.registered.lock().unwrap().push(request.clone());
        Ok(())
    }
}

/// Session store seeded with session 1 (users 1 and 2) and session 2 (empty)
pub struct MockSessionApi {
    pub sessions: Mutex<BTreeMap<i64, Session>>,
    pub calls: Mutex<Vec<String>>,
    pub fail: AtomicBool,
}

impl Default for MockSessionApi {
    fn default() -> Self {
        let sessions = [session(1, &[1, 2]), session(2, &[])]
            .into_iter()
            .map(|s| (s.id, s))
            .collect();
        Self {
            sessions: Mutex::new(sessions),
            calls: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }
}

impl MockSessionApi {
    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if self.fail.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        Ok(())
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn store(&self, id: i64, input: &SessionInput) -> Session {
        let mut sessions = self.sessions.lock().unwrap();
        let users = sessions.get(&id).map(|s| s.users.clone()).unwrap_or_default();
        let session = Session {
            id,
            name: input.name.clone(),
            description: input.description.clone(),
            date: midnight(input.date),
            teacher_id: input.teacher_id,
            users,
            created_at: None,
            updated_at: None,
        };
        sessions.insert(id, session.clone());
        session
    }
}

#[async_trait]
impl SessionApi for MockSessionApi {
    async fn all(&self) -> Result<Vec<Session>, ApiError> {
        self.record("all".to_string())?;
        Ok(self.sessions.lock().unwrap().values().cloned().collect())
    }

    async fn detail(&self, id: i64) -> Result<Session, ApiError> {
        self.record(format!("detail {}", id))?;
        self.sessions.lock().unwrap().get(&id).cloned().ok_or_else(not_found)
    }

    async fn create(&self, input: &SessionInput) -> Result<Session, ApiError> {
        self.record("create".to_string())?;
        let id = self.sessions.lock().unwrap().keys().max().copied().unwrap_or(0) + 1;
        Ok(self.store(id, input))
    }

    async fn update(&self, id: i64, input: &SessionInput) -> Result<Session, ApiError> {
        self.record(format!("update {}", id))?;
        Ok(self.store(id, input))
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.record(format!("delete {}", id))?;
        self.sessions.lock().unwrap().remove(&id).map(|_| ()).ok_or_else(not_found)
    }

    async fn participate(&self, id: i64, user_id: i64) -> Result<(), ApiError> {
        self.record(format!("participate {} {}", id, user_id))?;
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions.get_mut(&id).ok_or_else(not_found)?;
        session.users.insert(user_id);
        Ok(())
    }

    async fn unparticipate(&self, id: i64, user_id: i64) -> Result<(), ApiError> {
        self.record(format!("unparticipate {} {}", id, user_id))?;
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions.get_mut(&id).ok_or_else(not_found)?;
        session.users.remove(&user_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockTeacherApi {
    pub fail: AtomicBool,
}

#[async_trait]
impl TeacherApi for MockTeacherApi {
    async fn all(&self) -> Result<Vec<Teacher>, ApiError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        Ok(vec![teacher(1), teacher(2)])
    }

    async fn detail(&self, id: i64) -> Result<Teacher, ApiError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        if (1..=2).contains(&id) {
            Ok(teacher(id))
        } else {
            Err(not_found())
        }
    }
}

/// Accounts of the admin and user fixtures
pub struct MockUserApi {
    pub users: Mutex<BTreeMap<i64, User>>,
    pub fail: AtomicBool,
}

impl Default for MockUserApi {
    fn default() -> Self {
        let users = [fixtures::admin(), fixtures::user()]
            .iter()
            .map(|p| (p.id, user(p)))
            .collect();
        Self {
            users: Mutex::new(users),
            fail: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl UserApi for MockUserApi {
    async fn get_by_id(&self, id: i64) -> Result<User, ApiError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        self.users.lock().unwrap().get(&id).cloned().ok_or_else(not_found)
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        self.users.lock().unwrap().remove(&id).map(|_| ()).ok_or_else(not_found)
    }
}

/// A context wired to the mocks, with handles to inspect them
pub struct Harness {
    pub ctx: AppContext,
    pub notifier: Arc<MemoryNotifier>,
    pub auth: Arc<MockAuthApi>,
    pub sessions: Arc<MockSessionApi>,
    pub teachers: Arc<MockTeacherApi>,
    pub users: Arc<MockUserApi>,
}

impl Harness {
    /// Logged-out context
    pub fn new() -> Self {
        let notifier = Arc::new(MemoryNotifier::new());
        let auth = Arc::new(MockAuthApi::default());
        let sessions = Arc::new(MockSessionApi::default());
        let teachers = Arc::new(MockTeacherApi::default());
        let users = Arc::new(MockUserApi::default());

        let api = ApiServices {
            auth: auth.clone(),
            sessions: sessions.clone(),
            teachers: teachers.clone(),
            users: users.clone(),
        };
        let ctx = AppContext::with_services(
            Config::default(),
            SessionState::shared(),
            api,
            notifier.clone(),
        );

        Self {
            ctx,
            notifier,
            auth,
            sessions,
            teachers,
            users,
        }
    }

    /// Context with the principal logged in
    pub fn logged_in(principal: Principal) -> Self {
        let harness = Self::new();
        harness.ctx.state.log_in(principal);
        harness
    }
}
