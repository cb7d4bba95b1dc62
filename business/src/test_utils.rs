//! Mock-server helpers for testing the page commands without a real API.
//!
//! ```ignore
//! let mut test_ctx = TestContext::new().await;
//! test_ctx.mock_users(&[sample_user(1, "Kim Min")]).await;
//!
//! workflow::load_users(&mut test_ctx.ctx);
//! test_ctx.flush_and_wait().await;
//! ```

use std::time::Duration;

use roster_states::StateCtx;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::admin_users::workflow;
use crate::{BusinessConfig, Department, Role, User};

pub const TEST_TOKEN: &str = "test_token";

pub struct TestContext {
    pub mock_server: MockServer,
    pub ctx: StateCtx,
}

impl TestContext {
    /// A registered page pointed at a fresh mock server, authorised with
    /// [`TEST_TOKEN`].
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let config =
            BusinessConfig::new(mock_server.uri()).with_token(Some(TEST_TOKEN.to_owned()));

        let mut ctx = StateCtx::new();
        workflow::register(&mut ctx, config);

        Self { mock_server, ctx }
    }

    /// Await every dispatched command, then refresh derived computes.
    pub async fn flush_and_wait(&mut self) {
        tokio::time::timeout(Duration::from_secs(5), self.ctx.settle())
            .await
            .unwrap_or_else(|_| {
                panic!(
                    "timed out waiting for pending tasks ({} still running)",
                    self.ctx.task_count()
                )
            });
        self.ctx.run_computed();
    }

    pub async fn mock_users(&self, users: &[User]) {
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .and(header("authorization", format!("Bearer {TEST_TOKEN}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(users))
            .mount(&self.mock_server)
            .await;
    }

    /// Serve `users` for the next request only; later mounts take over after.
    pub async fn mock_users_once(&self, users: &[User]) {
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users))
            .up_to_n_times(1)
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_users_error(&self, status: u16, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_departments(&self, departments: &[Department]) {
        Mock::given(method("GET"))
            .and(path("/api/departments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(departments))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_departments_error(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/api/departments"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_create_user(&self, status: u16, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.mock_server)
            .await;
    }

    /// Answer `POST /api/users` with 201 after `delay`.
    pub async fn mock_create_user_delayed(&self, delay: Duration) {
        Mock::given(method("POST"))
            .and(path("/api/users"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({ "user_id": 3 }))
                    .set_delay(delay),
            )
            .mount(&self.mock_server)
            .await;
    }

    /// Requests the mock server received for `method` and `path`.
    pub async fn received(&self, method: &str, path: &str) -> usize {
        self.mock_server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.method.as_str() == method && request.url.path() == path)
            .count()
    }

    pub async fn mock_delete_user(&self, user_id: i64, status: u16) {
        Mock::given(method("DELETE"))
            .and(path(format!("/api/users/{user_id}")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.mock_server)
            .await;
    }
}

pub fn sample_department(dept_id: i64, dept_name: &str) -> Department {
    Department {
        dept_id,
        dept_name: dept_name.to_owned(),
    }
}

pub fn sample_user(user_id: i64, name: &str) -> User {
    User {
        user_id,
        emp_no: format!("E{user_id:03}"),
        name: name.to_owned(),
        dept: Some(sample_department(1, "Engineering")),
        user_role: Role::User,
        activation: true,
    }
}
