use std::time::Duration;

use egui_kittest::Harness;
use roster_business::{Department, Role, User};
use roster_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, State>,
}

impl<'a> TestCtx<'a> {
    /// A harness rendering the whole app against a fresh mock server.
    ///
    /// Nothing is requested until the first `step`, so mocks can be mounted
    /// after construction.
    pub async fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;
        let state = State::test(mock_server.uri());
        let harness = Harness::builder()
            .with_size(egui::vec2(1200.0, 800.0))
            .build_ui_state(
                |ui: &mut egui::Ui, state: &mut State| roster_ui::app::render(state, ui),
                state,
            );

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, State> {
        &mut self.harness
    }

    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Render, let every running command finish, then render the results.
    pub async fn step_and_settle(&mut self) {
        self.harness.step();
        let settled = tokio::time::timeout(
            Duration::from_secs(5),
            self.harness.state_mut().ctx.settle(),
        )
        .await;
        assert!(settled.is_ok(), "commands did not finish in time");
        self.harness.step();
        self.harness.step();
    }

    pub async fn mock_users(&self, users: &[User]) {
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_users_once(&self, users: &[User]) {
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users))
            .up_to_n_times(1)
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
}

pub fn department(dept_id: i64, dept_name: &str) -> Department {
    Department {
        dept_id,
        dept_name: dept_name.to_owned(),
    }
}

pub fn user(user_id: i64, name: &str, dept: Option<Department>, activation: bool) -> User {
    User {
        user_id,
        emp_no: format!("E{user_id:03}"),
        name: name.to_owned(),
        dept,
        user_role: Role::User,
        activation,
    }
}
