//! Drives the whole admin page through a mock API.
//!
//! Buttons inside `TableBuilder` rows do not receive kittest clicks, so row
//! actions are opened through the page workflow instead; everything outside
//! the table is clicked for real.

mod common;

use std::time::Duration;

use common::{TestCtx, department, user};
use egui::accesskit::Role;
use egui_kittest::Harness;
use kittest::Queryable;
use roster_business::admin_users::workflow;
use roster_business::{
    AdminUsersState, DepartmentListCompute, ModalState, StatusFilter, UserFilter,
    UserListCompute,
};
use roster_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn loads_and_renders_the_user_list() {
    let mut ctx = TestCtx::new().await;
    let engineering = department(1, "Engineering");
    ctx.mock_users(&[
        user(1, "Kim Min", Some(engineering.clone()), true),
        user(2, "Park Ji", None, false),
    ])
    .await;
    ctx.mock_departments(&[engineering]).await;

    ctx.harness_mut().step();
    assert!(ctx.harness_mut().query_by_label("Loading...").is_some());

    ctx.step_and_settle().await;
    let harness = ctx.harness_mut();

    assert!(harness.query_by_label("Loading...").is_none());
    assert!(harness.query_by_label("Kim Min").is_some());
    assert!(harness.query_by_label("Park Ji").is_some());
    assert!(harness.query_by_label("E001").is_some());
    assert!(harness.query_by_label("Inactive").is_some());
    assert!(harness.query_by_label_contains("2 users").is_some());
    assert!(harness.query_by_label("Test Admin (A000)").is_some());
}

#[tokio::test]
async fn filters_narrow_the_table_and_footer() {
    let mut ctx = TestCtx::new().await;
    ctx.mock_users(&[
        user(1, "Kim Min", None, true),
        user(2, "Park Ji", None, false),
    ])
    .await;
    ctx.mock_departments(&[]).await;
    ctx.step_and_settle().await;

    ctx.harness_mut()
        .state_mut()
        .ctx
        .update::<UserFilter>(|filter| filter.search = "kim".to_owned());
    ctx.harness_mut().step();

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("Kim Min").is_some());
    assert!(harness.query_by_label("Park Ji").is_none());
    assert!(harness.query_by_label_contains("1 users (of 2 total)").is_some());

    harness
        .state_mut()
        .ctx
        .update::<UserFilter>(|filter| filter.status = StatusFilter::Inactive);
    harness.step();

    assert!(harness.query_by_label("No matching users.").is_some());
    assert!(harness.query_by_label("Kim Min").is_none());
}

#[tokio::test]
async fn typing_in_search_box_filters_the_same_frame() {
    let mut ctx = TestCtx::new().await;
    ctx.mock_users(&[
        user(1, "Kim Min", None, true),
        user(2, "Park Ji", None, false),
    ])
    .await;
    ctx.mock_departments(&[]).await;
    ctx.step_and_settle().await;

    let harness = ctx.harness_mut();
    harness.get_by_role(Role::TextInput).type_text("kim");
    harness.step();

    assert_eq!(harness.state().ctx.state::<UserFilter>().search, "kim");
    assert!(harness.query_by_label("Kim Min").is_some());
    assert!(harness.query_by_label("Park Ji").is_none());
    assert!(harness.query_by_label_contains("1 users (of 2 total)").is_some());
}

#[tokio::test]
async fn department_selector_lists_loaded_departments() {
    let mut ctx = TestCtx::new().await;
    let engineering = department(1, "Engineering");
    ctx.mock_users(&[user(1, "Kim Min", Some(engineering.clone()), true)])
        .await;
    ctx.mock_departments(&[engineering]).await;
    ctx.step_and_settle().await;

    let harness = ctx.harness_mut();
    let in_table = harness.query_all_by_label("Engineering").count();
    open_department_selector(harness);

    assert!(harness.query_all_by_label("All departments").next().is_some());
    assert_eq!(
        harness.query_all_by_label("Engineering").count(),
        in_table + 1
    );
}

#[tokio::test]
async fn empty_list_shows_no_users_text() {
    let mut ctx = TestCtx::new().await;
    ctx.mock_users(&[]).await;
    ctx.mock_departments(&[]).await;
    ctx.step_and_settle().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("No users registered.").is_some());
    assert!(harness.query_by_label_contains("0 users").is_some());
}

#[tokio::test]
async fn load_failure_shows_banner() {
    let mut ctx = TestCtx::new().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({ "message": "Database unavailable" })),
        )
        .mount(ctx.mock_server())
        .await;
    ctx.mock_departments(&[]).await;
    ctx.step_and_settle().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("Database unavailable").is_some());
    assert!(harness.query_by_label("No users registered.").is_some());
}

#[tokio::test]
async fn department_failure_keeps_page_usable() {
    let mut ctx = TestCtx::new().await;
    ctx.mock_users(&[user(1, "Kim Min", None, true)]).await;
    Mock::given(method("GET"))
        .and(path("/api/departments"))
        .respond_with(ResponseTemplate::new(500))
        .mount(ctx.mock_server())
        .await;
    ctx.step_and_settle().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("Kim Min").is_some());
    assert!(
        harness
            .state()
            .ctx
            .cached::<UserListCompute>()
            .is_some_and(|list| list.error.is_none())
    );
    assert!(
        harness
            .state()
            .ctx
            .cached::<DepartmentListCompute>()
            .is_some_and(|list| list.departments.is_empty())
    );

    // No departments were loaded, so "All departments" is the only entry.
    open_department_selector(harness);
    assert!(harness.query_all_by_label("All departments").next().is_some());
    assert!(harness.query_by_label("Engineering").is_none());
}

fn open_department_selector(harness: &mut Harness<'_, State>) {
    // The department selector is the first combo box in the filter bar.
    harness
        .query_all_by_role(Role::ComboBox)
        .next()
        .expect("department selector")
        .click();
    harness.step();
    harness.step();
}

#[tokio::test]
async fn add_user_opens_and_cancel_closes_the_dialog() {
    let mut ctx = TestCtx::new().await;
    ctx.mock_users(&[]).await;
    ctx.mock_departments(&[]).await;
    ctx.step_and_settle().await;

    let harness = ctx.harness_mut();
    harness.get_by_label("Add user").click();
    harness.step();
    harness.step();

    assert!(harness.query_by_label("New user").is_some());
    assert_eq!(
        harness.state().ctx.state::<AdminUsersState>().modal,
        ModalState::Creating
    );

    harness.get_by_label("Cancel").click();
    harness.step();
    harness.step();

    assert!(harness.query_by_label("New user").is_none());
    assert!(!harness.state().ctx.state::<AdminUsersState>().modal.is_open());
}

#[tokio::test]
async fn invalid_create_form_shows_validation_error() {
    let mut ctx = TestCtx::new().await;
    ctx.mock_users(&[]).await;
    ctx.mock_departments(&[]).await;
    ctx.step_and_settle().await;

    let harness = ctx.harness_mut();
    harness.get_by_label("Add user").click();
    harness.step();
    harness.get_by_label("Create").click();
    harness.step();
    harness.step();

    let state = harness.state().ctx.state::<AdminUsersState>();
    assert_eq!(state.modal, ModalState::Creating);
    assert!(state.form.error.is_some());
    assert_eq!(harness.state().ctx.task_count(), 0);
}

#[tokio::test]
async fn create_success_refetches_and_closes_the_dialog() {
    let mut ctx = TestCtx::new().await;
    ctx.mock_users_once(&[user(1, "Kim Min", None, true)]).await;
    ctx.mock_departments(&[]).await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "user_id": 3 })))
        .expect(1)
        .mount(ctx.mock_server())
        .await;
    ctx.step_and_settle().await;

    ctx.mock_users(&[
        user(1, "Kim Min", None, true),
        user(3, "Han Byul", None, true),
    ])
    .await;

    {
        let harness = ctx.harness_mut();
        harness.get_by_label("Add user").click();
        harness.step();

        harness
            .state_mut()
            .ctx
            .update::<AdminUsersState>(|state| {
                state.form.emp_no = "E003".to_owned();
                state.form.name = "Han Byul".to_owned();
                state.form.password = "correct-horse".to_owned();
                state.form.password_confirm = "correct-horse".to_owned();
                state.form.role = roster_business::Role::User;
            });
        harness.step();
        harness.get_by_label("Create").click();
    }
    ctx.step_and_settle().await;
    ctx.step_and_settle().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("New user").is_none());
    assert!(harness.query_by_label("Han Byul").is_some());
    assert!(harness.query_by_label_contains("2 users").is_some());
}

#[tokio::test]
async fn dialog_cannot_be_cancelled_while_saving() {
    let mut ctx = TestCtx::new().await;
    ctx.mock_users_once(&[]).await;
    ctx.mock_departments(&[]).await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::json!({ "user_id": 3 }))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(ctx.mock_server())
        .await;
    ctx.step_and_settle().await;
    ctx.mock_users(&[user(3, "Han Byul", None, true)]).await;

    {
        let harness = ctx.harness_mut();
        harness.get_by_label("Add user").click();
        harness.step();
        harness
            .state_mut()
            .ctx
            .update::<AdminUsersState>(|state| {
                state.form.emp_no = "E003".to_owned();
                state.form.name = "Han Byul".to_owned();
                state.form.password = "correct-horse".to_owned();
                state.form.password_confirm = "correct-horse".to_owned();
            });
        harness.step();
        harness.get_by_label("Create").click();
        harness.step();
        harness.step();

        assert!(harness.query_by_label_contains("Saving").is_some());
        harness.get_by_label("Cancel").click();
        harness.step();
        harness.step();

        assert!(harness.query_by_label("New user").is_some());
        assert_eq!(
            harness.state().ctx.state::<AdminUsersState>().modal,
            ModalState::Creating
        );
    }
    ctx.step_and_settle().await;
    ctx.step_and_settle().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("New user").is_none());
    assert!(harness.query_by_label("Han Byul").is_some());
}

#[tokio::test]
async fn delete_dialog_shows_server_failure() {
    let mut ctx = TestCtx::new().await;
    let kim = user(1, "Kim Min", None, true);
    ctx.mock_users(std::slice::from_ref(&kim)).await;
    ctx.mock_departments(&[]).await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/1"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "message": "User still owns records"
        })))
        .mount(ctx.mock_server())
        .await;
    ctx.step_and_settle().await;

    workflow::open_modal(
        &mut ctx.harness_mut().state_mut().ctx,
        ModalState::Deleting(kim.clone()),
    );
    ctx.harness_mut().step();
    ctx.harness_mut().get_by_label("Confirm delete").click();
    ctx.step_and_settle().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("User still owns records").is_some());
    assert_eq!(
        harness.state().ctx.state::<AdminUsersState>().modal,
        ModalState::Deleting(kim)
    );
}

#[tokio::test]
async fn logout_shows_signed_out_page() {
    let mut ctx = TestCtx::new().await;
    ctx.mock_users(&[]).await;
    ctx.mock_departments(&[]).await;
    ctx.step_and_settle().await;

    let harness = ctx.harness_mut();
    harness.get_by_label("Log out").click();
    harness.step();
    harness.step();

    assert!(harness.state().session.is_none());
    assert!(harness.query_by_label("Signed out").is_some());
    assert!(harness.query_by_label("Admin console").is_none());
}
