use egui::{Button, Grid, TextEdit, Ui, Window};
use roster_business::admin_users::{MutationKind, UserMutation};
use roster_business::{AdminUsersState, ModalOutcome};
use roster_states::StateCtx;

use super::{department_combo, departments, feedback, finish, mutation, role_combo};

pub fn create_user_modal(ctx: &mut StateCtx, ui: &mut Ui) -> ModalOutcome {
    let mutation = mutation(ctx);
    if mutation.succeeded(MutationKind::Create) {
        return ModalOutcome::Succeeded;
    }
    let departments = departments(ctx);
    let busy = mutation.is_in_flight();

    let mut open = true;
    let mut outcome = ModalOutcome::Pending;
    let mut submit = None;
    let form = &mut ctx.state_mut::<AdminUsersState>().form;

    Window::new("New user")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            Grid::new("create_user_form")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Employee No.");
                    ui.text_edit_singleline(&mut form.emp_no);
                    ui.end_row();

                    ui.label("Full name");
                    ui.text_edit_singleline(&mut form.name);
                    ui.end_row();

                    ui.label("Password");
                    ui.add(TextEdit::singleline(&mut form.password).password(true));
                    ui.end_row();

                    ui.label("Confirm password");
                    ui.add(TextEdit::singleline(&mut form.password_confirm).password(true));
                    ui.end_row();

                    ui.label("Department");
                    department_combo(ui, "create_user_dept", &mut form.dept_id, &departments);
                    ui.end_row();

                    ui.label("Role");
                    role_combo(ui, "create_user_role", &mut form.role);
                    ui.end_row();
                });

            ui.add_space(8.0);
            feedback(ui, form.error, &mutation);

            ui.horizontal(|ui| {
                if ui.add_enabled(!busy, Button::new("Create")).clicked() {
                    match form.create_request() {
                        Ok(request) => {
                            form.error = None;
                            submit = Some(UserMutation::Create(request));
                        }
                        Err(error) => form.error = Some(error),
                    }
                }
                if ui.add_enabled(!busy, Button::new("Cancel")).clicked() {
                    outcome = ModalOutcome::Closed;
                }
            });
        });

    finish(ctx, open || busy, outcome, submit)
}
