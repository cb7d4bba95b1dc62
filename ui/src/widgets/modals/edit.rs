use egui::{Button, Grid, RichText, Ui, Window};
use roster_business::admin_users::{MutationKind, UserMutation};
use roster_business::{AdminUsersState, ModalOutcome, User};
use roster_states::StateCtx;

use super::{department_combo, departments, feedback, finish, mutation, role_combo};

pub fn edit_user_modal(ctx: &mut StateCtx, user: &User, ui: &mut Ui) -> ModalOutcome {
    let mutation = mutation(ctx);
    if mutation.succeeded(MutationKind::Update) {
        return ModalOutcome::Succeeded;
    }
    let mut departments = departments(ctx);
    // Keep the current department selectable even if the list failed to load.
    if let Some(dept) = &user.dept
        && !departments.iter().any(|d| d.dept_id == dept.dept_id)
    {
        departments.push(dept.clone());
    }
    let busy = mutation.is_in_flight();

    let mut open = true;
    let mut outcome = ModalOutcome::Pending;
    let mut submit = None;
    let form = &mut ctx.state_mut::<AdminUsersState>().form;

    Window::new(format!("Edit user - {}", user.name))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            Grid::new("edit_user_form")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Employee No.");
                    ui.label(RichText::new(&user.emp_no).monospace());
                    ui.end_row();

                    ui.label("Full name");
                    ui.text_edit_singleline(&mut form.name);
                    ui.end_row();

                    ui.label("Department");
                    department_combo(ui, "edit_user_dept", &mut form.dept_id, &departments);
                    ui.end_row();

                    ui.label("Role");
                    role_combo(ui, "edit_user_role", &mut form.role);
                    ui.end_row();

                    ui.label("Account");
                    ui.checkbox(&mut form.activation, "Enabled");
                    ui.end_row();
                });

            ui.add_space(8.0);
            feedback(ui, form.error, &mutation);

            ui.horizontal(|ui| {
                if ui.add_enabled(!busy, Button::new("Save")).clicked() {
                    match form.update_request() {
                        Ok(body) => {
                            form.error = None;
                            submit = Some(UserMutation::Update {
                                user_id: user.user_id,
                                body,
                            });
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
