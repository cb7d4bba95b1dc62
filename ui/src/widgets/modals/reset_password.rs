use egui::{Button, Grid, TextEdit, Ui, Window};
use roster_business::admin_users::{MIN_PASSWORD_LEN, MutationKind, UserMutation};
use roster_business::{AdminUsersState, ModalOutcome, User};
use roster_states::StateCtx;

use super::{feedback, finish, mutation};

pub fn reset_password_modal(ctx: &mut StateCtx, user: &User, ui: &mut Ui) -> ModalOutcome {
    let mutation = mutation(ctx);
    if mutation.succeeded(MutationKind::ResetPassword) {
        return ModalOutcome::Succeeded;
    }
    let busy = mutation.is_in_flight();

    let mut open = true;
    let mut outcome = ModalOutcome::Pending;
    let mut submit = None;
    let form = &mut ctx.state_mut::<AdminUsersState>().form;

    Window::new(format!("Reset password - {}", user.name))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.label(format!(
                "Set a new password for {} ({}). At least {MIN_PASSWORD_LEN} characters.",
                user.name, user.emp_no
            ));
            ui.add_space(8.0);

            Grid::new("reset_password_form")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("New password");
                    ui.add(TextEdit::singleline(&mut form.password).password(true));
                    ui.end_row();

                    ui.label("Confirm password");
                    ui.add(TextEdit::singleline(&mut form.password_confirm).password(true));
                    ui.end_row();
                });

            ui.add_space(8.0);
            feedback(ui, form.error, &mutation);

            ui.horizontal(|ui| {
                if ui.add_enabled(!busy, Button::new("Reset")).clicked() {
                    match form.reset_password_request() {
                        Ok(body) => {
                            form.error = None;
                            submit = Some(UserMutation::ResetPassword {
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
