use egui::{Button, RichText, Ui, Window};
use roster_business::admin_users::{MutationKind, UserMutation};
use roster_business::{ModalOutcome, User};
use roster_states::StateCtx;

use super::{feedback, finish, mutation};
use crate::utils::colors::COLOR_RED;

pub fn delete_user_modal(ctx: &mut StateCtx, user: &User, ui: &mut Ui) -> ModalOutcome {
    let mutation = mutation(ctx);
    if mutation.succeeded(MutationKind::Delete) {
        return ModalOutcome::Succeeded;
    }
    let busy = mutation.is_in_flight();

    let mut open = true;
    let mut outcome = ModalOutcome::Pending;
    let mut submit = None;

    Window::new(format!("Delete user - {}", user.name))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.label(format!("Delete {} ({})?", user.name, user.emp_no));
            ui.label(RichText::new("This cannot be undone.").color(COLOR_RED));
            ui.add_space(8.0);
            feedback(ui, None, &mutation);

            ui.horizontal(|ui| {
                let confirm = Button::new(RichText::new("Confirm delete").color(COLOR_RED));
                if ui.add_enabled(!busy, confirm).clicked() {
                    submit = Some(UserMutation::Delete {
                        user_id: user.user_id,
                    });
                }
                if ui.add_enabled(!busy, Button::new("Cancel")).clicked() {
                    outcome = ModalOutcome::Closed;
                }
            });
        });

    finish(ctx, open || busy, outcome, submit)
}
