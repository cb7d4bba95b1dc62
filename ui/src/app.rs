use std::time::Duration;

use egui::Ui;

use crate::pages::{self, AdminPageEvent};
use crate::state::State;

/// Repaint cadence while commands are running, so their results show up
/// without user input.
const TASK_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct RosterApp {
    state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            render(&mut self.state, ui);
        });
    }
}

/// One frame of the application: apply command results, draw the current
/// page, then refresh derived values for the next frame.
pub fn render(state: &mut State, ui: &mut Ui) {
    state.ctx.sync_computes();
    state.ctx.run_computed();

    match state.session.clone() {
        Some(session) => {
            if let Some(AdminPageEvent::Logout) = pages::admin_page(&mut state.ctx, &session, ui) {
                state.sign_out();
            }
        }
        None => {
            pages::signed_out_page(ui);
        }
    }

    state.ctx.run_computed();
    if state.ctx.task_count() > 0 {
        ui.ctx().request_repaint_after(TASK_POLL_INTERVAL);
    }
}
