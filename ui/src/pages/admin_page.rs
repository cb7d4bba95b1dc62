//! User management page.
//!
//! Loads users and departments on first show, renders the filter bar and
//! the filtered table, and routes row buttons into the single dialog slot.

use chrono::Local;
use egui::{Button, RichText, ScrollArea, Ui};
use roster_business::admin_users::workflow;
use roster_business::{FilteredUsersCompute, ModalState, Session, UserListCompute};
use roster_states::StateCtx;

use crate::utils::colors::{COLOR_GRAY, COLOR_RED};
use crate::widgets::{self, modals};

pub const LOADING_TEXT: &str = "Loading...";
pub const NO_MATCHES_TEXT: &str = "No matching users.";
pub const NO_USERS_TEXT: &str = "No users registered.";

/// What the page asks its owner to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminPageEvent {
    Logout,
}

pub fn admin_page(ctx: &mut StateCtx, session: &Session, ui: &mut Ui) -> Option<AdminPageEvent> {
    workflow::mount(ctx);

    let mut event = None;
    let mut requested: Option<ModalState> = None;

    if widgets::admin_header(ui, session) {
        event = Some(AdminPageEvent::Logout);
    }
    ui.separator();

    ui.horizontal(|ui| {
        widgets::filter_bar(ctx, ui);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add(Button::new("Add user")).clicked() {
                requested = Some(ModalState::Creating);
            }
        });
    });
    // Filter edits from this frame must show in this frame's table.
    ctx.run_computed();
    ui.add_space(8.0);

    let Some(list) = ctx.cached::<UserListCompute>() else {
        return event;
    };
    let is_loading = list.is_loading;
    let total = list.users.len();
    let last_loaded_at = list.last_loaded_at;
    if let Some(error) = &list.error {
        ui.colored_label(COLOR_RED, error.as_str());
        ui.add_space(8.0);
    }

    let (users, narrowing) = ctx
        .cached::<FilteredUsersCompute>()
        .map(|filtered| (filtered.users.clone(), filtered.narrowing))
        .unwrap_or_default();

    if is_loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(LOADING_TEXT);
        });
    } else if users.is_empty() {
        let empty_text = if narrowing {
            NO_MATCHES_TEXT
        } else {
            NO_USERS_TEXT
        };
        ui.label(RichText::new(empty_text).color(COLOR_GRAY));
    } else {
        ScrollArea::horizontal().show(ui, |ui| {
            if let Some(modal) = widgets::users_table(ui, &users) {
                requested = Some(modal);
            }
        });
    }

    if !is_loading {
        ui.add_space(8.0);
        let mut footer = format!("{} users", users.len());
        if narrowing {
            footer.push_str(&format!(" (of {total} total)"));
        }
        if let Some(at) = last_loaded_at {
            footer.push_str(&format!(
                " · updated {}",
                at.with_timezone(&Local).format("%H:%M:%S")
            ));
        }
        ui.label(RichText::new(footer).small().color(COLOR_GRAY));
    }

    if let Some(modal) = requested {
        workflow::open_modal(ctx, modal);
    }

    let outcome = modals::show_modal(ctx, ui);
    workflow::handle_outcome(ctx, outcome);

    event
}
