use egui::{ComboBox, TextEdit, Ui};
use roster_business::{Department, DepartmentListCompute, RoleFilter, StatusFilter, UserFilter};
use roster_states::StateCtx;

pub const SEARCH_HINT: &str = "Search by name or employee number...";
pub const ALL_DEPARTMENTS: &str = "All departments";

/// Search box plus department, role and status selectors.
///
/// Edits a copy of [`UserFilter`] and writes it back only when something
/// changed, so the filtered list is not recomputed every frame.
pub fn filter_bar(ctx: &mut StateCtx, ui: &mut Ui) {
    let departments: Vec<Department> = ctx
        .cached::<DepartmentListCompute>()
        .map(|list| list.departments.clone())
        .unwrap_or_default();
    let mut filter = ctx.state::<UserFilter>().clone();

    ui.horizontal(|ui| {
        ui.add(
            TextEdit::singleline(&mut filter.search)
                .hint_text(SEARCH_HINT)
                .desired_width(240.0),
        );

        let dept_label = filter
            .dept_id
            .and_then(|id| departments.iter().find(|dept| dept.dept_id == id))
            .map_or(ALL_DEPARTMENTS, |dept| dept.dept_name.as_str())
            .to_owned();
        ComboBox::from_id_salt("dept_filter")
            .selected_text(dept_label)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filter.dept_id, None, ALL_DEPARTMENTS);
                for dept in &departments {
                    ui.selectable_value(
                        &mut filter.dept_id,
                        Some(dept.dept_id),
                        dept.dept_name.as_str(),
                    );
                }
            });

        ComboBox::from_id_salt("role_filter")
            .selected_text(filter.role.label())
            .show_ui(ui, |ui| {
                for role in RoleFilter::ALL {
                    ui.selectable_value(&mut filter.role, role, role.label());
                }
            });

        ComboBox::from_id_salt("status_filter")
            .selected_text(filter.status.label())
            .show_ui(ui, |ui| {
                for status in StatusFilter::ALL {
                    ui.selectable_value(&mut filter.status, status, status.label());
                }
            });
    });

    if filter != *ctx.state::<UserFilter>() {
        ctx.update::<UserFilter>(|current| *current = filter);
    }
}
