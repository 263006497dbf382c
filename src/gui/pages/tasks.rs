// src/gui/pages/tasks.rs
use eframe::egui;

use crate::{
    config::options::PageKind,
    config::state::PageState,
    gui::{app::App, components::data_table, table_model::TableData},
    tasks::{self, Role},
};

pub struct TasksPage;
pub static PAGE: TasksPage = TasksPage;

impl super::Page for TasksPage {
    fn title(&self) -> &'static str { "Task Management" }
    fn kind(&self) -> PageKind { PageKind::Tasks }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let prev = app.page().role;
        let mut role = prev;
        egui::ComboBox::from_label("Select Role")
            .selected_text(role.label())
            .show_ui(ui, |ui| {
                for r in Role::ALL {
                    ui.selectable_value(&mut role, r, r.label());
                }
            });

        // Each role shows different widgets; the old ones' input goes away.
        if role != prev {
            logf!("UI: Role {} → {}", prev.label(), role.label());
            *app.page() = PageState { role, ..PageState::default() };
        }
        ui.add_space(8.0);

        match role {
            Role::Admin => draw_admin(ui, app),
            Role::HeadOfDepartment => draw_head(ui, app),
            Role::MiningEngineer => draw_engineer(ui, app),
        }
    }
}

fn draw_admin(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Manage Users");
    ui.label("Enter username");
    ui.text_edit_singleline(&mut app.page().username);

    if ui.button("Add User").clicked() {
        let username = app.page().username.clone();
        if app.with_store(|store| tasks::create_user(store, Role::Admin, &username)).is_some() {
            app.notice_ok("User added successfully!");
        }
    }
}

fn draw_head(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Assign Tasks");
    let st = app.page();
    ui.label("Task Title");
    ui.text_edit_singleline(&mut st.task_title);
    ui.label("Task Description");
    ui.text_edit_multiline(&mut st.task_desc);
    ui.label("Assign to (Username)");
    ui.text_edit_singleline(&mut st.assigned_to);

    if ui.button("Create Task").clicked() {
        let (title, desc, who) = (st.task_title.clone(), st.task_desc.clone(), st.assigned_to.clone());
        let made = app.with_store(|store| {
            tasks::create_task(store, Role::HeadOfDepartment, &title, &desc, &who)
        });
        if made.is_some() {
            app.notice_ok("Task assigned successfully!");
        }
    }
}

/// Re-queries on every edit of the username field, not on submit.
fn draw_engineer(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("View Tasks");
    ui.label("Enter your username");
    let changed = ui.text_edit_singleline(&mut app.page().username).changed();

    if changed || app.page().my_tasks.is_none() {
        app.page().notice = None;
        let username = app.page().username.clone();
        let found = app.with_store(|store| tasks::tasks_for(store, Role::MiningEngineer, &username));
        // keep a value even on error so a failing query isn't retried every frame
        app.page().my_tasks = Some(found.unwrap_or_default());
    }

    if let Some(found) = &app.state.gui.page.my_tasks {
        ui.add_space(6.0);
        data_table::draw(ui, "my_tasks", &TableData::from_tasks(found), 320.0);
    }
}
