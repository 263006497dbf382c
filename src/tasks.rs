// src/tasks.rs
//! Task workflow: three disjoint flows picked by role.
//!
//! The role is whatever the user picks in the dropdown; nothing
//! authenticates it. What a role may do is still spelled out as a policy
//! (`Role::allows`) so each flow checks it explicitly.
//!
//! - Admin adds users. New users always get the "Mining Engineer" role.
//! - Head of Department creates tasks. New tasks are always "In Progress".
//! - Mining Engineer lists the tasks whose assignee equals their username,
//!   character for character.

use crate::config::consts::{NEW_TASK_STATUS, NEW_USER_ROLE};
use crate::errors::{AppError, AppResult};
use crate::models::{NewTask, Task, User};
use crate::store::Store;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    Admin,
    HeadOfDepartment,
    MiningEngineer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    ManageUsers,
    AssignTasks,
    ViewOwnTasks,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::HeadOfDepartment, Role::MiningEngineer];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin            => "Admin",
            Role::HeadOfDepartment => "Head of Department",
            Role::MiningEngineer   => "Mining Engineer",
        }
    }

    pub fn allows(&self, cap: Capability) -> bool {
        matches!(
            (self, cap),
            (Role::Admin, Capability::ManageUsers)
                | (Role::HeadOfDepartment, Capability::AssignTasks)
                | (Role::MiningEngineer, Capability::ViewOwnTasks)
        )
    }

    fn require(&self, cap: Capability) -> AppResult<()> {
        if self.allows(cap) {
            Ok(())
        } else {
            Err(AppError::Policy(format!("{} may not {:?}", self.label(), cap)))
        }
    }
}

/// Admin flow. No duplicate check; the same username can be added twice.
pub fn create_user(store: &Store, role: Role, username: &str) -> AppResult<User> {
    role.require(Capability::ManageUsers)?;
    let user = store.insert_user(username, NEW_USER_ROLE)?;
    logf!("Tasks: user #{} '{}' added", user.id, user.username);
    Ok(user)
}

/// Head-of-Department flow. The assignee is not checked against `users`.
pub fn create_task(
    store: &Store,
    role: Role,
    title: &str,
    description: &str,
    assigned_to: &str,
) -> AppResult<Task> {
    role.require(Capability::AssignTasks)?;
    let task = store.insert_task(
        &NewTask {
            title: s!(title),
            description: s!(description),
            assigned_to: s!(assigned_to),
        },
        NEW_TASK_STATUS,
    )?;
    logf!("Tasks: task #{} '{}' → '{}'", task.id, task.title, task.assigned_to);
    Ok(task)
}

/// Mining-Engineer flow.
pub fn tasks_for(store: &Store, role: Role, username: &str) -> AppResult<Vec<Task>> {
    role.require(Capability::ViewOwnTasks)?;
    store.tasks_assigned_to(username)
}
