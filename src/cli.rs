// src/cli.rs
//
// Headless front end: the same operations as the GUI pages, one per
// invocation. Output is returned as text so the binary only prints it.

use std::path::PathBuf;

use crate::{
    config::options::AppOptions,
    csv::to_csv,
    errors::AppResult,
    gui::table_model::TableData,
    ingest, regulations,
    store::Store,
    tasks::{self, Role},
    updates,
};

pub const USAGE: &str = "\
Usage: minalytics-cli [--db <path>] <command>

Commands:
  upload <file.csv>                          Append production rows from a CSV file
  production                                 Print every production row as CSV
  ask <question>                             Mining regulations lookup
  updates                                    Fetch the latest regulatory updates
  add-user <username>                        (Admin) add a Mining Engineer
  add-task <title> <description> <assignee>  (Head of Department) assign a task
  tasks <username>                           (Mining Engineer) list assigned tasks
";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Upload(PathBuf),
    Production,
    Ask(String),
    Updates,
    AddUser(String),
    AddTask { title: String, description: String, assigned_to: String },
    Tasks(String),
    Help,
}

pub fn parse_args<I>(args: I) -> Result<(AppOptions, Command), String>
where
    I: IntoIterator<Item = String>,
{
    let mut options = AppOptions::default();
    let mut args = args.into_iter();
    let mut positional: Vec<String> = Vec::new();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--db" => options.db_path = PathBuf::from(args.next().ok_or("Missing value for --db")?),
            "-h" | "--help" => return Ok((options, Command::Help)),
            _ => positional.push(a),
        }
    }

    let mut pos = positional.into_iter();
    let cmd = pos.next().ok_or_else(|| s!(USAGE))?;
    let mut need = |what: &str| pos.next().ok_or_else(|| format!("Missing {} for '{}'", what, cmd));

    let command = match cmd.as_str() {
        "upload"     => Command::Upload(PathBuf::from(need("file")?)),
        "production" => Command::Production,
        "ask"        => Command::Ask(need("question")?),
        "updates"    => Command::Updates,
        "add-user"   => Command::AddUser(need("username")?),
        "add-task"   => Command::AddTask {
            title: need("title")?,
            description: need("description")?,
            assigned_to: need("assignee")?,
        },
        "tasks"      => Command::Tasks(need("username")?),
        "help"       => Command::Help,
        other        => return Err(format!("Unknown command: {}\n\n{}", other, USAGE)),
    };
    Ok((options, command))
}

pub fn run(options: &AppOptions, command: Command) -> AppResult<String> {
    match command {
        Command::Help => Ok(s!(USAGE)),
        Command::Ask(q) => Ok(regulations::lookup(&q).map(|a| join!(a, "\n")).unwrap_or_default()),
        Command::Updates => {
            let paragraphs = updates::fetch_updates(&options.updates_url, options.updates_limit)?;
            Ok(paragraphs.iter().map(|p| join!(p, "\n")).collect())
        }
        Command::Upload(path) => {
            let store = Store::open(&options.db_path)?;
            let upload = ingest::ingest_file(&store, &path)?;
            Ok(format!(
                "{}Data uploaded successfully! ({} rows)\n",
                to_csv(Some(upload.headers.as_slice()), &upload.rows),
                upload.len()
            ))
        }
        Command::Production => {
            let store = Store::open(&options.db_path)?;
            let (headers, rows) = TableData::from_production(&store.all_production()?).into_parts();
            Ok(to_csv(headers.as_deref(), &rows))
        }
        Command::AddUser(username) => {
            let store = Store::open(&options.db_path)?;
            let user = tasks::create_user(&store, Role::Admin, &username)?;
            Ok(format!("User added successfully! (#{} {}, {})\n", user.id, user.username, user.role))
        }
        Command::AddTask { title, description, assigned_to } => {
            let store = Store::open(&options.db_path)?;
            let task = tasks::create_task(&store, Role::HeadOfDepartment, &title, &description, &assigned_to)?;
            Ok(format!("Task assigned successfully! (#{} → {})\n", task.id, task.assigned_to))
        }
        Command::Tasks(username) => {
            let store = Store::open(&options.db_path)?;
            let found = tasks::tasks_for(&store, Role::MiningEngineer, &username)?;
            let (headers, rows) = TableData::from_tasks(&found).into_parts();
            Ok(to_csv(headers.as_deref(), &rows))
        }
    }
}
