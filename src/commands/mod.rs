//! # Command Layer
//!
//! Business logic for each REPL command. Modules here operate on the
//! [`InternshipList`] and return structured [`CmdResult`] values; nothing in
//! this layer touches stdout or the terminal. The CLI layer decides how to
//! render messages, record tables, and the dashboard.

use crate::error::Result;
use crate::list::InternshipList;
use crate::model::{Internship, Status};
use crate::parser::Command;
use serde::Serialize;

pub mod add;
pub mod dashboard;
pub mod delete;
pub mod find;
pub mod help;
pub mod list;
pub mod update;
pub mod username;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// An internship paired with the 1-based index it is displayed under.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayInternship {
    pub index: usize,
    pub internship: Internship,
}

/// Dashboard data computed by scanning the collection.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub username: Option<String>,
    pub total: usize,
    pub nearest_deadline: Option<Internship>,
    pub status_counts: Vec<(Status, usize)>,
}

/// Structured outcome of a command, rendered by the CLI layer.
#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub listed: Vec<DisplayInternship>,
    pub dashboard: Option<DashboardSummary>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}

/// Maps a parsed [`Command`] to the operation that executes it.
///
/// `Exit` and `Help` carry no parameters; the caller is expected to check
/// for `Exit` itself to end the loop.
pub fn dispatch(command: Command, internships: &mut InternshipList) -> Result<CmdResult> {
    match command {
        Command::Add {
            company,
            role,
            deadline,
            pay,
        } => add::run(internships, company, role, deadline, pay),
        Command::Delete { index } => delete::run(internships, index),
        Command::Update { index, fields } => update::run(internships, index, &fields),
        Command::List { order } => list::run(internships, order),
        Command::Find { keyword } => find::run(internships, &keyword),
        Command::Username { name } => username::run(internships, name),
        Command::Dashboard => dashboard::run(internships),
        Command::Help => Ok(help::run()),
        Command::Exit => Ok(CmdResult::default()),
    }
}
