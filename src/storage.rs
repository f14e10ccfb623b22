//! Durable persistence for the internship collection.
//!
//! The on-disk format is a plain text file, one record per line:
//!
//! ```text
//! Username (in line below):
//! Alex
//! Google | SWE | 01-01-2026 | 5000 | Pending
//! Jane Street | Quant Researcher | 25-12-2025 | 10000 | Applied
//! ```
//!
//! The two-line username header is written only when a username is set.
//! Loading is line-independent: a corrupted record line is skipped and
//! reported as a warning, and never prevents the remaining lines from
//! loading.

use crate::date::Date;
use crate::error::{Result, StintError};
use crate::list::InternshipList;
use crate::model::Internship;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

const USERNAME_HEADER: &str = "Username (in line below):";

pub struct Storage {
    file_path: PathBuf,
}

/// What came back from a load: the valid records, the username if the file
/// carried one, and one warning per skipped line.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub internships: Vec<Internship>,
    pub username: Option<String>,
    pub warnings: Vec<String>,
}

/// Why a record line was rejected. Kept as a category so warnings can name
/// the specific defect.
#[derive(Debug)]
enum LineDefect {
    FieldCount(usize),
    PayFormat,
    NegativePay,
    Status(String),
    Date(String),
    EmptyField(&'static str),
}

impl fmt::Display for LineDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineDefect::FieldCount(n) => write!(f, "expected 5 fields, found {n}"),
            LineDefect::PayFormat => write!(f, "pay is not a whole number"),
            LineDefect::NegativePay => write!(f, "pay is negative"),
            LineDefect::Status(s) => write!(f, "invalid status \"{s}\""),
            LineDefect::Date(e) => write!(f, "{e}"),
            LineDefect::EmptyField(name) => write!(f, "{name} is empty"),
        }
    }
}

impl Storage {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &std::path::Path {
        &self.file_path
    }

    /// Writes the collection (and username, if set) to the storage file.
    ///
    /// The content is written to a sibling temp file and renamed over the
    /// target, so a failed save leaves the previous file intact.
    pub fn save(&self, internships: &InternshipList) -> Result<()> {
        info!(path = %self.file_path.display(), count = internships.len(), "saving internships");

        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| StintError::Storage(format!("Could not save internships: {e}")))?;
            }
        }

        let mut content = String::new();
        if let Some(username) = internships.username() {
            content.push_str(USERNAME_HEADER);
            content.push('\n');
            content.push_str(username);
            content.push('\n');
        }
        for internship in internships.iter() {
            content.push_str(&format_line(internship));
            content.push('\n');
        }

        let tmp_path = self.file_path.with_extension("tmp");
        fs::write(&tmp_path, content)
            .and_then(|()| fs::rename(&tmp_path, &self.file_path))
            .map_err(|e| StintError::Storage(format!("Could not save internships: {e}")))?;
        Ok(())
    }

    /// Reads the storage file back into records. A missing file is the
    /// first-run case and yields an empty outcome, not an error.
    pub fn load(&self) -> Result<LoadOutcome> {
        info!(path = %self.file_path.display(), "loading internships");
        let mut outcome = LoadOutcome::default();

        if !self.file_path.exists() {
            debug!("storage file does not exist, starting with empty list");
            return Ok(outcome);
        }

        let content = fs::read_to_string(&self.file_path)
            .map_err(|e| StintError::Storage(format!("Could not load internships: {e}")))?;

        let mut lines = content.lines().enumerate().peekable();
        if let Some(&(_, first)) = lines.peek() {
            if first.trim() == USERNAME_HEADER {
                lines.next();
                match lines.next() {
                    Some((_, name)) if !name.trim().is_empty() => {
                        outcome.username = Some(name.to_string());
                    }
                    _ => {
                        warn!("username header without a username line");
                        outcome
                            .warnings
                            .push("Username header present but no username found".to_string());
                    }
                }
            }
        }

        for (number, line) in lines {
            match parse_line(line) {
                Ok(internship) => outcome.internships.push(internship),
                Err(defect) => {
                    warn!(line = number + 1, %defect, "skipped corrupted line");
                    outcome.warnings.push(format!(
                        "Skipped corrupted line {}: \"{}\" ({})",
                        number + 1,
                        line,
                        defect
                    ));
                }
            }
        }

        info!(count = outcome.internships.len(), "finished loading internships");
        Ok(outcome)
    }
}

fn format_line(internship: &Internship) -> String {
    format!(
        "{} | {} | {} | {} | {}",
        internship.company,
        internship.role,
        internship.deadline,
        internship.pay,
        internship.status
    )
}

fn parse_line(line: &str) -> std::result::Result<Internship, LineDefect> {
    let parts: Vec<&str> = line.split('|').map(str::trim).collect();
    if parts.len() < 5 {
        return Err(LineDefect::FieldCount(parts.len()));
    }

    let company = parts[0];
    let role = parts[1];
    if company.is_empty() {
        return Err(LineDefect::EmptyField("company"));
    }
    if role.is_empty() {
        return Err(LineDefect::EmptyField("role"));
    }

    let pay: i64 = parts[3].parse().map_err(|_| LineDefect::PayFormat)?;
    if pay < 0 {
        return Err(LineDefect::NegativePay);
    }
    let pay = u32::try_from(pay).map_err(|_| LineDefect::PayFormat)?;

    let status = parts[4]
        .parse()
        .map_err(|_| LineDefect::Status(parts[4].to_string()))?;

    let deadline = Date::parse(parts[2]).map_err(|e| LineDefect::Date(e.to_string()))?;

    let mut internship = Internship::new(company.to_string(), role.to_string(), deadline, pay);
    internship.status = status;
    Ok(internship)
}
