use crate::date::Date;
use crate::error::{Result, StintError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stage of an internship application.
///
/// Parsing is case-insensitive; `Display` is the canonical Title Case form
/// used for both rendering and storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Pending,
    Interested,
    Applied,
    Interviewing,
    Offer,
    Accepted,
    Rejected,
}

impl Status {
    /// All statuses in dashboard display order.
    pub const ALL: [Status; 7] = [
        Status::Pending,
        Status::Interested,
        Status::Applied,
        Status::Interviewing,
        Status::Offer,
        Status::Accepted,
        Status::Rejected,
    ];

    pub fn is_valid(s: &str) -> bool {
        s.parse::<Status>().is_ok()
    }
}

impl FromStr for Status {
    type Err = StintError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "interested" => Ok(Status::Interested),
            "applied" => Ok(Status::Applied),
            "interviewing" => Ok(Status::Interviewing),
            "offer" => Ok(Status::Offer),
            "accepted" => Ok(Status::Accepted),
            "rejected" => Ok(Status::Rejected),
            _ => Err(StintError::InvalidStatus(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Pending => "Pending",
            Status::Interested => "Interested",
            Status::Applied => "Applied",
            Status::Interviewing => "Interviewing",
            Status::Offer => "Offer",
            Status::Accepted => "Accepted",
            Status::Rejected => "Rejected",
        };
        f.write_str(name)
    }
}

/// One tracked internship application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Internship {
    pub company: String,
    pub role: String,
    pub deadline: Date,
    pub pay: u32,
    pub status: Status,
}

impl Internship {
    pub fn new(company: String, role: String, deadline: Date, pay: u32) -> Self {
        Self {
            company,
            role,
            deadline,
            pay,
            status: Status::Pending,
        }
    }
}
