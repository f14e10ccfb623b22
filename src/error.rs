use thiserror::Error;

#[derive(Error, Debug)]
pub enum StintError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid date format.\nExpected dd-MM-yyyy (e.g. 08-10-2025)")]
    InvalidDateFormat,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error(
        "Invalid add command.\nUsage: add company/COMPANY_NAME role/ROLE_NAME deadline/DEADLINE pay/PAY_AMOUNT"
    )]
    InvalidAddCommand,

    #[error("Invalid delete command.\nUsage: delete INDEX")]
    InvalidDeleteCommand,

    #[error("Invalid find command.\nUsage: find KEYWORD")]
    InvalidFindCommand,

    #[error("Invalid list command.\nUsage: list [sort/asc|sort/desc]")]
    InvalidListCommand,

    #[error("Invalid update command.\nUsage: update INDEX field/VALUE")]
    InvalidUpdateFormat,

    #[error("Invalid username command.\nUsage: username USERNAME")]
    InvalidUsernameCommand,

    #[error("Invalid internship index.")]
    InvalidIndex,

    #[error("Invalid index. Use a positive integer, for example: update 1 company/Google")]
    InvalidIndexForUpdate,

    #[error("Invalid pay. Use a whole number (example: pay/8000)")]
    InvalidPayFormat,

    #[error("{0} cannot be empty")]
    EmptyField(String),

    #[error("Unknown update field in \"{0}\". Allowed: company, role, deadline, pay, status")]
    UnknownUpdateField(String),

    #[error("Provide at least one field to update: company/, role/, deadline/, pay/, status/")]
    NoUpdateFields,

    #[error(
        "Invalid status \"{0}\". Allowed: Pending, Interested, Applied, Interviewing, Offer, Accepted, Rejected"
    )]
    InvalidStatus(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, StintError>;
